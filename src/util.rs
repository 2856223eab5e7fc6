pub(crate) mod block;
pub(crate) mod disjoint_set;
pub(crate) mod heap;
pub(crate) mod id;
pub(crate) mod lut;
pub(crate) mod range;
pub(crate) mod unreachable;
