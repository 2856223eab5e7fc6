pub(crate) use crate::graph::{Edge, Graph, Vertex, Weight};
pub(crate) use crate::statistics::Statistics;
pub(crate) use crate::tree::SpanningTree;
pub(crate) use crate::util::block::Block;
pub(crate) use crate::util::disjoint_set::Disjoint;
pub(crate) use crate::util::heap::{IndexedHeap, Keys};
pub(crate) use crate::util::id::Id;
pub(crate) use crate::util::lut::LUT;
pub(crate) use crate::util::range::Range;
pub(crate) use crate::util::unreachable::some;
