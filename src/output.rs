pub(crate) mod log;
pub(crate) mod print;
pub(crate) mod record;
pub(crate) mod status;
