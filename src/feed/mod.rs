pub(crate) mod filter;
pub(crate) mod measure;
pub(crate) mod model;
pub(crate) mod skeleton;
