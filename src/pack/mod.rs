pub(crate) mod cache;
pub(crate) mod grid;
pub(crate) mod packer;
