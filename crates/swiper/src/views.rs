pub(crate) mod grid;
pub(crate) mod navigation;
pub(crate) mod viewer;
