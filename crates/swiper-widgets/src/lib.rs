pub mod drag_surface;
pub mod grid_preview;
pub mod layout_core;
pub mod slide_strip;

pub use drag_surface::{DragSurface, drag_surface};
pub use grid_preview::{GridPreview, grid_preview};
pub use slide_strip::{Slide, SlideStrip, slide_strip};
