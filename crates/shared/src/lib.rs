//! Toolkit independent parsing of the CSS-like style values accepted by the
//! swiper grid preview.

pub mod alignment;
pub mod error;
pub mod grid_config;
pub mod length;

pub use alignment::ItemAlignment;
pub use error::StyleError;
pub use grid_config::{GridConfig, Track, TrackList};
pub use length::{Gap, parse_length};
