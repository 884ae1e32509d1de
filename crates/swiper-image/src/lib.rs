pub mod error;
pub mod dimensions;
pub mod scan;

pub use error::ImageError;
pub use dimensions::{ImageDimensions, local_path, read_dimensions};
pub use scan::{EXTENSIONS, images_from_dir, is_supported_image, scan_dir};
