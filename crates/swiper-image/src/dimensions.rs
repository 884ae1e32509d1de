use std::path::{Path, PathBuf};
use swiper_types::is_remote;
use tokio::task::spawn_blocking;

use crate::ImageError;

/// Pixel size of an image, read from its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height, `None` for degenerate images.
    pub fn aspect_ratio(&self) -> Option<f32> {
        (self.width > 0 && self.height > 0).then(|| self.width as f32 / self.height as f32)
    }
}

/// Read the dimensions of a local image without decoding the pixels.
pub async fn read_dimensions(source: String) -> Result<ImageDimensions, ImageError> {
    if is_remote(&source) {
        return Err(ImageError::Remote(source));
    }

    let path = PathBuf::from(source);
    spawn_blocking(move || read_dimensions_blocking(&path))
        .await
        .map_err(|_| ImageError::Cancelled)?
}

fn read_dimensions_blocking(path: &Path) -> Result<ImageDimensions, ImageError> {
    let (width, height) = image::image_dimensions(path).map_err(|err| match err {
        image::ImageError::IoError(source) => ImageError::Io {
            path: path.to_path_buf(),
            source,
        },
        source => ImageError::Decode {
            path: path.to_path_buf(),
            source,
        },
    })?;

    tracing::trace!("read {}: {width}x{height}", path.display());
    Ok(ImageDimensions::new(width, height))
}

/// Local filesystem path of an image source, `None` for remote sources.
pub fn local_path(source: &str) -> Option<PathBuf> {
    (!is_remote(source)).then(|| PathBuf::from(source))
}
