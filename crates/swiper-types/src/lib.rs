pub mod types;

pub use types::{NavigationStyle, ParseNavigationError, PointerSource};

/// An image shown by the swiper, supplied externally as an ordered list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GalleryImage {
    #[serde(rename = "src")]
    pub source: String,
    #[serde(rename = "alt", default)]
    pub alt_text: String,
}

/// Whether an image source points at the network or inline data rather than
/// the local filesystem.
pub fn is_remote(source: &str) -> bool {
    ["http://", "https://", "data:"]
        .iter()
        .any(|scheme| source.starts_with(scheme))
}

impl GalleryImage {
    pub fn new(source: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt_text: alt_text.into(),
        }
    }
}
