use shared::StyleError;
use std::path::PathBuf;
use swiper_types::ParseNavigationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read manifest {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid manifest: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid color `{0}`")]
    InvalidColor(String),
    #[error("invalid {option}: {source}")]
    InvalidStyle {
        option: &'static str,
        #[source]
        source: StyleError,
    },
    #[error(transparent)]
    Navigation(#[from] ParseNavigationError),
}
