use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Which affordance the fullscreen viewer uses to jump between slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationStyle {
    #[default]
    Thumbnails,
    Dots,
    Numbers,
}

impl NavigationStyle {
    pub const ALL: &'static [Self] = &[Self::Thumbnails, Self::Dots, Self::Numbers];

    pub fn as_str(self) -> &'static str {
        match self {
            NavigationStyle::Thumbnails => "thumbnails",
            NavigationStyle::Dots => "dots",
            NavigationStyle::Numbers => "numbers",
        }
    }
}

impl fmt::Display for NavigationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown navigation style `{0}` (expected thumbnails, dots or numbers)")]
pub struct ParseNavigationError(pub String);

impl FromStr for NavigationStyle {
    type Err = ParseNavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|style| style.as_str() == s.trim())
            .ok_or_else(|| ParseNavigationError(s.to_string()))
    }
}

/// Input device that started a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerSource {
    Mouse,
    Touch,
}

impl PointerSource {
    /// Mouse drags keep tracking outside the pressed element, touch drags
    /// stay with the element that received the touch.
    pub fn needs_global_tracking(self) -> bool {
        matches!(self, PointerSource::Mouse)
    }
}
