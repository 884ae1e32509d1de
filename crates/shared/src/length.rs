use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::StyleError;

/// Root font size used to resolve `rem`/`em` lengths.
const ROOT_FONT_PX: f32 = 16.0;

/// Parse a CSS length into logical pixels.
///
/// Accepts `px`, `rem` and `em` units, and a bare `0`.
pub fn parse_length(value: &str) -> Result<f32, StyleError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(StyleError::Empty);
    }

    let (number, scale) = if let Some(num) = value.strip_suffix("px") {
        (num, 1.0)
    } else if let Some(num) = value.strip_suffix("rem") {
        (num, ROOT_FONT_PX)
    } else if let Some(num) = value.strip_suffix("em") {
        (num, ROOT_FONT_PX)
    } else if value.parse::<f32>().is_ok_and(|n| n == 0.0) {
        (value, 1.0)
    } else {
        return Err(StyleError::InvalidLength(value.to_string()));
    };

    match number.trim().parse::<f32>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(n * scale),
        _ => Err(StyleError::InvalidLength(value.to_string())),
    }
}

/// Spacing between grid rows and columns, as in the CSS `gap` shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gap {
    pub row: f32,
    pub column: f32,
}

impl Gap {
    pub const fn uniform(px: f32) -> Self {
        Self {
            row: px,
            column: px,
        }
    }
}

impl Default for Gap {
    fn default() -> Self {
        Self::uniform(4.0)
    }
}

impl FromStr for Gap {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.as_slice() {
            [both] => Ok(Self::uniform(parse_length(both)?)),
            [row, column] => Ok(Self {
                row: parse_length(row)?,
                column: parse_length(column)?,
            }),
            [] => Err(StyleError::Empty),
            _ => Err(StyleError::InvalidLength(s.to_string())),
        }
    }
}
