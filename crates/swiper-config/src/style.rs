//! Resolution of the pass-through style strings into typed values.

use palette::{Srgb, Srgba, WithAlpha};
use shared::GridConfig;
use std::str::FromStr;

use crate::ConfigError;

/// Typed grid preview style, resolved from the option strings.
#[derive(Debug, Clone, PartialEq)]
pub struct GridStyle {
    pub grid: GridConfig,
    pub color: Srgba,
    pub background_color: Srgba,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            color: Srgba::new(0.0, 0.0, 0.0, 1.0),
            background_color: Srgba::new(1.0, 1.0, 1.0, 1.0),
        }
    }
}

/// Parse a CSS color: named colors, `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`,
/// `rgb(r, g, b)`, `rgba(r, g, b, a)` and `transparent`.
pub fn parse_color(value: &str) -> Result<Srgba, ConfigError> {
    let value = value.trim();
    let invalid = || ConfigError::InvalidColor(value.to_string());

    if value.eq_ignore_ascii_case("transparent") {
        return Ok(Srgba::new(0.0, 0.0, 0.0, 0.0));
    }

    if let Some(hex) = value.strip_prefix('#') {
        return match hex.len() {
            3 | 6 => Srgb::<u8>::from_str(hex)
                .map(|rgb| rgb.into_format::<f32>().with_alpha(1.0))
                .map_err(|_| invalid()),
            4 | 8 => Srgba::<u8>::from_str(hex)
                .map(|rgba| rgba.into_format::<f32, f32>())
                .map_err(|_| invalid()),
            _ => Err(invalid()),
        };
    }

    let lower = value.to_ascii_lowercase();
    if let Some(args) = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_rgb_function(args).ok_or_else(invalid);
    }

    palette::named::from_str(&lower)
        .map(|rgb| rgb.into_format::<f32>().with_alpha(1.0))
        .ok_or_else(invalid)
}

fn parse_rgb_function(args: &str) -> Option<Srgba> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let channel = |s: &str| {
        s.parse::<f32>()
            .ok()
            .filter(|v| (0.0..=255.0).contains(v))
            .map(|v| v / 255.0)
    };

    match parts.as_slice() {
        [r, g, b] => Some(Srgba::new(channel(r)?, channel(g)?, channel(b)?, 1.0)),
        [r, g, b, a] => {
            let alpha = a.parse::<f32>().ok().filter(|v| (0.0..=1.0).contains(v))?;
            Some(Srgba::new(channel(r)?, channel(g)?, channel(b)?, alpha))
        }
        _ => None,
    }
}
