//! The swiper's configuration surface.

use serde::{Deserialize, Serialize};
use shared::{Gap, GridConfig, ItemAlignment, StyleError};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};
use swiper_types::{GalleryImage, NavigationStyle, is_remote};

use crate::{ConfigError, GridStyle, parse_color};

pub const DEFAULT_NUMBER_SHOWN: usize = 5;

/// Options accepted by the swiper. Everything except the image list is
/// optional; style strings are kept verbatim and resolved on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwiperOptions {
    #[serde(default)]
    pub id: Option<String>,
    pub image_array: Vec<GalleryImage>,
    #[serde(default = "default_number_shown", alias = "numberShowen")]
    pub number_shown: usize,
    #[serde(default = "default_navigation")]
    pub navigation: String,
    #[serde(default = "default_columns")]
    pub grid_template_columns: String,
    #[serde(default = "default_rows")]
    pub grid_template_rows: String,
    #[serde(default = "default_gap")]
    pub gap: String,
    #[serde(default = "default_alignment")]
    pub justify_items: String,
    #[serde(default = "default_alignment")]
    pub align_items: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_background_color")]
    pub background_color: String,
}

fn default_number_shown() -> usize {
    DEFAULT_NUMBER_SHOWN
}

fn default_navigation() -> String {
    NavigationStyle::default().to_string()
}

fn default_columns() -> String {
    "1fr".to_string()
}

fn default_rows() -> String {
    "auto".to_string()
}

fn default_gap() -> String {
    "4px".to_string()
}

fn default_alignment() -> String {
    "stretch".to_string()
}

fn default_color() -> String {
    "black".to_string()
}

fn default_background_color() -> String {
    "white".to_string()
}

impl Default for SwiperOptions {
    fn default() -> Self {
        Self {
            id: None,
            image_array: Vec::new(),
            number_shown: default_number_shown(),
            navigation: default_navigation(),
            grid_template_columns: default_columns(),
            grid_template_rows: default_rows(),
            gap: default_gap(),
            justify_items: default_alignment(),
            align_items: default_alignment(),
            color: default_color(),
            background_color: default_background_color(),
        }
    }
}

impl SwiperOptions {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self {
            image_array: images,
            ..Self::default()
        }
    }

    /// Load options from a JSON manifest. Relative image sources are
    /// resolved against the manifest's directory.
    pub fn from_manifest(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut options = Self::from_json(&content)?;
        if let Some(base) = path.parent() {
            options.resolve_sources(base);
        }

        tracing::debug!(
            "loaded {} images from manifest {}",
            options.image_array.len(),
            path.display()
        );

        Ok(options)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    fn resolve_sources(&mut self, base: &Path) {
        for image in &mut self.image_array {
            if is_remote(&image.source) {
                continue;
            }

            let source = PathBuf::from(&image.source);
            if source.is_relative() {
                image.source = base.join(source).to_string_lossy().into_owned();
            }
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn number_shown(mut self, count: usize) -> Self {
        self.number_shown = count;
        self
    }

    pub fn navigation(mut self, style: NavigationStyle) -> Self {
        self.navigation = style.to_string();
        self
    }

    pub fn navigation_str(mut self, style: impl Into<String>) -> Self {
        self.navigation = style.into();
        self
    }

    pub fn grid_template_columns(mut self, value: impl Into<String>) -> Self {
        self.grid_template_columns = value.into();
        self
    }

    pub fn grid_template_rows(mut self, value: impl Into<String>) -> Self {
        self.grid_template_rows = value.into();
        self
    }

    pub fn gap(mut self, value: impl Into<String>) -> Self {
        self.gap = value.into();
        self
    }

    pub fn justify_items(mut self, value: impl Into<String>) -> Self {
        self.justify_items = value.into();
        self
    }

    pub fn align_items(mut self, value: impl Into<String>) -> Self {
        self.align_items = value.into();
        self
    }

    pub fn color(mut self, value: impl Into<String>) -> Self {
        self.color = value.into();
        self
    }

    pub fn background_color(mut self, value: impl Into<String>) -> Self {
        self.background_color = value.into();
        self
    }

    /// Strictly parse the navigation option.
    pub fn navigation_style(&self) -> Result<NavigationStyle, ConfigError> {
        Ok(self.navigation.parse()?)
    }

    /// Strictly resolve every style string.
    pub fn grid_style(&self) -> Result<GridStyle, ConfigError> {
        let grid = GridConfig::new(
            style_value("gridTemplateColumns", &self.grid_template_columns)?,
            style_value("gridTemplateRows", &self.grid_template_rows)?,
        )
        .with_gap(style_value("gap", &self.gap)?)
        .with_justify_items(style_value("justifyItems", &self.justify_items)?)
        .with_align_items(style_value("alignItems", &self.align_items)?);

        Ok(GridStyle {
            grid,
            color: parse_color(&self.color)?,
            background_color: parse_color(&self.background_color)?,
        })
    }

    /// Resolve the style strings, replacing each invalid value with its
    /// default and logging it.
    pub fn resolved_grid_style(&self) -> GridStyle {
        let defaults = GridStyle::default();

        let columns = lenient(
            "gridTemplateColumns",
            &self.grid_template_columns,
            defaults.grid.columns,
        );
        let rows = lenient("gridTemplateRows", &self.grid_template_rows, defaults.grid.rows);
        let gap: Gap = lenient("gap", &self.gap, defaults.grid.gap);
        let justify: ItemAlignment =
            lenient("justifyItems", &self.justify_items, defaults.grid.justify_items);
        let align: ItemAlignment =
            lenient("alignItems", &self.align_items, defaults.grid.align_items);

        let color = parse_color(&self.color).unwrap_or_else(|err| {
            tracing::warn!("color: {err}, using default");
            defaults.color
        });
        let background_color = parse_color(&self.background_color).unwrap_or_else(|err| {
            tracing::warn!("backgroundColor: {err}, using default");
            defaults.background_color
        });

        GridStyle {
            grid: GridConfig::new(columns, rows)
                .with_gap(gap)
                .with_justify_items(justify)
                .with_align_items(align),
            color,
            background_color,
        }
    }

    /// Navigation style, or `None` for an unrecognised value (no affordance is rendered).
    pub fn resolved_navigation(&self) -> Option<NavigationStyle> {
        match self.navigation_style() {
            Ok(style) => Some(style),
            Err(err) => {
                tracing::warn!("{err}; no navigation affordance will be shown");
                None
            }
        }
    }
}

fn style_value<T>(option: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr<Err = StyleError>,
{
    value
        .parse()
        .map_err(|source| ConfigError::InvalidStyle { option, source })
}

fn lenient<T>(option: &'static str, value: &str, fallback: T) -> T
where
    T: FromStr<Err = StyleError>,
{
    style_value(option, value).unwrap_or_else(|err| {
        tracing::warn!("{err}, using default");
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Track;

    #[test]
    fn test_defaults_match_component() {
        let options = SwiperOptions::default();
        assert_eq!(options.number_shown, 5);
        assert_eq!(options.navigation, "thumbnails");
        assert_eq!(options.grid_template_columns, "1fr");
        assert_eq!(options.grid_template_rows, "auto");
        assert_eq!(options.gap, "4px");
        assert_eq!(options.color, "black");
        assert_eq!(options.background_color, "white");
        assert!(options.grid_style().is_ok());
    }

    #[test]
    fn test_builder() {
        let options = SwiperOptions::new(vec![GalleryImage::new("a.png", "A")])
            .id("gallery")
            .number_shown(3)
            .navigation(NavigationStyle::Dots)
            .grid_template_columns("repeat(3, 1fr)")
            .gap("8px");

        assert_eq!(options.id.as_deref(), Some("gallery"));
        assert_eq!(options.number_shown, 3);
        assert_eq!(options.navigation_style().unwrap(), NavigationStyle::Dots);

        let style = options.grid_style().unwrap();
        assert_eq!(style.grid.column_count(), 3);
        assert_eq!(style.grid.gap, Gap::uniform(8.0));
    }

    #[test]
    fn test_strict_style_reports_option() {
        let options = SwiperOptions::default().gap("wide");
        match options.grid_style() {
            Err(ConfigError::InvalidStyle { option, .. }) => assert_eq!(option, "gap"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_lenient_style_falls_back() {
        let options = SwiperOptions::default()
            .grid_template_columns("repeat(2, 100px)")
            .justify_items("sideways")
            .color("not-a-color");

        let style = options.resolved_grid_style();
        assert_eq!(
            style.grid.columns.tracks(),
            &[Track::Pixels(100.0), Track::Pixels(100.0)]
        );
        assert_eq!(style.grid.justify_items, ItemAlignment::Stretch);
        assert_eq!(style.color, GridStyle::default().color);
    }

    #[test]
    fn test_unknown_navigation() {
        let options = SwiperOptions::default().navigation_str("arrows");
        assert!(options.navigation_style().is_err());
        assert_eq!(options.resolved_navigation(), None);
    }

    #[test]
    fn test_from_json_camel_case() {
        let options = SwiperOptions::from_json(
            r##"{
                "imageArray": [{ "src": "one.jpg", "alt": "Uno" }, { "src": "two.jpg" }],
                "numberShown": 1,
                "navigation": "numbers",
                "backgroundColor": "#222"
            }"##,
        )
        .unwrap();

        assert_eq!(options.image_array.len(), 2);
        assert_eq!(options.image_array[0].alt_text, "Uno");
        assert_eq!(options.image_array[1].alt_text, "");
        assert_eq!(options.number_shown, 1);
        assert_eq!(options.navigation, "numbers");
        assert_eq!(options.background_color, "#222");
        assert_eq!(options.gap, "4px");
    }

    #[test]
    fn test_from_json_accepts_legacy_spelling() {
        let options =
            SwiperOptions::from_json(r#"{ "imageArray": [], "numberShowen": 2 }"#).unwrap();
        assert_eq!(options.number_shown, 2);
    }

    #[test]
    fn test_from_json_rejects_negative_count() {
        assert!(matches!(
            SwiperOptions::from_json(r#"{ "imageArray": [], "numberShown": -1 }"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_from_json_requires_image_array() {
        assert!(matches!(
            SwiperOptions::from_json(r#"{ "numberShown": 3 }"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(SwiperOptions::from_json("{}"), Err(ConfigError::Json(_))));
    }
}
