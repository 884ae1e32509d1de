use cosmic::cosmic_config::{self, Config, ConfigGet, ConfigSet, CosmicConfigEntry};
use serde::{Deserialize, Serialize};
use swiper_types::NavigationStyle;

pub mod error;
pub mod options;
pub mod style;

pub use error::ConfigError;
pub use options::{DEFAULT_NUMBER_SHOWN, SwiperOptions};
pub use style::{GridStyle, parse_color};

pub const CONFIG_VERSION: u64 = 1;
const APP_ID: &str = "org.codeberg.bhh32.ImageSwiper";

/// Application preferences of the demo host. Carousel state is never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Used when a source does not specify its own navigation style.
    pub navigation: NavigationStyle,
    /// Used when a source does not specify its own grid size.
    pub number_shown: usize,
    /// Last manifest or directory that was opened.
    pub last_source: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            navigation: NavigationStyle::default(),
            number_shown: DEFAULT_NUMBER_SHOWN,
            last_source: None,
        }
    }
}

impl CosmicConfigEntry for AppConfig {
    const VERSION: u64 = CONFIG_VERSION;

    fn write_entry(&self, config: &cosmic_config::Config) -> Result<(), cosmic_config::Error> {
        config.set("navigation", self.navigation)?;
        config.set("number_shown", self.number_shown)?;
        config.set("last_source", self.last_source.clone())?;
        Ok(())
    }

    fn get_entry(
        config: &cosmic_config::Config,
    ) -> Result<Self, (Vec<cosmic_config::Error>, Self)> {
        let mut errors = Vec::new();
        let mut cfg = AppConfig::default();

        macro_rules! get_field {
            ($name:literal, $field:ident, $type:ty) => {
                match config.get::<$type>($name) {
                    Ok(val) => cfg.$field = val,
                    Err(e) => errors.push(e),
                }
            };
        }

        get_field!("navigation", navigation, NavigationStyle);
        get_field!("number_shown", number_shown, usize);
        get_field!("last_source", last_source, Option<String>);

        if errors.is_empty() {
            Ok(cfg)
        } else {
            Err((errors, cfg))
        }
    }

    fn update_keys<T: AsRef<str>>(
        &mut self,
        config: &cosmic_config::Config,
        changed_keys: &[T],
    ) -> (Vec<cosmic_config::Error>, Vec<&'static str>) {
        let mut errors = Vec::new();
        let mut updated = Vec::new();

        for key in changed_keys {
            match key.as_ref() {
                "navigation" => match config.get::<NavigationStyle>("navigation") {
                    Ok(val) => {
                        self.navigation = val;
                        updated.push("navigation");
                    }
                    Err(e) => errors.push(e),
                },
                "number_shown" => match config.get::<usize>("number_shown") {
                    Ok(val) => {
                        self.number_shown = val;
                        updated.push("number_shown");
                    }
                    Err(e) => errors.push(e),
                },
                "last_source" => match config.get::<Option<String>>("last_source") {
                    Ok(val) => {
                        self.last_source = val;
                        updated.push("last_source");
                    }
                    Err(e) => errors.push(e),
                },
                _ => {}
            }
        }

        (errors, updated)
    }
}

impl AppConfig {
    /// Apply the preferences to options that were built without explicit values.
    pub fn apply_defaults(&self, options: SwiperOptions) -> SwiperOptions {
        options
            .navigation(self.navigation)
            .number_shown(self.number_shown)
    }
}

pub fn config() -> Result<Config, cosmic_config::Error> {
    Config::new(APP_ID, CONFIG_VERSION)
}
