//! Main app state

use crate::watcher::{self, WatcherEvent};
use cosmic::{
    Action, Application, ApplicationExt, Core, Element, Task,
    cosmic_config::{Config, CosmicConfigEntry},
    iced::{Length, Subscription, window},
    widget::{column, container, icon, scrollable, text},
};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use swiper::{ImageSwiper, SwiperOptions, fl};
use swiper_config::{AppConfig, ConfigError};
use swiper_image::ImageError;
use thiserror::Error;

#[derive(Debug, Clone)]
pub enum Message {
    SourceLoaded {
        source: PathBuf,
        options: Box<SwiperOptions>,
    },
    LoadFailed(Arc<String>),
    Watcher(WatcherEvent),
    Swiper(swiper::Message),
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Manifest(#[from] ConfigError),
    #[error(transparent)]
    Images(#[from] ImageError),
}

pub struct App {
    core: Core,
    config: AppConfig,
    config_handler: Option<Config>,
    swiper: ImageSwiper,
    source: Option<PathBuf>,
    is_fullscreen: bool,
}

impl App {
    pub const APP_ID: &'static str = "org.codeberg.bhh32.ImageSwiper";

    fn load_source(&self, source: PathBuf) -> Task<Action<Message>> {
        let config = self.config.clone();

        cosmic::task::future(async move {
            match read_source(&source, &config).await {
                Ok(options) => Message::SourceLoaded {
                    source,
                    options: Box::new(options),
                },
                Err(e) => Message::LoadFailed(Arc::new(format!("{}: {e}", source.display()))),
            }
        })
    }

    fn update_swiper(&mut self, message: swiper::Message) -> Task<Action<Message>> {
        let was_open = self.swiper.is_open();
        let task = self
            .swiper
            .update(message)
            .map(|msg| Action::from(Message::Swiper(msg)));

        if self.swiper.is_open() == was_open {
            return task;
        }

        Task::batch([task, self.set_fullscreen(self.swiper.is_open())])
    }

    fn set_fullscreen(&mut self, fullscreen: bool) -> Task<Action<Message>> {
        if self.is_fullscreen == fullscreen {
            return Task::none();
        }
        self.is_fullscreen = fullscreen;

        let mode = if fullscreen {
            window::Mode::Fullscreen
        } else {
            window::Mode::Windowed
        };

        let Some(window_id) = self.core.main_window_id() else {
            return Task::none();
        };
        window::change_mode::<Message>(window_id, mode).map(Action::from)
    }

    fn update_title(&mut self) -> Task<Action<Message>> {
        let title = match self.source.as_deref().and_then(Path::file_name) {
            Some(name) => format!("{} - {}", name.to_string_lossy(), fl!("app-title")),
            None => fl!("app-title"),
        };

        self.set_window_title(title, self.core.main_window_id().unwrap())
    }

    fn empty_view(&self) -> Element<'_, Message> {
        container(
            column()
                .push(icon::from_name("folder-pictures-symbolic").size(64))
                .push(text::title3(fl!("no-images")))
                .push(text(fl!("no-images-hint")))
                .spacing(12)
                .align_x(cosmic::iced::Alignment::Center),
        )
        .center(Length::Fill)
        .into()
    }
}

/// A `.json` file is read as a manifest; a directory is scanned for images
/// and takes its presentation from the stored preferences.
async fn read_source(source: &Path, config: &AppConfig) -> Result<SwiperOptions, SourceError> {
    if source.is_dir() {
        let images = swiper_image::images_from_dir(source, false).await?;
        return Ok(config.apply_defaults(SwiperOptions::new(images)));
    }

    let manifest = source.to_path_buf();
    let options = tokio::task::spawn_blocking(move || SwiperOptions::from_manifest(&manifest))
        .await
        .map_err(|_| SourceError::Images(ImageError::Cancelled))??;
    Ok(options)
}

impl Application for App {
    type Executor = cosmic::executor::Default;
    type Flags = Option<PathBuf>;
    type Message = Message;

    const APP_ID: &'static str = Self::APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        let (config, config_handler) = match swiper_config::config() {
            Ok(handler) => {
                let config = match AppConfig::get_entry(&handler) {
                    Ok(c) => c,
                    Err((errors, c)) => {
                        for err in errors {
                            tracing::debug!("config: {err}");
                        }
                        c
                    }
                };
                (config, Some(handler))
            }
            Err(_) => (AppConfig::default(), None),
        };

        let (swiper, swiper_task) = ImageSwiper::new(SwiperOptions::default());

        let mut app = Self {
            core,
            config,
            config_handler,
            swiper,
            source: None,
            is_fullscreen: false,
        };

        let startup_source = flags
            .or_else(|| app.config.last_source.as_ref().map(PathBuf::from))
            .or_else(dirs::picture_dir);

        let mut tasks = vec![
            swiper_task.map(|msg| Action::from(Message::Swiper(msg))),
            app.set_window_title(fl!("app-title"), app.core.main_window_id().unwrap()),
        ];
        if let Some(source) = startup_source {
            tasks.push(app.load_source(source));
        }

        (app, Task::batch(tasks))
    }

    fn view(&self) -> Element<'_, Self::Message> {
        if self.swiper.options().image_array.is_empty() {
            return self.empty_view();
        }

        if self.swiper.is_open() {
            return self.swiper.view().map(Message::Swiper);
        }

        let caption: Vec<Element<'_, swiper::Message>> = self
            .swiper
            .options()
            .id
            .as_ref()
            .map(|id| text::caption(id.clone()).into())
            .into_iter()
            .collect();

        scrollable(
            container(self.swiper.view_with(caption).map(Message::Swiper))
                .padding(16)
                .width(Length::Fill),
        )
        .height(Length::Fill)
        .into()
    }

    fn update(&mut self, message: Message) -> Task<Action<Self::Message>> {
        match message {
            Message::SourceLoaded { source, options } => {
                tracing::info!(
                    "loaded {} images from {}",
                    options.image_array.len(),
                    source.display()
                );

                self.config.last_source = source.to_str().map(str::to_string);
                if let Some(ref handler) = self.config_handler {
                    let _ = self.config.write_entry(handler);
                }

                self.source = Some(source);
                let task = self
                    .swiper
                    .set_options(*options)
                    .map(|msg| Action::from(Message::Swiper(msg)));

                let mut tasks = vec![task, self.update_title()];
                if !self.swiper.is_open() {
                    tasks.push(self.set_fullscreen(false));
                }
                Task::batch(tasks)
            }
            Message::LoadFailed(err) => {
                tracing::error!("failed to load images: {err}");
                Task::none()
            }
            Message::Watcher(event) => match event {
                WatcherEvent::Changed(source) => {
                    tracing::debug!("source changed: {}", source.display());
                    self.load_source(source)
                }
                WatcherEvent::Error(err) => {
                    tracing::warn!("watcher error: {err}");
                    Task::none()
                }
            },
            Message::Swiper(message) => self.update_swiper(message),
        }
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        Subscription::batch([
            self.swiper.subscription().map(Message::Swiper),
            watcher::watch_source(self.source.clone()).map(Message::Watcher),
        ])
    }

    fn on_app_exit(&mut self) -> Option<Self::Message> {
        if let Some(ref handler) = self.config_handler {
            let _ = self.config.write_entry(handler);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(path: &Path) {
        image::RgbImage::new(4, 3).save(path).unwrap();
    }

    #[tokio::test]
    async fn test_directory_source_uses_preferences() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("b.png"));
        write_png(&dir.path().join("a.png"));

        let config = AppConfig {
            navigation: swiper::NavigationStyle::Dots,
            number_shown: 1,
            last_source: None,
        };

        let options = read_source(dir.path(), &config).await.unwrap();
        assert_eq!(options.image_array.len(), 2);
        assert_eq!(options.image_array[0].alt_text, "a");
        assert_eq!(options.navigation, "dots");
        assert_eq!(options.number_shown, 1);
    }

    #[tokio::test]
    async fn test_manifest_source() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("galeria.json");
        std::fs::write(
            &manifest,
            r#"{"imageArray": [{"src": "uno.png", "alt": "Uno"}], "navigation": "numbers"}"#,
        )
        .unwrap();

        let options = read_source(&manifest, &AppConfig::default()).await.unwrap();
        assert_eq!(options.image_array.len(), 1);
        assert_eq!(options.navigation, "numbers");
    }

    #[tokio::test]
    async fn test_missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nada.json");
        assert!(read_source(&missing, &AppConfig::default()).await.is_err());
    }
}
