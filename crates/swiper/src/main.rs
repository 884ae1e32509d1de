mod app;
mod watcher;

use app::App;
use std::path::PathBuf;

fn main() -> cosmic::iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let settings = cosmic::app::Settings::default().size_limits(
        cosmic::iced::Limits::NONE
            .min_width(400.0)
            .min_height(300.0),
    );

    // A manifest file or an image directory.
    let source = std::env::args().nth(1).map(PathBuf::from);

    cosmic::app::run::<App>(settings, source)
}
