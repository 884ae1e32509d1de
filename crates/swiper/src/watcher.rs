use cosmic::iced::Subscription;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub enum WatcherEvent {
    /// The watched source changed and should be reloaded.
    Changed(PathBuf),
    Error(String),
}

/// Watch the opened source. A manifest is watched through its parent
/// directory so editors that replace the file on save are still noticed.
pub fn watch_source(source: Option<PathBuf>) -> Subscription<WatcherEvent> {
    Subscription::run_with_id(
        source.clone(),
        cosmic::iced::stream::channel(100, move |mut output| async move {
            use cosmic::iced_futures::futures::SinkExt;

            let Some(source) = source else {
                std::future::pending::<()>().await;
                unreachable!()
            };

            let Some(watch_dir) = watch_target(&source) else {
                std::future::pending::<()>().await;
                unreachable!()
            };

            let (tx, mut rx) = mpsc::channel(100);

            let watcher_result = RecommendedWatcher::new(
                move |res: Result<Event, notify::Error>| {
                    let _ = tx.blocking_send(res);
                },
                Config::default(),
            );

            let mut watcher = match watcher_result {
                Ok(watcher) => watcher,
                Err(e) => {
                    let _ = output.send(WatcherEvent::Error(e.to_string())).await;
                    std::future::pending::<()>().await;
                    unreachable!();
                }
            };

            if let Err(e) = watcher.watch(&watch_dir, RecursiveMode::NonRecursive) {
                let _ = output.send(WatcherEvent::Error(e.to_string())).await;
                std::future::pending::<()>().await;
                unreachable!();
            }

            while let Some(event_result) = rx.recv().await {
                match event_result {
                    Ok(event) => {
                        if is_relevant(&source, &event) {
                            let _ = output.send(WatcherEvent::Changed(source.clone())).await;
                        }
                    }
                    Err(e) => {
                        let _ = output.send(WatcherEvent::Error(e.to_string())).await;
                    }
                }
            }

            std::future::pending::<()>().await;
            unreachable!()
        }),
    )
}

fn watch_target(source: &Path) -> Option<PathBuf> {
    if source.is_dir() {
        Some(source.to_path_buf())
    } else {
        source.parent().map(Path::to_path_buf)
    }
}

fn is_relevant(source: &Path, event: &Event) -> bool {
    if !matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) {
        return false;
    }

    if source.is_dir() {
        return true;
    }

    event.paths.iter().any(|path| path == source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind};

    #[test]
    fn test_manifest_events_are_filtered() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("galeria.json");
        std::fs::write(&manifest, "{}").unwrap();

        let ours = Event::new(EventKind::Modify(ModifyKind::Any)).add_path(manifest.clone());
        let other =
            Event::new(EventKind::Create(CreateKind::File)).add_path(dir.path().join("otro.json"));
        let access = Event::new(EventKind::Access(notify::event::AccessKind::Any))
            .add_path(manifest.clone());

        assert!(is_relevant(&manifest, &ours));
        assert!(!is_relevant(&manifest, &other));
        assert!(!is_relevant(&manifest, &access));
        assert_eq!(watch_target(&manifest).as_deref(), Some(dir.path()));
    }

    #[test]
    fn test_directory_events_all_count() {
        let dir = tempfile::tempdir().unwrap();
        let event = Event::new(EventKind::Create(CreateKind::File)).add_path(dir.path().join("a.png"));
        assert!(is_relevant(dir.path(), &event));
        assert_eq!(watch_target(dir.path()).as_deref(), Some(dir.path()));
    }
}
