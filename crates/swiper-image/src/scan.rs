use std::{
    cmp::Ordering,
    fs,
    path::{Path, PathBuf},
};
use swiper_types::GalleryImage;
use tokio::task::spawn_blocking;

use crate::ImageError;

/// File extensions the `image` crate can decode with the enabled features.
pub const EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tiff", "tif", "ico", "avif",
];

/// Async scan of a directory, producing one gallery image per file with the
/// file stem as its alternative text.
pub async fn images_from_dir(
    dir: &Path,
    include_hidden: bool,
) -> Result<Vec<GalleryImage>, ImageError> {
    Ok(scan_dir(dir, include_hidden)
        .await?
        .into_iter()
        .map(|path| {
            let alt = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            GalleryImage::new(path.to_string_lossy().into_owned(), alt)
        })
        .collect())
}

/// Async scan a dir for image files, naturally sorted by name
pub async fn scan_dir(dir: &Path, include_hidden: bool) -> Result<Vec<PathBuf>, ImageError> {
    let dir = dir.to_path_buf();

    spawn_blocking(move || scan_dir_sync(&dir, include_hidden))
        .await
        .map_err(|_| ImageError::Cancelled)?
}

fn scan_dir_sync(dir: &Path, include_hidden: bool) -> Result<Vec<PathBuf>, ImageError> {
    let entries = fs::read_dir(dir).map_err(|source| ImageError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut images: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            if !include_hidden
                && let Some(name) = path.file_name().and_then(|name| name.to_str())
                && name.starts_with('.')
            {
                return false;
            }
            path.is_file() && is_supported_image(path)
        })
        .collect();

    images.sort_by(|a, b| {
        let a_name = a.file_name().and_then(|name| name.to_str()).unwrap_or("");
        let b_name = b.file_name().and_then(|name| name.to_str()).unwrap_or("");
        natural_cmp(a_name, b_name)
    });

    tracing::debug!("found {} images in {}", images.len(), dir.display());
    Ok(images)
}

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Case-insensitive ordering where digit runs compare by value, so
/// `img2` sorts before `img10`.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a_chars = a.chars().peekable();
    let mut b_chars = b.chars().peekable();

    loop {
        let (Some(&ac), Some(&bc)) = (a_chars.peek(), b_chars.peek()) else {
            return a_chars.peek().is_some().cmp(&b_chars.peek().is_some());
        };

        if ac.is_ascii_digit() && bc.is_ascii_digit() {
            let a_run = take_digits(&mut a_chars);
            let b_run = take_digits(&mut b_chars);
            let a_trim = a_run.trim_start_matches('0');
            let b_trim = b_run.trim_start_matches('0');

            match a_trim.len().cmp(&b_trim.len()).then_with(|| a_trim.cmp(b_trim)) {
                Ordering::Equal => continue,
                other => return other,
            }
        }

        a_chars.next();
        b_chars.next();
        match ac.to_lowercase().cmp(bc.to_lowercase()) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}
