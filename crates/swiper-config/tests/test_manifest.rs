#[cfg(test)]
mod tests {
    use std::{fs, path::Path};
    use swiper_config::{ConfigError, SwiperOptions};
    use swiper_types::NavigationStyle;

    fn write_manifest(dir: &Path, body: &str) -> std::path::PathBuf {
        let path = dir.join("gallery.json");
        fs::write(&path, body).expect("write manifest");
        path
    }

    #[test]
    fn test_manifest_resolves_relative_sources() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(
            dir.path(),
            r#"{
                "id": "casa",
                "imageArray": [
                    { "src": "fotos/sala.jpg", "alt": "Sala" },
                    { "src": "/abs/cocina.jpg", "alt": "Cocina" },
                    { "src": "https://example.com/patio.jpg", "alt": "Patio" }
                ],
                "numberShown": 2,
                "navigation": "dots"
            }"#,
        );

        let options = SwiperOptions::from_manifest(&path).unwrap();

        assert_eq!(options.id.as_deref(), Some("casa"));
        assert_eq!(
            options.image_array[0].source,
            dir.path().join("fotos/sala.jpg").to_string_lossy()
        );
        assert_eq!(options.image_array[1].source, "/abs/cocina.jpg");
        assert_eq!(options.image_array[2].source, "https://example.com/patio.jpg");
        assert_eq!(options.number_shown, 2);
        assert_eq!(options.navigation_style().unwrap(), NavigationStyle::Dots);
    }

    #[test]
    fn test_manifest_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = SwiperOptions::from_manifest(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_manifest_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(dir.path(), "{ imageArray: ");
        assert!(matches!(
            SwiperOptions::from_manifest(&path),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_manifest_defaults_when_omitted() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(dir.path(), r#"{ "imageArray": [] }"#);
        let options = SwiperOptions::from_manifest(&path).unwrap();
        assert_eq!(options, SwiperOptions::default());
    }
}
