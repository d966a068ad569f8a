//! Test utilities for configuration testing.

use crate::{BuildConfig, ConfigFormat, ConfigLoader, DarkModeStrategy, PluginRef};
use std::path::PathBuf;
use tempfile::TempDir;

/// Ready-made configurations.
pub struct TestConfig;

impl TestConfig {
    /// Smallest valid configuration: one glob, media dark mode, no colors.
    pub fn minimal() -> BuildConfig {
        BuildConfig::builder()
            .content("./templates/**/*.html")
            .build()
            .unwrap()
    }

    /// The storefront configuration.
    pub fn stylebazaar() -> BuildConfig {
        BuildConfig::stylebazaar()
    }

    /// Exercises every field, including configured plugins.
    pub fn comprehensive() -> BuildConfig {
        let mut options = std::collections::BTreeMap::new();
        options.insert("strategy".to_string(), serde_json::json!("class"));

        BuildConfig::builder()
            .dark_mode(DarkModeStrategy::Class)
            .content("./templates/**/*.html")
            .content("./static/**/*.js")
            .content("!./static/vendor/**")
            .color("primary", "#ec4899")
            .color("primary-hover", "#db2777")
            .color("surface", "rgb(250 250 250 / 90%)")
            .plugin(PluginRef::Name("@tailwindcss/typography".to_string()))
            .plugin(PluginRef::Configured {
                name: "@tailwindcss/forms".to_string(),
                options,
            })
            .build()
            .unwrap()
    }
}

/// Temporary configuration files.
pub struct TempConfig;

impl TempConfig {
    /// Write `config` into a fresh temp directory as `tailwind.config.<ext>`.
    ///
    /// Keep the returned `TempDir` alive for as long as the file is needed.
    pub fn create(config: &BuildConfig, format: ConfigFormat) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir
            .path()
            .join(format!("tailwind.config.{}", format.extension()));
        ConfigLoader::save_sync(config, &path).unwrap();
        (dir, path)
    }

    /// Write raw text, valid or not, into a fresh temp directory.
    pub fn create_raw(file_name: &str, content: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(file_name);
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }
}

/// Round-trip helpers.
pub struct ConfigValidation;

impl ConfigValidation {
    /// Render `config` in `format`, load it back, and compare.
    pub fn assert_round_trip(config: &BuildConfig, format: ConfigFormat) {
        let rendered = format.render(config).unwrap();
        let loaded = ConfigLoader::load_from_str(&rendered, format).unwrap();
        assert_eq!(
            config, &loaded,
            "{format} round trip changed the config:\n{rendered}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for config in [
            TestConfig::minimal(),
            TestConfig::stylebazaar(),
            TestConfig::comprehensive(),
        ] {
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn temp_config_loads_back() {
        let (_dir, path) = TempConfig::create(&TestConfig::stylebazaar(), ConfigFormat::Json);
        let loaded = ConfigLoader::load_from_file_sync(&path).unwrap();
        assert_eq!(loaded, TestConfig::stylebazaar());
    }

    #[test]
    fn json_round_trip() {
        ConfigValidation::assert_round_trip(&TestConfig::comprehensive(), ConfigFormat::Json);
    }
}
