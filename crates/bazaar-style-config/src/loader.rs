//! Locating, loading and saving configuration files.
//!
//! Every load reads the file again; nothing is cached between calls.

use crate::config::BuildConfig;
use crate::error::{ConfigError, ConfigResult};
use crate::format::ConfigFormat;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File names searched by [`ConfigLoader::discover`], in order.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    "tailwind.config.toml",
    "tailwind.config.json",
    "tailwind.config.yaml",
    "tailwind.config.yml",
];

/// Entry point for reading and writing [`BuildConfig`] files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Find the configuration file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> ConfigResult<PathBuf> {
        let dir = dir.as_ref();
        for name in CONFIG_FILE_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                debug!("Discovered config at {}", candidate.display());
                return Ok(candidate);
            }
        }
        Err(ConfigError::NotFound(dir.to_path_buf()))
    }

    /// Parse and validate configuration text.
    pub fn load_from_str(content: &str, format: ConfigFormat) -> ConfigResult<BuildConfig> {
        let raw = format.parse(content)?;
        let config = BuildConfig::from_raw(raw)?;

        for warning in config.validate()?.warnings {
            warn!("{}", warning);
        }
        Ok(config)
    }

    /// Load a configuration file, picking the format from its extension.
    pub async fn load_from_file(path: impl AsRef<Path>) -> ConfigResult<BuildConfig> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        debug!("Loading {} config from {}", format, path.display());

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::io(path, e))?;
        Self::load_from_str(&content, format)
    }

    /// Load synchronously (for non-async contexts)
    pub fn load_from_file_sync(path: impl AsRef<Path>) -> ConfigResult<BuildConfig> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        debug!("Loading {} config from {}", format, path.display());

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        Self::load_from_str(&content, format)
    }

    /// Discover and load the configuration in `dir`.
    pub async fn load_from_dir(dir: impl AsRef<Path>) -> ConfigResult<BuildConfig> {
        let path = Self::discover(dir)?;
        Self::load_from_file(path).await
    }

    /// Validate `config` and write it to `path` in the format its extension names.
    ///
    /// Creates missing parent directories.
    pub async fn save(config: &BuildConfig, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let content = Self::render_for(config, path)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ConfigError::io(parent, e))?;
        }
        tokio::fs::write(path, content)
            .await
            .map_err(|e| ConfigError::io(path, e))?;

        debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Save synchronously (for non-async contexts)
    pub fn save_sync(config: &BuildConfig, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let content = Self::render_for(config, path)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
        }
        std::fs::write(path, content).map_err(|e| ConfigError::io(path, e))?;

        debug!("Saved config to {}", path.display());
        Ok(())
    }

    fn render_for(config: &BuildConfig, path: &Path) -> ConfigResult<String> {
        config.validate()?;
        ConfigFormat::from_path(path)?.render(config)
    }
}
