pub mod check;
pub mod export;
pub mod init;
pub mod matches;
pub mod schema;
pub mod show;

use anyhow::{Context, Result};
use bazaar_style_config::{BuildConfig, ConfigLoader};
use std::path::PathBuf;

/// Resolve the config file: the explicit path, or discovery in the current directory.
pub fn resolve_config_path(config: Option<PathBuf>) -> Result<PathBuf> {
    match config {
        Some(path) => Ok(path),
        None => {
            let cwd = std::env::current_dir().context("Could not determine current directory")?;
            Ok(ConfigLoader::discover(cwd)?)
        }
    }
}

/// Resolve and load the configuration.
pub async fn load(config: Option<PathBuf>) -> Result<(PathBuf, BuildConfig)> {
    let path = resolve_config_path(config)?;
    let loaded = ConfigLoader::load_from_file(&path)
        .await
        .with_context(|| format!("Failed to load config file: {}", path.display()))?;
    Ok((path, loaded))
}
