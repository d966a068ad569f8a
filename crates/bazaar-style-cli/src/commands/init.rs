use anyhow::{bail, Context, Result};
use bazaar_style_config::{BuildConfig, ConfigFormat, ConfigLoader};
use colored::Colorize;
use std::path::PathBuf;

/// Default file name for a freshly initialized config.
pub fn default_path(format: ConfigFormat) -> PathBuf {
    PathBuf::from(format!("tailwind.config.{}", format.extension()))
}

/// Execute init subcommand
pub async fn execute(path: Option<PathBuf>, format: ConfigFormat, force: bool) -> Result<()> {
    let config_path = path.unwrap_or_else(|| default_path(format));

    if config_path.exists() && !force {
        bail!(
            "Config file already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    ConfigLoader::save(&BuildConfig::stylebazaar(), &config_path)
        .await
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    println!(
        "{} Created config file at: {}",
        "Success:".green().bold(),
        config_path.display()
    );
    println!(
        "{}",
        "Edit the content globs and colors, then run `bazaar-style export`.".dimmed()
    );

    Ok(())
}
