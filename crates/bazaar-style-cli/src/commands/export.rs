use anyhow::{bail, Context, Result};
use bazaar_style_config::ConfigFormat;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name the build tool looks for.
pub const EXPORT_FILE_NAME: &str = "tailwind.config.js";

/// Where the export lands when `--output` is not given.
pub fn default_output(config_path: &Path) -> PathBuf {
    config_path.with_file_name(EXPORT_FILE_NAME)
}

/// Execute export subcommand
///
/// The output is always the JavaScript object literal, whatever the
/// extension of `output`.
pub async fn execute(config: Option<PathBuf>, output: Option<PathBuf>, force: bool) -> Result<()> {
    let (config_path, config) = super::load(config).await?;
    let output = output.unwrap_or_else(|| default_output(&config_path));

    if output.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            output.display()
        );
    }

    let js = ConfigFormat::JavaScript.render(&config)?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    tokio::fs::write(&output, js)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!("Exported {} to {}", config_path.display(), output.display());

    println!("{} Wrote {}", "Success:".green().bold(), output.display());
    Ok(())
}
