use anyhow::Result;
use bazaar_style_config::ConfigFormat;
use std::path::PathBuf;

/// Execute show subcommand
pub async fn execute(config: Option<PathBuf>, format: ConfigFormat) -> Result<()> {
    let (_, config) = super::load(config).await?;
    print!("{}", format.render(&config)?);
    Ok(())
}
