use anyhow::{bail, Result};
use colored::Colorize;
use std::path::PathBuf;

/// Execute matches subcommand
pub async fn execute(config: Option<PathBuf>, paths: Vec<PathBuf>, strict: bool) -> Result<()> {
    let (_, config) = super::load(config).await?;
    let matcher = config.content().matcher()?;

    let mut uncovered = 0;
    for path in &paths {
        let patterns = matcher.matching_patterns(path);
        if patterns.is_empty() {
            uncovered += 1;
            println!("{} {}  {}", "✗".red(), path.display(), "not scanned".dimmed());
        } else {
            println!(
                "{} {}  {}",
                "✓".green(),
                path.display(),
                patterns.join(", ").dimmed()
            );
        }
    }

    if strict && uncovered > 0 {
        bail!("{} of {} path(s) are not covered by content globs", uncovered, paths.len());
    }
    Ok(())
}
