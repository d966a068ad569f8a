use anyhow::Result;
use bazaar_style_config::{BuildConfig, ColorValue, PluginRef, ValidationReport};
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

/// Execute check subcommand
pub async fn execute(config: Option<PathBuf>) -> Result<()> {
    let (path, config) = super::load(config).await?;
    let report = config.validate()?;
    debug!("Validated {} with {} warning(s)", path.display(), report.warnings.len());

    println!("{} {}", "Valid:".green().bold(), path.display());
    print!("{}", summary(&config, &report));
    Ok(())
}

fn swatch(color: &ColorValue) -> String {
    match color.to_rgba() {
        Some(rgba) => "██".truecolor(rgba.r, rgba.g, rgba.b).to_string(),
        None => "  ".to_string(),
    }
}

fn plugin_line(plugin: &PluginRef) -> String {
    match plugin.options() {
        Some(options) => format!("{} ({} option(s))", plugin.name(), options.len()),
        None => plugin.name().to_string(),
    }
}

/// Human-readable description of a validated configuration.
pub fn summary(config: &BuildConfig, report: &ValidationReport) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "  Dark mode: {} ({})",
        config.dark_mode().to_string().cyan(),
        config.dark_mode().activation_selector().dimmed()
    ));

    lines.push(format!("  Content ({}):", config.content().len()));
    for pattern in config.content().patterns() {
        lines.push(format!("    {}", pattern));
    }

    if config.colors().is_empty() {
        lines.push(format!("  Colors: {}", "none".dimmed()));
    } else {
        lines.push(format!("  Colors ({}):", config.colors().len()));
        let width = config.colors().iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        for (name, value) in config.colors().iter() {
            lines.push(format!(
                "    {} {:<width$}  {}",
                swatch(value),
                name,
                value.as_str().yellow(),
                width = width
            ));
        }
    }

    if config.plugins().is_empty() {
        lines.push(format!("  Plugins: {}", "none".dimmed()));
    } else {
        lines.push(format!("  Plugins ({}):", config.plugins().len()));
        for plugin in config.plugins() {
            lines.push(format!("    {}", plugin_line(plugin)));
        }
    }

    for warning in &report.warnings {
        lines.push(format!("  {} {}", "Warning:".yellow().bold(), warning));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
