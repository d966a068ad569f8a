use anyhow::{Context, Result};

/// Execute schema subcommand
pub fn execute() -> Result<()> {
    let schema = serde_json::to_string_pretty(&bazaar_style_config::json_schema())
        .context("Failed to serialize schema as JSON")?;
    println!("{}", schema);
    Ok(())
}
