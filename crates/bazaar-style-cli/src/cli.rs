use bazaar_style_config::ConfigFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// How much of the loader's activity to log on stderr.
///
/// `check` prints validation warnings itself, so logging stays off unless
/// asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    /// Validation warnings raised while loading
    Warn,
    /// Exports written
    Info,
    /// Config discovery, every load and save
    Debug,
}

impl LogLevel {
    pub fn filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
        }
    }
}

/// Formats the configuration can be printed or written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Toml,
    Json,
    Yaml,
    /// `tailwind.config.js` object literal
    Js,
}

impl From<OutputFormat> for ConfigFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Toml => ConfigFormat::Toml,
            OutputFormat::Json => ConfigFormat::Json,
            OutputFormat::Yaml => ConfigFormat::Yaml,
            OutputFormat::Js => ConfigFormat::JavaScript,
        }
    }
}

#[derive(Parser)]
#[command(name = "bazaar-style")]
#[command(about = "bazaar-style - validate and export the stylebazaar Tailwind configuration")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level for loader diagnostics (off unless given)
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (defaults to tailwind.config.{toml,json,yaml,yml} in the current directory)
    #[arg(short = 'C', long, global = true, env = "BAZAAR_STYLE_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Effective log level after applying `--verbose`.
    pub fn level_filter(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::DEBUG
        } else {
            self.log_level.map_or(LevelFilter::OFF, LogLevel::filter)
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load and validate the configuration
    Check,

    /// Print the normalized configuration
    Show {
        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "toml")]
        format: OutputFormat,
    },

    /// Write the stylebazaar configuration as a starting point
    Init {
        /// Target file (defaults to ./tailwind.config.<format>)
        path: Option<PathBuf>,

        /// File format when no path is given
        #[arg(short = 'f', long, value_enum, default_value = "toml")]
        format: OutputFormat,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Write tailwind.config.js for the build tool
    Export {
        /// Output file (defaults to tailwind.config.js next to the config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Report which content globs cover the given paths
    Matches {
        /// Project-relative paths to test
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Exit with an error if any path is not covered
        #[arg(long)]
        strict: bool,
    },

    /// Print the JSON schema of the configuration
    Schema,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn verbose_overrides_log_level() {
        let cli = Cli::parse_from(["bazaar-style", "--log-level", "warn", "-v", "check"]);
        assert_eq!(cli.level_filter(), LevelFilter::DEBUG);

        let cli = Cli::parse_from(["bazaar-style", "check"]);
        assert_eq!(cli.level_filter(), LevelFilter::OFF);

        let cli = Cli::parse_from(["bazaar-style", "check", "-l", "info"]);
        assert_eq!(cli.level_filter(), LevelFilter::INFO);
    }

    #[test]
    fn parses_show_format() {
        let cli = Cli::parse_from(["bazaar-style", "show", "--format", "js"]);
        match cli.command {
            Commands::Show { format } => {
                assert_eq!(ConfigFormat::from(format), ConfigFormat::JavaScript)
            }
            _ => panic!("expected show"),
        }
    }
}
