//! Error types for loading and validating the build configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Why a configuration was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidConfigReason {
    /// `content` has no patterns, so the build tool would emit no utilities.
    #[error("content must contain at least one glob pattern")]
    EmptyContent,

    /// `darkMode` is neither `class` nor `media`.
    #[error("unrecognized dark mode strategy '{0}' (expected 'class' or 'media')")]
    UnknownDarkMode(String),

    /// A theme color is not a syntactically valid color.
    #[error("color '{name}' has malformed value '{value}'")]
    MalformedColor {
        /// Palette key of the offending entry.
        name: String,
        /// Value as written in the configuration.
        value: String,
    },

    /// A content pattern does not compile as a glob.
    #[error("content pattern '{pattern}' is not a valid glob: {message}")]
    InvalidGlob {
        /// Pattern as written in the configuration.
        pattern: String,
        /// Message from the glob compiler.
        message: String,
    },

    /// A plugin reference has an empty name.
    #[error("plugin references must have a non-empty name")]
    EmptyPluginName,

    /// A plugin option is `null`, which TOML cannot represent.
    #[error("plugin '{plugin}' option '{option}' is null")]
    NullPluginOption {
        /// Plugin package name.
        plugin: String,
        /// Top-level option key holding the null.
        option: String,
    },
}

/// Errors that can occur while loading, validating or saving a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration was read but failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] InvalidConfigReason),

    /// I/O error reading or writing a configuration file.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file could not be parsed in its format.
    #[error("{format} parse error: {message}")]
    Parse {
        /// Format name (`toml`, `json`, ...).
        format: &'static str,
        /// Parser message.
        message: String,
    },

    /// The record could not be rendered in the requested format.
    #[error("{format} serialization error: {message}")]
    Serialize {
        /// Format name (`toml`, `json`, ...).
        format: &'static str,
        /// Serializer message.
        message: String,
    },

    /// The format is unknown, disabled, or cannot be used in this direction.
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// No configuration file was found during discovery.
    #[error("no tailwind config file found in {}", .0.display())]
    NotFound(PathBuf),
}

impl ConfigError {
    /// The validation reason, if this is an `InvalidConfig` error.
    pub fn invalid_reason(&self) -> Option<&InvalidConfigReason> {
        match self {
            ConfigError::InvalidConfig(reason) => Some(reason),
            _ => None,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
