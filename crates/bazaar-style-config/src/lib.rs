//! # Bazaar Style Configuration
//!
//! Typed loading, validation and export of the stylebazaar Tailwind build
//! configuration: which files the build tool scans for class names, how dark
//! mode is activated, and the extra theme colors.
//!
//! ## Features
//!
//! - Strongly typed record with validation at load time
//! - TOML, JSON and YAML input; JavaScript (`tailwind.config.js`) export
//! - Content glob matching for coverage checks
//! - JSON schema of the record
//! - Test utilities behind the `test-utils` feature
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bazaar_style_config::{ConfigFormat, ConfigLoader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConfigLoader::load_from_file("tailwind.config.toml").await?;
//!     let js = ConfigFormat::JavaScript.render(&config)?;
//!     println!("{js}");
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

mod color;
mod config;
mod content;
mod dark_mode;
mod error;
mod format;
mod loader;
mod plugins;

#[cfg(feature = "test-utils")]
mod test_utils;

pub use color::*;
pub use config::*;
pub use content::*;
pub use dark_mode::*;
pub use error::*;
pub use format::*;
pub use loader::*;
pub use plugins::*;

#[cfg(feature = "test-utils")]
pub use test_utils::*;

/// JSON schema describing the on-disk record.
pub fn json_schema() -> schemars::Schema {
    schemars::schema_for!(BuildConfig)
}
