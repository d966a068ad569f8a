//! Dark-mode activation strategy

use crate::error::InvalidConfigReason;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How dark-variant utilities are switched on in generated CSS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DarkModeStrategy {
    /// A `.dark` marker class on a root element (usually `<html>`).
    Class,
    /// The `prefers-color-scheme` media query reported by the OS.
    #[default]
    Media,
}

impl DarkModeStrategy {
    /// Wire name of the strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            DarkModeStrategy::Class => "class",
            DarkModeStrategy::Media => "media",
        }
    }

    /// Selector or at-rule that gates dark-variant rules.
    pub fn activation_selector(&self) -> &'static str {
        match self {
            DarkModeStrategy::Class => ".dark",
            DarkModeStrategy::Media => "@media (prefers-color-scheme: dark)",
        }
    }
}

impl fmt::Display for DarkModeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DarkModeStrategy {
    type Err = InvalidConfigReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "class" => Ok(DarkModeStrategy::Class),
            "media" => Ok(DarkModeStrategy::Media),
            other => Err(InvalidConfigReason::UnknownDarkMode(other.to_string())),
        }
    }
}
