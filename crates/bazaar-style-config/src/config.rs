//! The build configuration record.
//!
//! A [`BuildConfig`] can only be obtained through validation (loading, the
//! builder, or deserialization), so holding one means the content set is
//! non-empty, the dark-mode strategy is known and every color parses.

use crate::color::{ColorPalette, ColorValue};
use crate::content::ContentGlobs;
use crate::dark_mode::DarkModeStrategy;
use crate::error::{ConfigResult, InvalidConfigReason};
use crate::plugins::PluginRef;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Configuration as written on disk, before any validation.
///
/// Every field is optional, and scalar values are kept untyped, so that a
/// missing key or a value of the wrong type is reported as a validation
/// failure rather than a parse error. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBuildConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<Value>,
    #[serde(default)]
    pub content: Vec<String>,
    #[serde(default)]
    pub plugins: Vec<PluginRef>,
    #[serde(default)]
    pub theme: RawTheme,
}

/// `theme` section of a [`RawBuildConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTheme {
    #[serde(default)]
    pub extend: RawThemeExtension,
}

/// `theme.extend` section of a [`RawBuildConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawThemeExtension {
    #[serde(default)]
    pub colors: BTreeMap<String, Value>,
}

/// Additive theme customization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ThemeExtension {
    /// Named colors added to the default palette.
    pub colors: ColorPalette,
}

/// `theme` section. Only `extend` is supported; replacing the base theme is
/// left to the build tool's own config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ThemeConfig {
    pub extend: ThemeExtension,
}

/// A validated build configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    /// Defaults to `media` when absent.
    #[schemars(default)]
    dark_mode: DarkModeStrategy,
    /// Files scanned for class names; at least one include pattern.
    #[schemars(schema_with = "content_schema")]
    content: ContentGlobs,
    #[schemars(default)]
    plugins: Vec<PluginRef>,
    #[schemars(default)]
    theme: ThemeConfig,
}

/// `content` must be a non-empty list of glob strings.
fn content_schema(_gen: &mut schemars::SchemaGenerator) -> schemars::Schema {
    let mut map = serde_json::Map::new();
    map.insert("type".to_owned(), serde_json::json!("array"));
    map.insert("items".to_owned(), serde_json::json!({ "type": "string" }));
    map.insert("minItems".to_owned(), serde_json::json!(1));
    map.into()
}

/// Non-fatal findings from [`BuildConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// An extension color shadows a default palette family.
    ReservedColorName(String),
    /// The same content pattern is listed more than once.
    DuplicateContentGlob(String),
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::ReservedColorName(name) => write!(
                f,
                "color '{name}' overrides the build tool's default '{name}' palette"
            ),
            ValidationWarning::DuplicateContentGlob(pattern) => {
                write!(f, "content pattern '{pattern}' is listed more than once")
            }
        }
    }
}

/// Outcome of a successful validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// No warnings were raised.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

impl BuildConfig {
    /// Convert and validate a raw configuration.
    pub fn from_raw(raw: RawBuildConfig) -> ConfigResult<Self> {
        let dark_mode = match raw.dark_mode {
            Some(Value::String(value)) => value.parse::<DarkModeStrategy>()?,
            Some(other) => {
                return Err(InvalidConfigReason::UnknownDarkMode(other.to_string()).into());
            }
            None => DarkModeStrategy::default(),
        };

        let colors = raw
            .theme
            .extend
            .colors
            .into_iter()
            .map(|(name, value)| match value {
                Value::String(value) => Ok((name, value)),
                other => Err(InvalidConfigReason::MalformedColor {
                    name,
                    value: other.to_string(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let config = Self {
            dark_mode,
            content: ContentGlobs::new(raw.content),
            plugins: raw.plugins,
            theme: ThemeConfig {
                extend: ThemeExtension {
                    colors: ColorPalette::from_raw(colors)?,
                },
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Back to the on-disk shape.
    pub fn to_raw(&self) -> RawBuildConfig {
        RawBuildConfig {
            dark_mode: Some(Value::from(self.dark_mode.as_str())),
            content: self.content.patterns().to_vec(),
            plugins: self.plugins.clone(),
            theme: RawTheme {
                extend: RawThemeExtension {
                    colors: self
                        .colors()
                        .iter()
                        .map(|(name, value)| (name.to_string(), Value::from(value.as_str())))
                        .collect(),
                },
            },
        }
    }

    /// Check every invariant of the record.
    ///
    /// Errors are fatal to the build; warnings are returned for the caller to
    /// surface.
    pub fn validate(&self) -> ConfigResult<ValidationReport> {
        let duplicates = self.content.validate()?;

        for (name, value) in self.colors().iter() {
            if name.trim().is_empty() {
                return Err(InvalidConfigReason::MalformedColor {
                    name: name.to_string(),
                    value: value.as_str().to_string(),
                }
                .into());
            }
        }

        for plugin in &self.plugins {
            plugin.validate()?;
        }

        let mut report = ValidationReport::default();
        report.warnings.extend(
            duplicates
                .into_iter()
                .map(ValidationWarning::DuplicateContentGlob),
        );
        report.warnings.extend(
            self.colors()
                .reserved_collisions()
                .into_iter()
                .map(|name| ValidationWarning::ReservedColorName(name.to_string())),
        );

        Ok(report)
    }

    /// The storefront's styling configuration.
    pub fn stylebazaar() -> Self {
        Self {
            dark_mode: DarkModeStrategy::Class,
            content: ContentGlobs::new(["./templates/**/*.html", "./static/**/*.js"]),
            plugins: Vec::new(),
            theme: ThemeConfig {
                extend: ThemeExtension {
                    colors: [
                        ("primary", ColorValue::from_static("#ec4899")),
                        ("primary-hover", ColorValue::from_static("#db2777")),
                    ]
                    .into_iter()
                    .collect(),
                },
            },
        }
    }

    pub fn builder() -> BuildConfigBuilder {
        BuildConfigBuilder::default()
    }

    pub fn dark_mode(&self) -> DarkModeStrategy {
        self.dark_mode
    }

    pub fn content(&self) -> &ContentGlobs {
        &self.content
    }

    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    /// Shortcut for `theme.extend.colors`.
    pub fn colors(&self) -> &ColorPalette {
        &self.theme.extend.colors
    }

    pub fn plugins(&self) -> &[PluginRef] {
        &self.plugins
    }
}

impl<'de> Deserialize<'de> for BuildConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawBuildConfig::deserialize(deserializer)?;
        BuildConfig::from_raw(raw).map_err(serde::de::Error::custom)
    }
}

/// Builder for [`BuildConfig`]. Validation happens in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct BuildConfigBuilder {
    raw: RawBuildConfig,
}

impl BuildConfigBuilder {
    pub fn dark_mode(mut self, strategy: DarkModeStrategy) -> Self {
        self.raw.dark_mode = Some(Value::from(strategy.as_str()));
        self
    }

    /// Append a content glob.
    pub fn content(mut self, pattern: impl Into<String>) -> Self {
        self.raw.content.push(pattern.into());
        self
    }

    /// Add or replace an extension color.
    pub fn color(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.raw
            .theme
            .extend
            .colors
            .insert(name.into(), Value::String(value.into()));
        self
    }

    pub fn plugin(mut self, plugin: PluginRef) -> Self {
        self.raw.plugins.push(plugin);
        self
    }

    pub fn build(self) -> ConfigResult<BuildConfig> {
        BuildConfig::from_raw(self.raw)
    }
}
