//! File formats for the build configuration.
//!
//! TOML, JSON and YAML can be read and written. JavaScript is an export-only
//! target producing the `tailwind.config.js` object literal the build tool
//! discovers on its own.

use crate::config::{BuildConfig, RawBuildConfig};
use crate::error::{ConfigError, ConfigResult};
use crate::plugins::PluginRef;
use std::fmt;
use std::path::Path;

/// Supported configuration formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
    /// CommonJS `module.exports = { ... }`; write-only.
    JavaScript,
}

impl ConfigFormat {
    pub fn name(&self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::JavaScript => "javascript",
        }
    }

    /// Canonical file extension (without the dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::JavaScript => "js",
        }
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "toml" => Some(ConfigFormat::Toml),
            "json" => Some(ConfigFormat::Json),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "js" | "cjs" => Some(ConfigFormat::JavaScript),
            _ => None,
        }
    }

    /// Pick the format from a file's extension.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| {
                ConfigError::UnsupportedFormat(format!(
                    "cannot infer format from '{}'",
                    path.display()
                ))
            })
    }

    /// Whether this build can read the format.
    pub fn is_readable(&self) -> bool {
        match self {
            ConfigFormat::Toml => cfg!(feature = "toml"),
            ConfigFormat::Json => true,
            ConfigFormat::Yaml => cfg!(feature = "yaml"),
            ConfigFormat::JavaScript => false,
        }
    }

    /// Parse text into the unvalidated on-disk shape.
    pub fn parse(&self, content: &str) -> ConfigResult<RawBuildConfig> {
        let format = self.name();
        let parse_error = |message: String| ConfigError::Parse { format, message };

        match self {
            #[cfg(feature = "toml")]
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string())),
            ConfigFormat::Json => {
                serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))
            }
            #[cfg(feature = "yaml")]
            ConfigFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))
            }
            ConfigFormat::JavaScript => Err(ConfigError::UnsupportedFormat(
                "javascript configs can be exported but not loaded".to_string(),
            )),
            #[allow(unreachable_patterns)]
            _ => Err(disabled(*self)),
        }
    }

    /// Render a validated configuration.
    pub fn render(&self, config: &BuildConfig) -> ConfigResult<String> {
        let format = self.name();
        let serialize_error = |message: String| ConfigError::Serialize { format, message };

        match self {
            #[cfg(feature = "toml")]
            ConfigFormat::Toml => {
                toml::to_string_pretty(config).map_err(|e| serialize_error(e.to_string()))
            }
            ConfigFormat::Json => serde_json::to_string_pretty(config)
                .map(|json| json + "\n")
                .map_err(|e| serialize_error(e.to_string())),
            #[cfg(feature = "yaml")]
            ConfigFormat::Yaml => {
                serde_yaml::to_string(config).map_err(|e| serialize_error(e.to_string()))
            }
            ConfigFormat::JavaScript => render_javascript(config),
            #[allow(unreachable_patterns)]
            _ => Err(disabled(*self)),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[allow(dead_code)]
fn disabled(format: ConfigFormat) -> ConfigError {
    ConfigError::UnsupportedFormat(format!(
        "{} support is disabled in this build",
        format.name()
    ))
}

fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

fn js_plugin(plugin: &PluginRef) -> ConfigResult<String> {
    let require = format!("require({})", js_string(plugin.name()));
    match plugin.options() {
        None => Ok(require),
        Some(options) => {
            let options = serde_json::to_string(options).map_err(|e| ConfigError::Serialize {
                format: "javascript",
                message: e.to_string(),
            })?;
            Ok(format!("{require}({options})"))
        }
    }
}

fn render_javascript(config: &BuildConfig) -> ConfigResult<String> {
    let mut lines = vec![
        "/** @type {import('tailwindcss').Config} */".to_string(),
        "module.exports = {".to_string(),
        format!("  darkMode: {},", js_string(config.dark_mode().as_str())),
        "  content: [".to_string(),
    ];

    for pattern in config.content().patterns() {
        lines.push(format!("    {},", js_string(pattern)));
    }
    lines.push("  ],".to_string());

    lines.push("  theme: {".to_string());
    lines.push("    extend: {".to_string());
    lines.push("      colors: {".to_string());
    for (name, value) in config.colors().iter() {
        lines.push(format!(
            "        {}: {},",
            js_string(name),
            js_string(value.as_str())
        ));
    }
    lines.push("      },".to_string());
    lines.push("    },".to_string());
    lines.push("  },".to_string());

    if config.plugins().is_empty() {
        lines.push("  plugins: [],".to_string());
    } else {
        lines.push("  plugins: [".to_string());
        for plugin in config.plugins() {
            lines.push(format!("    {},", js_plugin(plugin)?));
        }
        lines.push("  ],".to_string());
    }

    lines.push("};".to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn infers_format_from_extension() {
        let cases = [
            ("tailwind.config.toml", ConfigFormat::Toml),
            ("tailwind.config.json", ConfigFormat::Json),
            ("tailwind.config.yaml", ConfigFormat::Yaml),
            ("tailwind.config.YML", ConfigFormat::Yaml),
            ("tailwind.config.js", ConfigFormat::JavaScript),
        ];
        for (file, expected) in cases {
            assert_eq!(
                ConfigFormat::from_path(&PathBuf::from(file)).unwrap(),
                expected
            );
        }

        assert!(matches!(
            ConfigFormat::from_path(&PathBuf::from("tailwind.config")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn javascript_is_write_only() {
        assert!(!ConfigFormat::JavaScript.is_readable());
        assert!(matches!(
            ConfigFormat::JavaScript.parse("module.exports = {}"),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn renders_stylebazaar_javascript() {
        let js = ConfigFormat::JavaScript
            .render(&BuildConfig::stylebazaar())
            .unwrap();

        let expected = r##"/** @type {import('tailwindcss').Config} */
module.exports = {
  darkMode: "class",
  content: [
    "./templates/**/*.html",
    "./static/**/*.js",
  ],
  theme: {
    extend: {
      colors: {
        "primary": "#ec4899",
        "primary-hover": "#db2777",
      },
    },
  },
  plugins: [],
};
"##;
        assert_eq!(js, expected);
    }

    #[test]
    fn renders_plugins_as_requires() {
        let mut options = std::collections::BTreeMap::new();
        options.insert("strategy".to_string(), serde_json::json!("class"));

        let config = BuildConfig::builder()
            .content("./templates/**/*.html")
            .plugin(PluginRef::Name("@tailwindcss/typography".into()))
            .plugin(PluginRef::Configured {
                name: "@tailwindcss/forms".into(),
                options,
            })
            .build()
            .unwrap();

        let js = ConfigFormat::JavaScript.render(&config).unwrap();
        assert!(js.contains(r#"    require("@tailwindcss/typography"),"#));
        assert!(js.contains(r#"    require("@tailwindcss/forms")({"strategy":"class"}),"#));
    }

    #[test]
    fn json_parse_reports_format() {
        let err = ConfigFormat::Json.parse("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { format: "json", .. }));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn toml_render_uses_wire_names() {
        let toml = ConfigFormat::Toml
            .render(&BuildConfig::stylebazaar())
            .unwrap();
        assert!(toml.contains("darkMode = \"class\""));
        assert!(toml.contains("./templates/**/*.html"));
        assert!(toml.contains("primary-hover"));
    }
}
