//! Plugin references.
//!
//! Plugins are an opaque extension point: entries are stored and written back
//! out, never loaded or executed.

use crate::error::InvalidConfigReason;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A plugin entry, either a bare package name or a name with options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum PluginRef {
    /// `"@tailwindcss/forms"`
    Name(String),
    /// `{ name = "@tailwindcss/forms", options = { strategy = "class" } }`
    Configured {
        name: String,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        options: BTreeMap<String, serde_json::Value>,
    },
}

impl PluginRef {
    pub fn name(&self) -> &str {
        match self {
            PluginRef::Name(name) => name,
            PluginRef::Configured { name, .. } => name,
        }
    }

    /// Options passed to the plugin factory, if any.
    pub fn options(&self) -> Option<&BTreeMap<String, serde_json::Value>> {
        match self {
            PluginRef::Name(_) => None,
            PluginRef::Configured { options, .. } if options.is_empty() => None,
            PluginRef::Configured { options, .. } => Some(options),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), InvalidConfigReason> {
        if self.name().trim().is_empty() {
            return Err(InvalidConfigReason::EmptyPluginName);
        }
        // TOML has no null
        if let Some((option, _)) = self
            .options()
            .into_iter()
            .flatten()
            .find(|(_, value)| contains_null(value))
        {
            return Err(InvalidConfigReason::NullPluginOption {
                plugin: self.name().to_string(),
                option: option.clone(),
            });
        }
        Ok(())
    }
}

fn contains_null(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::Array(items) => items.iter().any(contains_null),
        serde_json::Value::Object(map) => map.values().any(contains_null),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_both_shapes() {
        let plugins: Vec<PluginRef> = serde_json::from_value(json!([
            "@tailwindcss/typography",
            { "name": "@tailwindcss/forms", "options": { "strategy": "class" } }
        ]))
        .unwrap();

        assert_eq!(plugins[0], PluginRef::Name("@tailwindcss/typography".into()));
        assert_eq!(plugins[1].name(), "@tailwindcss/forms");
        assert_eq!(
            plugins[1].options().unwrap().get("strategy"),
            Some(&json!("class"))
        );
    }

    #[test]
    fn configured_without_options_has_none() {
        let plugin: PluginRef = serde_json::from_value(json!({ "name": "daisyui" })).unwrap();
        assert_eq!(plugin.name(), "daisyui");
        assert!(plugin.options().is_none());
    }

    #[test]
    fn null_options_are_invalid() {
        let plugin: PluginRef = serde_json::from_value(json!({
            "name": "@tailwindcss/forms",
            "options": { "strategy": "class", "extra": { "prefix": null } }
        }))
        .unwrap();

        assert_eq!(
            plugin.validate(),
            Err(InvalidConfigReason::NullPluginOption {
                plugin: "@tailwindcss/forms".into(),
                option: "extra".into(),
            })
        );
    }

    #[test]
    fn empty_name_is_invalid() {
        assert_eq!(
            PluginRef::Name(" ".into()).validate(),
            Err(InvalidConfigReason::EmptyPluginName)
        );
        assert!(PluginRef::Name("daisyui".into()).validate().is_ok());
    }
}
