//! File-level loading tests
//!
//! Exercises the loader against real files in every readable format: round
//! trips, repeat loads, and the validation failures the build must stop on.

use bazaar_style_config::{
    BuildConfig, ConfigError, ConfigFormat, ConfigLoader, ConfigValidation, DarkModeStrategy,
    InvalidConfigReason, TempConfig, TestConfig,
};

const STYLEBAZAAR_TOML: &str = r##"
darkMode = "class"
content = [
    "./templates/**/*.html",
    "./static/**/*.js",
]
plugins = []

[theme.extend.colors]
primary = "#ec4899"
primary-hover = "#db2777"
"##;

const STYLEBAZAAR_YAML: &str = r##"
darkMode: class
content:
  - ./templates/**/*.html
  - ./static/**/*.js
theme:
  extend:
    colors:
      primary: "#ec4899"
      primary-hover: "#db2777"
plugins: []
"##;

fn invalid_reason(result: Result<BuildConfig, ConfigError>) -> InvalidConfigReason {
    match result {
        Err(ConfigError::InvalidConfig(reason)) => reason,
        other => panic!("expected InvalidConfig, got {:?}", other),
    }
}

#[test]
fn test_stylebazaar_toml_matches_preset() {
    let config = ConfigLoader::load_from_str(STYLEBAZAAR_TOML, ConfigFormat::Toml).unwrap();

    assert_eq!(config.dark_mode(), DarkModeStrategy::Class);
    assert_eq!(config.colors().get("primary").unwrap().as_str(), "#ec4899");
    assert_eq!(
        config.colors().get("primary-hover").unwrap().as_str(),
        "#db2777"
    );
    assert_eq!(config, BuildConfig::stylebazaar());
}

#[test]
fn test_stylebazaar_yaml_matches_preset() {
    let config = ConfigLoader::load_from_str(STYLEBAZAAR_YAML, ConfigFormat::Yaml).unwrap();
    assert_eq!(config, BuildConfig::stylebazaar());
}

#[test]
fn test_round_trip_every_readable_format() {
    for format in [ConfigFormat::Toml, ConfigFormat::Json, ConfigFormat::Yaml] {
        ConfigValidation::assert_round_trip(&TestConfig::minimal(), format);
        ConfigValidation::assert_round_trip(&TestConfig::stylebazaar(), format);
        ConfigValidation::assert_round_trip(&TestConfig::comprehensive(), format);
    }
}

#[test]
fn test_loading_twice_yields_equal_records() {
    let (_dir, path) = TempConfig::create_raw("tailwind.config.toml", STYLEBAZAAR_TOML);

    let first = ConfigLoader::load_from_file_sync(&path).unwrap();
    let second = ConfigLoader::load_from_file_sync(&path).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_async_and_sync_loads_agree() {
    let (_dir, path) = TempConfig::create(&TestConfig::comprehensive(), ConfigFormat::Yaml);

    let from_async = ConfigLoader::load_from_file(&path).await.unwrap();
    let from_sync = ConfigLoader::load_from_file_sync(&path).unwrap();

    assert_eq!(from_async, from_sync);
    assert_eq!(from_async, TestConfig::comprehensive());
}

#[test]
fn test_reload_sees_changes_on_disk() {
    let (_dir, path) = TempConfig::create_raw("tailwind.config.toml", STYLEBAZAAR_TOML);
    let before = ConfigLoader::load_from_file_sync(&path).unwrap();

    let edited = STYLEBAZAAR_TOML.replace("darkMode = \"class\"", "darkMode = \"media\"");
    std::fs::write(&path, edited).unwrap();
    let after = ConfigLoader::load_from_file_sync(&path).unwrap();

    assert_eq!(before.dark_mode(), DarkModeStrategy::Class);
    assert_eq!(after.dark_mode(), DarkModeStrategy::Media);
}

#[test]
fn test_empty_content_fails() {
    let toml = STYLEBAZAAR_TOML.replace(
        "content = [\n    \"./templates/**/*.html\",\n    \"./static/**/*.js\",\n]",
        "content = []",
    );
    assert!(toml.contains("content = []"));

    let reason = invalid_reason(ConfigLoader::load_from_str(&toml, ConfigFormat::Toml));
    assert_eq!(reason, InvalidConfigReason::EmptyContent);
}

#[test]
fn test_missing_content_key_fails() {
    let reason = invalid_reason(ConfigLoader::load_from_str(
        r#"darkMode = "class""#,
        ConfigFormat::Toml,
    ));
    assert_eq!(reason, InvalidConfigReason::EmptyContent);
}

#[test]
fn test_invalid_dark_mode_fails() {
    let toml = STYLEBAZAAR_TOML.replace("\"class\"", "\"invalid-value\"");

    let reason = invalid_reason(ConfigLoader::load_from_str(&toml, ConfigFormat::Toml));
    assert_eq!(
        reason,
        InvalidConfigReason::UnknownDarkMode("invalid-value".to_string())
    );
}

#[test]
fn test_malformed_color_fails() {
    let toml = STYLEBAZAAR_TOML.replace("\"#db2777\"", "\"not-a-color\"");

    let reason = invalid_reason(ConfigLoader::load_from_str(&toml, ConfigFormat::Toml));
    assert_eq!(
        reason,
        InvalidConfigReason::MalformedColor {
            name: "primary-hover".to_string(),
            value: "not-a-color".to_string(),
        }
    );
}

#[test]
fn test_non_string_dark_mode_fails_validation() {
    let toml = STYLEBAZAAR_TOML.replace("darkMode = \"class\"", "darkMode = false");

    let reason = invalid_reason(ConfigLoader::load_from_str(&toml, ConfigFormat::Toml));
    assert_eq!(
        reason,
        InvalidConfigReason::UnknownDarkMode("false".to_string())
    );
}

#[test]
fn test_non_string_color_fails_validation() {
    let toml = STYLEBAZAAR_TOML.replace("primary = \"#ec4899\"", "primary = 123");

    let reason = invalid_reason(ConfigLoader::load_from_str(&toml, ConfigFormat::Toml));
    assert_eq!(
        reason,
        InvalidConfigReason::MalformedColor {
            name: "primary".to_string(),
            value: "123".to_string(),
        }
    );
}

#[test]
fn test_non_string_values_in_json_fail_validation() {
    let reason = invalid_reason(ConfigLoader::load_from_str(
        r#"{ "darkMode": 1, "content": ["./templates/**/*.html"] }"#,
        ConfigFormat::Json,
    ));
    assert_eq!(reason, InvalidConfigReason::UnknownDarkMode("1".to_string()));

    let reason = invalid_reason(ConfigLoader::load_from_str(
        r#"{ "content": ["./a/*.html"], "theme": { "extend": { "colors": { "primary": [1, 2] } } } }"#,
        ConfigFormat::Json,
    ));
    assert_eq!(
        reason,
        InvalidConfigReason::MalformedColor {
            name: "primary".to_string(),
            value: "[1,2]".to_string(),
        }
    );
}

#[test]
fn test_null_plugin_option_fails_validation() {
    let json = r#"{
        "content": ["./templates/**/*.html"],
        "plugins": [{ "name": "@tailwindcss/forms", "options": { "strategy": null } }]
    }"#;

    let reason = invalid_reason(ConfigLoader::load_from_str(json, ConfigFormat::Json));
    assert_eq!(
        reason,
        InvalidConfigReason::NullPluginOption {
            plugin: "@tailwindcss/forms".to_string(),
            option: "strategy".to_string(),
        }
    );
}

#[test]
fn test_syntax_error_is_parse_error() {
    let err = ConfigLoader::load_from_str("darkMode = ", ConfigFormat::Toml).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { format: "toml", .. }));
}

#[test]
fn test_javascript_export_is_not_loadable() {
    let (_dir, path) = TempConfig::create(&TestConfig::stylebazaar(), ConfigFormat::JavaScript);

    let err = ConfigLoader::load_from_file_sync(&path).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
}

#[test]
fn test_schema_names_wire_fields() {
    let schema = serde_json::to_value(bazaar_style_config::json_schema()).unwrap();
    let properties = &schema["properties"];

    for key in ["darkMode", "content", "theme", "plugins"] {
        assert!(
            properties.get(key).is_some(),
            "schema is missing '{key}': {schema}"
        );
    }

    assert_eq!(schema["required"], serde_json::json!(["content"]));
    assert_eq!(properties["content"]["minItems"], 1);
    assert_eq!(properties["darkMode"]["default"], "media");
}

#[test]
fn test_schema_optional_fields_match_loader() {
    let config = ConfigLoader::load_from_str(
        r#"{ "content": ["./templates/**/*.html"] }"#,
        ConfigFormat::Json,
    )
    .unwrap();
    assert_eq!(config.dark_mode(), DarkModeStrategy::Media);
    assert!(config.plugins().is_empty());
    assert!(config.colors().is_empty());
}
