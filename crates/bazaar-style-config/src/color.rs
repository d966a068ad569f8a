//! Theme color values and the palette extension.
//!
//! Color values are validated for syntax only and otherwise kept exactly as
//! written, so `#EC4899` stays `#EC4899` through a load/save cycle.
//!
//! Accepted forms:
//!
//! - hex: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - functional: `rgb()`, `rgba()`, `hsl()`, `hsla()` with comma or space
//!   separated components and an optional `/ alpha`
//! - keywords: `transparent`, `currentColor`, `inherit`

use crate::error::InvalidConfigReason;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Palette keys the build tool ships in its default theme.
///
/// An extension color with one of these names replaces the whole default
/// family (e.g. `pink-50` .. `pink-950` disappear behind a flat `pink`).
pub const RESERVED_PALETTE_KEYS: &[&str] = &[
    "inherit",
    "current",
    "transparent",
    "black",
    "white",
    "slate",
    "gray",
    "zinc",
    "neutral",
    "stone",
    "red",
    "orange",
    "amber",
    "yellow",
    "lime",
    "green",
    "emerald",
    "teal",
    "cyan",
    "sky",
    "blue",
    "indigo",
    "violet",
    "purple",
    "fuchsia",
    "pink",
    "rose",
];

const COLOR_KEYWORDS: &[&str] = &["transparent", "currentcolor", "inherit"];
const COLOR_FUNCTIONS: &[&str] = &["rgb", "rgba", "hsl", "hsla"];
const COMPONENT_UNITS: &[&str] = &["%", "deg", "grad", "rad", "turn"];

/// Check whether `value` is a syntactically valid color.
pub fn is_valid_color(value: &str) -> bool {
    if value.is_empty() || value != value.trim() {
        return false;
    }

    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }

    let lower = value.to_ascii_lowercase();
    if COLOR_KEYWORDS.contains(&lower.as_str()) {
        return true;
    }

    is_valid_color_function(&lower)
}

fn is_valid_color_function(value: &str) -> bool {
    let Some(open) = value.find('(') else {
        return false;
    };
    let Some(args) = value[open + 1..].strip_suffix(')') else {
        return false;
    };
    if !COLOR_FUNCTIONS.contains(&value[..open].trim_end()) {
        return false;
    }

    let (main, alpha) = match args.split_once('/') {
        Some((main, alpha)) => (main, Some(alpha.trim())),
        None => (args, None),
    };

    let components: Vec<&str> = if main.contains(',') {
        main.split(',').map(str::trim).collect()
    } else {
        main.split_whitespace().collect()
    };

    let count_ok = match alpha {
        Some(_) => components.len() == 3,
        // Legacy syntax carries alpha as a fourth comma-separated argument
        None => components.len() == 3 || (components.len() == 4 && main.contains(',')),
    };

    count_ok
        && components.iter().all(|c| is_numeric_component(c))
        && alpha.map_or(true, is_numeric_component)
}

fn is_numeric_component(component: &str) -> bool {
    let number = COMPONENT_UNITS
        .iter()
        .find_map(|unit| component.strip_suffix(unit))
        .unwrap_or(component);

    match number.chars().next() {
        Some(c) if c.is_ascii_digit() || matches!(c, '.' | '+' | '-') => {
            number.parse::<f64>().is_ok_and(f64::is_finite)
        }
        _ => false,
    }
}

/// An 8-bit RGBA color decoded from a hex value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// A validated color value, preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct ColorValue(String);

impl ColorValue {
    /// Validate and wrap a color value. Returns `None` for malformed input.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        is_valid_color(&value).then_some(Self(value))
    }

    pub(crate) fn from_static(value: &'static str) -> Self {
        debug_assert!(is_valid_color(value), "invalid built-in color {value}");
        Self(value.to_string())
    }

    /// The value exactly as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode hex colors. Functional and keyword colors return `None`.
    pub fn to_rgba(&self) -> Option<Rgba> {
        let hex = self.0.strip_prefix('#')?;
        let digits: Vec<u8> = hex
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect::<Option<_>>()?;

        let channels: Vec<u8> = match digits.len() {
            3 | 4 => digits.iter().map(|d| d * 17).collect(),
            6 | 8 => digits.chunks(2).map(|pair| pair[0] * 16 + pair[1]).collect(),
            _ => return None,
        };

        Some(Rgba {
            r: channels[0],
            g: channels[1],
            b: channels[2],
            a: channels.get(3).copied().unwrap_or(255),
        })
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ColorValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        ColorValue::new(value.clone())
            .ok_or_else(|| serde::de::Error::custom(format!("malformed color value '{value}'")))
    }
}

/// Named colors layered on top of the build tool's default palette.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct ColorPalette(BTreeMap<String, ColorValue>);

impl ColorPalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a palette from unvalidated name/value pairs.
    ///
    /// Fails on the first entry with an empty name or malformed value.
    pub fn from_raw<I, K, V>(entries: I) -> Result<Self, InvalidConfigReason>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut palette = Self::new();
        for (name, value) in entries {
            palette.insert(name, value)?;
        }
        Ok(palette)
    }

    /// Add or replace a color.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), InvalidConfigReason> {
        let name = name.into();
        let value = value.into();

        if name.trim().is_empty() {
            return Err(InvalidConfigReason::MalformedColor { name, value });
        }
        match ColorValue::new(value.clone()) {
            Some(color) => {
                self.0.insert(name, color);
                Ok(())
            }
            None => Err(InvalidConfigReason::MalformedColor { name, value }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ColorValue> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names that shadow a default palette family of the build tool.
    pub fn reserved_collisions(&self) -> Vec<&str> {
        self.0
            .keys()
            .map(String::as_str)
            .filter(|name| RESERVED_PALETTE_KEYS.contains(name))
            .collect()
    }
}

impl<K: Into<String>> FromIterator<(K, ColorValue)> for ColorPalette {
    fn from_iter<I: IntoIterator<Item = (K, ColorValue)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, value)| (name.into(), value)).collect())
    }
}

impl<'de> Deserialize<'de> for ColorPalette {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
        ColorPalette::from_raw(raw).map_err(serde::de::Error::custom)
    }
}
