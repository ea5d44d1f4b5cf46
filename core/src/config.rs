use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

use crate::{ConfigError, DisplayConfig, Gradient, Rgb};

/// Display options as they appear in a config file. Every key is optional,
/// and a value of the wrong JSON type is treated as missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawDisplayConfig {
    #[serde(deserialize_with = "lenient_string")]
    pub label: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub sublabel: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub color_start: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub color_mid: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub color_end: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(value) => Ok(Some(value)),
        Value::Null => Ok(None),
        other => {
            warn!(value = %other, "ignoring non-string display option");
            Ok(None)
        }
    }
}

impl DisplayConfig {
    /// Fill missing or unparsable fields with defaults.
    pub fn from_raw(raw: RawDisplayConfig) -> Self {
        let defaults = DisplayConfig::default();
        let RawDisplayConfig {
            label,
            sublabel,
            color_start,
            color_mid,
            color_end,
        } = raw;

        Self {
            label: label.unwrap_or(defaults.label),
            sublabel: sublabel.unwrap_or(defaults.sublabel),
            gradient: Gradient {
                start: color_or("colorStart", color_start, defaults.gradient.start),
                mid: color_or("colorMid", color_mid, defaults.gradient.mid),
                end: color_or("colorEnd", color_end, defaults.gradient.end),
            },
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: RawDisplayConfig = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

fn color_or(key: &str, raw: Option<String>, fallback: Rgb) -> Rgb {
    let Some(raw) = raw else {
        return fallback;
    };
    match raw.parse::<Rgb>() {
        Ok(color) => color,
        Err(err) => {
            warn!(key, %err, %fallback, "falling back to default color");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = DisplayConfig::from_json_str("{}").unwrap();
        assert_eq!(config, DisplayConfig::default());
    }

    #[test]
    fn camel_case_keys_are_honored() {
        let config = DisplayConfig::from_json_str(
            r##"{
                "label": "Glow",
                "sublabel": "This week",
                "colorStart": "#000000",
                "colorMid": "#fff",
                "colorEnd": "10b981"
            }"##,
        )
        .unwrap();

        assert_eq!(config.label, "Glow");
        assert_eq!(config.sublabel, "This week");
        assert_eq!(config.gradient.start, Rgb(0x000000));
        assert_eq!(config.gradient.mid, Rgb(0xffffff));
        assert_eq!(config.gradient.end, Rgb(0x10b981));
    }

    #[test]
    fn invalid_color_falls_back_per_field() {
        let config =
            DisplayConfig::from_json_str(r##"{"colorStart": "teal", "colorEnd": "#12345"}"##)
                .unwrap();
        let defaults = Gradient::default();

        assert_eq!(config.gradient.start, defaults.start);
        assert_eq!(config.gradient.mid, defaults.mid);
        assert_eq!(config.gradient.end, defaults.end);
    }

    #[test]
    fn wrongly_typed_fields_fall_back_per_field() {
        let config = DisplayConfig::from_json_str(
            r##"{"colorStart": 123, "label": "X", "sublabel": ["a"], "colorEnd": "#000"}"##,
        )
        .unwrap();
        let defaults = DisplayConfig::default();

        assert_eq!(config.label, "X");
        assert_eq!(config.sublabel, defaults.sublabel);
        assert_eq!(config.gradient.start, defaults.gradient.start);
        assert_eq!(config.gradient.end, Rgb(0x000000));
    }

    #[test]
    fn null_fields_use_defaults() {
        let config = DisplayConfig::from_json_str(r#"{"label": null}"#).unwrap();
        assert_eq!(config, DisplayConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = DisplayConfig::from_json_str("{ label: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let path = std::env::temp_dir().join("aura-missing-display-config.json");
        let err = DisplayConfig::load(&path).unwrap_err();
        match err {
            ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
