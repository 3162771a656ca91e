//! Theme engine configuration (`tint.toml`)

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::css::DarkModeMix;
use crate::mode::ThemeMode;
use crate::themes::ThemeName;
use crate::ConfigError;

/// Defaults, storage keys and blend amounts for a [`ThemeController`](crate::ThemeController).
///
/// Every field is optional in TOML:
///
/// ```toml
/// default_theme = "cool"
/// style_element_id = "app-theme"
///
/// [dark_mix]
/// background = 0.2
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Theme used when nothing valid is persisted.
    pub default_theme: ThemeName,
    /// Mode used when nothing valid is persisted.
    pub default_mode: ThemeMode,
    /// Storage key holding the mode id.
    pub mode_key: String,
    /// Storage key holding the theme id.
    pub theme_key: String,
    /// Id of the injected style element.
    pub style_element_id: String,
    pub dark_mix: DarkModeMix,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_theme: ThemeName::Warm,
            default_mode: ThemeMode::System,
            mode_key: "theme".to_string(),
            theme_key: "theme-color".to_string(),
            style_element_id: "theme-styles".to_string(),
            dark_mix: DarkModeMix::default(),
        }
    }
}

impl ThemeConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: ThemeConfig = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("mode_key", &self.mode_key),
            ("theme_key", &self.theme_key),
            ("style_element_id", &self.style_element_id),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField { field });
            }
        }
        self.dark_mix.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_yields_defaults() {
        let config = ThemeConfig::from_toml_str("").unwrap();
        assert_eq!(config, ThemeConfig::default());
        assert_eq!(config.mode_key, "theme");
        assert_eq!(config.theme_key, "theme-color");
        assert_eq!(config.style_element_id, "theme-styles");
    }

    #[test]
    fn partial_document_overrides_fields() {
        let config = ThemeConfig::from_toml_str(
            r#"
default_theme = "cool"
default_mode = "dark"

[dark_mix]
background = 0.2
"#,
        )
        .unwrap();

        assert_eq!(config.default_theme, ThemeName::Cool);
        assert_eq!(config.default_mode, ThemeMode::Dark);
        assert_eq!(config.dark_mix.background, 0.2);
        assert_eq!(config.dark_mix.shade, DarkModeMix::default().shade);
    }

    #[test]
    fn rejects_unknown_theme_and_bad_mix() {
        assert!(matches!(
            ThemeConfig::from_toml_str("default_theme = \"midnight\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            ThemeConfig::from_toml_str("[dark_mix]\nborder = 2.0"),
            Err(ConfigError::InvalidMix { .. })
        ));
        assert!(matches!(
            ThemeConfig::from_toml_str("style_element_id = \"\""),
            Err(ConfigError::EmptyField {
                field: "style_element_id"
            })
        ));
    }

    #[test]
    fn toml_round_trip() {
        let config = ThemeConfig {
            default_theme: ThemeName::Green,
            ..ThemeConfig::default()
        };
        let src = config.to_toml().unwrap();
        assert_eq!(ThemeConfig::from_toml_str(&src).unwrap(), config);
    }
}
