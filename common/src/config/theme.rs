//! Runtime theme configuration.
//!
//! A theme is three color strings plus a theme name. Values come from the
//! shared store when the app has written them, otherwise from a
//! [`ThemeConfig`], which is either the built-in default or loaded from a
//! YAML file.
//!
//! Example YAML:
//!
//! ```yaml
//! text_color: "#FFFFFF"
//! color_start: "#6A11CB"
//! color_end: "#2575FC"
//! theme_name: gradient
//! ```
//!
//! Missing fields fall back to the built-in default. Colors stay strings here;
//! they are parsed at render time so a malformed value only costs the
//! decoration of that one update.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config::keys;
use crate::config_log;
use crate::error::ConfigError;
use crate::store::PreferenceStore;

/// Theme name that selects the flat bordered-block background.
pub const BRUTALIST_THEME: &str = "brutalist";

/// Fallback theme colors and style.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Text color; border color of the brutalist style.
    pub text_color: String,
    /// Gradient start; block color of the brutalist style.
    pub color_start: String,
    /// Gradient end.
    pub color_end: String,
    /// `"brutalist"` or anything else for the gradient style.
    pub theme_name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            text_color: "#FFFFFF".into(),
            color_start: "#6A11CB".into(),
            color_end: "#2575FC".into(),
            theme_name: "gradient".into(),
        }
    }
}

impl ThemeConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> { Ok(serde_yaml::from_str(yaml)?) }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let theme = Self::from_yaml_str(&yaml)?;
        config_log!(log::Level::Info, "Loaded theme '{}' from {}", theme.theme_name, path.display());
        Ok(theme)
    }

    /// Overlay the values stored by the app on top of this configuration.
    pub fn resolve<'a, S>(&'a self, store: &'a S) -> ResolvedTheme<'a>
    where
        S: PreferenceStore + ?Sized,
    {
        ResolvedTheme {
            text_color: store.string_or(keys::THEME_TEXT_COLOR, &self.text_color),
            color_start: store.string_or(keys::THEME_COLOR_START, &self.color_start),
            color_end: store.string_or(keys::THEME_COLOR_END, &self.color_end),
            style: BackgroundStyle::from_theme_name(store.string_or(keys::THEME_NAME, &self.theme_name)),
        }
    }
}

/// Theme values in effect for a single update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTheme<'a> {
    pub text_color: &'a str,
    pub color_start: &'a str,
    pub color_end: &'a str,
    pub style: BackgroundStyle,
}

/// How the decorated widget's background is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundStyle {
    /// Rounded rectangle filled with a diagonal gradient.
    #[default]
    Gradient,
    /// Text-colored border around a flat block.
    Brutalist,
}

impl BackgroundStyle {
    /// Only an exact `"brutalist"` selects the flat style.
    pub fn from_theme_name(name: &str) -> Self {
        if name == BRUTALIST_THEME { Self::Brutalist } else { Self::Gradient }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    #[test]
    fn test_style_from_theme_name() {
        assert_eq!(BackgroundStyle::from_theme_name("brutalist"), BackgroundStyle::Brutalist);
        assert_eq!(BackgroundStyle::from_theme_name("gradient"), BackgroundStyle::Gradient);
        assert_eq!(BackgroundStyle::from_theme_name("Brutalist"), BackgroundStyle::Gradient);
        assert_eq!(BackgroundStyle::from_theme_name(""), BackgroundStyle::Gradient);
    }

    #[test]
    fn test_resolve_without_store_values_uses_config() {
        let config = ThemeConfig::default();
        let store: HashMap<String, String> = HashMap::new();
        let theme = config.resolve(&store);
        assert_eq!(theme.text_color, "#FFFFFF");
        assert_eq!(theme.color_start, "#6A11CB");
        assert_eq!(theme.color_end, "#2575FC");
        assert_eq!(theme.style, BackgroundStyle::Gradient);
    }

    #[test]
    fn test_resolve_store_overrides_config() {
        let config = ThemeConfig::default();
        let store = HashMap::from([
            (keys::THEME_TEXT_COLOR.to_string(), "#000000".to_string()),
            (keys::THEME_NAME.to_string(), "brutalist".to_string()),
        ]);
        let theme = config.resolve(&store);
        assert_eq!(theme.text_color, "#000000");
        assert_eq!(theme.color_start, "#6A11CB");
        assert_eq!(theme.style, BackgroundStyle::Brutalist);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let theme = ThemeConfig::from_yaml_str("theme_name: brutalist\ncolor_start: \"#112233\"\n").unwrap();
        assert_eq!(theme.theme_name, "brutalist");
        assert_eq!(theme.color_start, "#112233");
        assert_eq!(theme.text_color, ThemeConfig::default().text_color);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(matches!(ThemeConfig::from_yaml_str("text_color: [1, 2"), Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "text_color: \"#FF0000\"\ncolor_end: navy").unwrap();
        let theme = ThemeConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(theme.text_color, "#FF0000");
        assert_eq!(theme.color_end, "navy");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ThemeConfig::from_yaml_file(dir.path().join("missing.yml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
