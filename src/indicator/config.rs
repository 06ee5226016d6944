//! Indicator style configuration
//!
//! Handles defaults, the style keys and loading a style from disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

/// Horizontal placement of the dot row inside the measured width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[serde(alias = "left")]
    Start,
    #[serde(alias = "right")]
    End,
    #[default]
    Center,
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Alignment::Start => write!(f, "start"),
            Alignment::End => write!(f, "end"),
            Alignment::Center => write!(f, "center"),
        }
    }
}

/// Space reserved around the dot row
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Insets {
    pub fn all(value: f32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// A packed `0xAARRGGBB` color, written as `#rrggbb` or `#aarrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorColor(pub u32);

impl IndicatorColor {
    /// Opaque color from a `0xRRGGBB` value
    pub const fn rgb(rgb: u32) -> Self {
        Self(0xff00_0000 | (rgb & 0x00ff_ffff))
    }

    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Parse `#rrggbb` / `#aarrggbb` (the `#` is optional)
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let hex = text.strip_prefix('#').unwrap_or(text);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(hex, 16).ok()?;
        match hex.len() {
            6 => Some(Self::rgb(value)),
            8 => Some(Self(value)),
            _ => None,
        }
    }
}

impl std::fmt::Display for IndicatorColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.alpha() == 0xff {
            write!(f, "#{:06x}", self.0 & 0x00ff_ffff)
        } else {
            write!(f, "#{:08x}", self.0)
        }
    }
}

impl From<IndicatorColor> for iced::Color {
    fn from(color: IndicatorColor) -> Self {
        iced::Color::from_rgba8(
            color.red(),
            color.green(),
            color.blue(),
            f32::from(color.alpha()) / 255.0,
        )
    }
}

impl<'de> Deserialize<'de> for IndicatorColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        IndicatorColor::parse(&text)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid color '{}'", text)))
    }
}

/// Default dot height
pub const DEFAULT_HEIGHT: f32 = 4.0;
/// Default dot width
pub const DEFAULT_WIDTH: f32 = 20.0;
/// Default gap between two dots
pub const DEFAULT_INTERVAL: f32 = 15.0;
pub const DEFAULT_ACTIVE_COLOR: IndicatorColor = IndicatorColor::rgb(0xff5c5f);
pub const DEFAULT_INACTIVE_COLOR: IndicatorColor = IndicatorColor::rgb(0xd5d5d5);

/// Indicator style
///
/// Field names on disk follow the style attribute names
/// (`indicator_height`, `indicator_activeColor`, `gravity`, ...).
/// Missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    #[serde(rename = "indicator_height")]
    pub dot_height: f32,
    #[serde(rename = "indicator_width")]
    pub dot_width: f32,
    #[serde(rename = "indicator_interval")]
    pub gap_interval: f32,
    #[serde(rename = "indicator_radiusX")]
    pub radius_x: f32,
    #[serde(rename = "indicator_radiusY")]
    pub radius_y: f32,
    #[serde(rename = "indicator_activeColor")]
    pub active_color: IndicatorColor,
    #[serde(rename = "indicator_inactiveColor")]
    pub inactive_color: IndicatorColor,
    #[serde(rename = "gravity")]
    pub alignment: Alignment,
    pub padding: Insets,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            dot_height: DEFAULT_HEIGHT,
            dot_width: DEFAULT_WIDTH,
            gap_interval: DEFAULT_INTERVAL,
            radius_x: 0.0,
            radius_y: 0.0,
            active_color: DEFAULT_ACTIVE_COLOR,
            inactive_color: DEFAULT_INACTIVE_COLOR,
            alignment: Alignment::default(),
            padding: Insets::default(),
        }
    }
}

impl IndicatorConfig {
    pub fn dot_size(mut self, width: f32, height: f32) -> Self {
        self.dot_width = width;
        self.dot_height = height;
        self
    }

    pub fn interval(mut self, interval: f32) -> Self {
        self.gap_interval = interval;
        self
    }

    pub fn radius(mut self, radius_x: f32, radius_y: f32) -> Self {
        self.radius_x = radius_x;
        self.radius_y = radius_y;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Get the style file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "stick-indicator", "StickIndicator")
            .map(|dirs| dirs.config_dir().join("indicator.json"))
    }

    /// Load the style file, or return defaults if it is missing or broken
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    "Failed to load indicator style from {}: {}, using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Load a style from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Errors that can occur while reading a style file
#[derive(Debug, Clone)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = IndicatorConfig::default();
        assert_eq!(config.dot_height, 4.0);
        assert_eq!(config.dot_width, 20.0);
        assert_eq!(config.gap_interval, 15.0);
        assert_eq!(config.alignment, Alignment::Center);
        assert_eq!(config.active_color.to_string(), "#ff5c5f");
        assert_eq!(config.inactive_color.to_string(), "#d5d5d5");
    }

    #[test]
    fn test_style_keys_override_defaults() {
        let json = r##"{
            "indicator_height": 6,
            "indicator_radiusX": 3,
            "indicator_activeColor": "#80112233",
            "gravity": "left"
        }"##;
        let config: IndicatorConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.dot_height, 6.0);
        assert_eq!(config.radius_x, 3.0);
        assert_eq!(config.active_color, IndicatorColor(0x8011_2233));
        assert_eq!(config.alignment, Alignment::Start);
        // Untouched keys keep their defaults
        assert_eq!(config.dot_width, DEFAULT_WIDTH);
        assert_eq!(config.inactive_color, DEFAULT_INACTIVE_COLOR);
    }

    #[test]
    fn test_gravity_aliases() {
        let end: Alignment = serde_json::from_str("\"right\"").unwrap();
        assert_eq!(end, Alignment::End);
        let center: Alignment = serde_json::from_str("\"center\"").unwrap();
        assert_eq!(center, Alignment::Center);
    }

    #[test]
    fn test_invalid_color_rejected() {
        assert!(IndicatorColor::parse("#12345").is_none());
        assert!(IndicatorColor::parse("nothex").is_none());
        assert!(IndicatorColor::parse("##ff5c5f").is_none());
        assert!(IndicatorColor::parse("#+12345").is_none());
        assert!(IndicatorColor::parse("#-12345").is_none());
        assert_eq!(
            IndicatorColor::parse(" ff5c5f "),
            Some(IndicatorColor::rgb(0xff5c5f))
        );
        let result: Result<IndicatorConfig, _> =
            serde_json::from_str(r#"{"indicator_inactiveColor": "blue"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_color_to_iced() {
        let color: iced::Color = IndicatorColor::rgb(0xff0000).into();
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("stick-indicator-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("indicator.json");
        std::fs::write(
            &path,
            r#"{"gravity": "end", "indicator_radiusY": 2, "padding": {"left": 4}}"#,
        )
        .unwrap();

        let loaded = IndicatorConfig::load_from_file(&path).unwrap();
        let expected = IndicatorConfig::default()
            .alignment(Alignment::End)
            .radius(0.0, 2.0)
            .padding(Insets {
                left: 4.0,
                ..Insets::default()
            });
        assert_eq!(loaded, expected);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_broken_file_is_parse_error() {
        let dir = std::env::temp_dir().join(format!(
            "stick-indicator-broken-test-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("indicator.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = IndicatorConfig::load_from_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = IndicatorConfig::load_from_file(Path::new("/nonexistent/indicator.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
