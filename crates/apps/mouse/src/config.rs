//! Optional TOML settings
//!
//! Every field has a default, so running without a settings file, or with a
//! partial one, still yields the stock 800x600 window and 600x400 canvas.

use glam::Vec2;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use system::AppConfig;
use thiserror::Error;

/// Errors raised while loading a settings file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings loaded from a TOML file
///
/// Every field is optional; anything missing falls back to the built-in
/// defaults, so an empty file is valid.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MouseConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub canvas: CanvasConfig,
    /// Initial clear color (RGB)
    #[serde(default = "default_background")]
    pub background: [f32; 3],
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CanvasConfig {
    #[serde(default = "default_canvas_width")]
    pub width: f32,
    #[serde(default = "default_canvas_height")]
    pub height: f32,
}

fn default_background() -> [f32; 3] {
    [0.2, 0.3, 0.4]
}

fn default_title() -> String {
    "Mouse Engine v0.1".to_string()
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

fn default_canvas_width() -> f32 {
    crate::scene::DEFAULT_CANVAS_SIZE.x
}

fn default_canvas_height() -> f32 {
    crate::scene::DEFAULT_CANVAS_SIZE.y
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
        }
    }
}

impl Default for MouseConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            canvas: CanvasConfig::default(),
            background: default_background(),
        }
    }
}

impl CanvasConfig {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height).max(Vec2::ZERO)
    }
}

impl MouseConfig {
    /// Parse settings from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Window settings for the runtime
    pub fn app_config(&self) -> AppConfig {
        AppConfig::new(self.window.title.clone())
            .with_size(self.window.width, self.window.height)
            .with_gl_version(3, 3)
    }
}

/// Load settings from a file
pub fn load_config(path: &Path) -> Result<MouseConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    MouseConfig::from_toml_str(&text)
}

/// Load settings from `path` when given, otherwise use the defaults
pub fn load_or_default(path: Option<&Path>) -> Result<MouseConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(MouseConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = MouseConfig::from_toml_str("").unwrap();
        assert_eq!(config, MouseConfig::default());
        assert_eq!(config.window.title, "Mouse Engine v0.1");
        assert_eq!(config.canvas.size(), Vec2::new(600.0, 400.0));
    }

    #[test]
    fn test_partial_sections() {
        let config = MouseConfig::from_toml_str(
            r#"
            background = [0.0, 0.0, 0.0]

            [window]
            width = 1024

            [canvas]
            height = 300.0
            "#,
        )
        .unwrap();
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.canvas.size(), Vec2::new(600.0, 300.0));
        assert_eq!(config.background, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_app_config_requests_core_33() {
        let app_config = MouseConfig::default().app_config();
        assert_eq!(app_config.title, "Mouse Engine v0.1");
        assert_eq!((app_config.width, app_config.height), (800, 600));
        assert_eq!((app_config.gl_major, app_config.gl_minor), (3, 3));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = MouseConfig::from_toml_str("[window\nwidth = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("here.toml"));
    }

    #[test]
    fn test_no_path_gives_defaults() {
        assert_eq!(load_or_default(None).unwrap(), MouseConfig::default());
    }
}
