//! Viewer configuration file.
//!
//! Settings live in an INI file at `<config dir>/trackview/config.ini`
//! (e.g. `~/.config/trackview/config.ini` on Linux):
//!
//! ```ini
//! [display]
//! units = metric
//! speed_mode = speed
//!
//! [render]
//! width = 1024
//! height = 768
//! tile_url = https://tile.openstreetmap.org/{z}/{x}/{y}.png
//! ```
//!
//! Unknown or malformed values fall back to defaults with a warning rather
//! than failing the whole load; only an unreadable file is an error.

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;
use tracing::warn;

use crate::format::{SpeedMode, UnitSystem};

/// Default width of rendered map images in pixels.
const DEFAULT_RENDER_WIDTH: u32 = 1024;

/// Default height of rendered map images in pixels.
const DEFAULT_RENDER_HEIGHT: u32 = 768;

/// Errors that can occur while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read or parsed.
    #[error("Failed to read config file: {0}")]
    Read(String),
}

/// Display settings.
#[derive(Debug, Clone, Copy)]
pub struct DisplayConfig {
    /// Unit system for formatted values.
    pub units: UnitSystem,
    /// How speed values are displayed.
    pub speed_mode: SpeedMode,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            units: UnitSystem::Metric,
            speed_mode: SpeedMode::Speed,
        }
    }
}

/// Static map render settings.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output image width in pixels.
    pub width: u32,
    /// Output image height in pixels.
    pub height: u32,
    /// Optional tile URL template overriding the configured base layer.
    pub tile_url: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_RENDER_WIDTH,
            height: DEFAULT_RENDER_HEIGHT,
            tile_url: None,
        }
    }
}

/// The viewer configuration file.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    /// Display settings.
    pub display: DisplayConfig,
    /// Static map render settings.
    pub render: RenderConfig,
}

impl ConfigFile {
    /// Path of the configuration file in the user's config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("trackview").join("config.ini"))
    }

    /// Load the configuration from the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load the configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_file(path).map_err(|e| ConfigError::Read(e.to_string()))?;
        let mut config = Self::default();

        if let Some(display) = ini.section(Some("display")) {
            if let Some(value) = display.get("units") {
                match UnitSystem::from_config_str(value) {
                    Some(units) => config.display.units = units,
                    None => warn!(value, "unknown units in config, using metric"),
                }
            }
            if let Some(value) = display.get("speed_mode") {
                match SpeedMode::from_config_str(value) {
                    Some(mode) => config.display.speed_mode = mode,
                    None => warn!(value, "unknown speed_mode in config, using speed"),
                }
            }
        }

        if let Some(render) = ini.section(Some("render")) {
            if let Some(value) = render.get("width") {
                match value.parse() {
                    Ok(width) => config.render.width = width,
                    Err(_) => warn!(value, "invalid render width in config, using default"),
                }
            }
            if let Some(value) = render.get("height") {
                match value.parse() {
                    Ok(height) => config.render.height = height,
                    Err(_) => warn!(value, "invalid render height in config, using default"),
                }
            }
            if let Some(value) = render.get("tile_url") {
                config.render.tile_url = Some(value.to_string());
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = ConfigFile::default();
        assert_eq!(config.display.units, UnitSystem::Metric);
        assert_eq!(config.display.speed_mode, SpeedMode::Speed);
        assert_eq!(config.render.width, 1024);
        assert_eq!(config.render.height, 768);
        assert!(config.render.tile_url.is_none());
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            "[display]\n\
             units = english\n\
             speed_mode = pace\n\
             \n\
             [render]\n\
             width = 640\n\
             height = 480\n\
             tile_url = https://tiles.local/{z}/{x}/{y}.png\n",
        );

        let config = ConfigFile::load_from(file.path()).unwrap();
        assert_eq!(config.display.units, UnitSystem::English);
        assert_eq!(config.display.speed_mode, SpeedMode::Pace);
        assert_eq!(config.render.width, 640);
        assert_eq!(config.render.height, 480);
        assert_eq!(
            config.render.tile_url.as_deref(),
            Some("https://tiles.local/{z}/{x}/{y}.png")
        );
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let file = write_config("[display]\nunits = english\n");

        let config = ConfigFile::load_from(file.path()).unwrap();
        assert_eq!(config.display.units, UnitSystem::English);
        assert_eq!(config.display.speed_mode, SpeedMode::Speed);
        assert_eq!(config.render.width, 1024);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let file = write_config(
            "[display]\n\
             units = furlongs\n\
             \n\
             [render]\n\
             width = very wide\n",
        );

        let config = ConfigFile::load_from(file.path()).unwrap();
        assert_eq!(config.display.units, UnitSystem::Metric);
        assert_eq!(config.render.width, 1024);
    }

    #[test]
    fn test_missing_file_is_an_error_for_load_from() {
        let result = ConfigFile::load_from(Path::new("/nonexistent/config.ini"));
        assert!(matches!(result, Err(ConfigError::Read(_))));
    }
}
