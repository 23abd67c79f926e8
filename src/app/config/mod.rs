// SPDX-License-Identifier: MPL-2.0
//! Startup configuration read from a `settings.toml` file.
//!
//! The file is optional and never written back: session progress lives only
//! in memory.
//!
//! # Configuration Sections
//!
//! - `[general]` - Initial display mode (light, dark or system)
//! - `[window]` - Initial window size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` or set `LOADING_POSTER_CONFIG_DIR`
//! 3. Falls back to the platform config directory
//!
//! # Examples
//!
//! ```no_run
//! use loading_poster::app::config;
//!
//! let (config, warning) = config::load();
//! if let Some(message) = warning {
//!     eprintln!("{message}");
//! }
//! println!("{}x{}", config.window.width, config.window.height);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::StartupDisplayMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Display mode applied when the window opens.
    #[serde(default, deserialize_with = "deserialize_display_mode")]
    pub initial_display_mode: StartupDisplayMode,
}

/// Initial window geometry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: f32,

    #[serde(default = "default_height")]
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_DEFAULT_WIDTH,
            height: WINDOW_DEFAULT_HEIGHT,
        }
    }
}

impl WindowConfig {
    /// Window size with both dimensions clamped to their minimums.
    #[must_use]
    pub fn clamped_size(&self) -> (f32, f32) {
        (
            clamp_dimension(self.width, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_WIDTH),
            clamp_dimension(self.height, MIN_WINDOW_HEIGHT, WINDOW_DEFAULT_HEIGHT),
        )
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub window: WindowConfig,
}

fn default_width() -> f32 {
    WINDOW_DEFAULT_WIDTH
}

fn default_height() -> f32 {
    WINDOW_DEFAULT_HEIGHT
}

fn deserialize_display_mode<'de, D>(
    deserializer: D,
) -> std::result::Result<StartupDisplayMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(D::Error::custom)
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the resolved config directory.
///
/// Returns a tuple of (config, optional_warning). A missing file is not an
/// error; an unreadable or malformed one yields defaults plus a warning.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!(
                "could not load {}: {err}; using defaults",
                path.display()
            )),
        ),
    }
}

/// Loads configuration from a specific file.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
