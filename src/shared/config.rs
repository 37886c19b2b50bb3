//! Host Configuration
//!
//! Optional `hidden_window.toml`. Every field has a default, so a missing
//! file or a missing section yields the stock lifecycle.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::log::exe_dir;

/// File name searched for in the standard locations
pub const CONFIG_FILE_NAME: &str = "hidden_window.toml";

/// Window size in pixels, both axes. Not configurable.
pub const WINDOW_SIZE: i32 = 1;

// ============================================================================
// SECTIONS
// ============================================================================

/// `[window]` section
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Window class name to register
    pub class_name: String,
    /// Window title
    pub title: String,
    /// Preferred X position (moved if a display covers it)
    pub x: i32,
    /// Preferred Y position (moved if a display covers it)
    pub y: i32,
    /// Layered alpha, minimum non-zero by default
    pub alpha: u8,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            class_name: "HiddenWindowClass".to_string(),
            title: "Hidden Window".to_string(),
            x: 3000,
            y: 3000,
            alpha: 1,
        }
    }
}

/// `[exit]` section
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExitSettings {
    /// Code carried by the quit request posted on destroy
    pub quit_code: i32,
}

/// `[log]` section
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub enabled: bool,
    /// Log file, relative paths resolve next to the executable
    pub file: PathBuf,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            file: PathBuf::from("hidden_window.log"),
        }
    }
}

impl LogSettings {
    /// Absolute path of the log file
    pub fn resolved_path(&self) -> PathBuf {
        if self.file.is_absolute() {
            self.file.clone()
        } else {
            exe_dir().join(&self.file)
        }
    }
}

// ============================================================================
// HOST CONFIGURATION
// ============================================================================

/// Host configuration loaded from `hidden_window.toml`
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub window: WindowSettings,
    pub exit: ExitSettings,
    pub log: LogSettings,
}

/// Outcome of [`HostConfig::load`]
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: HostConfig,
    /// File the config came from, `None` when defaults are used
    pub source: Option<PathBuf>,
    /// Why the file found was ignored
    pub error: Option<ConfigError>,
}

impl HostConfig {
    /// Standard config locations, in search order
    pub fn config_candidates() -> Vec<PathBuf> {
        // Check in order: %APPDATA%/hidden_window, exe dir, cwd
        [
            dirs::config_dir().map(|p| p.join("hidden_window").join(CONFIG_FILE_NAME)),
            Some(exe_dir().join(CONFIG_FILE_NAME)),
            Some(PathBuf::from(CONFIG_FILE_NAME)),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load configuration, falling back to defaults if absent or invalid
    pub fn load() -> LoadedConfig {
        Self::load_from_candidates(Self::config_candidates())
    }

    /// Load the first existing candidate, defaults if none exists or it is invalid
    pub fn load_from_candidates(candidates: impl IntoIterator<Item = PathBuf>) -> LoadedConfig {
        let Some(path) = candidates.into_iter().find(|c| c.exists()) else {
            return LoadedConfig {
                config: Self::default(),
                source: None,
                error: None,
            };
        };

        match Self::load_from_path(&path) {
            Ok(config) => LoadedConfig {
                config,
                source: Some(path),
                error: None,
            },
            Err(e) => LoadedConfig {
                config: Self::default(),
                source: Some(path),
                error: Some(e),
            },
        }
    }

    /// Load and validate configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: HostConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would break the window's invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.class_name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "window.class_name must not be empty".to_string(),
            ));
        }
        if self.window.alpha == 0 {
            return Err(ConfigError::Invalid(
                "window.alpha must be between 1 and 255".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
