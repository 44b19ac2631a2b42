//! Configuration system for htmlquill.
//!
//! This module provides the configuration structure for htmlquill with
//! sensible defaults and support for serialization/deserialization via
//! serde. Configuration is loaded from a TOML file and merged with
//! command-line arguments.
//!
//! # Example
//!
//! ```
//! use htmlquill::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.theme, "default-dark");
//! assert!(config.show_toolbar);
//!
//! // Create custom configuration
//! let custom = Config {
//!     theme: "nord".to_string(),
//!     create_backup: true,
//!     ..Config::default()
//! };
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for the htmlquill application.
///
/// # Fields
///
/// * `theme` - Color scheme name (default: "default-dark")
/// * `show_toolbar` - Display the formatting toolbar (default: true)
/// * `enable_mouse` - Enable mouse support for toolbar clicks and scrolling (default: true)
/// * `create_backup` - Create .bak files before saving (default: false)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Color scheme name
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Display the formatting toolbar
    #[serde(default = "default_show_toolbar")]
    pub show_toolbar: bool,

    /// Enable mouse support for toolbar clicks and scrolling
    #[serde(default = "default_enable_mouse")]
    pub enable_mouse: bool,

    /// Create .bak files before saving
    #[serde(default)]
    pub create_backup: bool,
}

/// Returns the default theme name.
fn default_theme() -> String {
    "default-dark".to_string()
}

/// Returns the default for showing the toolbar.
fn default_show_toolbar() -> bool {
    true
}

/// Returns the default for enabling mouse support.
fn default_enable_mouse() -> bool {
    true
}

impl Default for Config {
    /// Creates a new configuration with default values.
    ///
    /// # Example
    ///
    /// ```
    /// use htmlquill::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.theme, "default-dark");
    /// assert!(config.enable_mouse);
    /// assert!(!config.create_backup);
    /// ```
    fn default() -> Self {
        Self {
            theme: default_theme(),
            show_toolbar: default_show_toolbar(),
            enable_mouse: default_enable_mouse(),
            create_backup: false,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/htmlquill/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("htmlquill");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't
    /// be read.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|_| Self::default()),
            Err(_) => Self::default(),
        }
    }
}
