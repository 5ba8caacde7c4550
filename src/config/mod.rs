//! Configuration system for markquill.
//!
//! This module provides the configuration structure for markquill with sensible
//! defaults and support for serialization/deserialization via serde. Configuration
//! is loaded from a TOML file and merged with command-line arguments.
//!
//! # Example
//!
//! ```
//! use markquill::config::Config;
//! use markquill::overlay::NavMode;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.theme, "default-dark");
//! assert_eq!(config.overlay.mode, NavMode::Popup);
//!
//! // Parse a partial file; everything else keeps its default
//! let custom: Config = toml::from_str("[overlay]\nmode = \"direct\"\nwidth = 60\n").unwrap();
//! assert_eq!(custom.overlay.mode, NavMode::Direct);
//! assert_eq!(custom.overlay.width, 60);
//! assert_eq!(custom.overlay.height, 20);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::overlay::NavMode;

/// Configuration for the markquill application.
///
/// # Fields
///
/// * `theme` - Color scheme name (default: "default-dark")
/// * `show_line_numbers` - Display line numbers in the buffer view (default: true)
/// * `overlay` - Marks overlay settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Color scheme name
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Display line numbers in the buffer view
    #[serde(default = "default_show_line_numbers")]
    pub show_line_numbers: bool,

    /// Marks overlay settings
    #[serde(default)]
    pub overlay: OverlayConfig,
}

/// Returns the default theme name.
fn default_theme() -> String {
    "default-dark".to_string()
}

/// Returns the default for showing line numbers.
fn default_show_line_numbers() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            show_line_numbers: default_show_line_numbers(),
            overlay: OverlayConfig::default(),
        }
    }
}

/// Border drawn around the overlay window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderKind {
    None,
    Plain,
    #[default]
    Rounded,
    Double,
    Thick,
}

/// Placement of the overlay title on the top border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitlePosition {
    Left,
    #[default]
    Center,
    Right,
}

/// Icons shown before the filename of a mark row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkIcons {
    #[serde(default = "default_buffer_icon")]
    pub buffer: String,
    #[serde(default = "default_global_icon")]
    pub global: String,
}

fn default_buffer_icon() -> String {
    "●".to_string()
}

fn default_global_icon() -> String {
    "◆".to_string()
}

impl Default for MarkIcons {
    fn default() -> Self {
        Self {
            buffer: default_buffer_icon(),
            global: default_global_icon(),
        }
    }
}

/// Keys bound to overlay actions.
///
/// Each action takes a list of key specs: a single character (`"d"`) or a
/// bracketed name such as `"<CR>"`, `"<Esc>"`, `"<Tab>"` or `"<C-n>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Keymaps {
    #[serde(default = "default_navigate_keys")]
    pub navigate: Vec<String>,
    #[serde(default = "default_delete_keys")]
    pub delete: Vec<String>,
    #[serde(default = "default_close_keys")]
    pub close: Vec<String>,
    #[serde(default = "default_toggle_mode_keys")]
    pub toggle_mode: Vec<String>,
}

fn default_navigate_keys() -> Vec<String> {
    vec!["<CR>".to_string(), "l".to_string()]
}

fn default_delete_keys() -> Vec<String> {
    vec!["d".to_string(), "x".to_string()]
}

fn default_close_keys() -> Vec<String> {
    vec!["q".to_string(), "<Esc>".to_string()]
}

fn default_toggle_mode_keys() -> Vec<String> {
    vec!["<Tab>".to_string()]
}

impl Default for Keymaps {
    fn default() -> Self {
        Self {
            navigate: default_navigate_keys(),
            delete: default_delete_keys(),
            close: default_close_keys(),
            toggle_mode: default_toggle_mode_keys(),
        }
    }
}

/// Marks overlay settings.
///
/// Only the options listed here are recognized; unknown keys in the
/// `[overlay]` table are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverlayConfig {
    /// Canvas width in columns (raised to the overlay minimum)
    #[serde(default = "default_width")]
    pub width: u16,

    /// Maximum window height in rows
    #[serde(default = "default_height")]
    pub height: u16,

    /// Border style
    #[serde(default)]
    pub border: BorderKind,

    /// Title on the top border; empty for none
    #[serde(default = "default_title")]
    pub title: String,

    /// Title placement
    #[serde(default)]
    pub title_position: TitlePosition,

    /// Draw a drop shadow behind the window
    #[serde(default = "default_shadow")]
    pub shadow: bool,

    /// Navigation mode the overlay starts in
    #[serde(default)]
    pub mode: NavMode,

    /// Column separator glyph
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Mark type icons
    #[serde(default)]
    pub icons: MarkIcons,

    /// Key bindings per action
    #[serde(default)]
    pub keymaps: Keymaps,
}

fn default_width() -> u16 {
    72
}

fn default_height() -> u16 {
    20
}

fn default_title() -> String {
    "Marks".to_string()
}

fn default_shadow() -> bool {
    true
}

fn default_separator() -> String {
    "│".to_string()
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            border: BorderKind::default(),
            title: default_title(),
            title_position: TitlePosition::default(),
            shadow: default_shadow(),
            mode: NavMode::default(),
            separator: default_separator(),
            icons: MarkIcons::default(),
            keymaps: Keymaps::default(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/markquill/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("markquill");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    ///
    /// A file that exists but fails to parse is reported in the log.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                tracing::warn!(
                    target: "config",
                    path = %path.display(),
                    error = %err,
                    "invalid_config_using_defaults"
                );
                Self::default()
            }),
            Err(err) => {
                tracing::warn!(target: "config", path = %path.display(), error = %err, "config_unreadable");
                Self::default()
            }
        }
    }

    /// Saves configuration to `path`.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
