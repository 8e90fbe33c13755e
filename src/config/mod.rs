//! Configuration system for jsoneval.
//!
//! Settings are read from `~/.config/jsoneval/config.toml` when present and can
//! be overridden per invocation from the command line.
//!
//! # Example
//!
//! ```
//! use jsoneval::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert!(!config.pretty);
//! assert_eq!(config.indent_size, 4);
//!
//! // Create custom configuration
//! let custom = Config {
//!     pretty: true,
//!     indent_size: 2,
//!     ..Config::default()
//! };
//! ```

use crate::document::printer::{Layout, DEFAULT_INDENT};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the jsoneval application.
///
/// # Fields
///
/// * `pretty` - Print results one member per line (default: false)
/// * `indent_size` - Spaces per nesting level in pretty output (default: 4)
/// * `strip_quotes` - Remove `"` characters from expressions before evaluating (default: true)
/// * `log_level` - Minimum level for diagnostics on stderr (default: "warn")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Print results one member per line
    #[serde(default)]
    pub pretty: bool,

    /// Number of spaces per indentation level in pretty output
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,

    /// Remove double quotes from expressions before evaluating them
    #[serde(default = "default_strip_quotes")]
    pub strip_quotes: bool,

    /// Minimum log level: "error", "warn", "info", "debug" or "trace"
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_indent_size() -> usize {
    DEFAULT_INDENT
}

fn default_strip_quotes() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pretty: false,
            indent_size: default_indent_size(),
            strip_quotes: default_strip_quotes(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/jsoneval/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("jsoneval");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %format!("{:#}", e), "ignoring unreadable config file");
                Self::default()
            }
        }
    }

    /// Loads configuration from an explicit file, reporting any failure.
    pub fn load_from<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parses configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Output layout selected by this configuration.
    pub fn layout(&self) -> Layout {
        if self.pretty {
            Layout::Pretty {
                indent: self.indent_size,
            }
        } else {
            Layout::Compact
        }
    }
}
