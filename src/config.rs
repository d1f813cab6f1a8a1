//! Configuration management
//!
//! Config is read from `<config dir>/stringcalc/config.toml` (XDG on Linux),
//! or from an explicit path given on the command line.
//!
//! ```toml
//! [calculator]
//! default_delimiter = ","
//!
//! [output]
//! json = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::parser::DEFAULT_DELIMITER;

/// Directory name under the user config dir
pub const CONFIG_DIR: &str = "stringcalc";

/// Config filename
pub const CONFIG_FILE: &str = "config.toml";

/// stringcalc configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcConfig {
    /// Calculator settings
    #[serde(default)]
    pub calculator: CalculatorConfig,
    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

/// Calculator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Delimiter for inputs without a `//` directive
    #[serde(default = "default_delimiter")]
    pub default_delimiter: String,
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_delimiter: default_delimiter(),
        }
    }
}

/// Output preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit JSON instead of human-readable text
    #[serde(default)]
    pub json: bool,
}

impl CalcConfig {
    /// Get the config directory path
    #[must_use]
    pub fn config_dir() -> PathBuf {
        dirs::config_dir().unwrap_or_else(|| PathBuf::from(".config")).join(CONFIG_DIR)
    }

    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    /// Load config from the default location, or defaults if it is missing or unreadable
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        if path.exists() {
            Self::load_from(&path).unwrap_or_else(|err| {
                log::warn!("ignoring config at {}: {err:#}", path.display());
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}
