//! Global Configuration (~/.koans/config.toml)
//!
//! Handles user-level configuration stored in `~/.koans/config.toml`.

use crate::{ConfigError, ConfigResult, NameStyle};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Global user configuration from ~/.koans/config.toml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct GlobalConfig {
    /// Default settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

/// Default settings applied to every project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Default method name style
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_style: Option<NameStyle>,

    /// Colored output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,

    /// Show timings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
}

impl GlobalConfig {
    /// Load global configuration from a file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::IoError(e)
            }
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::TomlParseError {
            file: path.to_path_buf(),
            error: e,
        })
    }

    /// Get the global config file path (~/.koans/config.toml)
    pub fn global_config_path() -> ConfigResult<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeNotFound)?;
        Ok(home.join(".koans").join("config.toml"))
    }

    pub fn name_style(&self) -> Option<NameStyle> {
        self.defaults.as_ref().and_then(|d| d.name_style)
    }

    pub fn color(&self) -> Option<bool> {
        self.defaults.as_ref().and_then(|d| d.color)
    }

    pub fn verbose(&self) -> Option<bool> {
        self.defaults.as_ref().and_then(|d| d.verbose)
    }
}
