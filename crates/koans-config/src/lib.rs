//! Koans Configuration System
//!
//! Provides configuration management for koan runs including:
//! - Project configuration (koans.toml)
//! - Global user configuration (~/.koans/config.toml)
//! - The method name style used when koans compare method lists
//! - Configuration precedence and merging
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded and merged in the following order (later overrides earlier):
//! 1. Global config (~/.koans/config.toml)
//! 2. Project config (./koans.toml)
//! 3. Environment variables (KOANS_*)
//! 4. CLI flags
//!
//! # Example
//!
//! ```no_run
//! use koans_config::ConfigLoader;
//! use std::path::Path;
//!
//! let mut loader = ConfigLoader::new();
//! let config = loader.load_from_directory(Path::new(".")).unwrap();
//! println!("{}", config.name_style());
//! ```

pub mod global;
pub mod loader;
pub mod name_style;
pub mod project;

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax in {file}: {error}")]
    TomlParseError {
        file: PathBuf,
        error: toml::de::Error,
    },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Home directory not found")]
    HomeNotFound,
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

// Re-export main types
pub use global::GlobalConfig;
pub use loader::{Config, ConfigLoader};
pub use name_style::NameStyle;
pub use project::ProjectConfig;

/// Parse a boolean the way every `KOANS_*` switch does
pub(crate) fn parse_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes" | "on")
}
