//! Project Configuration (koans.toml)
//!
//! Handles project-level configuration stored in `koans.toml` at the project root.

use crate::{ConfigError, ConfigResult, NameStyle};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project configuration from koans.toml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Runner behaviour
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runner: Option<RunnerConfig>,

    /// Fixture file location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixtures: Option<FixturesConfig>,

    /// Method name representation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<NamesConfig>,
}

/// Runner configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    /// Show timings next to status lines and in the summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,

    /// Colored output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,

    /// Only run koans whose name contains this pattern
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

/// Fixture configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct FixturesConfig {
    /// Fixture directory, relative to the project root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Name style configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct NamesConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<NameStyle>,
}

impl ProjectConfig {
    /// Load project configuration from a file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::IoError(e)
            }
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlParseError {
            file: path.to_path_buf(),
            error: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the project configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(filter) = self.runner.as_ref().and_then(|r| r.filter.as_ref()) {
            if filter.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "runner.filter".to_string(),
                    reason: "filter cannot be empty".to_string(),
                });
            }
        }

        if let Some(dir) = self.fixtures.as_ref().and_then(|f| f.dir.as_ref()) {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "fixtures.dir".to_string(),
                    reason: "directory cannot be empty".to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn name_style(&self) -> Option<NameStyle> {
        self.names.as_ref().and_then(|n| n.style)
    }

    pub fn fixture_dir(&self) -> Option<&Path> {
        self.fixtures.as_ref().and_then(|f| f.dir.as_deref())
    }

    pub fn verbose(&self) -> Option<bool> {
        self.runner.as_ref().and_then(|r| r.verbose)
    }

    pub fn color(&self) -> Option<bool> {
        self.runner.as_ref().and_then(|r| r.color)
    }

    pub fn filter(&self) -> Option<&str> {
        self.runner.as_ref().and_then(|r| r.filter.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config: ProjectConfig = toml::from_str("").unwrap();
        assert_eq!(config, ProjectConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[runner]
verbose = true
color = false
filter = "inject"

[fixtures]
dir = "data"

[names]
style = "string"
"#;

        let config: ProjectConfig = toml::from_str(toml).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.verbose(), Some(true));
        assert_eq!(config.color(), Some(false));
        assert_eq!(config.filter(), Some("inject"));
        assert_eq!(config.fixture_dir(), Some(Path::new("data")));
        assert_eq!(config.name_style(), Some(NameStyle::String));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let toml = r#"
[runner]
parallel = true
"#;
        assert!(toml::from_str::<ProjectConfig>(toml).is_err());
    }

    #[test]
    fn test_invalid_style_rejected() {
        let toml = r#"
[names]
style = "keyword"
"#;
        assert!(toml::from_str::<ProjectConfig>(toml).is_err());
    }

    #[test]
    fn test_empty_filter_invalid() {
        let config = ProjectConfig {
            runner: Some(RunnerConfig {
                filter: Some("  ".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
