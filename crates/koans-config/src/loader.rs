//! Configuration Loader
//!
//! Handles loading and merging configuration from multiple sources with proper precedence.

use crate::global::GlobalConfig;
use crate::project::{FixturesConfig, NamesConfig, ProjectConfig, RunnerConfig};
use crate::{parse_bool, ConfigResult, NameStyle};
use std::env;
use std::path::{Path, PathBuf};

/// Project configuration file name
pub const PROJECT_CONFIG_FILE: &str = "koans.toml";

/// Configuration loader
///
/// Loads configuration from multiple sources and merges them with proper precedence:
/// 1. Global config (~/.koans/config.toml) - lowest priority
/// 2. Project config (./koans.toml) - overrides global
/// 3. Environment variables (KOANS_*) - overrides project
/// 4. CLI flags - highest priority (handled by caller)
pub struct ConfigLoader {
    /// Global config path, resolved lazily from the home directory
    global_config_path: Option<PathBuf>,
}

/// Merged configuration result
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Project configuration (with env overrides applied)
    pub project: ProjectConfig,

    /// Global configuration
    pub global: GlobalConfig,

    /// Project root directory (where koans.toml was found)
    pub project_root: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            global_config_path: None,
        }
    }

    /// Use an explicit global config file instead of ~/.koans/config.toml
    pub fn with_global_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.global_config_path = Some(path.into());
        self
    }

    /// Load configuration starting from the given directory
    ///
    /// Walks up the directory tree to find koans.toml, then loads and merges
    /// global config if it exists.
    pub fn load_from_directory(&mut self, start_dir: &Path) -> ConfigResult<Config> {
        let (project_root, project_config) = self.find_project_config(start_dir)?;
        let global_config = self.load_global_config()?;
        let project_config = self.apply_env_overrides(project_config)?;

        Ok(Config {
            project: project_config,
            global: global_config,
            project_root,
        })
    }

    /// Load configuration from a specific project config file
    pub fn load_from_file(&mut self, config_path: &Path) -> ConfigResult<Config> {
        let project_config = ProjectConfig::load_from_file(config_path)?;
        let global_config = self.load_global_config()?;
        let project_config = self.apply_env_overrides(project_config)?;

        Ok(Config {
            project: project_config,
            global: global_config,
            project_root: config_path.parent().map(|p| p.to_path_buf()),
        })
    }

    /// Find project configuration by walking up directory tree
    fn find_project_config(
        &self,
        start_dir: &Path,
    ) -> ConfigResult<(Option<PathBuf>, ProjectConfig)> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(PROJECT_CONFIG_FILE);

            if config_path.exists() {
                let project_config = ProjectConfig::load_from_file(&config_path)?;
                return Ok((Some(current), project_config));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Ok((None, ProjectConfig::default())),
            }
        }
    }

    /// Load global configuration; a missing file or home directory yields defaults
    fn load_global_config(&mut self) -> ConfigResult<GlobalConfig> {
        let path = match &self.global_config_path {
            Some(path) => path.clone(),
            None => match GlobalConfig::global_config_path() {
                Ok(path) => {
                    self.global_config_path = Some(path.clone());
                    path
                }
                Err(_) => return Ok(GlobalConfig::default()),
            },
        };

        if !path.exists() {
            return Ok(GlobalConfig::default());
        }

        GlobalConfig::load_from_file(&path)
    }

    /// Apply environment variable overrides to project config
    ///
    /// Recognised: KOANS_NAME_STYLE, KOANS_FIXTURES, KOANS_VERBOSE
    fn apply_env_overrides(&self, mut config: ProjectConfig) -> ConfigResult<ProjectConfig> {
        if let Ok(style) = env::var("KOANS_NAME_STYLE") {
            let style: NameStyle = style.parse()?;
            config
                .names
                .get_or_insert_with(NamesConfig::default)
                .style = Some(style);
        }

        if let Ok(dir) = env::var("KOANS_FIXTURES") {
            if !dir.is_empty() {
                config
                    .fixtures
                    .get_or_insert_with(FixturesConfig::default)
                    .dir = Some(PathBuf::from(dir));
            }
        }

        if let Ok(verbose) = env::var("KOANS_VERBOSE") {
            config
                .runner
                .get_or_insert_with(RunnerConfig::default)
                .verbose = Some(parse_bool(&verbose));
        }

        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Effective name style (project > global > default)
    pub fn name_style(&self) -> NameStyle {
        self.project
            .name_style()
            .or_else(|| self.global.name_style())
            .unwrap_or_default()
    }

    /// Fixture directory, resolved against the project root when relative
    pub fn fixture_dir(&self) -> Option<PathBuf> {
        let dir = self.project.fixture_dir()?;
        match &self.project_root {
            Some(root) if dir.is_relative() => Some(root.join(dir)),
            _ => Some(dir.to_path_buf()),
        }
    }

    pub fn verbose(&self) -> bool {
        self.project
            .verbose()
            .or_else(|| self.global.verbose())
            .unwrap_or(false)
    }

    pub fn color(&self) -> bool {
        self.project
            .color()
            .or_else(|| self.global.color())
            .unwrap_or(true)
    }

    pub fn filter(&self) -> Option<&str> {
        self.project.filter()
    }

    /// Get the project root directory
    pub fn project_root(&self) -> Option<&Path> {
        self.project_root.as_deref()
    }

    /// Check if this is a project (has koans.toml)
    pub fn is_project(&self) -> bool {
        self.project_root.is_some()
    }
}
