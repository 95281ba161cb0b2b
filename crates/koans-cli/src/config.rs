//! CLI configuration via environment variables
//!
//! Output switches that only matter to the terminal live here rather than
//! in koans.toml.

use std::env;

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Default to JSON output (KOANS_OUTPUT=json)
    pub default_json: bool,
    /// Disable colored output (KOANS_NO_COLOR=1 or NO_COLOR=1)
    pub no_color: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            default_json: env::var("KOANS_OUTPUT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            no_color: env::var("KOANS_NO_COLOR").is_ok() || env::var("NO_COLOR").is_ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn test_config_defaults() {
        env::remove_var("KOANS_OUTPUT");
        env::remove_var("KOANS_NO_COLOR");
        env::remove_var("NO_COLOR");

        let config = Config::from_env();
        assert!(!config.default_json);
        assert!(!config.no_color);
    }

    #[test]
    #[serial]
    fn test_config_json_output() {
        env::set_var("KOANS_OUTPUT", "JSON");
        let config = Config::from_env();
        assert!(config.default_json);
        env::remove_var("KOANS_OUTPUT");
    }

    #[test]
    #[serial]
    fn test_config_no_color() {
        env::set_var("KOANS_NO_COLOR", "1");
        assert!(Config::from_env().no_color);
        env::remove_var("KOANS_NO_COLOR");

        env::set_var("NO_COLOR", "1");
        assert!(Config::from_env().no_color);
        env::remove_var("NO_COLOR");
    }
}
