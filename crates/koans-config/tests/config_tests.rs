//! Configuration loading and precedence tests

use koans_config::{ConfigLoader, NameStyle};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Precedence Tests
// ============================================================================

#[test]
#[serial]
fn test_global_style_used_without_project_setting() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    let global = write(
        home.path(),
        "config.toml",
        r#"
[defaults]
name_style = "string"
color = false
"#,
    );

    let mut loader = ConfigLoader::new().with_global_config_path(global);
    let config = loader.load_from_directory(project.path()).unwrap();

    assert_eq!(config.name_style(), NameStyle::String);
    assert!(!config.color());
}

#[test]
#[serial]
fn test_project_overrides_global() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    let global = write(
        home.path(),
        "config.toml",
        r#"
[defaults]
name_style = "string"
verbose = false
"#,
    );
    write(
        project.path(),
        "koans.toml",
        r#"
[runner]
verbose = true

[names]
style = "symbol"
"#,
    );

    let mut loader = ConfigLoader::new().with_global_config_path(global);
    let config = loader.load_from_directory(project.path()).unwrap();

    assert_eq!(config.name_style(), NameStyle::Symbol);
    assert!(config.verbose());
}

#[rstest]
#[case("1", true)]
#[case("true", true)]
#[case("yes", true)]
#[case("0", false)]
#[case("off", false)]
#[serial]
fn test_env_verbose_override(#[case] value: &str, #[case] expected: bool) {
    let project = TempDir::new().unwrap();

    env::set_var("KOANS_VERBOSE", value);
    let mut loader =
        ConfigLoader::new().with_global_config_path(project.path().join("missing.toml"));
    let config = loader.load_from_directory(project.path()).unwrap();
    env::remove_var("KOANS_VERBOSE");

    assert_eq!(config.verbose(), expected);
}

#[test]
#[serial]
fn test_env_fixture_override() {
    let project = TempDir::new().unwrap();
    let fixtures = project.path().join("fixtures");

    env::set_var("KOANS_FIXTURES", &fixtures);
    let mut loader =
        ConfigLoader::new().with_global_config_path(project.path().join("missing.toml"));
    let config = loader.load_from_directory(project.path()).unwrap();
    env::remove_var("KOANS_FIXTURES");

    assert_eq!(config.fixture_dir(), Some(fixtures));
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
#[serial]
fn test_invalid_toml_reports_file() {
    let project = TempDir::new().unwrap();
    write(project.path(), "koans.toml", "[runner\nverbose = true");

    let mut loader =
        ConfigLoader::new().with_global_config_path(project.path().join("missing.toml"));
    let err = loader.load_from_directory(project.path()).unwrap_err();

    assert!(err.to_string().contains("koans.toml"));
}

#[test]
#[serial]
fn test_invalid_global_config_is_error() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    let global = write(
        home.path(),
        "config.toml",
        r#"
[defaults]
name_style = "keyword"
"#,
    );

    let mut loader = ConfigLoader::new().with_global_config_path(global);
    assert!(loader.load_from_directory(project.path()).is_err());
}
