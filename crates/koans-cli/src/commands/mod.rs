//! CLI command implementations

pub mod list;
pub mod run;

use crate::koans::KoanContext;
use koans_config::Config as ProjectSettings;
use koans_core::{FixtureDir, NameStyle};
use std::path::PathBuf;

/// Fixture directory shipped with the CLI crate
pub fn default_fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Resolve the koan context once: CLI flag > project/env/global settings > default
pub fn resolve_context(
    settings: &ProjectSettings,
    name_style: Option<NameStyle>,
    fixtures: Option<PathBuf>,
) -> KoanContext {
    let name_style = name_style.unwrap_or_else(|| settings.name_style());
    let fixtures = fixtures
        .or_else(|| settings.fixture_dir())
        .unwrap_or_else(default_fixture_dir);

    let ctx = KoanContext {
        name_style,
        fixtures: FixtureDir::new(fixtures),
    };
    tracing::debug!(
        name_style = %ctx.name_style,
        fixtures = %ctx.fixtures.root().display(),
        "resolved koan context"
    );
    ctx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_flags_win_over_settings() {
        let ctx = resolve_context(
            &ProjectSettings::default(),
            Some(NameStyle::String),
            Some(PathBuf::from("/tmp/koan-data")),
        );
        assert_eq!(ctx.name_style, NameStyle::String);
        assert_eq!(ctx.fixtures.root(), Path::new("/tmp/koan-data"));
    }

    #[test]
    fn test_defaults_to_shipped_fixtures() {
        let ctx = resolve_context(&ProjectSettings::default(), None, None);
        assert_eq!(ctx.name_style, NameStyle::Symbol);
        assert_eq!(ctx.fixtures.root(), default_fixture_dir());
    }
}
