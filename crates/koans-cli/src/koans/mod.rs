//! Registered koan suites
//!
//! Suites register in the order they are meant to be worked through.

pub mod about_iteration;

use koans_core::{FixtureDir, KoanSuite, NameStyle, SuiteError};

/// Settings resolved once at startup and captured by every koan body
#[derive(Debug, Clone)]
pub struct KoanContext {
    pub name_style: NameStyle,
    pub fixtures: FixtureDir,
}

/// Build the full suite
pub fn registered(ctx: &KoanContext) -> Result<KoanSuite, SuiteError> {
    let mut suite = KoanSuite::new();
    about_iteration::register(&mut suite, ctx)?;
    Ok(suite)
}
