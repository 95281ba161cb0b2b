//! Run command - walk the path of koans

use crate::commands::resolve_context;
use crate::koans;
use crate::reporter::KoanReporter;
use anyhow::Result;
use colored::*;
use koans_config::Config as ProjectSettings;
use koans_core::{KoanRunner, NameStyle, Report};
use std::path::PathBuf;

/// Arguments for the run command
#[derive(Debug, Default)]
pub struct RunArgs {
    /// Filter koans by name pattern
    pub pattern: Option<String>,
    /// Show timings
    pub verbose: bool,
    /// Disable colored output
    pub no_color: bool,
    /// Output in JSON format
    pub json: bool,
    /// Fixture directory override
    pub fixtures: Option<PathBuf>,
    /// Name style override
    pub name_style: Option<NameStyle>,
}

/// Run the registered koans and return the process exit code
pub fn run(args: RunArgs, settings: &ProjectSettings) -> Result<i32> {
    let ctx = resolve_context(settings, args.name_style, args.fixtures);
    let mut suite = koans::registered(&ctx)?;

    let pattern = args
        .pattern
        .or_else(|| settings.filter().map(str::to_string));
    if let Some(pattern) = &pattern {
        suite = suite.filter(pattern);
    }

    if suite.is_empty() {
        if args.json {
            println!("{}", serde_json::to_string_pretty(&Report::new().to_json())?);
        } else {
            println!("{}", "No koans found.".yellow());
        }
        return Ok(0);
    }

    let runner = KoanRunner::new();

    if args.json {
        let report = runner.run_all(&suite);
        println!("{}", serde_json::to_string_pretty(&report.to_json())?);
        return Ok(report.exit_code());
    }

    let reporter =
        KoanReporter::new(args.verbose || settings.verbose()).with_no_color(args.no_color);
    let report = runner.run_with_progress(&suite, |run| reporter.print_run(run));
    reporter.print_summary(&report);

    Ok(report.exit_code())
}
