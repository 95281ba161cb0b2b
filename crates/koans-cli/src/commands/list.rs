//! List command - show registered koans in the order they run

use crate::commands::resolve_context;
use crate::koans;
use anyhow::Result;
use koans_config::Config as ProjectSettings;

pub fn run(json: bool, settings: &ProjectSettings) -> Result<()> {
    let ctx = resolve_context(settings, None, None);
    let suite = koans::registered(&ctx)?;
    let names: Vec<&str> = suite.names().collect();

    if json {
        println!("{}", serde_json::json!({ "koans": names }));
    } else {
        for (i, name) in names.iter().enumerate() {
            println!("{:>3}. {}", i + 1, name);
        }
    }
    Ok(())
}
