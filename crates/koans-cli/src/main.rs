use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::*;
use koans_core::NameStyle;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod koans;
mod reporter;

/// Walk the path to enlightenment, one koan at a time.
///
/// Koans run in order, one after another. Every koan prints a status line;
/// the process exits 0 only when every koan passed.
///
/// EXAMPLES:
///     koans run                       Run every koan
///     koans run inject                Only koans whose name contains 'inject'
///     koans run --json                Machine-readable report
///     koans list                      Show koans in the order they run
///
/// ENVIRONMENT VARIABLES:
///     KOANS_OUTPUT       Set to 'json' for JSON output by default
///     KOANS_NAME_STYLE   Method name style: 'string' or 'symbol'
///     KOANS_FIXTURES     Fixture directory
///     KOANS_VERBOSE      Set to '1' to show timings
///     NO_COLOR           Set to disable colored output
///     RUST_LOG           Log filter (logs go to stderr)
#[derive(Parser)]
#[command(name = "koans")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the koans
    ///
    /// Runs every registered koan in order and reports PASS, FAIL or ERROR
    /// for each. A failing koan never stops the run.
    ///
    /// EXAMPLES:
    ///     koans run                          Run all koans
    ///     koans run each                     Filter by pattern
    ///     koans run --name-style string      Compare method names as strings
    ///     koans run --fixtures ./data        Read fixtures from ./data
    #[command(visible_alias = "r")]
    Run {
        /// Filter koans by name pattern
        pattern: Option<String>,
        /// Show timings
        #[arg(long, short = 'v')]
        verbose: bool,
        /// Output the report as JSON
        #[arg(long)]
        json: bool,
        /// Disable colored output
        #[arg(long)]
        no_color: bool,
        /// Fixture directory
        #[arg(long)]
        fixtures: Option<PathBuf>,
        /// Method name style (string or symbol)
        #[arg(long)]
        name_style: Option<NameStyle>,
    },

    /// List koans in the order they run
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    ///
    /// EXAMPLES:
    ///     koans completions bash > ~/.local/share/bash-completion/completions/koans
    ///     koans completions zsh > ~/.zfunc/_koans
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    init_tracing();
    install_panic_hook();

    match real_main() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            std::process::exit(2);
        }
    }
}

fn real_main() -> Result<i32> {
    let cli = Cli::parse();
    let cli_config = config::Config::from_env();

    // Resolved once; every koan captures the result at registration time
    let settings =
        koans_config::ConfigLoader::new().load_from_directory(&std::env::current_dir()?)?;

    if !settings.color() || cli_config.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Run {
            pattern,
            verbose,
            json,
            no_color,
            fixtures,
            name_style,
        } => {
            if no_color {
                colored::control::set_override(false);
            }
            let args = commands::run::RunArgs {
                pattern,
                verbose,
                no_color: no_color || cli_config.no_color,
                json: json || cli_config.default_json,
                fixtures,
                name_style,
            };
            commands::run::run(args, &settings)
        }
        Commands::List { json } => {
            commands::list::run(json || cli_config.default_json, &settings)?;
            Ok(0)
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "koans", &mut io::stdout());
            Ok(0)
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Koan panics are caught and reported as ERROR lines, so they only go to
/// the debug log. Any other panic still reaches the previous hook.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if koans_core::in_koan() {
            tracing::debug!(panic = %info, "koan panicked");
        } else {
            previous(info);
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_flags() {
        let cli = Cli::try_parse_from([
            "koans",
            "run",
            "inject",
            "--name-style",
            "string",
            "--no-color",
        ])
        .unwrap();

        match cli.command {
            Commands::Run {
                pattern,
                name_style,
                no_color,
                ..
            } => {
                assert_eq!(pattern.as_deref(), Some("inject"));
                assert_eq!(name_style, Some(NameStyle::String));
                assert!(no_color);
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_reject_unknown_name_style() {
        assert!(Cli::try_parse_from(["koans", "run", "--name-style", "atom"]).is_err());
    }
}
