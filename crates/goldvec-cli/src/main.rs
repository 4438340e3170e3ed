//! # goldvec CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::process::ExitCode;

use clap::Parser;

/// Golden vector conformance runner.
///
/// Validates the committed corpus of example payloads against their JSON
/// Schema documents and asserts that each payload is accepted or rejected as
/// the vector author intended. Exits non-zero if any assertion fails.
#[derive(Parser, Debug)]
#[command(name = "goldvec", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run conformance suites and report per-entry pass/fail.
    Run(goldvec_cli::run::RunArgs),
    /// List the builtin suites.
    List(goldvec_cli::list::ListArgs),
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let all_passed = goldvec_cli::run::execute(args)?;
            Ok(if all_passed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::List(args) => {
            goldvec_cli::list::execute(args);
            Ok(ExitCode::SUCCESS)
        }
    }
}
