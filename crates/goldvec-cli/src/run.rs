//! # Run Subcommand
//!
//! Executes conformance suites and prints a per-entry report. Report lines
//! go to stdout — they are the contract with a CI caller, alongside the
//! exit status: non-zero when any assertion fails or any suite errors.

use std::path::PathBuf;

use anyhow::bail;
use clap::Args;

use goldvec_core::SuiteSpec;
use goldvec_runner::{run_all, BUILTIN_SUITES};

/// Arguments for the run subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Run only the named suites (repeatable). Defaults to all builtin suites.
    #[arg(long = "suite", value_name = "NAME")]
    pub suites: Vec<String>,

    /// Repository root containing schemas/ and vectors/. Defaults to the
    /// nearest ancestor of the current directory that has both.
    #[arg(long)]
    pub root: Option<PathBuf>,
}

/// Execute the selected suites. Returns `true` when every assertion in
/// every suite passed and no suite errored.
pub fn execute(args: RunArgs) -> anyhow::Result<bool> {
    let root = match args.root {
        Some(root) => root,
        None => crate::discover_root()?,
    };

    let selected = select_suites(&args.suites)?;
    tracing::info!(root = %root.display(), suites = selected.len(), "running conformance suites");

    let mut passed = 0usize;
    let mut failed = 0usize;
    let mut problems: Vec<String> = Vec::new();

    for (spec, outcome) in run_all(&root, &selected) {
        let file_name = spec
            .vector_file
            .rsplit('/')
            .next()
            .unwrap_or(spec.vector_file);
        println!("\n{} ({file_name}):", spec.schema_name);

        match outcome {
            Ok(report) => {
                for result in &report.results {
                    let status = if result.is_pass() { "PASS" } else { "FAIL" };
                    println!("  [{status}] {}", result.label());
                }
                passed += report.passed();
                failed += report.failed();
                for failure in report.failures() {
                    problems.push(format!(
                        "{}/{}: {}",
                        spec.schema_name,
                        failure.id,
                        failure.diagnostic().unwrap_or("mismatch")
                    ));
                }
            }
            Err(e) => {
                println!("  [ERROR] {e}");
                failed += 1;
                problems.push(format!("{}: suite error: {e}", spec.name));
            }
        }
    }

    println!("\n{}", "=".repeat(50));
    println!("Results: {passed} passed, {failed} failed");

    if !problems.is_empty() {
        println!("\nFailures:");
        for problem in &problems {
            println!("  {problem}");
        }
    }

    Ok(problems.is_empty())
}

/// Resolve `--suite` filters against the builtin table, preserving table
/// order. An unknown name is an error rather than a silent no-op.
fn select_suites(names: &[String]) -> anyhow::Result<Vec<SuiteSpec>> {
    if names.is_empty() {
        return Ok(BUILTIN_SUITES.to_vec());
    }

    for name in names {
        if !BUILTIN_SUITES.iter().any(|s| s.name == name) {
            bail!(
                "unknown suite '{name}'; available: {}",
                BUILTIN_SUITES
                    .iter()
                    .map(|s| s.name)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
    }

    Ok(BUILTIN_SUITES
        .iter()
        .filter(|s| names.iter().any(|n| n == s.name))
        .copied()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_selects_all() {
        let selected = select_suites(&[]).unwrap();
        assert_eq!(selected.len(), BUILTIN_SUITES.len());
    }

    #[test]
    fn filter_preserves_table_order() {
        let names = vec!["conversations".to_string(), "domain-events".to_string()];
        let selected = select_suites(&names).unwrap();
        let selected_names: Vec<&str> = selected.iter().map(|s| s.name).collect();
        assert_eq!(selected_names, vec!["domain-events", "conversations"]);
    }

    #[test]
    fn unknown_suite_is_an_error() {
        let err = select_suites(&["nonexistent".to_string()]).unwrap_err();
        assert!(err.to_string().contains("unknown suite"), "got: {err}");
    }
}
