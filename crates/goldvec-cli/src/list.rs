//! # List Subcommand
//!
//! Prints the builtin suite table: name, schema, vector file, section keys.

use clap::Args;

use goldvec_runner::BUILTIN_SUITES;

/// Arguments for the list subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {}

/// Print every builtin suite.
pub fn execute(_args: ListArgs) {
    let width = BUILTIN_SUITES
        .iter()
        .map(|s| s.name.len())
        .max()
        .unwrap_or(0);

    for spec in BUILTIN_SUITES {
        println!(
            "{:width$}  {} <- vectors/{} [{} / {}]",
            spec.name, spec.schema_name, spec.vector_file, spec.valid_key, spec.invalid_key
        );
    }
}
