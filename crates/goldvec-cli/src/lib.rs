//! # goldvec-cli — Subcommand Handlers
//!
//! Argument types and handlers for the `goldvec` binary. The binary entry
//! point in `main.rs` assembles these into the clap command tree.

pub mod list;
pub mod run;

use std::path::PathBuf;

use anyhow::Context;

/// Locate the repository root: the nearest ancestor of the current directory
/// containing both `schemas/` and `vectors/`.
pub fn discover_root() -> anyhow::Result<PathBuf> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    cwd.ancestors()
        .find(|p| p.join("schemas").is_dir() && p.join("vectors").is_dir())
        .map(|p| p.to_path_buf())
        .with_context(|| {
            format!(
                "no ancestor of {} contains schemas/ and vectors/; pass --root explicitly",
                cwd.display()
            )
        })
}
