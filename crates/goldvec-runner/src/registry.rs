//! # Suite Registry
//!
//! The builtin table of conformance scenarios and the orchestration that
//! runs one. Each suite is a synchronous, self-contained unit of work: it
//! owns its own vector document and compiled schema, neither of which is
//! written to after construction, so suites may run in any order (or in
//! parallel) with no coordination.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use goldvec_core::{SuiteReport, SuiteSpec, VectorDocument, VectorEntry, VectorError};
use goldvec_schema::{SchemaCompileError, SchemaResolver};

use crate::executor;

/// The builtin conformance scenarios.
///
/// An immutable, explicitly constructed table — callers pass it (or a
/// filtered slice of it) to [`run_all`] rather than relying on ambient
/// state. Each entry maps 1:1 to a host test framework entry point and to a
/// CLI-addressable suite name.
pub const BUILTIN_SUITES: &[SuiteSpec] = &[
    SuiteSpec {
        name: "domain-events",
        schema_name: "domain-event",
        vector_file: "domain-event/events.json",
        valid_key: "valid_events",
        invalid_key: "invalid",
    },
    SuiteSpec {
        name: "domain-event-batches",
        schema_name: "domain-event-batch",
        vector_file: "domain-event/batches.json",
        valid_key: "valid_batches",
        invalid_key: "invalid_batches",
    },
    SuiteSpec {
        name: "conversations",
        schema_name: "conversation",
        vector_file: "conversation/conversations.json",
        valid_key: "valid_conversations",
        invalid_key: "invalid",
    },
    SuiteSpec {
        name: "lifecycle-payloads",
        schema_name: "lifecycle-transition-payload",
        vector_file: "agent/lifecycle-payloads.json",
        valid_key: "valid_payloads",
        invalid_key: "invalid_payloads",
    },
    SuiteSpec {
        name: "billing-allocation",
        schema_name: "billing-entry",
        vector_file: "billing/allocation.json",
        valid_key: "valid_entries",
        invalid_key: "invalid_entries",
    },
    SuiteSpec {
        name: "transfer-specs",
        schema_name: "transfer-spec",
        vector_file: "transfer/transfers.json",
        valid_key: "valid_transfers",
        invalid_key: "invalid_transfers",
    },
    SuiteSpec {
        name: "health-status",
        schema_name: "health-status",
        vector_file: "health/health-status.json",
        valid_key: "valid",
        invalid_key: "invalid",
    },
    SuiteSpec {
        name: "thinking-traces",
        schema_name: "thinking-trace",
        vector_file: "thinking/thinking-traces.json",
        valid_key: "valid",
        invalid_key: "invalid",
    },
];

/// Structural error that aborts a whole suite.
///
/// If the schema cannot be compiled or the fixtures are malformed, no entry
/// in the suite can be meaningfully evaluated; the suite is reported as
/// errored with full context, never silently skipped.
#[derive(Error, Debug)]
pub enum SuiteError {
    /// The suite's schema could not be compiled.
    #[error(transparent)]
    Schema(#[from] SchemaCompileError),

    /// The suite's vector file could not be loaded or decoded.
    #[error(transparent)]
    Vector(#[from] VectorError),
}

/// Run one conformance suite under `root`.
///
/// In order: load the vector document, decode both sections (each optionally
/// absent), compile the schema, execute every entry, and assemble the
/// report. The vector document and compiled schema are created fresh for
/// this run and dropped with it — no caching across runs.
///
/// # Errors
///
/// [`SuiteError`] on any structural problem; per-entry mismatches are not
/// errors and accumulate in the returned [`SuiteReport`].
pub fn run_suite(root: &Path, spec: &SuiteSpec) -> Result<SuiteReport, SuiteError> {
    let vector_path = spec.vector_path(root);
    let document = VectorDocument::load(&vector_path)?;

    let valid = document.decode_section(spec.valid_key)?;
    let invalid = document.decode_section(spec.invalid_key)?;
    warn_on_duplicate_ids(spec.name, spec.valid_key, &valid);
    warn_on_duplicate_ids(spec.name, spec.invalid_key, &invalid);

    let resolver = SchemaResolver::new(root.join("schemas"));
    let schema = resolver.compile(spec.schema_name)?;

    tracing::debug!(
        suite = spec.name,
        schema = spec.schema_name,
        valid = valid.len(),
        invalid = invalid.len(),
        "executing conformance suite"
    );

    let results = executor::run(&schema, &valid, &invalid);
    Ok(SuiteReport {
        suite: spec.name.to_string(),
        schema_name: spec.schema_name.to_string(),
        vector_file: spec.vector_file.to_string(),
        results,
    })
}

/// Run every suite in `suites`, pairing each spec with its outcome.
///
/// One suite's structural error does not stop the remaining suites; the
/// caller decides how to surface the mix of reports and errors (the CLI maps
/// any error or failed assertion to a non-zero exit status).
pub fn run_all<'a>(
    root: &Path,
    suites: &'a [SuiteSpec],
) -> Vec<(&'a SuiteSpec, Result<SuiteReport, SuiteError>)> {
    suites
        .iter()
        .map(|spec| (spec, run_suite(root, spec)))
        .collect()
}

/// Ids are the sole correlation key in failure reports; duplicates make
/// attribution ambiguous but do not invalidate the assertions themselves,
/// so they are surfaced at WARN rather than enforced.
fn warn_on_duplicate_ids(suite: &str, key: &str, entries: &[VectorEntry]) {
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.id.as_str()) {
            tracing::warn!(
                suite,
                section = key,
                id = %entry.id,
                "duplicate vector id within section; failure attribution will be ambiguous"
            );
        }
    }
}
