//! # goldvec-runner — Conformance Execution
//!
//! Drives golden vector entries through the validation engine and turns each
//! accept/reject decision into a pass/fail assertion against the vector
//! author's expectation.
//!
//! ## Responsibilities
//!
//! - **Execution** ([`executor`]): for a compiled schema and a pair of entry
//!   groups, validate every entry independently. Valid-group entries must be
//!   accepted; invalid-group entries with a payload must be rejected;
//!   invalid-group entries without a payload are markers and contribute no
//!   assertion.
//!
//! - **Suite registry** ([`registry`]): the builtin table of conformance
//!   scenarios — one schema bound to one vector file's two sections — and
//!   the orchestration that loads, decodes, compiles, executes, and reports
//!   a suite.
//!
//! ## Error Model
//!
//! Structural problems (schema fails to compile, vector file malformed) are
//! fatal to the suite and surface as [`SuiteError`] with full context — a
//! suite with broken fixtures is reported as errored, never silently
//! skipped. Assertion mismatches are not errors: they accumulate in the
//! [`SuiteReport`] and are reported in batch at suite end.
//!
//! [`SuiteReport`]: goldvec_core::SuiteReport

pub mod executor;
pub mod registry;

// Re-export primary types for ergonomic imports.
pub use executor::run;
pub use registry::{run_all, run_suite, SuiteError, BUILTIN_SUITES};
