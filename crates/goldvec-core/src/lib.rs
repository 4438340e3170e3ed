//! # goldvec-core — Foundational Types for the Conformance Runner
//!
//! This crate defines the data model shared by every other crate in the
//! workspace: golden vector documents and their entries, the static suite
//! specifications that bind a schema to a vector file, and the assertion
//! results a suite run produces. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Vector documents are decoded lazily.** A [`VectorDocument`] holds the
//!    raw top-level JSON object of a vector file; individual sections are
//!    decoded into [`VectorEntry`] values only when a suite asks for them by
//!    key. An absent section key is a legal "no cases in this half" state and
//!    decodes to an empty sequence, never an error.
//!
//! 2. **Entries without a payload are markers, not defects.** `data: null`
//!    (or an absent `data` field) documents a constraint without supplying a
//!    reproducible payload. [`VectorEntry::payload`] filters these out so
//!    callers never validate a marker by accident.
//!
//! 3. **Assertion results are discrete, reportable units.** Each entry's
//!    outcome is an [`AssertionResult`] carrying the entry id as its sole
//!    correlation key, so a test framework can render, filter, and rerun
//!    entries individually.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `goldvec-*` crates (this is the leaf of the DAG).
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod report;
pub mod suite;
pub mod vector;

// Re-export primary types for ergonomic imports.
pub use error::VectorError;
pub use report::{AssertionResult, Expectation, Outcome, SuiteReport};
pub use suite::SuiteSpec;
pub use vector::{VectorDocument, VectorEntry};
