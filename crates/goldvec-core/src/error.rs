//! # Error Types — Vector Fixture Failures
//!
//! Errors raised while loading and decoding vector documents. All of them
//! are fatal to the suite that hit them: a malformed fixture invalidates
//! every assertion that would be derived from it, so the suite is reported
//! as errored rather than silently skipped.
//!
//! Assertion mismatches are deliberately *not* errors — they are the
//! expected per-entry outcome of a conformance run and live in
//! [`crate::report`] instead.

use thiserror::Error;

/// Error while reading or decoding a vector document.
#[derive(Error, Debug)]
pub enum VectorError {
    /// The vector file could not be read from disk.
    #[error("cannot read vector file '{path}': {reason}")]
    Read {
        /// Path to the vector file.
        path: String,
        /// Reason the file could not be read.
        reason: String,
    },

    /// The vector file is not a JSON object at the top level.
    #[error("vector file '{path}' is malformed: {reason}")]
    Parse {
        /// Path to the vector file.
        path: String,
        /// Reason the content could not be parsed.
        reason: String,
    },

    /// A section exists but does not decode as an array of vector entries.
    #[error("section '{key}' in vector file '{path}' is malformed: {reason}")]
    Section {
        /// Path to the vector file.
        path: String,
        /// The section key that failed to decode.
        key: String,
        /// Reason the section could not be decoded.
        reason: String,
    },
}
