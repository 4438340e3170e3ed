//! # goldvec-schema — Schema Resolution
//!
//! Locates and compiles JSON Schema documents (Draft 2020-12) by logical
//! name, using the `jsonschema` crate as the validation engine. The runner
//! never reimplements schema validation; this crate is the thin seam between
//! the conformance executor and the engine.
//!
//! ## Schema Resolution
//!
//! A logical name `domain-event` resolves to
//! `<schema_dir>/domain-event.schema.json`. Schemas use `$id` URIs of the
//! form `https://schemas.goldvec.dev/<filename>`; cross-schema `$ref` URIs
//! under the same prefix are resolved to local files by a [`Retrieve`]
//! implementation that reads from `schema_dir` on demand. Foreign URIs (the
//! draft metaschemas) resolve to the permissive empty schema, so compilation
//! never performs network I/O.
//!
//! [`Retrieve`]: jsonschema::Retrieve
//!
//! ## Caching
//!
//! None. Repeated [`SchemaResolver::compile`] calls with the same name
//! recompile from disk — suites run infrequently and compilation is not a
//! hot path for this runner.

pub mod resolver;

// Re-export primary types for ergonomic imports.
pub use resolver::{violations, SchemaCompileError, SchemaResolver, Violation};
