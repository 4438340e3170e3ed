//! # Schema Resolver
//!
//! `compile(name) -> Validator` over a directory of `*.schema.json` files.
//! The compiled validator is an opaque, immutable artifact: safe to reuse
//! across every entry of a suite run, owned by the run that requested it,
//! and dropped at run end.

use std::fmt;
use std::path::{Path, PathBuf};

use jsonschema::{Retrieve, Uri, Validator};
use serde_json::Value;
use thiserror::Error;

/// URI prefix under which schemas in this repository publish their `$id`.
/// Cross-schema `$ref` URIs use the same prefix.
pub const SCHEMA_URI_PREFIX: &str = "https://schemas.goldvec.dev/";

/// Filename suffix of schema documents under the schema directory.
const SCHEMA_SUFFIX: &str = ".schema.json";

/// Error while locating or compiling a schema document.
#[derive(Error, Debug)]
pub enum SchemaCompileError {
    /// No schema file exists for the logical name.
    #[error("schema '{schema_name}' not found at {path}")]
    NotFound {
        /// Logical schema name.
        schema_name: String,
        /// Path that was probed.
        path: String,
    },

    /// The schema file could not be read.
    #[error("cannot read schema '{schema_name}': {reason}")]
    Read {
        /// Logical schema name.
        schema_name: String,
        /// Reason the file could not be read.
        reason: String,
    },

    /// The schema file is not valid JSON.
    #[error("schema '{schema_name}' is not valid JSON: {reason}")]
    Parse {
        /// Logical schema name.
        schema_name: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The document is not a valid schema, or a reference under the
    /// canonical URI prefix could not be resolved from disk.
    #[error("schema '{schema_name}' failed to compile: {reason}")]
    Build {
        /// Logical schema name.
        schema_name: String,
        /// Engine diagnostic.
        reason: String,
    },
}

/// Retriever that resolves `$ref` URIs to schema files on disk.
///
/// Canonical-prefix URIs and bare filenames map to files under the schema
/// directory; a missing file is an error so that an unresolvable internal
/// reference fails compilation instead of silently validating against
/// nothing. Any other URI (draft metaschemas) resolves to the permissive
/// empty schema to keep compilation fully offline.
struct DiskSchemaRetriever {
    schema_dir: PathBuf,
}

impl DiskSchemaRetriever {
    fn load(&self, filename: &str) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let path = self.schema_dir.join(filename);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                return Err(format!(
                    "referenced schema '{}' cannot be read: {e}",
                    path.display()
                )
                .into())
            }
        };
        match serde_json::from_str(&content) {
            Ok(value) => Ok(value),
            Err(e) => Err(format!(
                "referenced schema '{}' is not valid JSON: {e}",
                path.display()
            )
            .into()),
        }
    }
}

impl Retrieve for DiskSchemaRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let uri_str = uri.as_str();

        if let Some(filename) = uri_str.strip_prefix(SCHEMA_URI_PREFIX) {
            return self.load(filename);
        }

        // Relative $refs reach the retriever as bare or path-qualified
        // filenames rather than absolute URIs.
        if !uri_str.contains("://") {
            let filename = uri_str.rsplit('/').next().unwrap_or(uri_str);
            return self.load(filename);
        }

        // Draft metaschemas and other foreign URIs: permissive empty schema,
        // never a network request.
        Ok(serde_json::json!({}))
    }
}

/// A single validation violation with structured context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the instance.
    pub instance_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// Collect every violation the engine reports for `instance`.
///
/// Empty when the instance is accepted.
pub fn violations(validator: &Validator, instance: &Value) -> Vec<Violation> {
    validator
        .iter_errors(instance)
        .map(|e| Violation {
            instance_path: e.instance_path.to_string(),
            message: e.to_string(),
        })
        .collect()
}

/// Locates schema documents by logical name and compiles them via the
/// validation engine.
#[derive(Debug, Clone)]
pub struct SchemaResolver {
    schema_dir: PathBuf,
}

impl SchemaResolver {
    /// Create a resolver over the given schema directory.
    pub fn new(schema_dir: impl Into<PathBuf>) -> Self {
        Self {
            schema_dir: schema_dir.into(),
        }
    }

    /// The schema directory this resolver reads from.
    pub fn schema_dir(&self) -> &Path {
        &self.schema_dir
    }

    /// Path a logical schema name resolves to.
    pub fn schema_path(&self, name: &str) -> PathBuf {
        self.schema_dir.join(format!("{name}{SCHEMA_SUFFIX}"))
    }

    /// Compile the schema named `name` into a reusable validator.
    ///
    /// Performs no caching and no side effect beyond reading the schema file
    /// (and any locally referenced siblings).
    ///
    /// # Errors
    ///
    /// [`SchemaCompileError::NotFound`] if no file exists for the name,
    /// [`SchemaCompileError::Read`]/[`SchemaCompileError::Parse`] if it
    /// cannot be read or is not JSON, and [`SchemaCompileError::Build`] if
    /// the engine rejects it as a schema or a canonical-prefix reference
    /// cannot be resolved from disk.
    pub fn compile(&self, name: &str) -> Result<Validator, SchemaCompileError> {
        let path = self.schema_path(name);
        if !path.exists() {
            return Err(SchemaCompileError::NotFound {
                schema_name: name.to_string(),
                path: path.display().to_string(),
            });
        }

        let content =
            std::fs::read_to_string(&path).map_err(|e| SchemaCompileError::Read {
                schema_name: name.to_string(),
                reason: e.to_string(),
            })?;

        let schema: Value =
            serde_json::from_str(&content).map_err(|e| SchemaCompileError::Parse {
                schema_name: name.to_string(),
                reason: e.to_string(),
            })?;

        let mut opts = jsonschema::options();
        opts.with_draft(jsonschema::Draft::Draft202012);
        opts.with_retriever(DiskSchemaRetriever {
            schema_dir: self.schema_dir.clone(),
        });

        opts.build(&schema).map_err(|e| SchemaCompileError::Build {
            schema_name: name.to_string(),
            reason: e.to_string(),
        })
    }
}
