//! # Suite Specifications
//!
//! A suite binds one schema to one vector file's two sections: the entries
//! that must validate and the entries that must fail validation. Suite specs
//! are static configuration with no runtime mutation; the builtin table
//! lives in `goldvec-runner`.

use std::path::{Path, PathBuf};

/// Static configuration for one conformance scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuiteSpec {
    /// Stable scenario name, used for filtering and report headers.
    pub name: &'static str,
    /// Logical schema name, resolved to `schemas/<name>.schema.json`.
    pub schema_name: &'static str,
    /// Vector file path relative to the repository root, `/`-separated.
    pub vector_file: &'static str,
    /// Section key holding entries that must validate.
    pub valid_key: &'static str,
    /// Section key holding entries that must fail validation.
    pub invalid_key: &'static str,
}

impl SuiteSpec {
    /// Absolute path of this suite's vector file under `root`.
    pub fn vector_path(&self, root: &Path) -> PathBuf {
        let mut path = root.join("vectors");
        for segment in self.vector_file.split('/') {
            path.push(segment);
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_path_joins_segments() {
        let spec = SuiteSpec {
            name: "domain-events",
            schema_name: "domain-event",
            vector_file: "domain-event/events.json",
            valid_key: "valid_events",
            invalid_key: "invalid",
        };
        let path = spec.vector_path(Path::new("/repo"));
        assert_eq!(
            path,
            Path::new("/repo")
                .join("vectors")
                .join("domain-event")
                .join("events.json")
        );
    }
}
