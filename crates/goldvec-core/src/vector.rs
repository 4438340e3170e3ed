//! # Vector Documents
//!
//! A vector file is a JSON object whose values are named sections, each an
//! array of entries:
//!
//! ```json
//! {
//!   "valid_events":   [ {"id": "ev-min", "data": {...}, "note": "..."}, ... ],
//!   "invalid":        [ {"id": "ev-no-actor", "data": {...}}, ... ]
//! }
//! ```
//!
//! The document is loaded once per suite run and decoded lazily per
//! requested section key. Unrecognized top-level keys are ignored. Either or
//! both of a suite's section keys may be absent, in which case that half of
//! the suite contributes no assertions.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::VectorError;

/// A single golden vector: an example payload plus its identifying label.
///
/// The expected validation outcome is not carried on the entry itself; it is
/// implied by the section the entry lives in (valid vs invalid).
///
/// `data: null` or an absent `data` field is a legal marker for entries that
/// document a constraint without supplying a payload (e.g. a field-level
/// note); such entries carry no validation obligation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorEntry {
    /// Identifying label, intended-unique within its section. The sole
    /// correlation key used in failure reports.
    pub id: String,

    /// The example payload, or `None` for marker-only entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    /// Free-form authoring note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl VectorEntry {
    /// The payload to validate, if this entry carries one.
    ///
    /// Returns `None` both for an absent `data` field and for an explicit
    /// `data: null` — the two spellings of a marker-only entry.
    pub fn payload(&self) -> Option<&Value> {
        self.data.as_ref().filter(|v| !v.is_null())
    }
}

/// A vector file loaded into memory: the source path plus the raw top-level
/// object, with sections decoded on demand via [`decode_section`].
///
/// [`decode_section`]: VectorDocument::decode_section
#[derive(Debug, Clone)]
pub struct VectorDocument {
    path: String,
    sections: serde_json::Map<String, Value>,
}

impl VectorDocument {
    /// Load a vector file and parse its top level as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Read`] if the file cannot be read and
    /// [`VectorError::Parse`] if the content is not JSON or its top level is
    /// not an object.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, VectorError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let content = std::fs::read_to_string(path).map_err(|e| VectorError::Read {
            path: display.clone(),
            reason: e.to_string(),
        })?;

        let value: Value = serde_json::from_str(&content).map_err(|e| VectorError::Parse {
            path: display.clone(),
            reason: format!("invalid JSON: {e}"),
        })?;

        match value {
            Value::Object(sections) => Ok(Self {
                path: display,
                sections,
            }),
            other => Err(VectorError::Parse {
                path: display,
                reason: format!(
                    "expected a JSON object at the top level, found {}",
                    json_type_name(&other)
                ),
            }),
        }
    }

    /// Source path of this document, for error context and reports.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Names of all top-level sections present in the document.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(|k| k.as_str())
    }

    /// Decode a named section into its vector entries.
    ///
    /// An absent key returns an empty sequence — the legal "no cases in this
    /// half" state, distinct from malformed content.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Section`] if the section exists but is not an
    /// array of entries, or if any entry has an empty `id` (ids are the sole
    /// correlation key in output; an empty id would make a failure report
    /// unattributable).
    pub fn decode_section(&self, key: &str) -> Result<Vec<VectorEntry>, VectorError> {
        let Some(raw) = self.sections.get(key) else {
            return Ok(Vec::new());
        };

        let entries: Vec<VectorEntry> =
            serde_json::from_value(raw.clone()).map_err(|e| VectorError::Section {
                path: self.path.clone(),
                key: key.to_string(),
                reason: format!("not an array of vector entries: {e}"),
            })?;

        if let Some(position) = entries.iter().position(|entry| entry.id.is_empty()) {
            return Err(VectorError::Section {
                path: self.path.clone(),
                key: key.to_string(),
                reason: format!("entry at index {position} has an empty id"),
            });
        }

        Ok(entries)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_parses_top_level_object() {
        let file = write_temp(r#"{"valid": [], "invalid": []}"#);
        let doc = VectorDocument::load(file.path()).unwrap();
        let names: Vec<&str> = doc.section_names().collect();
        assert_eq!(names, vec!["valid", "invalid"]);
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let err = VectorDocument::load("/nonexistent/vectors.json").unwrap_err();
        assert!(matches!(err, VectorError::Read { .. }), "got: {err}");
    }

    #[test]
    fn load_rejects_non_object_top_level() {
        let file = write_temp(r#"[1, 2, 3]"#);
        let err = VectorDocument::load(file.path()).unwrap_err();
        match err {
            VectorError::Parse { reason, .. } => {
                assert!(reason.contains("an array"), "reason: {reason}")
            }
            other => panic!("expected Parse, got: {other}"),
        }
    }

    #[test]
    fn load_rejects_invalid_json() {
        let file = write_temp("{not json");
        let err = VectorDocument::load(file.path()).unwrap_err();
        assert!(matches!(err, VectorError::Parse { .. }), "got: {err}");
    }

    #[test]
    fn absent_section_decodes_to_empty() {
        let file = write_temp(r#"{"valid_events": []}"#);
        let doc = VectorDocument::load(file.path()).unwrap();
        assert!(doc.decode_section("invalid_events").unwrap().is_empty());
    }

    #[test]
    fn section_decodes_entries_in_order() {
        let file = write_temp(
            r#"{"valid": [
                {"id": "a", "data": {"kind": "k"}, "note": "first"},
                {"id": "b", "data": 5}
            ]}"#,
        );
        let doc = VectorDocument::load(file.path()).unwrap();
        let entries = doc.decode_section("valid").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "a");
        assert_eq!(entries[0].note.as_deref(), Some("first"));
        assert_eq!(entries[0].payload(), Some(&json!({"kind": "k"})));
        assert_eq!(entries[1].id, "b");
        assert_eq!(entries[1].payload(), Some(&json!(5)));
    }

    #[test]
    fn null_and_absent_data_are_markers() {
        let file = write_temp(
            r#"{"invalid": [
                {"id": "explicit-null", "data": null},
                {"id": "no-data-field", "note": "field-level marker"}
            ]}"#,
        );
        let doc = VectorDocument::load(file.path()).unwrap();
        let entries = doc.decode_section("invalid").unwrap();
        assert!(entries[0].payload().is_none());
        assert!(entries[1].payload().is_none());
    }

    #[test]
    fn non_array_section_is_section_error() {
        let file = write_temp(r#"{"valid": {"id": "not-an-array"}}"#);
        let doc = VectorDocument::load(file.path()).unwrap();
        let err = doc.decode_section("valid").unwrap_err();
        assert!(matches!(err, VectorError::Section { .. }), "got: {err}");
    }

    #[test]
    fn entry_missing_id_is_section_error() {
        let file = write_temp(r#"{"valid": [{"data": 1}]}"#);
        let doc = VectorDocument::load(file.path()).unwrap();
        let err = doc.decode_section("valid").unwrap_err();
        assert!(matches!(err, VectorError::Section { .. }), "got: {err}");
    }

    #[test]
    fn entry_with_empty_id_is_section_error() {
        let file = write_temp(r#"{"valid": [{"id": "", "data": 1}]}"#);
        let doc = VectorDocument::load(file.path()).unwrap();
        let err = doc.decode_section("valid").unwrap_err();
        match err {
            VectorError::Section { reason, .. } => {
                assert!(reason.contains("empty id"), "reason: {reason}")
            }
            other => panic!("expected Section, got: {other}"),
        }
    }

    #[test]
    fn unrecognized_entry_fields_are_ignored() {
        let file = write_temp(r#"{"valid": [{"id": "x", "data": 1, "since": "3.1.0"}]}"#);
        let doc = VectorDocument::load(file.path()).unwrap();
        let entries = doc.decode_section("valid").unwrap();
        assert_eq!(entries[0].id, "x");
    }
}
