//! # Conformance Executor
//!
//! The heart of the runner: evaluates every vector entry as an isolated
//! assertion against the compiled schema. A failure in one entry never
//! aborts evaluation of sibling entries within the same group or suite;
//! every entry reads only its own payload and the shared, immutable
//! validator, so evaluation order carries no meaning.

use jsonschema::Validator;

use goldvec_core::{AssertionResult, Expectation, VectorEntry};
use goldvec_schema::violations;

/// Validate both entry groups against `schema` and report one assertion per
/// evaluated entry.
///
/// - **Valid group**: every entry's payload must be accepted. A rejection is
///   recorded with the entry's id and the engine's violation diagnostics.
///   A valid-group entry with no payload is a fixture defect and is recorded
///   as a per-entry failure rather than aborting its siblings.
/// - **Invalid group**: entries without a payload are skipped — marker-only
///   entries carry no validation obligation. Otherwise the payload must be
///   rejected; an acceptance is recorded with the entry's id (there is no
///   engine diagnostic for "accepted when rejection was required").
///
/// Entry ids are used as the sole correlation key in output; uniqueness
/// within a section is not enforced here.
pub fn run(
    schema: &Validator,
    valid: &[VectorEntry],
    invalid: &[VectorEntry],
) -> Vec<AssertionResult> {
    let mut results = Vec::with_capacity(valid.len() + invalid.len());

    for entry in valid {
        let Some(data) = entry.payload() else {
            results.push(AssertionResult::fail(
                &entry.id,
                Expectation::MustAccept,
                "entry in a valid section carries no data payload",
            ));
            continue;
        };
        let found = violations(schema, data);
        if found.is_empty() {
            results.push(AssertionResult::pass(&entry.id, Expectation::MustAccept));
        } else {
            let diagnostic = found
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            results.push(AssertionResult::fail(
                &entry.id,
                Expectation::MustAccept,
                format!("expected valid, got: {diagnostic}"),
            ));
        }
    }

    for entry in invalid {
        let Some(data) = entry.payload() else {
            // Marker-only entry: documents an invalid field or scenario
            // without a reproducible payload. No assertion.
            continue;
        };
        if schema.is_valid(data) {
            results.push(AssertionResult::fail(
                &entry.id,
                Expectation::MustReject,
                "expected invalid, but validation passed",
            ));
        } else {
            results.push(AssertionResult::pass(&entry.id, Expectation::MustReject));
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn compile(schema: Value) -> Validator {
        jsonschema::validator_for(&schema).unwrap()
    }

    fn entry(id: &str, data: Value) -> VectorEntry {
        VectorEntry {
            id: id.to_string(),
            data: Some(data),
            note: None,
        }
    }

    fn marker(id: &str) -> VectorEntry {
        VectorEntry {
            id: id.to_string(),
            data: None,
            note: Some("field-level marker".to_string()),
        }
    }

    #[test]
    fn valid_entry_accepted_passes() {
        let schema = compile(json!({"type": "string"}));
        let results = run(&schema, &[entry("s1", json!("x"))], &[]);
        assert_eq!(results.len(), 1);
        assert!(results[0].is_pass());
        assert_eq!(results[0].label(), "valid/s1");
    }

    #[test]
    fn valid_entry_rejected_fails_with_diagnostic() {
        let schema = compile(json!({"type": "string"}));
        let results = run(&schema, &[entry("s2", json!(5))], &[]);
        assert!(!results[0].is_pass());
        let diagnostic = results[0].diagnostic().unwrap();
        assert!(diagnostic.contains("expected valid"), "got: {diagnostic}");
    }

    #[test]
    fn invalid_entry_rejected_passes() {
        let schema = compile(json!({"type": "string"}));
        let results = run(&schema, &[], &[entry("n1", json!(5))]);
        assert_eq!(results.len(), 1);
        assert!(results[0].is_pass());
        assert_eq!(results[0].label(), "invalid/n1");
    }

    #[test]
    fn invalid_entry_accepted_fails() {
        let schema = compile(json!({"type": "string"}));
        let results = run(&schema, &[], &[entry("n2", json!("looks fine"))]);
        assert!(!results[0].is_pass());
        assert_eq!(results[0].id, "n2");
    }

    #[test]
    fn marker_entries_contribute_zero_assertions() {
        let schema = compile(json!({"type": "string"}));
        let results = run(
            &schema,
            &[],
            &[marker("m1"), entry("n3", json!(5)), marker("m2")],
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "n3");
    }

    #[test]
    fn valid_entry_without_payload_is_a_recorded_failure() {
        let schema = compile(json!({"type": "string"}));
        let results = run(&schema, &[marker("v-missing"), entry("v-ok", json!("x"))], &[]);
        assert_eq!(results.len(), 2);
        assert!(!results[0].is_pass());
        assert!(results[0].diagnostic().unwrap().contains("no data payload"));
        // The defective sibling did not stop evaluation.
        assert!(results[1].is_pass());
    }

    #[test]
    fn failures_do_not_abort_siblings() {
        let schema = compile(json!({"type": "string"}));
        let results = run(
            &schema,
            &[entry("a", json!(1)), entry("b", json!("ok"))],
            &[entry("c", json!("accepted")), entry("d", json!(2))],
        );
        assert_eq!(results.len(), 4);
        let passed: Vec<&str> = results
            .iter()
            .filter(|r| r.is_pass())
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(passed, vec!["b", "d"]);
    }

    #[test]
    fn end_to_end_required_kind_example() {
        let schema = compile(json!({"type": "object", "required": ["kind"]}));
        let results = run(
            &schema,
            &[entry("a", json!({"kind": "k"}))],
            &[entry("b", json!({}))],
        );
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.is_pass()));
    }

    #[test]
    fn execution_is_idempotent() {
        let schema = compile(json!({"type": "object", "required": ["kind"]}));
        let valid = [entry("a", json!({"kind": "k"}))];
        let invalid = [entry("b", json!({}))];
        let first = run(&schema, &valid, &invalid);
        let second = run(&schema, &valid, &invalid);
        assert_eq!(first.len(), second.len());
        for (x, y) in first.iter().zip(second.iter()) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.is_pass(), y.is_pass());
        }
    }
}
