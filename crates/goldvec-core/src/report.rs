//! # Assertion Results & Suite Reports
//!
//! Each vector entry is evaluated as an independently reported unit: a
//! failure in one entry never aborts evaluation of its siblings. The types
//! here carry just enough identifying context (entry id, expectation group,
//! engine diagnostic) to debug a failure from the report alone.

use std::fmt;

use serde::Serialize;

/// Which validation decision the vector author asserted for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    /// The entry sits in a valid section: the engine must accept its payload.
    MustAccept,
    /// The entry sits in an invalid section: the engine must reject it.
    MustReject,
}

impl Expectation {
    /// Group prefix used in assertion labels: `valid` or `invalid`.
    pub fn group(&self) -> &'static str {
        match self {
            Expectation::MustAccept => "valid",
            Expectation::MustReject => "invalid",
        }
    }
}

/// Outcome of a single assertion.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum Outcome {
    /// The engine's decision matched the author's expectation.
    Pass,
    /// The engine's decision contradicted the author's expectation.
    Fail {
        /// What went wrong, including engine diagnostics where they exist.
        diagnostic: String,
    },
}

/// One entry's assertion, reported as a discrete unit.
#[derive(Debug, Clone, Serialize)]
pub struct AssertionResult {
    /// The entry's id — the sole correlation key in output.
    pub id: String,
    /// The author-asserted expectation.
    pub expectation: Expectation,
    /// Whether the engine agreed.
    pub outcome: Outcome,
}

impl AssertionResult {
    /// A passing assertion.
    pub fn pass(id: impl Into<String>, expectation: Expectation) -> Self {
        Self {
            id: id.into(),
            expectation,
            outcome: Outcome::Pass,
        }
    }

    /// A failing assertion with a diagnostic.
    pub fn fail(
        id: impl Into<String>,
        expectation: Expectation,
        diagnostic: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            expectation,
            outcome: Outcome::Fail {
                diagnostic: diagnostic.into(),
            },
        }
    }

    /// Whether the assertion passed.
    pub fn is_pass(&self) -> bool {
        matches!(self.outcome, Outcome::Pass)
    }

    /// The failure diagnostic, if any.
    pub fn diagnostic(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Pass => None,
            Outcome::Fail { diagnostic } => Some(diagnostic),
        }
    }

    /// Subtest-style label: `valid/<id>` or `invalid/<id>`.
    pub fn label(&self) -> String {
        format!("{}/{}", self.expectation.group(), self.id)
    }
}

/// All assertion results of one suite run.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    /// Suite name, from the spec that was run.
    pub suite: String,
    /// Logical schema name the entries were validated against.
    pub schema_name: String,
    /// Vector file the entries came from.
    pub vector_file: String,
    /// Per-entry results, valid group first, in section order.
    pub results: Vec<AssertionResult>,
}

impl SuiteReport {
    /// Number of passing assertions.
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.is_pass()).count()
    }

    /// Number of failing assertions.
    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    /// Whether every assertion passed.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// The failing assertions, in report order.
    pub fn failures(&self) -> impl Iterator<Item = &AssertionResult> {
        self.results.iter().filter(|r| !r.is_pass())
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} passed, {} failed",
            self.suite,
            self.passed(),
            self.failed()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> SuiteReport {
        SuiteReport {
            suite: "domain-events".to_string(),
            schema_name: "domain-event".to_string(),
            vector_file: "domain-event/events.json".to_string(),
            results: vec![
                AssertionResult::pass("ev-min", Expectation::MustAccept),
                AssertionResult::fail(
                    "ev-no-actor",
                    Expectation::MustReject,
                    "schema accepted a payload the vector declares invalid",
                ),
            ],
        }
    }

    #[test]
    fn counts_and_success() {
        let report = sample_report();
        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 1);
        assert!(!report.is_success());
    }

    #[test]
    fn failures_carry_id_and_diagnostic() {
        let report = sample_report();
        let failures: Vec<&AssertionResult> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].id, "ev-no-actor");
        assert!(failures[0].diagnostic().unwrap().contains("accepted"));
    }

    #[test]
    fn labels_carry_group_prefix() {
        let report = sample_report();
        assert_eq!(report.results[0].label(), "valid/ev-min");
        assert_eq!(report.results[1].label(), "invalid/ev-no-actor");
    }

    #[test]
    fn display_summarizes_counts() {
        let report = sample_report();
        assert_eq!(report.to_string(), "domain-events: 1 passed, 1 failed");
    }
}
