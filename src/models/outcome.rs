use crate::errors::RunnerResult;
use crate::models::payload::ExecutionReport;

/// Pass/fail classification of one artifact execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeStatus {
    Passed,
    Failed,
}

/// Normalized interpretation of an engine response: classification, elapsed
/// time, and on failure a diagnostic trail drawn from the nested
/// suite/case/step results.
///
/// Invariant: `diagnostics` is empty iff the outcome passed.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub status: OutcomeStatus,
    pub elapsed_millis: u64,
    pub diagnostics: Vec<String>,
}

impl Outcome {
    /// Decode a response body into an outcome.
    ///
    /// An unparseable body is a transport-level error: the run cannot
    /// determine what happened, so it aborts instead of recording a failed
    /// case.
    pub fn interpret(body: &str) -> RunnerResult<Outcome> {
        let report: ExecutionReport = serde_json::from_str(body)?;
        Ok(Outcome::from_report(&report))
    }

    pub fn from_report(report: &ExecutionReport) -> Outcome {
        if !report.status.is_failed() {
            return Outcome {
                status: OutcomeStatus::Passed,
                elapsed_millis: report.time_taken,
                diagnostics: Vec::new(),
            };
        }

        let mut diagnostics = Vec::new();
        for suite in &report.suites {
            for case in &suite.cases {
                for step in &case.steps {
                    if step.assertion_status.is_failure() {
                        diagnostics.push(
                            format!(
                                "{} / {} / {}: {}",
                                suite.name,
                                case.name,
                                step.name,
                                step.messages.join("; ")
                            )
                        );
                    }
                }
            }
        }

        // A FAILED job may carry no step-level assertion failures at all
        // (for example a project-level setup error).
        if diagnostics.is_empty() {
            diagnostics.push("execution reported FAILED with no step diagnostics".to_string());
        }

        Outcome {
            status: OutcomeStatus::Failed,
            elapsed_millis: report.time_taken,
            diagnostics,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.status == OutcomeStatus::Failed
    }
}
