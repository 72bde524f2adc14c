use serde::Deserialize;

/// Engine job states. The failure sentinel is `FAILED`; newer engine
/// versions have grown additional states, so unknown spellings fall through
/// to `Unknown` instead of failing the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Initialized,
    Queued,
    Running,
    Finished,
    Canceled,
    Failed,
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    pub fn is_failed(self) -> bool {
        self == JobStatus::Failed
    }
}

/// Per-step assertion states. `FAIL` and `FAILED` have both been used
/// across engine versions and normalize to the same failure condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum AssertionStatus {
    #[serde(rename = "OK", alias = "PASS", alias = "PASSED", alias = "VALID")]
    Ok,
    #[serde(rename = "FAIL", alias = "FAILED")]
    Fail,
    #[default]
    #[serde(other)]
    Unknown,
}

impl AssertionStatus {
    pub fn is_failure(self) -> bool {
        self == AssertionStatus::Fail
    }
}

/// Structured execution report returned by the engine.
///
/// Field names follow the engine's JSON. The timing field has been spelled
/// both `timeTaken` and `totalTime` across protocol versions; both are
/// accepted as the same semantic value.
#[derive(Debug, Clone, Deserialize)]
pub struct ExecutionReport {
    pub status: JobStatus,

    #[serde(rename = "timeTaken", alias = "totalTime", default)]
    pub time_taken: u64,

    #[serde(rename = "testSuiteResultReports", default)]
    pub suites: Vec<SuiteResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuiteResult {
    #[serde(rename = "testSuiteName", default)]
    pub name: String,

    #[serde(rename = "testCaseResultReports", default)]
    pub cases: Vec<CaseResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaseResult {
    #[serde(rename = "testCaseName", default)]
    pub name: String,

    #[serde(rename = "testStepResultReports", default)]
    pub steps: Vec<StepResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StepResult {
    #[serde(rename = "testStepName", default)]
    pub name: String,

    #[serde(rename = "assertionStatus", default)]
    pub assertion_status: AssertionStatus,

    #[serde(default)]
    pub messages: Vec<String>,
}
