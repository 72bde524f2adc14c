use thiserror::Error;

/// Error taxonomy for a test run. Every variant here is fatal to the run:
/// a FAILED outcome reported by the engine is data, not an error, and never
/// appears in this enum.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Execution engine returned HTTP {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Malformed execution report: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("Property filtering failed for {path}: {message}")]
    Filter { path: String, message: String },

    #[error("Failed to archive composite project: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Failed to write report: {0}")]
    Report(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type specific to test-run operations
pub type RunnerResult<T> = Result<T, RunnerError>;
