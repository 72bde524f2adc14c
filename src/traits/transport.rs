use std::path::Path;

use async_trait::async_trait;

use crate::errors::RunnerResult;

/// Raw transport result: HTTP status and response body. Owned transiently
/// by the orchestrator between submission and interpretation.
#[derive(Debug, Clone)]
pub struct ExecutionResponse {
    pub status: u16,
    pub body: String,
}

/// The seam to the remote execution engine: one submit operation per
/// artifact kind, each returning the raw response.
///
/// Implementations share one authenticated session for the lifetime of a
/// run. Any I/O failure is a transport error that aborts the whole run; it
/// is never converted into a failed case.
#[async_trait]
pub trait RecipeTransport {
    /// Submit a JSON recipe body for execution.
    async fn submit_recipe(&self, body: Vec<u8>) -> RunnerResult<ExecutionResponse>;

    /// Submit an XML project body verbatim.
    async fn submit_xml_project(&self, body: Vec<u8>) -> RunnerResult<ExecutionResponse>;

    /// Archive a composite project directory and submit it as a zip payload.
    async fn submit_composite_project(&self, dir: &Path) -> RunnerResult<ExecutionResponse>;
}
