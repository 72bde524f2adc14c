pub mod cli;
pub mod config;
pub mod errors;
pub mod implementations;
pub mod models;
pub mod runner;
pub mod traits;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::RunnerConfig;
pub use errors::{ RunnerError, RunnerResult };
pub use implementations::{
    dir_resolver::DirectoryResolver,
    http_transport::HttpTransport,
    property_filter::PropertyFilter,
};
pub use models::{
    artifact::{ Artifact, ArtifactKind },
    outcome::{ Outcome, OutcomeStatus },
    payload::ExecutionReport,
    report::{ ReportCase, RunReport },
};
pub use runner::{ RecipeRunner, RunAggregator, RunSummary };
pub use traits::{
    filter::TemplateFilter,
    resolver::FileSetResolver,
    transport::{ ExecutionResponse, RecipeTransport },
};
