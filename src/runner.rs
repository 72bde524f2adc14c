use std::collections::{ BTreeMap, HashMap };
use std::fs;
use std::path::PathBuf;

use log::{ error, info, warn };

use crate::config::RunnerConfig;
use crate::errors::RunnerResult;
use crate::models::artifact::{ Artifact, ArtifactKind };
use crate::models::outcome::Outcome;
use crate::models::report::RunReport;
use crate::traits::filter::TemplateFilter;
use crate::traits::resolver::FileSetResolver;
use crate::traits::transport::RecipeTransport;

/// What one run amounted to, for the caller's escalation decision.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub recipes_run: usize,
    pub projects_run: usize,
    pub failure_count: usize,
    pub report_path: Option<PathBuf>,
    pub skipped: bool,
}

impl RunSummary {
    fn skipped() -> RunSummary {
        RunSummary {
            skipped: true,
            ..RunSummary::default()
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failure_count > 0
    }
}

/// Sequential accumulation of per-artifact outcomes into the run report.
///
/// Cases are appended in processing order; recipes and projects are counted
/// separately for the operator-facing summary.
pub struct RunAggregator {
    report: RunReport,
    recipes_run: usize,
    projects_run: usize,
}

impl RunAggregator {
    pub fn new(suite_name: &str) -> RunAggregator {
        RunAggregator {
            report: RunReport::new(suite_name),
            recipes_run: 0,
            projects_run: 0,
        }
    }

    pub fn record(
        &mut self,
        artifact: &Artifact,
        outcome: &Outcome,
        properties: &HashMap<String, String>
    ) {
        match artifact.kind {
            ArtifactKind::RecipeJson => {
                self.recipes_run += 1;
            }
            ArtifactKind::ProjectXml | ArtifactKind::CompositeDirectory => {
                self.projects_run += 1;
            }
        }

        let properties: BTreeMap<String, String> = properties
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        if outcome.is_failed() {
            self.report.add_case_with_failure(
                artifact.name(),
                outcome.elapsed_millis,
                properties,
                outcome.diagnostics.join("\n")
            );
        } else {
            self.report.add_case(artifact.name(), outcome.elapsed_millis, properties);
        }
    }

    pub fn recipes_run(&self) -> usize {
        self.recipes_run
    }

    pub fn projects_run(&self) -> usize {
        self.projects_run
    }

    pub fn failure_count(&self) -> usize {
        self.report.failure_count()
    }

    /// Hand over the finished report. The failure count is derived from the
    /// recorded cases, so repeated reads agree.
    pub fn finish(self) -> RunReport {
        self.report
    }
}

/// Drives one run: resolve, then per artifact classify, submit, interpret
/// and aggregate, strictly sequentially, then write the report.
///
/// The loop is two-tier: a FAILED outcome is recorded and the loop
/// continues; a transport error propagates immediately and the report is
/// never written.
pub struct RecipeRunner<T, R, F> {
    config: RunnerConfig,
    transport: T,
    resolver: R,
    filter: F,
}

impl<T, R, F> RecipeRunner<T, R, F> where T: RecipeTransport, R: FileSetResolver, F: TemplateFilter {
    pub fn new(config: RunnerConfig, transport: T, resolver: R, filter: F) -> Self {
        RecipeRunner {
            config,
            transport,
            resolver,
            filter,
        }
    }

    pub async fn execute(&self) -> RunnerResult<RunSummary> {
        if self.config.skip {
            info!("Skipping API test run");
            return Ok(RunSummary::skipped());
        }

        let root = &self.config.recipe_dir;
        if !root.is_dir() {
            warn!("Missing recipe directory [{}]", root.display());
            return Ok(RunSummary::default());
        }

        let files = self.resolver.resolve(root)?;
        if files.is_empty() {
            warn!("Missing recipes in directory [{}]", root.display());
            return Ok(RunSummary::default());
        }

        let properties = self.config.run_properties()?;
        let mut aggregator = RunAggregator::new(&self.config.suite_name);

        for file in &files {
            let artifact = match Artifact::classify(root, file) {
                Some(artifact) => artifact,
                None => {
                    warn!("Unexpected filename: {}", file.display());
                    continue;
                }
            };

            let outcome = self.run_artifact(&artifact, &properties).await?;
            if outcome.is_failed() {
                error!("Failed {}", artifact.name());
                for line in &outcome.diagnostics {
                    error!("- {}", line);
                }
            }

            aggregator.record(&artifact, &outcome, &properties);
        }

        let recipes_run = aggregator.recipes_run();
        let projects_run = aggregator.projects_run();
        let failure_count = aggregator.failure_count();

        info!("--------------------------------------");
        info!("Recipes run: {}", recipes_run);
        info!("Projects run: {}", projects_run);
        info!("Failures: {}", failure_count);

        let report = aggregator.finish();
        let report_path = report.save(&self.config.report_dir)?;
        info!("Report written to {}", report_path.display());

        Ok(RunSummary {
            recipes_run,
            projects_run,
            failure_count,
            report_path: Some(report_path),
            skipped: false,
        })
    }

    /// Submit one artifact and interpret the response. Only a
    /// transport-tier error comes back as `Err`; a FAILED outcome is data.
    async fn run_artifact(
        &self,
        artifact: &Artifact,
        properties: &HashMap<String, String>
    ) -> RunnerResult<Outcome> {
        let path = artifact.absolute_path(&self.config.recipe_dir);

        let response = match artifact.kind {
            ArtifactKind::RecipeJson => {
                info!("Running recipe {}", artifact.name());
                let body = if self.config.disable_filtering {
                    fs::read(&path)?
                } else {
                    self.filter.filter(&path, properties)?
                };
                self.transport.submit_recipe(body).await?
            }
            ArtifactKind::ProjectXml => {
                info!("Executing project {}", artifact.name());
                let body = fs::read(&path)?;
                self.transport.submit_xml_project(body).await?
            }
            ArtifactKind::CompositeDirectory => {
                info!("Executing composite project {}", artifact.name());
                self.transport.submit_composite_project(&path).await?
            }
        };

        Outcome::interpret(&response.body)
    }
}
