use std::collections::BTreeMap;
use std::fs;
use std::path::{ Path, PathBuf };

use chrono::{ DateTime, SecondsFormat, Utc };

use crate::errors::{ RunnerError, RunnerResult };

/// File name of the generated report inside the report directory.
pub const REPORT_FILE_NAME: &str = "recipe-report.xml";

/// Placeholder emitted where JUnit expects a stack trace; the engine does
/// not return one.
pub const MISSING_STACKTRACE: &str = "<missing stacktrace>";

/// One test case in the aggregated run report.
#[derive(Debug, Clone)]
pub struct ReportCase {
    pub name: String,
    pub time_millis: u64,
    pub properties: BTreeMap<String, String>,
    pub failure: Option<CaseFailure>,
}

#[derive(Debug, Clone)]
pub struct CaseFailure {
    pub message: String,
    pub stack_trace: String,
}

/// The aggregate report for one run.
///
/// Cases are appended in processing order and that order is preserved in the
/// serialized document.
#[derive(Debug, Clone)]
pub struct RunReport {
    suite_name: String,
    timestamp: DateTime<Utc>,
    cases: Vec<ReportCase>,
}

impl RunReport {
    pub fn new(suite_name: impl Into<String>) -> RunReport {
        RunReport {
            suite_name: suite_name.into(),
            timestamp: Utc::now(),
            cases: Vec::new(),
        }
    }

    pub fn add_case(
        &mut self,
        name: impl Into<String>,
        time_millis: u64,
        properties: BTreeMap<String, String>
    ) {
        self.cases.push(ReportCase {
            name: name.into(),
            time_millis,
            properties,
            failure: None,
        });
    }

    pub fn add_case_with_failure(
        &mut self,
        name: impl Into<String>,
        time_millis: u64,
        properties: BTreeMap<String, String>,
        message: impl Into<String>
    ) {
        self.cases.push(ReportCase {
            name: name.into(),
            time_millis,
            properties,
            failure: Some(CaseFailure {
                message: message.into(),
                stack_trace: MISSING_STACKTRACE.to_string(),
            }),
        });
    }

    pub fn suite_name(&self) -> &str {
        &self.suite_name
    }

    pub fn cases(&self) -> &[ReportCase] {
        &self.cases
    }

    /// Derived failure count; always equals the number of recorded cases
    /// carrying a failure, no matter how often it is read.
    pub fn failure_count(&self) -> usize {
        self.cases
            .iter()
            .filter(|case| case.failure.is_some())
            .count()
    }

    fn total_time_millis(&self) -> u64 {
        self.cases
            .iter()
            .map(|case| case.time_millis)
            .sum()
    }

    /// Serialize to a JUnit-style XML document.
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str(
            &format!(
                "<testsuite name=\"{}\" tests=\"{}\" failures=\"{}\" time=\"{}\" timestamp=\"{}\">\n",
                xml_escape(&self.suite_name),
                self.cases.len(),
                self.failure_count(),
                format_seconds(self.total_time_millis()),
                self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
            )
        );

        for case in &self.cases {
            xml.push_str(
                &format!(
                    "  <testcase name=\"{}\" time=\"{}\">\n",
                    xml_escape(&case.name),
                    format_seconds(case.time_millis)
                )
            );

            if !case.properties.is_empty() {
                xml.push_str("    <properties>\n");
                for (name, value) in &case.properties {
                    xml.push_str(
                        &format!(
                            "      <property name=\"{}\" value=\"{}\"/>\n",
                            xml_escape(name),
                            xml_escape(value)
                        )
                    );
                }
                xml.push_str("    </properties>\n");
            }

            if let Some(failure) = &case.failure {
                xml.push_str(
                    &format!(
                        "    <failure message=\"{}\">{}</failure>\n",
                        xml_escape(&failure.message),
                        xml_escape(&failure.stack_trace)
                    )
                );
            }

            xml.push_str("  </testcase>\n");
        }

        xml.push_str("</testsuite>\n");
        xml
    }

    /// Write the report into `dir` as `recipe-report.xml`, creating the
    /// directory if it is missing.
    pub fn save(&self, dir: &Path) -> RunnerResult<PathBuf> {
        fs
            ::create_dir_all(dir)
            .map_err(|e|
                RunnerError::Report(format!("could not create {}: {}", dir.display(), e))
            )?;

        let path = dir.join(REPORT_FILE_NAME);
        fs
            ::write(&path, self.to_xml())
            .map_err(|e|
                RunnerError::Report(format!("could not write {}: {}", path.display(), e))
            )?;

        Ok(path)
    }
}

/// JUnit `time` attributes are seconds with millisecond precision.
fn format_seconds(millis: u64) -> String {
    format!("{:.3}", (millis as f64) / 1000.0)
}

/// Minimal XML escaping for attribute values and text nodes.
fn xml_escape(s: &str) -> String {
    s
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
