use std::collections::HashMap;
use std::fs;
use std::path::{ Path, PathBuf };

use log::debug;
use serde::{ Deserialize, Serialize };

use crate::errors::{ RunnerError, RunnerResult };

/// File in the recipe root holding default run properties, one `name=value`
/// per line. Explicit overrides win on key collision.
pub const RECIPE_PROPERTIES_FILE: &str = "recipe.properties";

/// Connection parameters and execution flags for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Base URL of the remote execution engine
    pub endpoint: String,

    /// Username for HTTP basic authentication
    pub username: String,

    /// Password for HTTP basic authentication
    pub password: String,

    /// Directory scanned for recipes, projects and composite directories
    pub recipe_dir: PathBuf,

    /// Directory the JUnit report is written into
    pub report_dir: PathBuf,

    /// Test-suite name carried by the generated report
    pub suite_name: String,

    /// Asynchronous execution switch, omitted from requests unless set
    pub run_async: Option<bool>,

    /// Engine environment name
    pub environment: Option<String>,

    /// Host and port override forwarded to the engine
    pub host_and_port: Option<String>,

    /// Callback URL the engine reports completion to
    pub callback: Option<String>,

    /// Disables property filtering of JSON recipes
    pub disable_filtering: bool,

    /// Escalate case failures into a run-level failure
    pub fail_on_failures: bool,

    /// Skip the entire run unconditionally
    pub skip: bool,

    /// Explicit name=value substitution properties
    pub properties: HashMap<String, String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            endpoint: String::new(),
            username: String::new(),
            password: String::new(),
            recipe_dir: PathBuf::from("recipes"),
            report_dir: PathBuf::from("reports"),
            suite_name: "recipes".to_string(),
            run_async: None,
            environment: None,
            host_and_port: None,
            callback: None,
            disable_filtering: false,
            fail_on_failures: false,
            skip: false,
            properties: HashMap::new(),
        }
    }
}

impl RunnerConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> RunnerResult<RunnerConfig> {
        let contents = fs
            ::read_to_string(path)
            .map_err(|e|
                RunnerError::Config(format!("could not read {}: {}", path.display(), e))
            )?;

        serde_yaml
            ::from_str(&contents)
            .map_err(|e| RunnerError::Config(format!("could not parse {}: {}", path.display(), e)))
    }

    /// Check that everything needed before the first submission is present.
    pub fn validate(&self) -> RunnerResult<()> {
        if self.endpoint.is_empty() {
            return Err(RunnerError::Config("endpoint is required".to_string()));
        }

        reqwest::Url
            ::parse(&self.endpoint)
            .map_err(|e|
                RunnerError::Config(format!("invalid endpoint {}: {}", self.endpoint, e))
            )?;

        if self.username.is_empty() || self.password.is_empty() {
            return Err(RunnerError::Config("username and password are required".to_string()));
        }

        Ok(())
    }

    /// Effective run properties: `recipe.properties` from the recipe root,
    /// if present, with explicit overrides applied on top.
    pub fn run_properties(&self) -> RunnerResult<HashMap<String, String>> {
        let mut properties = HashMap::new();

        let file = self.recipe_dir.join(RECIPE_PROPERTIES_FILE);
        if file.is_file() {
            let contents = fs::read_to_string(&file)?;
            properties = parse_properties(&contents);
            debug!("Read {} properties from {}", properties.len(), file.display());
        }

        for (name, value) in &self.properties {
            properties.insert(name.clone(), value.clone());
        }

        Ok(properties)
    }
}

/// Parse `name=value` property lines; `#` and `!` start comment lines.
fn parse_properties(contents: &str) -> HashMap<String, String> {
    let mut properties = HashMap::new();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        if let Some((name, value)) = line.split_once('=') {
            properties.insert(name.trim().to_string(), value.trim().to_string());
        }
    }

    properties
}
