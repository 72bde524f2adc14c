use std::env;
use std::path::{ Path, PathBuf };

use anyhow::{ anyhow, Result };
use log::debug;

use crate::cli::ui;
use crate::config::RunnerConfig;
use crate::implementations::dir_resolver::DirectoryResolver;
use crate::implementations::http_transport::HttpTransport;
use crate::implementations::property_filter::PropertyFilter;
use crate::runner::RecipeRunner;

/// Environment variable that skips the run, mirroring the `--skip` flag.
pub const SKIP_ENV_VAR: &str = "TESTPILOT_SKIP";

/// Flags collected from the `run` subcommand. `None` fields fall back to
/// the config file, then environment variables, then defaults.
#[derive(Debug, Default)]
pub struct RunOptions {
    pub endpoint: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub recipe_dir: Option<PathBuf>,
    pub report_dir: Option<PathBuf>,
    pub suite_name: Option<String>,
    pub run_async: Option<bool>,
    pub environment: Option<String>,
    pub host_and_port: Option<String>,
    pub callback: Option<String>,
    pub disable_filtering: bool,
    pub fail_on_failures: bool,
    pub skip: bool,
    pub properties: Vec<String>,
}

/// Run command: assemble the configuration, drive a full run, decide the
/// process-level signal.
pub async fn execute(config_file: Option<&Path>, options: RunOptions) -> Result<()> {
    let config = build_config(config_file, options)?;
    config.validate()?;

    ui::print_header("TestPilot");
    ui::print_result("Engine", &config.endpoint);
    ui::print_result("Recipe directory", &config.recipe_dir.display().to_string());

    let fail_on_failures = config.fail_on_failures;
    let transport = HttpTransport::new(&config)?;
    let runner = RecipeRunner::new(config, transport, DirectoryResolver, PropertyFilter);

    let summary = runner.execute().await?;

    if summary.skipped {
        ui::print_info("Run skipped");
        return Ok(());
    }

    ui::print_summary(&summary);

    if summary.has_failures() {
        if fail_on_failures {
            return Err(anyhow!("{} failures during test execution", summary.failure_count));
        }
        ui::print_warning("Case failures occurred but failure escalation is disabled");
        return Ok(());
    }

    if summary.report_path.is_some() {
        ui::print_success("All cases passed");
    }

    Ok(())
}

fn build_config(config_file: Option<&Path>, options: RunOptions) -> Result<RunnerConfig> {
    let mut config = match config_file {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            RunnerConfig::from_file(path)?
        }
        None => RunnerConfig::default(),
    };

    if let Some(endpoint) = options.endpoint {
        config.endpoint = endpoint;
    } else if config.endpoint.is_empty() {
        if let Ok(endpoint) = env::var("TESTPILOT_ENDPOINT") {
            config.endpoint = endpoint;
        }
    }

    if let Some(username) = options.username {
        config.username = username;
    } else if config.username.is_empty() {
        if let Ok(username) = env::var("TESTPILOT_USERNAME") {
            config.username = username;
        }
    }

    if let Some(password) = options.password {
        config.password = password;
    } else if config.password.is_empty() {
        if let Ok(password) = env::var("TESTPILOT_PASSWORD") {
            config.password = password;
        }
    }

    if let Some(recipe_dir) = options.recipe_dir {
        config.recipe_dir = recipe_dir;
    }
    if let Some(report_dir) = options.report_dir {
        config.report_dir = report_dir;
    }
    if let Some(suite_name) = options.suite_name {
        config.suite_name = suite_name;
    }
    if options.run_async.is_some() {
        config.run_async = options.run_async;
    }
    if options.environment.is_some() {
        config.environment = options.environment;
    }
    if options.host_and_port.is_some() {
        config.host_and_port = options.host_and_port;
    }
    if options.callback.is_some() {
        config.callback = options.callback;
    }
    if options.disable_filtering {
        config.disable_filtering = true;
    }
    if options.fail_on_failures {
        config.fail_on_failures = true;
    }
    if options.skip || env::var_os(SKIP_ENV_VAR).is_some() {
        config.skip = true;
    }

    for property in &options.properties {
        match property.split_once('=') {
            Some((name, value)) => {
                config.properties.insert(name.trim().to_string(), value.trim().to_string());
            }
            None => {
                return Err(anyhow!("invalid property {:?}, expected name=value", property));
            }
        }
    }

    Ok(config)
}
