use clap::{ Parser, Subcommand };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "testpilot",
    about = "Runs declarative API test recipes on a remote execution engine",
    version,
    author,
    long_about = None
)]
pub struct TestPilotCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Path to a YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Execute every recipe, project and composite directory in the recipe
    /// directory and write a JUnit report
    Run {
        /// Base URL of the remote execution engine
        #[arg(short, long)]
        endpoint: Option<String>,

        /// Username for HTTP basic authentication
        #[arg(short, long)]
        username: Option<String>,

        /// Password for HTTP basic authentication
        #[arg(short, long)]
        password: Option<String>,

        /// Directory containing the test artifacts
        #[arg(short, long)]
        recipe_dir: Option<PathBuf>,

        /// Directory the JUnit report is written into
        #[arg(long)]
        report_dir: Option<PathBuf>,

        /// Test-suite name carried by the report
        #[arg(long)]
        suite_name: Option<String>,

        /// Request asynchronous execution (true or false)
        #[arg(long)]
        run_async: Option<bool>,

        /// Engine environment name
        #[arg(long)]
        environment: Option<String>,

        /// Host and port override forwarded to the engine
        #[arg(long)]
        host_and_port: Option<String>,

        /// Callback URL the engine reports completion to
        #[arg(long)]
        callback: Option<String>,

        /// Disable property filtering of JSON recipes
        #[arg(long, default_value = "false")]
        disable_filtering: bool,

        /// Escalate case failures into a run-level failure
        #[arg(long, default_value = "false")]
        fail_on_failures: bool,

        /// Skip the run entirely
        #[arg(long, default_value = "false")]
        skip: bool,

        /// Substitution property, name=value (repeatable)
        #[arg(short = 'D', long = "property", value_name = "NAME=VALUE")]
        properties: Vec<String>,
    },
}
