use anyhow::Result;
use clap::Parser;
use log::info;

use testpilot::cli::commands::run::{ self, RunOptions };
use testpilot::cli::{ Commands, TestPilotCli };

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Parse the command line arguments
    let cli = TestPilotCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    // Handle commands
    match cli.command {
        Commands::Run {
            endpoint,
            username,
            password,
            recipe_dir,
            report_dir,
            suite_name,
            run_async,
            environment,
            host_and_port,
            callback,
            disable_filtering,
            fail_on_failures,
            skip,
            properties,
        } => {
            let options = RunOptions {
                endpoint,
                username,
                password,
                recipe_dir,
                report_dir,
                suite_name,
                run_async,
                environment,
                host_and_port,
                callback,
                disable_filtering,
                fail_on_failures,
                skip,
                properties,
            };

            run::execute(cli.config.as_deref(), options).await
        }
    }
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
