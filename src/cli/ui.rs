use colored::*;

use crate::runner::RunSummary;

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Print the run totals block.
pub fn print_summary(summary: &RunSummary) {
    println!();
    print_result("Recipes run", &summary.recipes_run.to_string());
    print_result("Projects run", &summary.projects_run.to_string());

    if summary.failure_count > 0 {
        println!("{}: {}", "Failures".bold(), summary.failure_count.to_string().red().bold());
    } else {
        print_result("Failures", &summary.failure_count.to_string());
    }

    if let Some(path) = &summary.report_path {
        print_result("Report", &path.display().to_string());
    }
}
