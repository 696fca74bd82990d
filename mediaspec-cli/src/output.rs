// mediaspec-cli/src/output.rs
//
// Terminal output helpers shared by the commands.

use console::style;
use mediaspec_core::{ValidationReport, Violation};
use std::fmt::Display;
use std::path::Path;

/// Print a heading with colored styling and clear separation
pub fn print_heading(text: &str) {
    let line = style("=".repeat(50)).blue().bright();

    println!("\n{}", line);
    println!("{}", style(format!(" {} ", text)).bold().white().bright());
    println!("{}\n", line);
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("{}: {}", style(label).cyan().bright(), value);
}

pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

pub fn print_failure(message: &str) {
    println!("{} {}", style("✗").red().bold(), message);
}

/// Print an error to stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), message);
}

fn print_violation(violation: &Violation) {
    println!("    {} {}", style("-").yellow(), violation);
}

/// Print the outcome of validating one document.
///
/// # Arguments
///
/// * `path` - Document the report belongs to
/// * `report` - Violations found in the document
pub fn print_validation_report(path: &Path, report: &ValidationReport) {
    if report.is_valid() {
        print_success(&format!("{}: {} is valid", path.display(), report.record()));
        return;
    }

    print_failure(&format!(
        "{}: {} has {} violation(s)",
        path.display(),
        report.record(),
        report.len()
    ));
    for violation in report.violations() {
        print_violation(violation);
    }
}
