//! Terminal presentation of validation reports
//!
//! Pass lines go to stdout; warnings and errors go to stderr. Colour is
//! cosmetic only and, in auto mode, is applied when both streams are
//! interactive terminals. Validation itself never prints; everything here
//! renders a finished [`Report`].

use colored::Colorize;
use std::io::IsTerminal;
use std::path::Path;

use crate::config::ColorChoice;
use crate::report::{Report, Severity};

/// Renders a [`Report`] to stdout/stderr
pub struct Printer {
    quiet: bool,
}

impl Printer {
    pub fn new(color: ColorChoice, quiet: bool) -> Self {
        match color {
            ColorChoice::Always => colored::control::set_override(true),
            ColorChoice::Never => colored::control::set_override(false),
            ColorChoice::Auto => {
                if !(std::io::stdout().is_terminal() && std::io::stderr().is_terminal()) {
                    colored::control::set_override(false);
                }
            }
        }
        Self { quiet }
    }

    pub fn print_header(&self, path: &Path) {
        if !self.quiet {
            println!();
            println!("{}", format!("Validating: {}", path.display()).bold());
            println!();
        }
    }

    /// Print every finding in order
    pub fn print_findings(&self, report: &Report) {
        for finding in report.findings() {
            match finding.severity {
                Severity::Pass => {
                    if !self.quiet {
                        println!("  {}  {}", "✓ PASS".green(), finding.message);
                    }
                }
                Severity::Warning => {
                    eprintln!("  {}  {}", "⚠ WARN".yellow(), finding.message);
                }
                Severity::Error => {
                    eprintln!("  {}  {}", "✗ FAIL".red(), finding.message);
                }
            }
        }
    }

    pub fn print_summary(&self, report: &Report) {
        if report.is_success() {
            let entries = report.entry_count().unwrap_or(0);
            println!();
            println!(
                "{}",
                format!("✓ All checks passed, {entries} entries validated.")
                    .green()
                    .bold()
            );
        } else {
            if report.warning_count() > 0 {
                eprintln!();
                eprintln!(
                    "{}",
                    format!("{} warning(s) found.", report.warning_count()).yellow()
                );
            }
            if report.error_count() > 0 {
                eprintln!();
                eprintln!(
                    "{}",
                    format!(
                        "✗ {} error(s) found. Fix the issues above and re-run.",
                        report.error_count()
                    )
                    .red()
                    .bold()
                );
            }
        }
    }
}
