//! Tracked Repos Validator CLI
//!
//! Validates the tracked repository manifest and exits 0 when every check
//! passes, 1 otherwise. Run with no arguments from anywhere inside the
//! repository; the manifest is found by searching upward from the current
//! directory.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use tracked_repos_validator::{validate_file, Printer, ValidatorConfig};

#[derive(Parser)]
#[command(name = "validate-tracked-repos")]
#[command(about = "Validate the tracked repository manifest", version)]
struct Cli {
    /// Explicit path to the manifest (skips upward search)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Path to a config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Suppress pass lines; warnings and errors are still printed
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Returns the verdict: `true` when every check passed.
fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = ValidatorConfig::load_from(cli.config.as_deref())?;

    let input = match &cli.file {
        Some(path) => path.clone(),
        None => {
            let cwd = std::env::current_dir()?;
            config.locate_input(&cwd)?
        }
    };
    tracing::debug!(path = %input.display(), "resolved manifest path");

    let printer = Printer::new(config.output.color, cli.quiet);
    printer.print_header(&input);

    let report = validate_file(&input);
    printer.print_findings(&report);
    printer.print_summary(&report);

    Ok(report.is_success())
}
