//! Batch command implementation.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::adapters::batch_csv::BatchDefaults;
use crate::app::api::{self, RunSwitches};
use crate::domain::configuration::load_config;
use crate::domain::{AppError, BatchExitPolicy, RowOutcome, RowStatus};

#[derive(Args)]
pub struct BatchArgs {
    /// CSV job list (company, role, template, job_description_file, ...)
    csv: PathBuf,
    /// Output directory
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
    /// Model identifier
    #[arg(short = 'm', long)]
    model: Option<String>,
    /// Skip PDF compilation
    #[arg(long)]
    no_compile: bool,
    /// Exit non-zero unless every row succeeds
    #[arg(long)]
    strict: bool,
    /// Write a JSON report of every row to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

pub fn run_batch(args: BatchArgs, config_path: Option<&Path>) -> Result<i32, AppError> {
    let config = load_config(config_path)?;
    let api_key = api::api_key_from_env()?;

    let defaults = BatchDefaults {
        output_dir: api::resolve_output_dir(args.output, &config)?,
        model: api::resolve_model(args.model, &config)?,
    };

    println!("Processing jobs from: {}", args.csv.display());
    let report = api::run_batch(
        &args.csv,
        &defaults,
        &config,
        api_key,
        RunSwitches { compile: !args.no_compile },
        print_outcome,
    )?;

    println!("\n{} succeeded, {} failed", report.succeeded(), report.failed());

    if let Some(path) = &args.report {
        api::write_report(path, &report)?;
        println!("✅ Report saved to: {}", path.display());
    }

    Ok(report.exit_code(BatchExitPolicy::from_strict(args.strict)))
}

fn print_outcome(outcome: &RowOutcome) {
    match &outcome.status {
        RowStatus::Succeeded { artifacts } => {
            println!(
                "✅ #{} {}: {}",
                outcome.row,
                outcome.job,
                artifacts.document.display()
            );
            for warning in &artifacts.warnings {
                println!("⚠️  #{} {}", outcome.row, warning);
            }
            if let Some(message) = &artifacts.message {
                println!("   email: {}", message.display());
            }
        }
        RowStatus::Failed { kind, message } => {
            println!("❌ #{} {} [{}]: {}", outcome.row, outcome.job, kind, message);
        }
    }
}
