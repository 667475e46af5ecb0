//! CLI Adapter.

mod batch;
mod run;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dialoguer::Input;
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "tailor")]
#[command(version)]
#[command(
    about = "Tailor a LaTeX résumé to a job posting with a text-generation model",
    long_about = None
)]
struct Cli {
    /// Configuration file (defaults to ./tailor.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Show progress diagnostics on stderr
    #[arg(short = 'v', long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tailor the résumé for a single job
    #[clap(visible_alias = "r")]
    Run(run::RunArgs),
    /// Tailor the résumé for every row of a CSV job list
    #[clap(visible_alias = "b")]
    Batch(batch::BatchArgs),
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<i32, AppError> = match cli.command {
        Commands::Run(args) => run::run_job(args, cli.config.as_deref()).map(|_| 0),
        Commands::Batch(args) => batch::run_batch(args, cli.config.as_deref()),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Use `value` when given; otherwise prompt on a terminal or fail.
fn value_or_prompt(value: Option<String>, field: &str, prompt: &str) -> Result<String, AppError> {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        return Ok(value);
    }
    if !is_interactive() {
        return Err(AppError::missing_input(field, format!("pass --{}", field.replace('_', "-"))));
    }

    let answer: String = Input::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(|e| AppError::config_error(format!("Failed to read {}: {}", field, e)))?;
    if answer.trim().is_empty() {
        return Err(AppError::missing_input(field, "no value entered"));
    }
    Ok(answer.trim().to_string())
}
