//! Run command implementation.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::app::api::{self, RunSwitches};
use crate::domain::configuration::load_config;
use crate::domain::inputs::parse_keyword_list;
use crate::domain::{AppError, JobSpec, KeywordSource, OutputArtifacts, Recruiter};

use super::value_or_prompt;

#[derive(Args)]
pub struct RunArgs {
    /// LaTeX résumé template
    #[arg(short = 't', long)]
    template: Option<PathBuf>,
    /// Company name
    #[arg(short = 'c', long)]
    company: Option<String>,
    /// Role title
    #[arg(short = 'r', long)]
    role: Option<String>,
    /// Job description text file
    #[arg(short = 'j', long)]
    job_description: Option<PathBuf>,
    /// Company pain points text file
    #[arg(short = 'p', long)]
    pain_points: Option<PathBuf>,
    /// Keywords to emphasise (repeatable, comma-separated values allowed)
    #[arg(short = 'k', long, num_args = 1..)]
    keywords: Vec<String>,
    /// File with one keyword per line (ignored when --keywords is given)
    #[arg(long)]
    keywords_file: Option<PathBuf>,
    /// Output directory
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
    /// Model identifier
    #[arg(short = 'm', long)]
    model: Option<String>,
    /// Skip PDF compilation
    #[arg(long)]
    no_compile: bool,
    /// Also write a recruiter email
    #[arg(short = 'e', long)]
    email: bool,
    /// Recruiter name (required with --email)
    #[arg(long)]
    recruiter: Option<String>,
    /// Recruiter position
    #[arg(long)]
    recruiter_position: Option<String>,
    /// Recruiter email address
    #[arg(long)]
    recruiter_email: Option<String>,
    /// Print the composed request without calling the model or writing files
    #[arg(long)]
    prompt_preview: bool,
}

pub fn run_job(args: RunArgs, config_path: Option<&Path>) -> Result<(), AppError> {
    let config = load_config(config_path)?;

    let template = value_or_prompt(path_arg(args.template), "template", "Résumé template path")?;
    let company = value_or_prompt(args.company, "company", "Company name")?;
    let role = value_or_prompt(args.role, "role", "Role title")?;
    let job_description =
        value_or_prompt(path_arg(args.job_description), "job_description", "Job description file")?;

    let output_dir = api::resolve_output_dir(args.output, &config)?;
    let model = api::resolve_model(args.model, &config)?;

    let mut spec = JobSpec::new(template, company, role, job_description, output_dir, model);
    if let Some(path) = args.pain_points {
        spec = spec.with_pain_points(path);
    }

    let inline: Vec<String> = args.keywords.iter().flat_map(|kw| parse_keyword_list(kw)).collect();
    if !inline.is_empty() {
        spec = spec.with_keywords(KeywordSource::Inline(inline));
    } else if let Some(path) = args.keywords_file {
        spec = spec.with_keywords(KeywordSource::File(path));
    }

    if args.email {
        spec = spec.with_message(Recruiter {
            name: args.recruiter,
            position: args.recruiter_position,
            email: args.recruiter_email,
        });
    }

    if args.prompt_preview {
        let request = api::preview(&spec)?;
        println!("=== SYSTEM ===\n{}\n", request.system);
        println!("=== PROMPT ===\n{}", request.prompt);
        return Ok(());
    }

    let api_key = api::api_key_from_env()?;
    println!("Tailoring résumé for {}...", spec.label());
    let artifacts =
        api::run_job(&spec, &config, api_key, RunSwitches { compile: !args.no_compile })?;
    print_artifacts(&artifacts);
    Ok(())
}

fn path_arg(path: Option<PathBuf>) -> Option<String> {
    path.map(|p| p.to_string_lossy().into_owned())
}

fn print_artifacts(artifacts: &OutputArtifacts) {
    println!("✅ Tailored résumé saved to: {}", artifacts.document.display());
    if let Some(rendered) = &artifacts.rendered {
        println!("✅ PDF saved to: {}", rendered.display());
    }
    for warning in &artifacts.warnings {
        println!("⚠️  {}", warning);
    }
    if let Some(message) = &artifacts.message {
        println!("✅ Recruiter email saved to: {}", message.display());
        if let Some(subject) = &artifacts.subject {
            println!("   Subject: {}", subject);
        }
    }
}
