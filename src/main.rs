//! Resume ranker: rank candidate resumes against a job description

mod cli;
mod config;
mod error;
mod input;
mod output;
mod ranking;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::{Config, FailurePolicy, OutputFormat};
use error::{ResumeRankerError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use input::document::Document;
use input::manager::InputManager;
use log::{error, info};
use output::formatter::ReportGenerator;
use output::report::RankingReport;
use ranking::ranker::{Candidate, Ranker};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Rank {
            job,
            resumes,
            output,
            save,
            skip_invalid,
            top,
        } => {
            rank_resumes(job, resumes, output, save, skip_invalid, top, config).await?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Current configuration\n");
                println!("Failure policy: {:?}", config.ranking.failure_policy);
                println!("Min token length: {}", config.ranking.min_token_length);
                println!("Output format: {:?}", config.output.format);
                println!("Score precision: {}", config.output.score_precision);
                println!("Color output: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults.");
            }
        },
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn rank_resumes(
    job: PathBuf,
    resumes: Vec<PathBuf>,
    output: String,
    save: Option<PathBuf>,
    skip_invalid: bool,
    top: Option<usize>,
    config: Config,
) -> Result<()> {
    cli::validate_file_extension(&job, &["txt", "md"])
        .map_err(|e| ResumeRankerError::InvalidInput(format!("Job description file: {}", e)))?;

    for resume in &resumes {
        cli::validate_file_extension(resume, &["pdf", "txt", "md"])
            .map_err(|e| ResumeRankerError::InvalidInput(format!("Resume file: {}", e)))?;
    }

    let output_format = cli::parse_output_format(&output).map_err(ResumeRankerError::InvalidInput)?;

    // Structured formats go to stdout; keep status chatter off it.
    let quiet = save.is_none() && output_format != OutputFormat::Console;

    info!("Starting resume ranking for {} documents", resumes.len());

    let job_document = Document::from_path(&job).await?;
    let job_text = InputManager::extract_document(&job_document)?;

    if job_text.trim().is_empty() {
        return Err(ResumeRankerError::EmptyInput(format!(
            "Job description '{}' contains no text",
            job_document.name
        )));
    }

    let mut documents = Vec::with_capacity(resumes.len());
    for path in &resumes {
        documents.push(Document::from_path(path).await?);
    }
    let document_count = documents.len();

    if !quiet {
        for document in &documents {
            println!(
                "Uploaded: {} ({:.2} KB)",
                document.name,
                document.size() as f64 / 1024.0
            );
        }
        println!();
    }

    let failure_policy = if skip_invalid {
        FailurePolicy::Skip
    } else {
        config.ranking.failure_policy
    };

    let progress = ProgressBar::new(document_count as u64);
    progress.set_style(
        ProgressStyle::with_template("{spinner} Extracting [{bar:30}] {pos}/{len}")
            .expect("valid progress template")
            .progress_chars("=> "),
    );

    let start = Instant::now();

    let manager = InputManager::new(failure_policy);
    let corpus = manager.build_corpus(documents, Some(progress.clone())).await?;
    progress.finish_and_clear();

    let candidates: Vec<Candidate> = corpus
        .into_iter()
        .map(|entry| Candidate {
            name: entry.name,
            text: entry.text,
        })
        .collect();

    let ranker = Ranker::new(&config.ranking);
    let result = ranker.rank(&job_text, &candidates);

    let elapsed_ms = start.elapsed().as_millis() as u64;
    info!(
        "Ranked {} resumes in {} ms",
        candidates.len(),
        elapsed_ms
    );

    let mut report = RankingReport::new(job_document.name, result, candidates.len(), elapsed_ms);
    if let Some(n) = top {
        report.truncate_ranking(n);
    }

    let generator = ReportGenerator::new(&config.output);
    let rendered = generator.generate(&report, output_format)?;

    match save {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            println!("Results saved to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
