// file: src/main.rs
// description: commandline application entry point for the reindex run
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{ArgAction, Parser};
use doc_reindex::utils::logging::{Outcome, summary_line};
use doc_reindex::{
    Config, DocumentsClient, Operation, ProgressTracker, ReindexError, ReindexReport, Reindexer,
    ReportExporter, RunReport, Validator, load_documents,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "doc_reindex")]
#[command(author = "cipher")]
#[command(version)]
#[command(about = "Reindex seed documents into the semantic search service", long_about = None)]
struct Cli {
    /// Delete every seed document from the service before indexing
    #[arg(long)]
    clean: bool,

    /// Seed file with a JSON array of documents
    #[arg(short, long, value_name = "FILE", env = "REINDEX_SEED_FILE")]
    seed: Option<PathBuf>,

    /// TOML config file (defaults to config/reindex.toml when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the run report as JSON
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Colored log and summary output (true/false)
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    /// Hide the progress bar
    #[arg(short, long, action = ArgAction::SetTrue)]
    quiet: bool,

    /// Log each request at debug level
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // clap reads REINDEX_SEED_FILE, so .env has to be applied before parsing
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    doc_reindex::utils::logging::init_logger(cli.color, cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            let fatal_config = e
                .downcast_ref::<ReindexError>()
                .is_some_and(ReindexError::is_fatal_config);
            if fatal_config {
                error!("Aborting before any request: {:#}", e);
            } else {
                error!("{:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let started_at = Utc::now();
    let start_time = Instant::now();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    info!("Search service: {}", config.api.base_url);

    let seed_path = cli.seed.clone().unwrap_or_else(|| config.seed.path.clone());
    Validator::validate_seed_path(&seed_path)?;
    let documents = load_documents(&seed_path)?;

    let client = DocumentsClient::new(&config.api).context("Failed to create API client")?;

    let reindexer = Reindexer::new(&client, cli.clean);
    let progress = if cli.quiet {
        ProgressTracker::hidden()
    } else {
        ProgressTracker::new(reindexer.planned_requests(documents.len()), cli.color)
    };
    let report = reindexer.with_progress(progress).run(&documents).await;

    info!(
        "Reindex finished in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    print_summary(&report, cli.clean);

    let mut exit_code = if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    };

    if let Some(output) = &cli.report {
        let run_report = RunReport::new(started_at, Utc::now(), cli.clean, &seed_path, &report);
        if let Err(e) = ReportExporter::new(output).export(&run_report) {
            error!("Failed to write run report {}: {}", output.display(), e);
            exit_code = ExitCode::FAILURE;
        }
    }

    Ok(exit_code)
}

fn print_summary(report: &ReindexReport, clean: bool) {
    if clean {
        let line = format!(
            "Deleted {}/{} document(s), {} not found, {} failed",
            report.deleted,
            report.delete_attempts(),
            report.not_found,
            report.delete_failed
        );
        println!(
            "{}",
            summary_line(Outcome::from_failures(report.delete_failed, false), &line)
        );

        let failed = report.failed_ids(Operation::Delete);
        if !failed.is_empty() {
            warn!("Delete failed for: {}", failed.join(", "));
        }
    }

    let line = format!(
        "Indexed {}/{} document(s), {} failed",
        report.indexed, report.total, report.index_failed
    );
    println!(
        "{}",
        summary_line(Outcome::from_failures(report.index_failed, true), &line)
    );

    let failed = report.failed_ids(Operation::Index);
    if !failed.is_empty() {
        println!("  failed ids: {}", failed.join(", "));
    }
}
