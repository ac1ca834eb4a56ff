//! CLI for the staging migration jobs.
//!
//! `import` moves the V1, V2 and V2M build pack issues into the staging
//! repository; `crossrefs` labels staging issues with the meta-issues that
//! affect them.

use clap::{Parser, Subcommand};
use staging_migrator::{
    CrossRefSummary, ImportSources, ImportSummary, MigratorConfig, Runner, RunnerConfig,
    RunnerError,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Staging Migrator - Import build pack issues and cross-link them in the staging tracker.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Destination repository (owner/name).
    #[arg(long, global = true)]
    repo: Option<String>,

    /// Pause after every tracker call, in milliseconds.
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    /// Preview tracker changes without making them.
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create labels, milestones and issues from the three pack exports.
    Import {
        /// V1 export (`{"issues": [...]}`).
        #[arg(long)]
        v1: PathBuf,

        /// V2 export (`{"issues": [...]}`).
        #[arg(long)]
        v2: PathBuf,

        /// V2M export (bare array).
        #[arg(long)]
        v2m: PathBuf,

        /// Skip records whose title already exists in the repository.
        #[arg(long)]
        skip_existing: bool,
    },

    /// Create meta-issue labels and apply them to the mapped issues.
    Crossrefs {
        /// JSON object of meta-issue number -> issue numbers.
        #[arg(long)]
        mapping: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Per-item failures are reported in the summary and never change the exit code.
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<(), RunnerError> {
    let mut migrator = MigratorConfig::load(args.config.as_deref())?;
    if let Some(repo) = args.repo {
        migrator.repo = repo;
    }
    if let Some(ms) = args.delay_ms {
        migrator.set_delay(Duration::from_millis(ms));
    }
    migrator.validate()?;

    match args.command {
        Command::Import {
            v1,
            v2,
            v2m,
            skip_existing,
        } => {
            let config = RunnerConfig::new(migrator, args.dry_run).with_skip_existing(skip_existing);
            let runner = Runner::with_gh(config);
            let summary = runner.import(&ImportSources { v1, v2, v2m }).await?;
            print_import_summary(&summary);
        }
        Command::Crossrefs { mapping } => {
            let runner = Runner::with_gh(RunnerConfig::new(migrator, args.dry_run));
            let summary = runner.apply_crossrefs(&mapping).await?;
            print_crossref_summary(&summary);
        }
    }

    Ok(())
}

fn mode(dry_run: bool) -> &'static str {
    if dry_run {
        "Dry Run"
    } else {
        "Live"
    }
}

/// Prints the final import summary.
fn print_import_summary(summary: &ImportSummary) {
    println!("\n=== COMPLETE ===");
    println!("  Mode: {}", mode(summary.dry_run));
    println!(
        "  Labels: {} created, {} existing, {} failed",
        summary.labels.created, summary.labels.existing, summary.labels.failed
    );
    println!(
        "  Milestones: {} created, {} existing, {} failed",
        summary.milestones.created, summary.milestones.existing, summary.milestones.failed
    );
    for pack in &summary.packs {
        println!(
            "  {}: {} created, {} skipped, {} failed out of {}",
            pack.pack, pack.created, pack.skipped, pack.failed, pack.attempted
        );
    }
    println!(
        "Total: {} created, {} skipped, {} failed out of {}",
        summary.created(),
        summary.skipped(),
        summary.failed(),
        summary.attempted()
    );
    print_failure_note(summary.has_failures());
}

/// Prints the final cross-reference summary.
fn print_crossref_summary(summary: &CrossRefSummary) {
    println!("\n=== COMPLETE ===");
    println!("  Mode: {}", mode(summary.dry_run));
    println!(
        "  Labels: {} created, {} existing, {} failed",
        summary.labels.created, summary.labels.existing, summary.labels.failed
    );
    println!(
        "Total: {} applied, {} failed out of {}",
        summary.applied(),
        summary.failed(),
        summary.needed()
    );
    print_failure_note(summary.has_failures());
}

/// Points at the log when some items failed; the exit code stays 0.
fn print_failure_note(has_failures: bool) {
    if has_failures {
        println!("Completed with failures, see the log above for details.");
    }
}
