//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `mail_provider` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use mail_provider::config::Command;
use mail_provider::initialization::init_logger_with;
use mail_provider::{run_batch, run_check, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), e.g. RUST_LOG
    // Try loading from current directory first, then from the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();
    let config = cli.config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let outcome = match &cli.command {
        Command::Check(cmd) => run_check(
            &config,
            &cmd.domain,
            cmd.institution.as_deref(),
            cmd.entity.as_deref(),
        )
        .await
        .map(|row| {
            eprintln!(
                "{}: {} (disposable: {})",
                row.domain,
                row.detected_provider,
                if row.disposable { "yes" } else { "no" }
            );
        }),
        Command::Batch(cmd) => run_batch(config, &cmd.file).await.map(|report| {
            eprintln!(
                "Classified {} of {} domain{} ({} written, {} dropped for DNS errors) in {:.1}s{}",
                report.processed,
                report.total_input,
                if report.total_input == 1 { "" } else { "s" },
                report.written,
                report.dropped_failures,
                report.elapsed_seconds,
                if report.cancelled { " - interrupted" } else { "" }
            );
            if let Some(path) = &report.output {
                eprintln!("Results saved in {}", path.display());
            }
        }),
    };

    if let Err(e) = outcome {
        eprintln!("mail_provider error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
