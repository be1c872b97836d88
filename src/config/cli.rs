//! Command-line options.
//!
//! The CLI is generated by `clap` from the field attributes. Global options
//! (logging, DNS behaviour, catalog) apply to both subcommands and are folded
//! into a library [`Config`] by [`Cli::config`].
//!
//! # Examples
//!
//! ```bash
//! # Classify a single domain
//! mail_provider check example.it --institution "Comune di Roma" --entity Comune
//!
//! # Classify a CSV file, dropping DNS failures, writing JSON
//! mail_provider batch domains.csv --exclude-dns-errors --format json --output report.json
//!
//! # Same input as an Excel workbook
//! mail_provider batch domains.csv --format excel --output report.xlsx
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{
    DEFAULT_MAX_CONCURRENCY, DMARC_FILTER, DNS_ATTEMPTS, DNS_TIMEOUT_SECS, SPF_FILTER,
};
use crate::config::types::{Config, ExportFormat, LogFormat, LogLevel};

#[derive(Debug, Parser)]
#[command(
    name = "mail_provider",
    about = "Detects which email provider operates a domain from its MX, SPF and DMARC records."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub global: GlobalOptions,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify a single domain
    Check(CheckCommand),
    /// Classify every row of a CSV file with columns Istituzione, Dominio, Ente
    Batch(BatchCommand),
}

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalOptions {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-query DNS timeout in seconds
    #[arg(long, global = true, default_value_t = DNS_TIMEOUT_SECS)]
    pub dns_timeout_secs: u64,

    /// Total attempts per DNS query (transient failures only are retried)
    #[arg(long, global = true, default_value_t = DNS_ATTEMPTS)]
    pub dns_attempts: usize,

    /// JSON provider catalog replacing the built-in signatures
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Case-insensitive substring a TXT record must contain to count as SPF
    #[arg(long, global = true, default_value = SPF_FILTER)]
    pub spf_filter: String,

    /// Case-insensitive substring a _dmarc TXT record must contain (empty keeps all)
    #[arg(long, global = true, default_value = DMARC_FILTER)]
    pub dmarc_filter: String,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Domain to classify (a leading '@' is ignored)
    pub domain: String,

    /// Institution name shown in the report
    #[arg(long)]
    pub institution: Option<String>,

    /// Entity type shown in the report
    #[arg(long)]
    pub entity: Option<String>,

    /// Output format: csv|json|excel|pdf|text
    #[arg(long, value_enum, default_value_t = ExportFormat::Text)]
    pub format: ExportFormat,
}

#[derive(Debug, Args)]
pub struct BatchCommand {
    /// CSV file to read
    #[arg(value_parser)]
    pub file: PathBuf,

    /// Drop rows whose MX lookup failed
    #[arg(long)]
    pub exclude_dns_errors: bool,

    /// Output format: csv|json|excel|pdf|text
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Output file (stdout when omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Maximum number of domains classified concurrently
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,
}

impl Cli {
    /// Builds the library configuration from the parsed command line.
    pub fn config(&self) -> Config {
        let mut config = Config {
            log_level: self.global.log_level.clone(),
            log_format: self.global.log_format.clone(),
            dns_timeout_secs: self.global.dns_timeout_secs,
            dns_attempts: self.global.dns_attempts,
            catalog: self.global.catalog.clone(),
            spf_filter: self.global.spf_filter.clone(),
            dmarc_filter: self.global.dmarc_filter.clone(),
            ..Default::default()
        };
        match &self.command {
            Command::Check(cmd) => {
                config.format = cmd.format;
            }
            Command::Batch(cmd) => {
                config.format = cmd.format;
                config.output = cmd.output.clone();
                config.include_failures = !cmd.exclude_dns_errors;
                config.max_concurrency = cmd.max_concurrency;
            }
        }
        config
    }
}
