//! mail_provider library: email provider detection from DNS records
//!
//! This library resolves a domain's MX records, SPF TXT records and DMARC TXT
//! records, matches them against a catalog of provider signatures and reports
//! which email infrastructure provider(s) operate the domain. It also flags
//! known disposable-email domains.
//!
//! A domain's detected provider is the union of the providers found in all
//! three record types, or `Undeterminable` when any of the three lookups
//! failed.
//!
//! # Example
//!
//! ```no_run
//! use mail_provider::{run_batch, Config};
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     max_concurrency: 20,
//!     include_failures: false,
//!     ..Default::default()
//! };
//!
//! let report = run_batch(config, Path::new("domains.csv")).await?;
//! println!("Classified {} of {} domains", report.processed, report.total_input);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod batch;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod export;
pub mod initialization;

// Re-export public API
pub use batch::{classify_batch, BatchOptions, BatchOutcome, BatchRow};
pub use catalog::{ProviderSignature, RecordKind, SignatureCatalog};
pub use classify::{ClassificationResult, Classifier, ClassifierOptions, DetectedProvider};
pub use config::{Cli, Config, ExportFormat, LogFormat, LogLevel};
pub use dns::{DnsRecordResolver, RecordLookup, RecordResolver};
pub use export::ReportRow;
pub use run::{run_batch, run_check, BatchReport};

// Internal run module (wires configuration, resources and output together)
mod run {
    use anyhow::{bail, Context, Result};
    use std::path::{Path, PathBuf};
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use log::info;
    use tokio_util::sync::CancellationToken;

    use crate::app::{
        log_progress, print_batch_summary, print_error_statistics, shutdown_gracefully,
        spawn_interrupt_handler, spawn_progress_logger,
    };
    use crate::batch::{classify_batch_with_progress, read_batch_file, BatchOptions};
    use crate::classify::{normalize_domain, Classifier, ClassifierOptions};
    use crate::config::{Config, NOT_AVAILABLE, RETRY_INITIAL_DELAY_MS};
    use crate::dns::{DnsRecordResolver, LookupPolicy};
    use crate::export::{export_rows, ReportRow};
    use crate::initialization::{init_catalog, init_resolver};

    /// Results of a batch run.
    #[derive(Debug, Clone)]
    pub struct BatchReport {
        /// Rows in the input file
        pub total_input: usize,
        /// Rows classified before the run ended
        pub processed: usize,
        /// Rows written to the output
        pub written: usize,
        /// Rows dropped because their MX lookup failed
        pub dropped_failures: usize,
        /// The run was interrupted before every row was classified
        pub cancelled: bool,
        /// Output file (`None` for stdout)
        pub output: Option<PathBuf>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Builds a classifier backed by the system DNS resolver.
    async fn build_classifier(config: &Config) -> Result<Classifier<DnsRecordResolver>> {
        let timeout = Duration::from_secs(config.dns_timeout_secs);
        let resolver = init_resolver(timeout).context("Failed to initialize DNS resolver")?;
        let catalog = init_catalog(config.catalog.as_deref())
            .await
            .context("Failed to load provider catalog")?;

        let options = ClassifierOptions {
            spf_filter: config.spf_filter.clone(),
            dmarc_filter: config.dmarc_filter.clone(),
            policy: LookupPolicy {
                attempts: config.dns_attempts,
                retry_delay_ms: RETRY_INITIAL_DELAY_MS,
            },
        };
        Ok(Classifier::new(
            DnsRecordResolver::new(resolver, timeout),
            catalog,
            options,
        ))
    }

    /// Classifies a single domain and writes the report row.
    ///
    /// Missing `institution` / `entity` render as `N/A`. The row is written
    /// in `config.format` to `config.output` (stdout when `None`) and also
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns an error if `domain` is blank (or only `@`), the resolver or
    /// catalog cannot be initialized, or the output cannot be written. DNS
    /// failures are not errors: they are part of the returned row.
    pub async fn run_check(
        config: &Config,
        domain: &str,
        institution: Option<&str>,
        entity: Option<&str>,
    ) -> Result<ReportRow> {
        if normalize_domain(domain).is_none() {
            bail!("No domain to check: {:?} is blank after normalization", domain);
        }
        let classifier = build_classifier(config).await?;
        let result = classifier.classify(domain).await;
        let row = ReportRow::from_classification(
            &result,
            institution.unwrap_or(NOT_AVAILABLE),
            entity.unwrap_or(NOT_AVAILABLE),
        );
        export_rows(config.format, std::slice::from_ref(&row), config.output.as_deref())
            .context("Failed to write report")?;
        Ok(row)
    }

    /// Classifies every row of a batch CSV file and writes the report.
    ///
    /// The input is validated before any DNS query is issued. Ctrl-C stops the
    /// run early; rows already classified are still written.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be read or lacks a required column
    /// - The resolver or catalog cannot be initialized
    /// - The output cannot be written
    pub async fn run_batch(config: Config, file: &Path) -> Result<BatchReport> {
        let rows = read_batch_file(file)
            .with_context(|| format!("Failed to read batch input {}", file.display()))?;
        let total_input = rows.len();
        info!("Total domains in file: {}", total_input);

        let classifier = build_classifier(&config).await?;
        let options = BatchOptions {
            include_failures: config.include_failures,
            max_concurrency: config.max_concurrency,
        };

        let root = CancellationToken::new();
        let batch_cancel = root.child_token();
        let start_time = Instant::now();
        let completed = Arc::new(AtomicUsize::new(0));

        let logging_task = spawn_progress_logger(
            start_time,
            Arc::clone(&completed),
            total_input,
            root.child_token(),
        );
        let interrupt_task = spawn_interrupt_handler(batch_cancel.clone());

        let outcome =
            classify_batch_with_progress(&classifier, rows, options, &batch_cancel, &completed)
                .await;

        shutdown_gracefully(root, Some(logging_task), Some(interrupt_task)).await;
        log_progress(start_time, &completed, total_input);
        print_error_statistics(classifier.stats());

        let written = export_rows(config.format, &outcome.rows, config.output.as_deref())
            .context("Failed to write report")?;

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        print_batch_summary(
            total_input,
            outcome.processed,
            written,
            outcome.dropped_failures,
            elapsed_seconds,
        );

        Ok(BatchReport {
            total_input,
            processed: outcome.processed,
            written,
            dropped_failures: outcome.dropped_failures,
            cancelled: outcome.cancelled,
            output: config.output,
            elapsed_seconds,
        })
    }
}
