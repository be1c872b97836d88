//! Batch classification.
//!
//! Classifies an ordered list of input rows with bounded concurrency while
//! preserving input order in the output. Rows whose MX lookup failed can be
//! dropped on request; any other failure stays in the row as data, so a bad
//! domain never aborts the batch.

mod input;

use std::sync::atomic::{AtomicUsize, Ordering};

use futures::stream::{self, StreamExt};
use log::{debug, warn};
use tokio_util::sync::CancellationToken;

use crate::classify::Classifier;
use crate::config::DEFAULT_MAX_CONCURRENCY;
use crate::dns::RecordResolver;
use crate::export::ReportRow;

pub use input::{read_batch, read_batch_file, BatchRow};

/// Batch behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// Keep rows whose MX lookup failed
    pub include_failures: bool,
    /// Maximum number of domains classified at once (0 is treated as 1)
    pub max_concurrency: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            include_failures: true,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }
}

/// Result of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Rendered rows, in input order
    pub rows: Vec<ReportRow>,
    /// Rows in the input
    pub total_input: usize,
    /// Rows classified before the batch ended
    pub processed: usize,
    /// Rows dropped because their MX lookup failed
    pub dropped_failures: usize,
    /// The batch stopped early on cancellation
    pub cancelled: bool,
}

/// Classifies `rows` in order. See [`classify_batch_with_progress`].
pub async fn classify_batch<R: RecordResolver>(
    classifier: &Classifier<R>,
    rows: Vec<BatchRow>,
    options: BatchOptions,
    cancel: &CancellationToken,
) -> BatchOutcome {
    let progress = AtomicUsize::new(0);
    classify_batch_with_progress(classifier, rows, options, cancel, &progress).await
}

/// Classifies `rows`, returning rendered report rows in input order.
///
/// Up to `options.max_concurrency` domains are in flight at once; results are
/// emitted in input order regardless of completion order. `progress` is
/// incremented as each domain finishes.
///
/// Once `cancel` fires no further rows are started and rows still in flight
/// are abandoned; the rows already emitted are returned with
/// `cancelled = true`.
pub async fn classify_batch_with_progress<R: RecordResolver>(
    classifier: &Classifier<R>,
    rows: Vec<BatchRow>,
    options: BatchOptions,
    cancel: &CancellationToken,
    progress: &AtomicUsize,
) -> BatchOutcome {
    let total_input = rows.len();
    let mut outcome = BatchOutcome {
        total_input,
        ..Default::default()
    };

    let results = stream::iter(rows)
        .map(|row| async move {
            let result = classifier.classify(&row.domain).await;
            progress.fetch_add(1, Ordering::SeqCst);
            (row, result)
        })
        .buffered(options.max_concurrency.max(1))
        .take_until(cancel.cancelled());
    futures::pin_mut!(results);

    while let Some((row, result)) = results.next().await {
        outcome.processed += 1;
        if !options.include_failures && result.mx_failed() {
            debug!("Dropping {} (MX lookup failed)", result.domain);
            outcome.dropped_failures += 1;
            continue;
        }
        outcome
            .rows
            .push(ReportRow::from_classification(&result, row.institution, row.entity));
    }

    if outcome.processed < total_input && cancel.is_cancelled() {
        warn!(
            "Batch cancelled after {} of {} rows",
            outcome.processed, total_input
        );
        outcome.cancelled = true;
    }
    outcome
}
