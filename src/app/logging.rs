//! Progress logging utilities.

use log::info;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::LOGGING_INTERVAL;

/// Logs progress information about batch classification.
///
/// # Arguments
///
/// * `start_time` - The start time of processing
/// * `completed` - Atomic counter of classified domains
/// * `total` - Number of domains in the batch
pub fn log_progress(start_time: Instant, completed: &AtomicUsize, total: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let completed = completed.load(Ordering::SeqCst);
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Classified {}/{} domains in {:.2} seconds (~{:.2} domains/sec)",
        completed, total, elapsed_secs, rate
    );
}

/// Spawns a task logging progress every [`LOGGING_INTERVAL`] until `cancel` fires.
pub fn spawn_progress_logger(
    start_time: Instant,
    completed: Arc<AtomicUsize>,
    total: usize,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(LOGGING_INTERVAL);
        // The first tick completes immediately
        interval.tick().await;
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    log_progress(start_time, &completed, total);
                }
                _ = cancel.cancelled() => {
                    break;
                }
            }
        }
    })
}
