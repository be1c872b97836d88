//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for initialization, catalog loading, batch input and export
//! - The DNS lookup error taxonomy and its retry classification
//! - Processing statistics tracking (lookup failures and info metrics)
//! - Retry strategy configuration
//!
//! DNS failures are data, not errors: they are captured per record type in the
//! classification result and only counted here.

mod stats;
mod types;

use std::time::Duration;

use tokio_retry::strategy::ExponentialBackoff;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{
    BatchInputError, CatalogError, DnsLookupError, ErrorType, ExportError, InfoType,
    InitializationError,
};

/// Returns the backoff delays between DNS attempts.
///
/// Yields `attempts - 1` delays, so `attempts` is the total number of tries
/// including the first one. `initial_delay_ms` of zero disables waiting.
pub fn get_retry_strategy(attempts: usize, initial_delay_ms: u64) -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(initial_delay_ms.max(1))
        .factor(crate::config::RETRY_FACTOR)
        .max_delay(Duration::from_secs(crate::config::RETRY_MAX_DELAY_SECS))
        .map(move |delay| if initial_delay_ms == 0 { Duration::ZERO } else { delay })
        .take(attempts.saturating_sub(1))
}
