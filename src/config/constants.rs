//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including DNS timeouts, retry parameters, batch input columns and the
//! strings used when rendering classification results.

use std::time::Duration;

/// Default number of domains classified concurrently in batch mode.
pub const DEFAULT_MAX_CONCURRENCY: usize = 10;

/// Interval between progress log lines in batch mode.
pub const LOGGING_INTERVAL: Duration = Duration::from_secs(5);

// DNS lookups
/// DNS query timeout in seconds.
/// Bounds every MX/TXT query so one unresponsive domain cannot stall a batch.
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// Total attempts per DNS query (first try included).
/// Only transient failures (timeouts, SERVFAIL, transport errors) are retried.
pub const DNS_ATTEMPTS: usize = 2;

// Retry strategy
/// Initial delay in milliseconds before the first DNS retry
pub const RETRY_INITIAL_DELAY_MS: u64 = 200;
/// Factor by which retry delay is multiplied on each attempt
pub const RETRY_FACTOR: u64 = 2;
/// Maximum delay between retries in seconds
pub const RETRY_MAX_DELAY_SECS: u64 = 2;

// TXT filters
/// Substring a TXT record must contain (case-insensitive) to count as SPF.
pub const SPF_FILTER: &str = "SPF";
/// Substring a `_dmarc.` TXT record must contain (case-insensitive) to be kept.
///
/// This is the generic record-type tag, not `v=DMARC1`. An empty filter keeps
/// every TXT record at the DMARC name.
pub const DMARC_FILTER: &str = "TXT";
/// Label prepended to a domain for DMARC lookups.
pub const DMARC_PREFIX: &str = "_dmarc.";

// Batch input
pub const COLUMN_INSTITUTION: &str = "Istituzione";
pub const COLUMN_DOMAIN: &str = "Dominio";
pub const COLUMN_ENTITY: &str = "Ente";

/// Columns a batch file must contain (after header trimming).
pub const REQUIRED_COLUMNS: &[&str] = &[COLUMN_INSTITUTION, COLUMN_DOMAIN, COLUMN_ENTITY];

// Rendering
/// Separator between provider names in the detected-provider field.
pub const PROVIDER_SEPARATOR: &str = " | ";
/// Separator between provider names in the per-record fields.
pub const RECORD_SEPARATOR: &str = ", ";
/// Rendered value of a detected provider that cannot be determined.
pub const UNDETERMINABLE: &str = "Undeterminable";
/// Placeholder for missing institution/entity in single-domain mode.
pub const NOT_AVAILABLE: &str = "N/A";
/// Prefix of every rendered lookup failure reason.
pub const FAILURE_PREFIX: &str = "Error: ";
