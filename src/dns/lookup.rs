//! Normalized record lookups with bounded retries.
//!
//! These functions turn raw [`RecordResolver`] answers into [`RecordLookup`]
//! values: failures become data carrying a human-readable reason, successes
//! are normalized (MX hosts lowercased, TXT records filtered).

use std::future::Future;

use log::debug;
use tokio_retry::RetryIf;

use super::resolver::RecordResolver;
use crate::config::{DMARC_PREFIX, DNS_ATTEMPTS, FAILURE_PREFIX, RETRY_INITIAL_DELAY_MS};
use crate::error_handling::{get_retry_strategy, DnsLookupError};

/// Outcome of one record-type lookup.
///
/// An empty `Success` (the name answered but nothing survived filtering) is a
/// distinct state from `Failure`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordLookup {
    Success(Vec<String>),
    Failure(String),
}

impl RecordLookup {
    pub fn is_success(&self) -> bool {
        matches!(self, RecordLookup::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, RecordLookup::Failure(_))
    }

    /// Records of a successful lookup.
    pub fn records(&self) -> Option<&[String]> {
        match self {
            RecordLookup::Success(records) => Some(records),
            RecordLookup::Failure(_) => None,
        }
    }

    /// Reason of a failed lookup.
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            RecordLookup::Success(_) => None,
            RecordLookup::Failure(reason) => Some(reason),
        }
    }

    fn from_error(error: &DnsLookupError) -> Self {
        RecordLookup::Failure(format!("{FAILURE_PREFIX}{error}"))
    }
}

/// Retry behaviour for a single record lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupPolicy {
    /// Total attempts, first try included (0 is treated as 1)
    pub attempts: usize,
    /// Delay before the first retry in milliseconds (0 retries immediately)
    pub retry_delay_ms: u64,
}

impl Default for LookupPolicy {
    fn default() -> Self {
        Self {
            attempts: DNS_ATTEMPTS,
            retry_delay_ms: RETRY_INITIAL_DELAY_MS,
        }
    }
}

/// Runs `action`, retrying transient failures according to `policy`.
async fn with_retry<A, F>(policy: LookupPolicy, action: A) -> Result<Vec<String>, DnsLookupError>
where
    A: FnMut() -> F,
    F: Future<Output = Result<Vec<String>, DnsLookupError>>,
{
    RetryIf::spawn(
        get_retry_strategy(policy.attempts, policy.retry_delay_ms),
        action,
        |error: &DnsLookupError| {
            let retry = error.is_retriable();
            if retry {
                debug!("Retrying DNS lookup after transient failure: {error}");
            }
            retry
        },
    )
    .await
}

/// Resolves the MX hosts of `domain`.
///
/// Hosts are lowercased with the trailing root dot removed, in resolver order.
pub async fn resolve_mx<R: RecordResolver>(
    resolver: &R,
    domain: &str,
    policy: LookupPolicy,
) -> RecordLookup {
    match with_retry(policy, move || resolver.lookup_mx(domain)).await {
        Ok(hosts) => RecordLookup::Success(
            hosts
                .into_iter()
                .map(|host| host.trim_end_matches('.').to_lowercase())
                .collect(),
        ),
        Err(e) => {
            debug!("MX lookup failed for {domain}: {e}");
            RecordLookup::from_error(&e)
        }
    }
}

/// Resolves the TXT records of `name` whose lowercased text contains `filter` lowercased.
///
/// Records are returned verbatim. The filter is a plain substring heuristic
/// (`"SPF"` keeps anything mentioning spf), not an RFC 7208 record detector.
pub async fn resolve_txt_filtered<R: RecordResolver>(
    resolver: &R,
    name: &str,
    filter: &str,
    policy: LookupPolicy,
) -> RecordLookup {
    let filter = filter.to_lowercase();
    match with_retry(policy, move || resolver.lookup_txt(name)).await {
        Ok(records) => RecordLookup::Success(
            records
                .into_iter()
                .filter(|record| record.to_lowercase().contains(&filter))
                .collect(),
        ),
        Err(e) => {
            debug!("TXT lookup failed for {name}: {e}");
            RecordLookup::from_error(&e)
        }
    }
}

/// Resolves TXT records at `_dmarc.<domain>` filtered by `filter`.
pub async fn resolve_dmarc<R: RecordResolver>(
    resolver: &R,
    domain: &str,
    filter: &str,
    policy: LookupPolicy,
) -> RecordLookup {
    let name = format!("{DMARC_PREFIX}{domain}");
    resolve_txt_filtered(resolver, &name, filter, policy).await
}
