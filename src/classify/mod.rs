//! Email provider classification for a single domain.
//!
//! For each domain the classifier:
//! 1. Normalizes the input (trim, strip leading `@`, lowercase)
//! 2. Runs the MX, SPF (filtered TXT) and DMARC lookups concurrently
//! 3. Matches each returned record against the signature catalog
//! 4. Checks the disposable-domain set
//! 5. Aggregates a detected provider (undeterminable if any lookup failed)
//!
//! DNS failures never escape: they are recorded per record type.

mod types;

use std::sync::Arc;

use log::debug;

use crate::catalog::{RecordKind, SignatureCatalog};
use crate::config::{DMARC_FILTER, FAILURE_PREFIX, SPF_FILTER};
use crate::dns::{resolve_dmarc, resolve_mx, resolve_txt_filtered, LookupPolicy, RecordResolver};
use crate::error_handling::{ErrorType, InfoType, ProcessingStats};

pub use types::{ClassificationResult, DetectedProvider, ProviderMatch};

/// Normalizes a raw domain string.
///
/// Trims whitespace, strips any leading `@` and lowercases. Returns `None`
/// when nothing is left. No further syntax checks: malformed names simply
/// fail resolution.
pub fn normalize_domain(raw: &str) -> Option<String> {
    let domain = raw.trim().trim_start_matches('@').trim().to_lowercase();
    if domain.is_empty() {
        None
    } else {
        Some(domain)
    }
}

/// Per-classifier lookup settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierOptions {
    /// TXT substring filter selecting SPF records
    pub spf_filter: String,
    /// TXT substring filter applied at `_dmarc.<domain>`
    pub dmarc_filter: String,
    /// Retry policy for every lookup
    pub policy: LookupPolicy,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            spf_filter: SPF_FILTER.to_string(),
            dmarc_filter: DMARC_FILTER.to_string(),
            policy: LookupPolicy::default(),
        }
    }
}

/// Classifies domains using a resolver and a shared catalog.
pub struct Classifier<R> {
    resolver: R,
    catalog: Arc<SignatureCatalog>,
    options: ClassifierOptions,
    stats: Arc<ProcessingStats>,
}

impl<R: RecordResolver> Classifier<R> {
    pub fn new(resolver: R, catalog: Arc<SignatureCatalog>, options: ClassifierOptions) -> Self {
        Self {
            resolver,
            catalog,
            options,
            stats: Arc::new(ProcessingStats::new()),
        }
    }

    pub fn stats(&self) -> &Arc<ProcessingStats> {
        &self.stats
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Classifies one domain. Never fails; DNS errors are part of the result.
    pub async fn classify(&self, raw_domain: &str) -> ClassificationResult {
        let Some(domain) = normalize_domain(raw_domain) else {
            debug!("Skipping lookups for empty domain {:?}", raw_domain);
            self.stats.increment_info(InfoType::EmptyDomain);
            let failed = || ProviderMatch::Failed(format!("{FAILURE_PREFIX}empty domain"));
            let result = ClassificationResult::new(String::new(), failed(), failed(), failed(), false);
            self.record_stats(&result);
            return result;
        };

        let policy = self.options.policy;
        let (mx, spf, dmarc) = tokio::join!(
            resolve_mx(&self.resolver, &domain, policy),
            resolve_txt_filtered(&self.resolver, &domain, &self.options.spf_filter, policy),
            resolve_dmarc(&self.resolver, &domain, &self.options.dmarc_filter, policy),
        );

        let is_disposable = self.catalog.is_disposable(&domain);
        let result = ClassificationResult::new(
            domain,
            ProviderMatch::from_lookup(&self.catalog, RecordKind::Mx, mx),
            ProviderMatch::from_lookup(&self.catalog, RecordKind::Spf, spf),
            ProviderMatch::from_lookup(&self.catalog, RecordKind::Dmarc, dmarc),
            is_disposable,
        );

        debug!(
            "{}: MX [{}] SPF [{}] DMARC [{}] -> {}",
            result.domain, result.mx, result.spf, result.dmarc, result.detected_provider
        );
        self.record_stats(&result);
        result
    }

    fn record_stats(&self, result: &ClassificationResult) {
        if result.mx.is_failed() {
            self.stats.increment_error(ErrorType::DnsMxLookupError);
        }
        if result.spf.is_failed() {
            self.stats.increment_error(ErrorType::DnsSpfLookupError);
        }
        if result.dmarc.is_failed() {
            self.stats.increment_error(ErrorType::DnsDmarcLookupError);
        }
        if result.is_disposable {
            self.stats.increment_info(InfoType::DisposableDomain);
        }
        if !result.detected_provider.is_determined() {
            self.stats.increment_info(InfoType::UndeterminableProvider);
        }
    }
}
