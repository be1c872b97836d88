//! Classification result types.

use std::collections::BTreeSet;
use std::fmt;

use crate::catalog::{RecordKind, SignatureCatalog};
use crate::config::{PROVIDER_SEPARATOR, RECORD_SEPARATOR, UNDETERMINABLE};
use crate::dns::RecordLookup;

/// Providers matched for one record type, or why the lookup failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderMatch {
    /// Lookup succeeded. Providers in record order; the same provider may
    /// appear once per matching record.
    Matched(Vec<String>),
    /// Lookup failed with the given reason.
    Failed(String),
}

impl ProviderMatch {
    /// Matches every record of a successful lookup against the catalog.
    pub fn from_lookup(catalog: &SignatureCatalog, kind: RecordKind, lookup: RecordLookup) -> Self {
        match lookup {
            RecordLookup::Success(records) => ProviderMatch::Matched(
                records
                    .iter()
                    .flat_map(|record| catalog.lookup_providers(kind, record))
                    .collect(),
            ),
            RecordLookup::Failure(reason) => ProviderMatch::Failed(reason),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ProviderMatch::Failed(_))
    }

    pub fn providers(&self) -> Option<&[String]> {
        match self {
            ProviderMatch::Matched(providers) => Some(providers),
            ProviderMatch::Failed(_) => None,
        }
    }

    /// Distinct provider names, or `None` on failure.
    pub fn provider_set(&self) -> Option<BTreeSet<&str>> {
        self.providers()
            .map(|providers| providers.iter().map(String::as_str).collect())
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            ProviderMatch::Matched(_) => None,
            ProviderMatch::Failed(reason) => Some(reason),
        }
    }
}

impl fmt::Display for ProviderMatch {
    /// Providers joined with `", "`, or the failure reason.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderMatch::Matched(providers) => f.write_str(&providers.join(RECORD_SEPARATOR)),
            ProviderMatch::Failed(reason) => f.write_str(reason),
        }
    }
}

/// Aggregated provider verdict for a domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectedProvider {
    /// Union of all providers found in MX, SPF and DMARC (possibly empty).
    Determined(BTreeSet<String>),
    /// At least one of the three lookups failed.
    Undeterminable,
}

impl DetectedProvider {
    /// Unions the three per-record matches.
    ///
    /// All-or-nothing: a single failed lookup makes the verdict
    /// `Undeterminable`, even when the other two found a clear provider.
    pub fn aggregate(mx: &ProviderMatch, spf: &ProviderMatch, dmarc: &ProviderMatch) -> Self {
        match (mx.providers(), spf.providers(), dmarc.providers()) {
            (Some(mx), Some(spf), Some(dmarc)) => DetectedProvider::Determined(
                mx.iter().chain(spf).chain(dmarc).cloned().collect(),
            ),
            _ => DetectedProvider::Undeterminable,
        }
    }

    pub fn is_determined(&self) -> bool {
        matches!(self, DetectedProvider::Determined(_))
    }
}

impl fmt::Display for DetectedProvider {
    /// Sorted provider names joined with `" | "`, or the undeterminable sentinel.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectedProvider::Determined(providers) => {
                let names: Vec<&str> = providers.iter().map(String::as_str).collect();
                f.write_str(&names.join(PROVIDER_SEPARATOR))
            }
            DetectedProvider::Undeterminable => f.write_str(UNDETERMINABLE),
        }
    }
}

/// Everything learned about one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    /// Normalized domain (empty when the input was blank)
    pub domain: String,
    pub mx: ProviderMatch,
    pub spf: ProviderMatch,
    pub dmarc: ProviderMatch,
    pub is_disposable: bool,
    pub detected_provider: DetectedProvider,
}

impl ClassificationResult {
    /// Assembles a result and derives the detected provider.
    pub fn new(
        domain: String,
        mx: ProviderMatch,
        spf: ProviderMatch,
        dmarc: ProviderMatch,
        is_disposable: bool,
    ) -> Self {
        let detected_provider = DetectedProvider::aggregate(&mx, &spf, &dmarc);
        Self {
            domain,
            mx,
            spf,
            dmarc,
            is_disposable,
            detected_provider,
        }
    }

    pub fn mx_failed(&self) -> bool {
        self.mx.is_failed()
    }
}
