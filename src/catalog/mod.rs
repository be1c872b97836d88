//! Provider signature catalog.
//!
//! The catalog maps substrings found in DNS records to the display name of the
//! email provider they identify, and holds the set of known disposable-email
//! domains. It is built once at startup (either the built-in tables or a JSON
//! file) and shared read-only across all classifications.
//!
//! Matching is plain substring containment with no precedence: every signature
//! whose needle occurs in a record contributes its provider, so a single MX host
//! like `mail.protection.outlook.com` can match several providers.

mod builtin;
mod load;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

pub use load::load_catalog;

/// DNS record category a signature applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Mail exchanger hostnames (lowercased by the resolver)
    Mx,
    /// SPF TXT records at the domain apex
    Spf,
    /// TXT records at `_dmarc.<domain>`
    Dmarc,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Mx => "MX",
            RecordKind::Spf => "SPF",
            RecordKind::Dmarc => "DMARC",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A substring pattern identifying a provider in one kind of record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSignature {
    pub record: RecordKind,
    pub needle: String,
    pub provider: String,
}

impl ProviderSignature {
    pub fn new(record: RecordKind, needle: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            record,
            needle: needle.into(),
            provider: provider.into(),
        }
    }
}

/// Immutable signature table plus disposable-domain set.
#[derive(Debug, Clone)]
pub struct SignatureCatalog {
    version: String,
    signatures: Vec<ProviderSignature>,
    disposable: HashSet<String>,
}

impl SignatureCatalog {
    /// Builds a catalog from explicit signatures and disposable domains.
    ///
    /// Disposable domains are trimmed and lowercased so membership tests can
    /// compare against normalized domains.
    pub fn new<I, S>(version: impl Into<String>, signatures: Vec<ProviderSignature>, disposable: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let disposable = disposable
            .into_iter()
            .map(|d| d.as_ref().trim().to_lowercase())
            .filter(|d| !d.is_empty())
            .collect();
        Self {
            version: version.into(),
            signatures,
            disposable,
        }
    }

    /// The catalog shipped with the binary.
    pub fn builtin() -> Self {
        let signatures = builtin::BUILTIN_SIGNATURES
            .iter()
            .map(|(record, needle, provider)| ProviderSignature::new(*record, *needle, *provider))
            .collect();
        Self::new(
            builtin::BUILTIN_VERSION,
            signatures,
            builtin::BUILTIN_DISPOSABLE.iter(),
        )
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn signatures(&self) -> &[ProviderSignature] {
        &self.signatures
    }

    pub fn disposable_count(&self) -> usize {
        self.disposable.len()
    }

    /// Returns the providers whose `record`-kind needle occurs in `raw_record`.
    ///
    /// Case-sensitive. Each provider appears once, in catalog order of its first
    /// matching signature; an empty vector means no match, never a failure.
    pub fn lookup_providers(&self, record: RecordKind, raw_record: &str) -> Vec<String> {
        let mut providers: Vec<String> = Vec::new();
        for sig in &self.signatures {
            if sig.record == record
                && raw_record.contains(sig.needle.as_str())
                && !providers.contains(&sig.provider)
            {
                providers.push(sig.provider.clone());
            }
        }
        providers
    }

    /// Exact membership test against the disposable set.
    ///
    /// `domain` is expected to be normalized already; no suffix or substring
    /// matching is performed.
    pub fn is_disposable(&self, domain: &str) -> bool {
        self.disposable.contains(domain)
    }
}

impl Default for SignatureCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
