// Shared test helpers: an in-memory DNS resolver and classifier setup.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use mail_provider::dns::LookupPolicy;
use mail_provider::error_handling::DnsLookupError;
use mail_provider::{Classifier, ClassifierOptions, RecordResolver, SignatureCatalog};

/// Resolver answering from fixed tables.
///
/// Names absent from a table answer NXDOMAIN (MX) or no records (TXT).
#[derive(Default)]
pub struct FakeResolver {
    mx: HashMap<String, Result<Vec<String>, DnsLookupError>>,
    txt: HashMap<String, Result<Vec<String>, DnsLookupError>>,
    queries: AtomicUsize,
}

#[allow(dead_code)] // Not every test file uses every builder
impl FakeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mx(mut self, domain: &str, hosts: &[&str]) -> Self {
        self.mx
            .insert(domain.into(), Ok(hosts.iter().map(|h| h.to_string()).collect()));
        self
    }

    pub fn mx_error(mut self, domain: &str, error: DnsLookupError) -> Self {
        self.mx.insert(domain.into(), Err(error));
        self
    }

    pub fn txt(mut self, name: &str, records: &[&str]) -> Self {
        self.txt
            .insert(name.into(), Ok(records.iter().map(|r| r.to_string()).collect()));
        self
    }

    /// MX, SPF and DMARC answers of a Google Workspace domain.
    pub fn google(self, domain: &str) -> Self {
        self.mx(domain, &["aspmx.l.google.com.", "alt1.aspmx.l.google.com."])
            .txt(domain, &["v=spf1 include:_spf.google.com ~all", "google-site-verification=abc"])
            .txt(&format!("_dmarc.{domain}"), &["v=DMARC1; p=none"])
    }

    /// MX, SPF and DMARC answers of a Microsoft 365 domain.
    pub fn microsoft(self, domain: &str) -> Self {
        let mx = format!("{}.mail.protection.outlook.com.", domain.replace('.', "-"));
        self.mx(domain, &[mx.as_str()])
            .txt(domain, &["v=spf1 include:spf.protection.outlook.com -all"])
            .txt(&format!("_dmarc.{domain}"), &["v=DMARC1; p=quarantine"])
    }

    /// Total queries answered so far.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl RecordResolver for FakeResolver {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<String>, DnsLookupError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.mx.get(domain).cloned().unwrap_or_else(|| {
            Err(DnsLookupError::NxDomain {
                name: domain.to_string(),
            })
        })
    }

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, DnsLookupError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.txt.get(name).cloned().unwrap_or_else(|| {
            Err(DnsLookupError::NoRecords {
                name: name.to_string(),
                record_type: "TXT".to_string(),
            })
        })
    }
}

/// Classifier over `resolver` with the built-in catalog and no retry delay.
pub fn classifier(resolver: FakeResolver) -> Classifier<FakeResolver> {
    let options = ClassifierOptions {
        policy: LookupPolicy {
            attempts: 1,
            retry_delay_ms: 0,
        },
        ..Default::default()
    };
    Classifier::new(resolver, Arc::new(SignatureCatalog::builtin()), options)
}
