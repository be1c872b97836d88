//! Raw MX/TXT queries.
//!
//! [`RecordResolver`] is the seam between the classifier and the network: the
//! production implementation talks to DNS through `hickory-resolver`, tests
//! substitute an in-memory table.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::DnsLookupError;

/// Source of raw MX and TXT data for a name.
///
/// Implementations perform exactly one query per call (no retries) and report
/// negative answers as errors; retry and result normalization live in
/// [`super::resolve_mx`] and friends.
pub trait RecordResolver: Send + Sync {
    /// Mail exchanger hostnames for `domain`, in the order the resolver returned them.
    fn lookup_mx(
        &self,
        domain: &str,
    ) -> impl Future<Output = Result<Vec<String>, DnsLookupError>> + Send;

    /// TXT record strings for `name`; multi-chunk records are concatenated.
    fn lookup_txt(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<String>, DnsLookupError>> + Send;
}

/// `RecordResolver` backed by a shared hickory resolver.
///
/// Every query is bounded by `timeout`, independently of the resolver's own
/// per-attempt timeout.
#[derive(Clone)]
pub struct DnsRecordResolver {
    resolver: Arc<TokioAsyncResolver>,
    timeout: Duration,
}

impl DnsRecordResolver {
    pub fn new(resolver: Arc<TokioAsyncResolver>, timeout: Duration) -> Self {
        Self { resolver, timeout }
    }

    async fn query(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<hickory_resolver::lookup::Lookup, DnsLookupError> {
        match tokio::time::timeout(self.timeout, self.resolver.lookup(name, record_type)).await {
            Ok(Ok(lookup)) => Ok(lookup),
            Ok(Err(e)) => Err(map_resolve_error(name, record_type, &e, self.timeout)),
            Err(_) => Err(DnsLookupError::Timeout {
                name: name.to_string(),
                timeout: self.timeout,
            }),
        }
    }
}

impl RecordResolver for DnsRecordResolver {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<String>, DnsLookupError> {
        let lookup = self.query(domain, RecordType::MX).await?;
        // Resolver order is kept; preference is not used for sorting
        Ok(lookup
            .iter()
            .filter_map(|rdata| {
                if let RData::MX(mx) = rdata {
                    Some(mx.exchange().to_utf8())
                } else {
                    None
                }
            })
            .collect())
    }

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, DnsLookupError> {
        let lookup = self.query(name, RecordType::TXT).await?;
        Ok(lookup
            .iter()
            .filter_map(|rdata| {
                if let RData::TXT(txt) = rdata {
                    Some(
                        txt.iter()
                            .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                            .collect::<Vec<String>>()
                            .join(""),
                    )
                } else {
                    None
                }
            })
            .collect())
    }
}

/// Maps a hickory error onto the lookup error taxonomy.
pub(crate) fn map_resolve_error(
    name: &str,
    record_type: RecordType,
    error: &ResolveError,
    timeout: Duration,
) -> DnsLookupError {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => match *response_code {
            ResponseCode::NXDomain => DnsLookupError::NxDomain {
                name: name.to_string(),
            },
            ResponseCode::NoError => DnsLookupError::NoRecords {
                name: name.to_string(),
                record_type: record_type.to_string(),
            },
            code => DnsLookupError::ServerFailure {
                name: name.to_string(),
                code: code.to_string(),
            },
        },
        ResolveErrorKind::Timeout => DnsLookupError::Timeout {
            name: name.to_string(),
            timeout,
        },
        _ => DnsLookupError::Transport {
            name: name.to_string(),
            message: error.to_string(),
        },
    }
}
