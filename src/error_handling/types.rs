//! Error type definitions.
//!
//! This module defines the error types used throughout the application, plus
//! the error/info categories tracked by [`super::ProcessingStats`].

use std::path::PathBuf;
use std::time::Duration;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Failure of a single DNS query.
///
/// These never escape the classifier: they are rendered into the failure
/// reason of a lookup result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnsLookupError {
    /// The query did not complete within the configured timeout.
    #[error("DNS query for {name} timed out after {timeout:?}")]
    Timeout { name: String, timeout: Duration },

    /// The queried name does not exist.
    #[error("The DNS query name does not exist: {name}")]
    NxDomain { name: String },

    /// The name exists but has no records of the requested type.
    #[error("The DNS response does not contain an answer to the question: {name} IN {record_type}")]
    NoRecords { name: String, record_type: String },

    /// The server answered with an error code (SERVFAIL, REFUSED, ...).
    #[error("DNS server failure for {name}: {code}")]
    ServerFailure { name: String, code: String },

    /// Network or protocol failure talking to the resolver.
    #[error("DNS transport error for {name}: {message}")]
    Transport { name: String, message: String },
}

impl DnsLookupError {
    /// Whether a retry could plausibly succeed.
    ///
    /// Negative answers (NXDOMAIN, no data) are authoritative and never retried.
    pub fn is_retriable(&self) -> bool {
        matches!(
            self,
            DnsLookupError::Timeout { .. }
                | DnsLookupError::ServerFailure { .. }
                | DnsLookupError::Transport { .. }
        )
    }
}

/// Errors loading a provider signature catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not valid catalog JSON.
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// A signature has an empty needle, which would match every record.
    #[error("Signature for provider '{provider}' has an empty needle")]
    EmptyNeedle { provider: String },
}

/// Errors reading batch input. Fatal for the whole batch.
#[derive(Error, Debug)]
pub enum BatchInputError {
    /// The input file could not be opened.
    #[error("Failed to open input file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not well-formed CSV.
    #[error("Failed to parse input: {0}")]
    Csv(#[from] csv::Error),

    /// One or more required columns are absent from the header row.
    #[error("The file must contain the columns: {}; missing: {}", .required.join(", "), .missing.join(", "))]
    MissingColumns {
        required: Vec<String>,
        missing: Vec<String>,
    },
}

/// Errors serializing classified rows.
#[derive(Error, Debug)]
pub enum ExportError {
    /// CSV serialization failed.
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed.
    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),

    /// Building the Excel workbook failed.
    #[error("Excel export error: {0}")]
    Excel(#[from] rust_xlsxwriter::XlsxError),

    /// Building the PDF document failed.
    #[error("PDF export error: {0}")]
    Pdf(String),

    /// Writing the output failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Lookup failures counted during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)]
pub enum ErrorType {
    DnsMxLookupError,
    DnsSpfLookupError,
    DnsDmarcLookupError,
}

/// Notable classification events that aren't errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// Domain is in the disposable set
    DisposableDomain,
    /// At least one lookup failed, so no provider was determined
    UndeterminableProvider,
    /// Input domain was empty after normalization
    EmptyDomain,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::DnsMxLookupError => "DNS MX lookup error",
            ErrorType::DnsSpfLookupError => "DNS SPF lookup error",
            ErrorType::DnsDmarcLookupError => "DNS DMARC lookup error",
        }
    }
}

impl std::fmt::Display for InfoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl InfoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::DisposableDomain => "Disposable domain",
            InfoType::UndeterminableProvider => "Undeterminable provider",
            InfoType::EmptyDomain => "Empty domain",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dns_lookup_error_retriable() {
        let timeout = DnsLookupError::Timeout {
            name: "example.com".into(),
            timeout: Duration::from_secs(5),
        };
        let servfail = DnsLookupError::ServerFailure {
            name: "example.com".into(),
            code: "Server Failure".into(),
        };
        let transport = DnsLookupError::Transport {
            name: "example.com".into(),
            message: "connection refused".into(),
        };
        assert!(timeout.is_retriable());
        assert!(servfail.is_retriable());
        assert!(transport.is_retriable());
    }

    #[test]
    fn test_timeout_message_keeps_subsecond_precision() {
        let err = DnsLookupError::Timeout {
            name: "example.it".into(),
            timeout: Duration::from_millis(500),
        };
        assert_eq!(err.to_string(), "DNS query for example.it timed out after 500ms");

        let err = DnsLookupError::Timeout {
            name: "example.it".into(),
            timeout: Duration::from_secs(5),
        };
        assert_eq!(err.to_string(), "DNS query for example.it timed out after 5s");
    }

    #[test]
    fn test_dns_lookup_error_not_retriable() {
        let nx = DnsLookupError::NxDomain {
            name: "nope.invalid".into(),
        };
        let empty = DnsLookupError::NoRecords {
            name: "example.com".into(),
            record_type: "MX".into(),
        };
        assert!(!nx.is_retriable());
        assert!(!empty.is_retriable());
    }

    #[test]
    fn test_missing_columns_message_lists_columns() {
        let err = BatchInputError::MissingColumns {
            required: vec!["Istituzione".into(), "Dominio".into(), "Ente".into()],
            missing: vec!["Ente".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("Istituzione, Dominio, Ente"));
        assert!(msg.contains("missing: Ente"));
    }

    #[test]
    fn test_error_type_display() {
        assert_eq!(ErrorType::DnsMxLookupError.to_string(), "DNS MX lookup error");
        assert_eq!(InfoType::EmptyDomain.to_string(), "Empty domain");
    }
}
