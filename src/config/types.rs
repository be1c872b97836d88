//! Configuration types.
//!
//! This module defines enums and structs used for configuration, both when
//! the library is driven programmatically and from the command line.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_MAX_CONCURRENCY, DMARC_FILTER, DNS_ATTEMPTS, DNS_TIMEOUT_SECS, SPF_FILTER,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Output serialization for classified rows.
///
/// All formats carry the same fields; only the encoding differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values with a header row
    Csv,
    /// JSON array of records
    Json,
    /// Excel (OOXML) workbook with a header row
    Excel,
    /// Paginated PDF report
    Pdf,
    /// Line-itemized plain-text report
    Text,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use mail_provider::Config;
///
/// let config = Config {
///     max_concurrency: 20,
///     include_failures: false,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Per-query DNS timeout in seconds
    pub dns_timeout_secs: u64,

    /// Total attempts per DNS query, first try included
    pub dns_attempts: usize,

    /// Maximum number of domains classified concurrently
    pub max_concurrency: usize,

    /// Keep rows whose MX lookup failed
    pub include_failures: bool,

    /// Output format
    pub format: ExportFormat,

    /// Output file (stdout when `None`)
    pub output: Option<PathBuf>,

    /// JSON catalog replacing the built-in provider signatures
    pub catalog: Option<PathBuf>,

    /// Substring filter applied to TXT records for SPF detection
    pub spf_filter: String,

    /// Substring filter applied to `_dmarc.` TXT records
    pub dmarc_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            dns_timeout_secs: DNS_TIMEOUT_SECS,
            dns_attempts: DNS_ATTEMPTS,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            include_failures: true,
            format: ExportFormat::Csv,
            output: None,
            catalog: None,
            spf_filter: SPF_FILTER.to_string(),
            dmarc_filter: DMARC_FILTER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_log_level_ordering() {
        let error = log::LevelFilter::from(LogLevel::Error);
        let warn = log::LevelFilter::from(LogLevel::Warn);
        let info = log::LevelFilter::from(LogLevel::Info);
        let debug = log::LevelFilter::from(LogLevel::Debug);
        let trace = log::LevelFilter::from(LogLevel::Trace);

        assert!(error < warn);
        assert!(warn < info);
        assert!(info < debug);
        assert!(debug < trace);
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.dns_timeout_secs, 5);
        assert_eq!(config.dns_attempts, 2);
        assert_eq!(config.max_concurrency, 10);
        assert!(config.include_failures);
        assert_eq!(config.format, ExportFormat::Csv);
        assert!(config.output.is_none());
        assert!(config.catalog.is_none());
        assert_eq!(config.spf_filter, "SPF");
        assert_eq!(config.dmarc_filter, "TXT");
    }
}
