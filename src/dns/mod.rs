//! DNS record resolution.
//!
//! This module provides async MX and TXT lookups:
//! - [`RecordResolver`]: one raw query per call, implemented over `hickory-resolver`
//!   by [`DnsRecordResolver`]
//! - [`resolve_mx`], [`resolve_txt_filtered`], [`resolve_dmarc`]: bounded retries of
//!   transient failures and normalization into [`RecordLookup`]
//!
//! No lookup ever returns an error to the caller; failures are captured as
//! `RecordLookup::Failure` with the reason embedded.

mod lookup;
mod resolver;

// Re-export public API
pub use lookup::{resolve_dmarc, resolve_mx, resolve_txt_filtered, LookupPolicy, RecordLookup};
pub use resolver::{DnsRecordResolver, RecordResolver};
