//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use crate::error_handling::InitializationError;
use hickory_resolver::TokioAsyncResolver;

/// Initializes the DNS resolver for MX/TXT lookups.
///
/// Uses the system configuration (`/etc/resolv.conf` on Unix) when it can be
/// read, falling back to hickory's default upstreams otherwise. The resolver
/// makes a single attempt per query; retries of transient failures are
/// handled by the lookup layer so NXDOMAIN and empty answers are never
/// retried.
///
/// # Arguments
///
/// * `timeout` - Per-query timeout
///
/// # Returns
///
/// A configured `TokioAsyncResolver` wrapped in `Arc` for sharing across tasks.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if the timeout is zero.
pub fn init_resolver(timeout: Duration) -> Result<Arc<TokioAsyncResolver>, InitializationError> {
    use hickory_resolver::config::{ResolverConfig, ResolverOpts};

    if timeout.is_zero() {
        return Err(InitializationError::DnsResolverError(
            "DNS timeout must be greater than zero".to_string(),
        ));
    }

    let (config, mut opts) = match hickory_resolver::system_conf::read_system_conf() {
        Ok(system) => system,
        Err(e) => {
            log::debug!("Falling back to default DNS configuration: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };
    opts.timeout = timeout;
    opts.attempts = 1;
    // Names are always fully qualified domains; never append search domains
    opts.ndots = 0;

    Ok(Arc::new(TokioAsyncResolver::tokio(config, opts)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_resolver() {
        let resolver = init_resolver(Duration::from_secs(5));
        assert!(resolver.is_ok());
    }

    #[test]
    fn test_init_resolver_rejects_zero_timeout() {
        let result = init_resolver(Duration::ZERO);
        assert!(matches!(
            result,
            Err(InitializationError::DnsResolverError(_))
        ));
    }
}
