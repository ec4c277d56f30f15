//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use crate::error_handling::InitializationError;
use hickory_resolver::TokioAsyncResolver;

/// Initializes the DNS resolver used by the DNS probe and the email MX check.
///
/// Uses the default upstream configuration with a bounded per-query timeout so a
/// slow nameserver degrades into a recorded probe error instead of a hang.
///
/// # Arguments
///
/// * `timeout` - Per-query timeout
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

    let mut opts = ResolverOpts::default();
    opts.timeout = timeout;
    opts.attempts = 2; // Reduce retry attempts to fail faster
    opts.ndots = 0; // Prevent search domain appending

    Ok(Arc::new(TokioAsyncResolver::tokio(
        ResolverConfig::default(),
        opts,
    )))
}
