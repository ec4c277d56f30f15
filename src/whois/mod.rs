//! WHOIS/RDAP domain lookup using the whois-service crate.
//!
//! whois-service tries RDAP first and falls back to port-43 WHOIS, using the
//! IANA bootstrap to find the registry. Its parsed answer is reduced here to
//! registrar, creation/expiration dates, name servers and status.

mod convert;

use std::time::Duration;

use anyhow::{Context, Result};
use whois_service::WhoisClient;

use crate::error_handling::{ProbeError, ProbeResult};
use crate::report::WhoisInfo;

pub use convert::{convert_parsed_data, normalize_date};

/// Performs a WHOIS lookup for a domain.
///
/// # Arguments
///
/// * `domain` - The normalized domain to look up (e.g., "acme.com")
/// * `timeout` - Bound on client setup plus the lookup itself
///
/// # Returns
///
/// The registration data. An unregistered domain or an answer without any known
/// field yields an empty `WhoisInfo`.
///
/// # Errors
///
/// Returns an error if the client cannot be created, the lookup fails, or it
/// does not finish within `timeout`.
pub async fn lookup_whois(domain: &str, timeout: Duration) -> Result<WhoisInfo> {
    log::info!("Starting WHOIS lookup for domain: {domain}");

    let lookup = async {
        let client = WhoisClient::new()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create WHOIS client: {e}"))?;
        client
            .lookup(domain)
            .await
            .map_err(|e| anyhow::anyhow!("{e}"))
    };
    let response = tokio::time::timeout(timeout, lookup)
        .await
        .with_context(|| format!("WHOIS lookup timeout for {domain} ({}s)", timeout.as_secs()))??;

    log::debug!(
        "WHOIS answer for {domain} from {} ({:?}, cached: {})",
        response.whois_server,
        response.lookup_status,
        response.cached
    );
    Ok(convert_parsed_data(&response))
}

/// Runs a WHOIS lookup and maps any failure to a stage-tagged `ProbeError`.
pub async fn probe_whois(domain: &str, timeout: Duration) -> ProbeResult<WhoisInfo> {
    match lookup_whois(domain, timeout).await {
        Ok(info) => {
            log::debug!(
                "WHOIS lookup for {domain}: registrar={:?}, creation={:?}, expiration={:?}",
                info.registrar,
                info.creation_date,
                info.expiration_date
            );
            Ok(info)
        }
        Err(e) => {
            log::warn!("WHOIS lookup failed for {domain}: {e:#}");
            Err(ProbeError::Whois(format!("{e:#}")))
        }
    }
}
