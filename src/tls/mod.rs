//! TLS certificate expiry probe.
//!
//! Connects to port 443, completes a handshake and reads the leaf certificate's
//! `notAfter`. Expired certificates still complete the handshake (see
//! [`verifier`]) so the report can carry the past expiry date with
//! `sslValid: false`.
//!
//! Uses `tokio-rustls` for async TLS connections and `x509-parser` for certificate parsing.

mod verifier;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use rustls::pki_types::ServerName;
use tokio::net::TcpStream;
use tokio_rustls::rustls::ClientConfig;
use tokio_rustls::TlsConnector;

use crate::config::TLS_PORT;
use crate::error_handling::{ProbeError, ProbeResult};
use crate::report::TlsInfo;

use verifier::ExpiryTolerantVerifier;

/// Retrieves the leaf certificate's expiry for `domain`.
///
/// `timeout` bounds the TCP connect and the handshake separately.
///
/// # Errors
///
/// Returns an error if:
/// - The domain name is not a valid server name
/// - TCP connection fails or times out
/// - TLS handshake fails or times out (other than for an expired certificate)
/// - The server presents no certificate, or it cannot be parsed
pub async fn check_certificate(domain: &str, timeout: Duration) -> Result<TlsInfo> {
    debug!("Attempting to get SSL info for domain: {domain}");

    let verifier = ExpiryTolerantVerifier::with_webpki_roots()?;
    let config = ClientConfig::builder()
        .dangerous()
        .with_custom_certificate_verifier(Arc::new(verifier))
        .with_no_client_auth();

    let server_name = ServerName::try_from(domain.to_string())
        .map_err(|e| anyhow::anyhow!("Invalid domain name: {e}"))?;

    let sock = match tokio::time::timeout(timeout, TcpStream::connect((domain, TLS_PORT))).await {
        Ok(Ok(sock)) => sock,
        Ok(Err(e)) => {
            warn!("Failed to connect to {domain}:{TLS_PORT} - {e}");
            return Err(anyhow::anyhow!("Failed to connect to {domain}:{TLS_PORT}: {e}"));
        }
        Err(_) => {
            return Err(anyhow::anyhow!(
                "TCP connection timeout for {domain}:{TLS_PORT} ({}s)",
                timeout.as_secs()
            ));
        }
    };

    let connector = TlsConnector::from(Arc::new(config));
    let tls_stream = match tokio::time::timeout(timeout, connector.connect(server_name, sock)).await
    {
        Ok(Ok(stream)) => stream,
        Ok(Err(e)) => {
            warn!("TLS connection failed for {domain}: {e}");
            return Err(anyhow::anyhow!("TLS connection failed for {domain}: {e}"));
        }
        Err(_) => {
            return Err(anyhow::anyhow!(
                "TLS handshake timeout for {domain} ({}s)",
                timeout.as_secs()
            ));
        }
    };

    let cert = tls_stream
        .get_ref()
        .1
        .peer_certificates()
        .and_then(|certs| certs.first())
        .context("Server presented no certificate")?;

    let expiry = certificate_expiry(cert.as_ref())?;
    let info = TlsInfo::from_expiry(expiry, Utc::now());
    debug!("Certificate for {domain} expires {expiry} (valid: {})", info.valid);
    Ok(info)
}

/// Reads `notAfter` from a DER-encoded certificate.
fn certificate_expiry(der: &[u8]) -> Result<DateTime<Utc>> {
    let (_, cert) = x509_parser::parse_x509_certificate(der)
        .map_err(|e| anyhow::anyhow!("Failed to parse certificate: {e}"))?;
    let not_after = cert.validity().not_after.timestamp();
    DateTime::from_timestamp(not_after, 0)
        .with_context(|| format!("Certificate expiry out of range: {not_after}"))
}

/// TLS probe as used by domain validation; failures become [`ProbeError::Tls`].
pub async fn probe_tls(domain: &str, timeout: Duration) -> ProbeResult<TlsInfo> {
    check_certificate(domain, timeout)
        .await
        .map_err(|e| ProbeError::Tls(format!("{e:#}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certificate_expiry_rejects_garbage() {
        let err = certificate_expiry(b"not a certificate").unwrap_err();
        assert!(err.to_string().contains("Failed to parse certificate"));
    }

    #[tokio::test]
    async fn test_invalid_server_name() {
        let _ = rustls::crypto::CryptoProvider::install_default(
            rustls::crypto::ring::default_provider(),
        );
        let err = check_certificate("bad domain!", Duration::from_secs(1))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Invalid domain name"));
    }

    #[tokio::test]
    async fn test_probe_tls_maps_to_tls_error() {
        let _ = rustls::crypto::CryptoProvider::install_default(
            rustls::crypto::ring::default_provider(),
        );
        let err = probe_tls("bad domain!", Duration::from_secs(1))
            .await
            .unwrap_err();
        assert!(matches!(err, ProbeError::Tls(_)));
        assert!(err.to_string().starts_with("SSL check failed"));
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_live_certificate_is_valid() {
        let _ = rustls::crypto::CryptoProvider::install_default(
            rustls::crypto::ring::default_provider(),
        );
        let info = check_certificate("example.com", Duration::from_secs(5))
            .await
            .expect("TLS check should succeed");
        assert!(info.valid);
        assert!(info.expiry.is_some());
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_live_expired_certificate_reports_invalid() {
        let _ = rustls::crypto::CryptoProvider::install_default(
            rustls::crypto::ring::default_provider(),
        );
        let info = check_certificate("expired.badssl.com", Duration::from_secs(5))
            .await
            .expect("expired certificate should still be read");
        assert!(!info.valid);
        assert!(info.expiry.is_some());
    }
}
