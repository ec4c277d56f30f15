//! Email quality classification.
//!
//! An address is checked for syntax, free-mail provider membership and MX
//! presence on its domain. Catch-all and disposable detection need an SMTP
//! prober and a disposable-domain list respectively; until one is supplied both
//! flags stay `false`.

use std::collections::HashSet;
use std::time::Duration;

use log::{debug, warn};

use crate::config::{DNS_TIMEOUT_SECS, FREE_EMAIL_PROVIDERS};
use crate::error_handling::Stage;
use crate::format::{email_domain, validate_email};
use crate::probes::DomainProbes;
use crate::report::EmailQuality;
use crate::utils::probe_with_timeout;

pub struct EmailQualityAnalyzer {
    free_providers: HashSet<String>,
    mx_timeout: Duration,
}

impl EmailQualityAnalyzer {
    pub fn new(mx_timeout: Duration) -> Self {
        Self::with_free_providers(FREE_EMAIL_PROVIDERS, mx_timeout)
    }

    pub fn with_free_providers<I, S>(providers: I, mx_timeout: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            free_providers: providers
                .into_iter()
                .map(|p| p.into().to_lowercase())
                .collect(),
            mx_timeout,
        }
    }

    pub fn is_free_provider(&self, domain: &str) -> bool {
        self.free_providers.contains(domain)
    }

    /// Classifies `email`. An invalid address returns all flags `false` without
    /// touching the network. MX lookup failures count as "no MX" and are only logged.
    pub async fn analyze(&self, email: &str, probes: &dyn DomainProbes) -> EmailQuality {
        let email = match validate_email(email) {
            Ok(email) => email,
            Err(e) => {
                debug!("Skipping email checks: {e}");
                return EmailQuality::default();
            }
        };
        let Some(domain) = email_domain(&email) else {
            return EmailQuality::default();
        };

        let has_mx_records =
            match probe_with_timeout(Stage::Dns, self.mx_timeout, probes.mx_records(domain)).await
            {
                Ok(mx) => !mx.is_empty(),
                Err(e) => {
                    warn!("MX check for {domain} failed: {e}");
                    false
                }
            };

        EmailQuality {
            is_valid: true,
            has_mx_records,
            is_catch_all: false,
            is_free_email: self.is_free_provider(domain),
            is_disposable: false,
        }
    }
}

impl Default for EmailQualityAnalyzer {
    fn default() -> Self {
        Self::new(Duration::from_secs(DNS_TIMEOUT_SECS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::{ProbeError, ProbeResult};
    use crate::report::{TlsInfo, WhoisInfo};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MxOnly {
        mx: ProbeResult<Vec<String>>,
        calls: AtomicUsize,
    }

    impl MxOnly {
        fn new(mx: ProbeResult<Vec<String>>) -> Self {
            Self {
                mx,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl DomainProbes for MxOnly {
        async fn a_records(&self, _domain: &str) -> ProbeResult<Vec<String>> {
            Ok(vec![])
        }
        async fn mx_records(&self, _domain: &str) -> ProbeResult<Vec<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.mx.clone()
        }
        async fn txt_records(&self, _domain: &str) -> ProbeResult<Vec<String>> {
            Ok(vec![])
        }
        async fn whois(&self, _domain: &str) -> ProbeResult<WhoisInfo> {
            Ok(WhoisInfo::default())
        }
        async fn tls(&self, _domain: &str) -> ProbeResult<TlsInfo> {
            Ok(TlsInfo::default())
        }
    }

    #[tokio::test]
    async fn test_free_mail_with_mx() {
        let probes = MxOnly::new(Ok(vec!["gmail-smtp-in.l.google.com".into()]));
        let quality = EmailQualityAnalyzer::default()
            .analyze("User@Gmail.com", &probes)
            .await;
        assert!(quality.is_valid);
        assert!(quality.has_mx_records);
        assert!(quality.is_free_email);
        assert!(!quality.is_catch_all);
        assert!(!quality.is_disposable);
    }

    #[tokio::test]
    async fn test_corporate_without_mx() {
        let probes = MxOnly::new(Ok(vec![]));
        let quality = EmailQualityAnalyzer::default()
            .analyze("ana@acme.com", &probes)
            .await;
        assert!(quality.is_valid);
        assert!(!quality.has_mx_records);
        assert!(!quality.is_free_email);
    }

    #[tokio::test]
    async fn test_mx_failure_is_not_fatal() {
        let probes = MxOnly::new(Err(ProbeError::Dns("SERVFAIL".into())));
        let quality = EmailQualityAnalyzer::default()
            .analyze("ana@acme.com", &probes)
            .await;
        assert!(quality.is_valid);
        assert!(!quality.has_mx_records);
    }

    #[tokio::test]
    async fn test_invalid_email_skips_lookup() {
        let probes = MxOnly::new(Ok(vec!["mx.acme.com".into()]));
        let quality = EmailQualityAnalyzer::default()
            .analyze("not-an-email", &probes)
            .await;
        assert_eq!(quality, EmailQuality::default());
        assert_eq!(probes.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_custom_provider_list() {
        let analyzer =
            EmailQualityAnalyzer::with_free_providers(["Example.org"], Duration::from_secs(1));
        assert!(analyzer.is_free_provider("example.org"));
        assert!(!analyzer.is_free_provider("gmail.com"));
    }
}
