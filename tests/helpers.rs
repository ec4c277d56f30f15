// Shared test doubles for the probe and estimator seams.
//
// Nothing here touches the network; each fake counts its calls so tests can
// assert which stages ran.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{Duration, Utc};

use lead_assess::heuristics::AuthorityEstimator;
use lead_assess::report::{TlsInfo, WhoisInfo};
use lead_assess::{DomainProbes, ProbeResult};

/// Probes that answer like a healthy, registered domain with a valid certificate.
#[derive(Default)]
pub struct FakeProbes {
    pub calls: AtomicUsize,
}

#[allow(dead_code)] // Used by other test files
impl FakeProbes {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DomainProbes for FakeProbes {
    async fn a_records(&self, _domain: &str) -> ProbeResult<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec!["93.184.216.34".to_string()])
    }

    async fn mx_records(&self, domain: &str) -> ProbeResult<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![format!("mx1.{domain}")])
    }

    async fn txt_records(&self, _domain: &str) -> ProbeResult<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec!["v=spf1 -all".to_string()])
    }

    async fn whois(&self, _domain: &str) -> ProbeResult<WhoisInfo> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(WhoisInfo::default())
    }

    async fn tls(&self, _domain: &str) -> ProbeResult<TlsInfo> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(TlsInfo::from_expiry(Utc::now() + Duration::days(90), Utc::now()))
    }
}

/// Authority estimator returning a constant, standing in for an authority API.
#[allow(dead_code)] // Used by other test files
pub struct FixedAuthority(pub u8);

#[async_trait]
impl AuthorityEstimator for FixedAuthority {
    async fn estimate(&self, _domain: &str) -> u8 {
        self.0
    }
}
