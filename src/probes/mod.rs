//! The network probes behind one trait.
//!
//! The pipeline only talks to [`DomainProbes`]; [`NetworkProbes`] is the real
//! implementation (hickory DNS, port-43 WHOIS, rustls), and tests substitute
//! in-memory fakes.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;

use crate::config::Config;
use crate::dns::{lookup_a_records, lookup_mx_records, lookup_txt_records};
use crate::error_handling::{InitializationError, ProbeResult};
use crate::initialization::init_resolver;
use crate::report::{TlsInfo, WhoisInfo};
use crate::tls::probe_tls;
use crate::whois::probe_whois;

#[async_trait]
pub trait DomainProbes: Send + Sync {
    async fn a_records(&self, domain: &str) -> ProbeResult<Vec<String>>;
    async fn mx_records(&self, domain: &str) -> ProbeResult<Vec<String>>;
    async fn txt_records(&self, domain: &str) -> ProbeResult<Vec<String>>;
    async fn whois(&self, domain: &str) -> ProbeResult<WhoisInfo>;
    async fn tls(&self, domain: &str) -> ProbeResult<TlsInfo>;
}

/// Probes that hit the network.
pub struct NetworkProbes {
    resolver: Arc<TokioAsyncResolver>,
    whois_timeout: Duration,
    tls_timeout: Duration,
}

impl NetworkProbes {
    pub fn new(
        resolver: Arc<TokioAsyncResolver>,
        whois_timeout: Duration,
        tls_timeout: Duration,
    ) -> Self {
        Self {
            resolver,
            whois_timeout,
            tls_timeout,
        }
    }

    /// Builds the resolver from `config` and wires the configured timeouts.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let resolver = init_resolver(config.dns_timeout())?;
        Ok(Self::new(
            resolver,
            config.whois_timeout(),
            config.tls_timeout(),
        ))
    }
}

#[async_trait]
impl DomainProbes for NetworkProbes {
    async fn a_records(&self, domain: &str) -> ProbeResult<Vec<String>> {
        lookup_a_records(domain, &self.resolver).await
    }

    async fn mx_records(&self, domain: &str) -> ProbeResult<Vec<String>> {
        lookup_mx_records(domain, &self.resolver).await
    }

    async fn txt_records(&self, domain: &str) -> ProbeResult<Vec<String>> {
        lookup_txt_records(domain, &self.resolver).await
    }

    async fn whois(&self, domain: &str) -> ProbeResult<WhoisInfo> {
        probe_whois(domain, self.whois_timeout).await
    }

    async fn tls(&self, domain: &str) -> ProbeResult<TlsInfo> {
        probe_tls(domain, self.tls_timeout).await
    }
}
