//! Result aggregation for the two assessment modes.
//!
//! [`Assessor`] owns the collaborators (probes, availability store, heuristic
//! estimators, scoring engine) and produces one fresh report per call:
//! - [`Assessor::validate_domain`]: format → DNS/WHOIS/TLS (concurrently) →
//!   availability → suggestions
//! - [`Assessor::qualify_lead`]: email quality → authority → company size →
//!   industry → score
//!
//! Only a domain format failure short-circuits. Every other stage failure is
//! recorded in the report and the remaining stages still run; neither method
//! returns an error.

mod request;

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::availability::{AvailabilityStore, SubstringAvailabilityStore};
use crate::config::{
    Config, AVAILABILITY_TIMEOUT_SECS, DNS_TIMEOUT_SECS, TLS_TIMEOUT_SECS, WHOIS_TIMEOUT_SECS,
};
use crate::email::EmailQualityAnalyzer;
use crate::error_handling::{InitializationError, InputError, ProbeResult, Stage};
use crate::format::{email_domain, lead_domain, normalize, validate_domain};
use crate::heuristics::{
    AuthorityEstimator, CompanySizeEstimator, HeuristicAuthorityEstimator, Industry,
    IndustryClassifier, KeywordIndustryClassifier, RuleBasedCompanySize,
};
use crate::probes::{DomainProbes, NetworkProbes};
use crate::report::{DnsRecordSet, DomainReport, LeadReport, ScoreBreakdown, WhoisInfo};
use crate::scoring::{ScoringEngine, ScoringInput};
use crate::suggestions::suggest_alternatives;
use crate::utils::{duration_to_ms, probe_with_timeout};

pub use request::LeadRequest;

/// Per-stage deadlines and toggles for domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSettings {
    pub dns_timeout: Duration,
    pub whois_timeout: Duration,
    pub tls_timeout: Duration,
    pub availability_timeout: Duration,
    pub enable_whois: bool,
    pub enable_tls: bool,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            dns_timeout: Duration::from_secs(DNS_TIMEOUT_SECS),
            whois_timeout: Duration::from_secs(WHOIS_TIMEOUT_SECS),
            tls_timeout: Duration::from_secs(TLS_TIMEOUT_SECS),
            availability_timeout: Duration::from_secs(AVAILABILITY_TIMEOUT_SECS),
            enable_whois: true,
            enable_tls: true,
        }
    }
}

impl From<&Config> for ProbeSettings {
    fn from(config: &Config) -> Self {
        Self {
            dns_timeout: config.dns_timeout(),
            whois_timeout: config.whois_timeout(),
            tls_timeout: config.tls_timeout(),
            enable_whois: config.enable_whois,
            enable_tls: config.enable_tls,
            ..Self::default()
        }
    }
}

pub struct Assessor {
    probes: Arc<dyn DomainProbes>,
    availability: Box<dyn AvailabilityStore>,
    authority: Box<dyn AuthorityEstimator>,
    company_size: Box<dyn CompanySizeEstimator>,
    industry: Box<dyn IndustryClassifier>,
    email: EmailQualityAnalyzer,
    scoring: ScoringEngine,
    settings: ProbeSettings,
}

impl Assessor {
    /// Builds an assessor around `probes` with the reference collaborators and
    /// default settings.
    pub fn new(probes: Arc<dyn DomainProbes>) -> Self {
        Self {
            probes,
            availability: Box::new(SubstringAvailabilityStore::default()),
            authority: Box::new(HeuristicAuthorityEstimator::default()),
            company_size: Box::new(RuleBasedCompanySize),
            industry: Box::new(KeywordIndustryClassifier::default()),
            email: EmailQualityAnalyzer::default(),
            scoring: ScoringEngine::new(),
            settings: ProbeSettings::default(),
        }
    }

    /// Builds an assessor backed by the real network probes.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError` if the DNS resolver cannot be created.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let probes = NetworkProbes::from_config(config)?;
        Ok(Self::new(Arc::new(probes))
            .with_settings(ProbeSettings::from(config))
            .with_email_analyzer(EmailQualityAnalyzer::new(config.dns_timeout())))
    }

    pub fn with_settings(mut self, settings: ProbeSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_availability_store(mut self, store: Box<dyn AvailabilityStore>) -> Self {
        self.availability = store;
        self
    }

    pub fn with_authority_estimator(mut self, estimator: Box<dyn AuthorityEstimator>) -> Self {
        self.authority = estimator;
        self
    }

    pub fn with_company_size_estimator(
        mut self,
        estimator: Box<dyn CompanySizeEstimator>,
    ) -> Self {
        self.company_size = estimator;
        self
    }

    pub fn with_industry_classifier(mut self, classifier: Box<dyn IndustryClassifier>) -> Self {
        self.industry = classifier;
        self
    }

    pub fn with_email_analyzer(mut self, analyzer: EmailQualityAnalyzer) -> Self {
        self.email = analyzer;
        self
    }

    /// Runs the domain-validation pipeline.
    pub async fn validate_domain(&self, raw: &str) -> DomainReport {
        let started = Instant::now();
        let domain = match validate_domain(raw) {
            Ok(domain) => domain,
            Err(e) => {
                warn!("Rejecting domain {raw:?}: {e}");
                let mut report = DomainReport::new(normalize(raw));
                report.errors.push(e.to_string());
                return report;
            }
        };

        let mut report = DomainReport::new(domain.as_str());
        report.is_valid = true;
        let settings = &self.settings;
        let probes = &*self.probes;

        debug!("Probing {domain}");
        let dns = async {
            tokio::join!(
                probe_with_timeout(Stage::Dns, settings.dns_timeout, probes.a_records(&domain)),
                probe_with_timeout(Stage::Dns, settings.dns_timeout, probes.mx_records(&domain)),
                probe_with_timeout(Stage::Dns, settings.dns_timeout, probes.txt_records(&domain)),
            )
        };
        let whois = async {
            if settings.enable_whois {
                let lookup = probes.whois(&domain);
                Some(probe_with_timeout(Stage::Whois, settings.whois_timeout, lookup).await)
            } else {
                None
            }
        };
        let tls = async {
            if settings.enable_tls {
                let check = probes.tls(&domain);
                Some(probe_with_timeout(Stage::Tls, settings.tls_timeout, check).await)
            } else {
                None
            }
        };
        let ((a, mx, txt), whois, tls) = tokio::join!(dns, whois, tls);

        let errors = &mut report.errors;
        report.dns_records = DnsRecordSet::new(
            settle(a, errors),
            settle(mx, errors),
            settle(txt, errors),
        );
        report.whois_data = whois
            .map(|result| settle(result, errors))
            .filter(|info: &WhoisInfo| !info.is_empty());
        if let Some(tls) = tls.map(|result| settle(result, errors)) {
            report.ssl_valid = tls.valid;
            report.ssl_expiry = tls.expiry;
        }

        match probe_with_timeout(
            Stage::Availability,
            settings.availability_timeout,
            self.availability.lookup(&domain),
        )
        .await
        {
            Ok(availability) => {
                report.is_available = availability.is_available;
                if !availability.is_available {
                    report.unavailable_reason = availability.unavailable_reason;
                    report.suggestions = suggest_alternatives(&domain);
                }
            }
            Err(e) => {
                warn!("{e}");
                report.errors.push(e.to_string());
            }
        }

        info!(
            "Validated {domain} in {}ms (available: {}, {} errors)",
            duration_to_ms(started.elapsed()),
            report.is_available,
            report.errors.len()
        );
        report
    }

    /// Runs the lead-qualification pipeline.
    pub async fn qualify_lead(&self, request: &LeadRequest) -> LeadReport {
        let started = Instant::now();
        let request = request.normalized();
        let mut report = LeadReport::new();
        if request.is_empty() {
            report.error = Some(InputError::EmptyRequest.to_string());
            return report;
        }

        if let Some(email) = &request.email {
            report.email_quality = self.email.analyze(email, &*self.probes).await;
        }

        let domain = request
            .domain
            .clone()
            .or_else(|| {
                request
                    .email
                    .as_deref()
                    .filter(|_| report.email_quality.is_valid)
                    .and_then(email_domain)
                    .map(str::to_string)
            })
            .and_then(|candidate| {
                let domain = lead_domain(&candidate);
                if domain.is_none() {
                    debug!("Ignoring lead domain {candidate:?}: not a host name");
                }
                domain
            });

        let domain_authority = match &domain {
            Some(domain) => self.authority.estimate(domain).await.min(100),
            None => 0,
        };
        let company_size = self
            .company_size
            .estimate(&report.email_quality, domain_authority);
        let industry = domain
            .as_deref()
            .map(|domain| self.industry.classify(domain))
            .unwrap_or(Industry::Other);

        let outcome = self.scoring.score(&ScoringInput {
            email_quality: &report.email_quality,
            domain_authority,
            phone: request.phone.as_deref(),
            name: request.name.as_deref(),
            company_size,
        });

        info!(
            "Qualified lead in {}ms: score {} ({})",
            duration_to_ms(started.elapsed()),
            outcome.lead_score,
            outcome.qualification_level
        );
        report.score = ScoreBreakdown {
            lead_score: outcome.lead_score,
            domain_authority,
            company_size,
            industry,
            qualification_level: outcome.qualification_level,
            flags: outcome.flags,
        };
        report
    }
}

/// Unwraps a probe result, recording the failure and falling back to an empty value.
fn settle<T: Default>(result: ProbeResult<T>, errors: &mut Vec<String>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!("{e}");
            errors.push(e.to_string());
            T::default()
        }
    }
}
