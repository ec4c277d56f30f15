//! Report data model.
//!
//! Every structure here is created fresh per request and serialized with
//! camelCase keys. Absent optional fields serialize as `null` unless noted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::heuristics::{CompanySize, Industry};
use crate::scoring::QualificationLevel;

/// DNS findings for a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecordSet {
    pub a: Vec<String>,
    pub mx: Vec<String>,
    pub txt: Vec<String>,
    /// Mirrors whether any A record was found
    pub has_records: bool,
}

impl DnsRecordSet {
    pub fn new(a: Vec<String>, mx: Vec<String>, txt: Vec<String>) -> Self {
        let has_records = !a.is_empty();
        Self {
            a,
            mx,
            txt,
            has_records,
        }
    }
}

/// Registration metadata. Missing fields stay in the structure as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoisInfo {
    pub registrar: Option<String>,
    pub creation_date: Option<String>,
    pub expiration_date: Option<String>,
    pub name_servers: Option<Vec<String>>,
    pub status: Option<Vec<String>>,
}

impl WhoisInfo {
    pub fn is_empty(&self) -> bool {
        self.registrar.is_none()
            && self.creation_date.is_none()
            && self.expiration_date.is_none()
            && self.name_servers.is_none()
            && self.status.is_none()
    }
}

/// Certificate check outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlsInfo {
    pub valid: bool,
    pub expiry: Option<DateTime<Utc>>,
}

impl TlsInfo {
    /// Builds the result for an obtained certificate: valid iff it expires after `now`.
    pub fn from_expiry(expiry: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self {
            valid: expiry > now,
            expiry: Some(expiry),
        }
    }
}

/// Email classification. An invalid address leaves every other flag `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailQuality {
    pub is_valid: bool,
    pub has_mx_records: bool,
    pub is_catch_all: bool,
    pub is_free_email: bool,
    pub is_disposable: bool,
}

/// Output of the domain-validation mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainReport {
    pub domain: String,
    pub timestamp: DateTime<Utc>,
    pub is_valid: bool,
    pub is_available: bool,
    pub dns_records: DnsRecordSet,
    pub whois_data: Option<WhoisInfo>,
    pub ssl_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_expiry: Option<DateTime<Utc>>,
    pub suggestions: Vec<String>,
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unavailable_reason: Option<String>,
}

impl DomainReport {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            timestamp: Utc::now(),
            is_valid: false,
            is_available: false,
            dns_records: DnsRecordSet::default(),
            whois_data: None,
            ssl_valid: false,
            ssl_expiry: None,
            suggestions: Vec::new(),
            errors: Vec::new(),
            unavailable_reason: None,
        }
    }
}

/// Scoring inputs and outputs for one lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub lead_score: u8,
    pub domain_authority: u8,
    pub company_size: CompanySize,
    pub industry: Industry,
    pub qualification_level: QualificationLevel,
    pub flags: Vec<String>,
}

impl Default for ScoreBreakdown {
    fn default() -> Self {
        Self {
            lead_score: 0,
            domain_authority: 0,
            company_size: CompanySize::Unknown,
            industry: Industry::Other,
            qualification_level: QualificationLevel::VeryLow,
            flags: Vec::new(),
        }
    }
}

/// Output of the lead-qualification mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadReport {
    pub timestamp: DateTime<Utc>,
    pub email_quality: EmailQuality,
    #[serde(flatten)]
    pub score: ScoreBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LeadReport {
    pub fn new() -> Self {
        Self {
            timestamp: Utc::now(),
            email_quality: EmailQuality::default(),
            score: ScoreBreakdown::default(),
            error: None,
        }
    }
}

impl Default for LeadReport {
    fn default() -> Self {
        Self::new()
    }
}
