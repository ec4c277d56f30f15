//! Error type definitions.

use log::SetLoggerError;
use strum_macros::Display;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Fatal input problems. These abort the remaining stages of a request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid domain format")]
    InvalidDomainFormat,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    /// Lead input was empty, or carried none of email/domain/name/phone.
    #[error("Empty request: provide at least one of email, domain, name, phone")]
    EmptyRequest,

    /// Lead input could not be parsed as a JSON object.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}

/// Pipeline stage a probe error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Stage {
    #[strum(serialize = "DNS check")]
    Dns,
    #[strum(serialize = "WHOIS lookup")]
    Whois,
    #[strum(serialize = "SSL check")]
    Tls,
    #[strum(serialize = "Availability check")]
    Availability,
}

/// A non-fatal failure of one probe. The `Display` text is what lands in the report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    #[error("DNS check failed: {0}")]
    Dns(String),

    #[error("WHOIS lookup failed: {0}")]
    Whois(String),

    #[error("SSL check failed: {0}")]
    Tls(String),

    #[error("Availability check failed: {0}")]
    Availability(String),

    #[error("{stage} timed out after {secs}s")]
    Timeout { stage: Stage, secs: u64 },
}

impl ProbeError {
    pub fn stage(&self) -> Stage {
        match self {
            ProbeError::Dns(_) => Stage::Dns,
            ProbeError::Whois(_) => Stage::Whois,
            ProbeError::Tls(_) => Stage::Tls,
            ProbeError::Availability(_) => Stage::Availability,
            ProbeError::Timeout { stage, .. } => *stage,
        }
    }
}

/// Outcome of one network probe: the value, or the reason it is empty.
pub type ProbeResult<T> = Result<T, ProbeError>;
