//! lead_assess library: domain probing and lead qualification
//!
//! This library assesses a prospect for outreach prioritization. Domain
//! validation checks the format, then probes DNS, WHOIS and the TLS certificate
//! concurrently, asks an availability store whether the domain is already
//! tracked and proposes alternatives when it is. Lead qualification classifies
//! the email address, estimates domain authority, company size and industry, and
//! turns everything into a 0-100 score with a qualification level.
//!
//! # Example
//!
//! ```no_run
//! use lead_assess::{Assessor, Config, LeadRequest};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let assessor = Assessor::from_config(&Config::default())?;
//!
//! let report = assessor.validate_domain("acme.com").await;
//! println!("{}", serde_json::to_string_pretty(&report)?);
//!
//! let lead = LeadRequest::from_json(r#"{"email":"ana@acme.com","name":"Ana Silva"}"#)?;
//! let report = assessor.qualify_lead(&lead).await;
//! println!("{} ({})", report.score.lead_score, report.score.qualification_level);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime, and the rustls crypto provider must be
//! installed (`initialization::init_crypto_provider`) before TLS probes run.

pub mod assess;
pub mod availability;
pub mod config;
pub mod dns;
pub mod email;
pub mod error_handling;
pub mod format;
pub mod heuristics;
pub mod initialization;
pub mod probes;
pub mod report;
pub mod scoring;
pub mod suggestions;
pub mod tls;
mod utils;
pub mod whois;

// Re-export public API
pub use assess::{Assessor, LeadRequest, ProbeSettings};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, InputError, ProbeError, ProbeResult, Stage};
pub use probes::{DomainProbes, NetworkProbes};
pub use report::{DomainReport, LeadReport};
