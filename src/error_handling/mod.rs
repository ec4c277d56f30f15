//! Error handling.
//!
//! This module provides the error taxonomy used across the crate:
//! - **Initialization errors**: logger or resolver setup failed; the binary exits
//! - **Input errors**: malformed domain/email or an unusable lead request; fatal for the request
//! - **Probe errors**: a DNS, WHOIS, TLS or availability stage failed; recorded in the
//!   report as a stage-tagged message while the pipeline continues

mod types;

// Re-export public API
pub use types::{InitializationError, InputError, ProbeError, ProbeResult, Stage};
