//! Domain availability: is the domain already tracked by the owning system?
//!
//! The lookup is a pluggable store. The reference store only marks domains that
//! contain a configured substring as taken; a datastore-backed implementation
//! replaces it without changes to the pipeline.

use async_trait::async_trait;

use crate::config::{UNAVAILABLE_MARKER, UNAVAILABLE_REASON};
use crate::error_handling::ProbeResult;

/// Result of an availability lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    pub is_available: bool,
    pub unavailable_reason: Option<String>,
}

impl Availability {
    pub fn available() -> Self {
        Self {
            is_available: true,
            unavailable_reason: None,
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            is_available: false,
            unavailable_reason: Some(reason.into()),
        }
    }
}

#[async_trait]
pub trait AvailabilityStore: Send + Sync {
    /// Looks up a normalized domain.
    async fn lookup(&self, domain: &str) -> ProbeResult<Availability>;
}

/// Reference policy: a domain is taken if it contains `marker`.
#[derive(Debug, Clone)]
pub struct SubstringAvailabilityStore {
    marker: String,
    reason: String,
}

impl SubstringAvailabilityStore {
    pub fn new(marker: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            reason: reason.into(),
        }
    }
}

impl Default for SubstringAvailabilityStore {
    fn default() -> Self {
        Self::new(UNAVAILABLE_MARKER, UNAVAILABLE_REASON)
    }
}

#[async_trait]
impl AvailabilityStore for SubstringAvailabilityStore {
    async fn lookup(&self, domain: &str) -> ProbeResult<Availability> {
        if domain.contains(self.marker.as_str()) {
            Ok(Availability::unavailable(self.reason.clone()))
        } else {
            Ok(Availability::available())
        }
    }
}
