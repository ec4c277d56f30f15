//! Domain authority estimation.

use std::sync::Mutex;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{
    AUTHORITY_MEDIUM_LABEL_BONUS, AUTHORITY_SHORT_LABEL_BONUS, AUTHORITY_TLD_COM,
    AUTHORITY_TLD_COM_BR, AUTHORITY_TLD_ORG_NET, MAX_AUTHORITY_SIGNAL, MAX_SCORE,
    MEDIUM_LABEL_LEN, SHORT_LABEL_LEN,
};

/// Estimates a 0-100 authority score for a normalized domain.
#[async_trait]
pub trait AuthorityEstimator: Send + Sync {
    async fn estimate(&self, domain: &str) -> u8;
}

/// The external part of the authority score, in `[0, MAX_AUTHORITY_SIGNAL]`.
pub trait AuthoritySignal: Send + Sync {
    fn signal(&self, domain: &str) -> u8;
}

/// Random signal. Seed it to make scoring reproducible.
pub struct RandomAuthoritySignal {
    rng: Mutex<StdRng>,
}

impl RandomAuthoritySignal {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomAuthoritySignal {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthoritySignal for RandomAuthoritySignal {
    fn signal(&self, _domain: &str) -> u8 {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.random_range(0..=MAX_AUTHORITY_SIGNAL)
    }
}

/// Constant signal, clamped to the allowed range.
#[derive(Debug, Clone, Copy)]
pub struct FixedAuthoritySignal(pub u8);

impl AuthoritySignal for FixedAuthoritySignal {
    fn signal(&self, _domain: &str) -> u8 {
        self.0.min(MAX_AUTHORITY_SIGNAL)
    }
}

/// TLD base + label-length bonus + external signal, capped at 100.
pub struct HeuristicAuthorityEstimator {
    signal: Box<dyn AuthoritySignal>,
}

impl HeuristicAuthorityEstimator {
    pub fn new(signal: Box<dyn AuthoritySignal>) -> Self {
        Self { signal }
    }

    /// The locally computable part of the score.
    pub fn base_score(domain: &str) -> i32 {
        let tld_score = if domain.ends_with(".com") {
            AUTHORITY_TLD_COM
        } else if domain.ends_with(".com.br") {
            AUTHORITY_TLD_COM_BR
        } else if domain.ends_with(".org") || domain.ends_with(".net") {
            AUTHORITY_TLD_ORG_NET
        } else {
            0
        };

        let label_len = domain.split('.').next().unwrap_or_default().chars().count();
        let length_bonus = if label_len < SHORT_LABEL_LEN {
            AUTHORITY_SHORT_LABEL_BONUS
        } else if label_len < MEDIUM_LABEL_LEN {
            AUTHORITY_MEDIUM_LABEL_BONUS
        } else {
            0
        };

        tld_score + length_bonus
    }
}

impl Default for HeuristicAuthorityEstimator {
    fn default() -> Self {
        Self::new(Box::new(RandomAuthoritySignal::new()))
    }
}

#[async_trait]
impl AuthorityEstimator for HeuristicAuthorityEstimator {
    async fn estimate(&self, domain: &str) -> u8 {
        let signal = i32::from(self.signal.signal(domain).min(MAX_AUTHORITY_SIGNAL));
        let total = (Self::base_score(domain) + signal).clamp(0, i32::from(MAX_SCORE));
        log::debug!("Domain authority for {domain}: {total} (signal {signal})");
        total as u8
    }
}
