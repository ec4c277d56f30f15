//! Lead scoring engine.
//!
//! A deterministic weighted sum over email quality, domain authority, contact
//! completeness and company size, clamped to `[0, 100]` and mapped to a
//! qualification level. The engine performs no I/O; every non-deterministic
//! input (authority) is computed by an injected estimator beforehand.

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::config::{
    HIGH_QUALIFICATION_SCORE, LOW_QUALIFICATION_SCORE, MAX_SCORE, MEDIUM_QUALIFICATION_SCORE,
    MIN_PHONE_LEN, SCORE_AUTHORITY_CAP, SCORE_EMAIL_MX, SCORE_EMAIL_NOT_FREE, SCORE_EMAIL_VALID,
    SCORE_FULL_NAME, SCORE_PARTIAL_NAME, SCORE_PHONE, SCORE_SIZE_LARGE, SCORE_SIZE_MEDIUM,
    SCORE_SIZE_SMALL,
};
use crate::heuristics::CompanySize;
use crate::report::EmailQuality;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum QualificationLevel {
    High,
    Medium,
    Low,
    VeryLow,
}

impl QualificationLevel {
    /// Maps a score to its level; thresholds are inclusive lower bounds.
    pub fn from_score(score: u8) -> Self {
        if score >= HIGH_QUALIFICATION_SCORE {
            QualificationLevel::High
        } else if score >= MEDIUM_QUALIFICATION_SCORE {
            QualificationLevel::Medium
        } else if score >= LOW_QUALIFICATION_SCORE {
            QualificationLevel::Low
        } else {
            QualificationLevel::VeryLow
        }
    }

    /// Follow-up recommendation attached to the report.
    pub fn flag(self) -> &'static str {
        match self {
            QualificationLevel::High => "Priority lead - immediate follow-up",
            QualificationLevel::Medium => "Qualified lead - follow-up within 24h",
            QualificationLevel::Low => "Needs nurturing",
            QualificationLevel::VeryLow => "Low quality - consider automated nurture",
        }
    }
}

/// Everything the engine looks at for one lead.
#[derive(Debug, Clone, Copy)]
pub struct ScoringInput<'a> {
    pub email_quality: &'a EmailQuality,
    pub domain_authority: u8,
    pub phone: Option<&'a str>,
    pub name: Option<&'a str>,
    pub company_size: CompanySize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreOutcome {
    pub lead_score: u8,
    pub qualification_level: QualificationLevel,
    pub flags: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, input: &ScoringInput<'_>) -> ScoreOutcome {
        let mut total: i32 = 0;

        total += email_points(input.email_quality);
        total += i32::from(input.domain_authority.min(SCORE_AUTHORITY_CAP));

        if input
            .phone
            .is_some_and(|phone| phone.trim().chars().count() > MIN_PHONE_LEN)
        {
            total += SCORE_PHONE;
        }

        let name_tokens = input
            .name
            .map(|name| name.split_whitespace().count())
            .unwrap_or(0);
        total += if name_tokens >= 2 {
            SCORE_FULL_NAME
        } else {
            SCORE_PARTIAL_NAME
        };

        total += size_bonus(input.company_size);

        let lead_score = total.clamp(0, i32::from(MAX_SCORE)) as u8;
        let qualification_level = QualificationLevel::from_score(lead_score);
        ScoreOutcome {
            lead_score,
            qualification_level,
            flags: vec![qualification_level.flag().to_string()],
        }
    }
}

/// Validity, MX presence and a non-free provider: 10 points each, 30 at most.
/// An invalid address earns nothing.
fn email_points(quality: &EmailQuality) -> i32 {
    if !quality.is_valid {
        return 0;
    }
    let mut points = SCORE_EMAIL_VALID;
    if quality.has_mx_records {
        points += SCORE_EMAIL_MX;
    }
    if !quality.is_free_email {
        points += SCORE_EMAIL_NOT_FREE;
    }
    points
}

fn size_bonus(size: CompanySize) -> i32 {
    match size {
        CompanySize::Large => SCORE_SIZE_LARGE,
        CompanySize::Medium => SCORE_SIZE_MEDIUM,
        CompanySize::Small => SCORE_SIZE_SMALL,
        CompanySize::Unknown => 0,
    }
}

#[cfg(test)]
mod tests;
