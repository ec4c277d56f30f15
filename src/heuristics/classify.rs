//! Company size and industry classification.

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::config::{LARGE_COMPANY_AUTHORITY, MEDIUM_COMPANY_AUTHORITY};
use crate::report::EmailQuality;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CompanySize {
    Large,
    Medium,
    Small,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Industry {
    Tech,
    Ecommerce,
    Finance,
    Health,
    Education,
    Services,
    Other,
}

pub trait CompanySizeEstimator: Send + Sync {
    fn estimate(&self, email: &EmailQuality, authority: u8) -> CompanySize;
}

/// Free-mail leads are small; otherwise authority decides.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedCompanySize;

impl CompanySizeEstimator for RuleBasedCompanySize {
    fn estimate(&self, email: &EmailQuality, authority: u8) -> CompanySize {
        if email.is_free_email {
            CompanySize::Small
        } else if authority > LARGE_COMPANY_AUTHORITY {
            CompanySize::Large
        } else if authority > MEDIUM_COMPANY_AUTHORITY {
            CompanySize::Medium
        } else {
            CompanySize::Small
        }
    }
}

pub trait IndustryClassifier: Send + Sync {
    fn classify(&self, domain: &str) -> Industry;
}

/// First category whose keyword occurs in the domain wins; categories are tried in order.
pub struct KeywordIndustryClassifier {
    categories: Vec<(Industry, Vec<String>)>,
}

impl KeywordIndustryClassifier {
    pub fn with_categories(categories: Vec<(Industry, Vec<String>)>) -> Self {
        Self { categories }
    }
}

impl Default for KeywordIndustryClassifier {
    fn default() -> Self {
        let table: [(Industry, &[&str]); 6] = [
            (
                Industry::Tech,
                &["tech", "software", "digital", "cloud", "data", "dev", "app", "code", "labs"],
            ),
            (
                Industry::Ecommerce,
                &["shop", "store", "loja", "commerce", "market", "buy", "vendas"],
            ),
            (
                Industry::Finance,
                &["bank", "banco", "financ", "invest", "capital", "credit", "pay"],
            ),
            (
                Industry::Health,
                &["health", "saude", "clinic", "medic", "pharma", "hospital", "care"],
            ),
            (
                Industry::Education,
                &["edu", "school", "escola", "academy", "learn", "curso", "university"],
            ),
            (
                Industry::Services,
                &["consult", "service", "servico", "agency", "agencia", "solutions"],
            ),
        ];
        Self::with_categories(
            table
                .into_iter()
                .map(|(industry, words)| (industry, words.iter().map(|w| w.to_string()).collect()))
                .collect(),
        )
    }
}

impl IndustryClassifier for KeywordIndustryClassifier {
    fn classify(&self, domain: &str) -> Industry {
        self.categories
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| domain.contains(k.as_str())))
            .map(|(industry, _)| *industry)
            .unwrap_or(Industry::Other)
    }
}
