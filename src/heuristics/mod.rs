//! Heuristic estimators for domain authority, company size and industry.
//!
//! Each estimator sits behind a small trait so a real data source (an authority
//! API, a firmographics lookup) can replace the local heuristic without touching
//! the scoring arithmetic. The shipped implementations are approximations:
//! - authority mixes a TLD/label-length heuristic with an injected external signal
//!   which, by default, is random
//! - company size is inferred from authority alone
//! - industry is a keyword match on the domain string

mod authority;
mod classify;

pub use authority::{
    AuthorityEstimator, AuthoritySignal, FixedAuthoritySignal, HeuristicAuthorityEstimator,
    RandomAuthoritySignal,
};
pub use classify::{
    CompanySize, CompanySizeEstimator, Industry, IndustryClassifier, KeywordIndustryClassifier,
    RuleBasedCompanySize,
};
