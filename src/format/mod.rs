//! Input normalization and syntactic validation of domains and email addresses.
//!
//! Every string is trimmed and lower-cased before it is matched, and every
//! downstream probe receives the normalized form.

use std::sync::LazyLock;

use regex::Regex;

use crate::error_handling::InputError;

/// Single label plus a TLD of at least two letters, label at most 63 characters.
static DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9][a-z0-9-]{0,61}[a-z0-9]?\.[a-z]{2,}$").expect("static domain regex")
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("static email regex")
});

/// Trims surrounding whitespace and lower-cases the input.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Returns `true` if the already-normalized `domain` is a `label.tld` pair.
///
/// The label may contain inner hyphens but must not start or end with one.
pub fn is_valid_domain(domain: &str) -> bool {
    if !DOMAIN_PATTERN.is_match(domain) {
        return false;
    }
    // The pattern's optional last class lets "a-.com" through
    domain
        .split_once('.')
        .is_some_and(|(label, _)| !label.ends_with('-'))
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Normalizes and validates a domain.
///
/// # Errors
///
/// Returns `InputError::InvalidDomainFormat` if the normalized domain does not match.
pub fn validate_domain(raw: &str) -> Result<String, InputError> {
    let domain = normalize(raw);
    if is_valid_domain(&domain) {
        Ok(domain)
    } else {
        Err(InputError::InvalidDomainFormat)
    }
}

/// Normalizes and validates an email address.
///
/// # Errors
///
/// Returns `InputError::InvalidEmailFormat` if the normalized address does not match.
pub fn validate_email(raw: &str) -> Result<String, InputError> {
    let email = normalize(raw);
    if is_valid_email(&email) {
        Ok(email)
    } else {
        Err(InputError::InvalidEmailFormat)
    }
}

/// Normalizes a lead's domain, accepting any dotted host name.
///
/// Leads carry multi-label domains (`acme.com.br`, `www.acme.com`), so this is
/// looser than [`is_valid_domain`]: every label must be non-empty and there must
/// be at least two of them.
pub fn lead_domain(raw: &str) -> Option<String> {
    let domain = normalize(raw);
    let well_formed = domain.contains('.')
        && !domain.chars().any(char::is_whitespace)
        && domain.split('.').all(|label| !label.is_empty());
    well_formed.then_some(domain)
}

/// Returns the part after the last `@`, if any.
pub fn email_domain(email: &str) -> Option<&str> {
    email
        .rsplit_once('@')
        .map(|(_, domain)| domain)
        .filter(|domain| !domain.is_empty())
}
