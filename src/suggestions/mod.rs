//! Alternate domain suggestions for an unavailable domain.

use crate::config::MAX_SUGGESTIONS;

/// Returns at most three alternates for `domain`, in a fixed order.
///
/// The first label is the base and the remaining labels form the TLD, so
/// `acme.com.br` yields base `acme` and TLD `com.br`. Output depends only on the
/// input.
pub fn suggest_alternatives(domain: &str) -> Vec<String> {
    let mut candidates = candidate_domains(domain);
    candidates.truncate(MAX_SUGGESTIONS);
    candidates
}

/// Every candidate in priority order, before truncation.
pub(crate) fn candidate_domains(domain: &str) -> Vec<String> {
    let Some((base, tld)) = domain.split_once('.') else {
        return Vec::new();
    };
    if base.is_empty() || tld.is_empty() {
        return Vec::new();
    }

    let swapped = if tld == "br" || tld.ends_with(".br") {
        format!("{base}.com")
    } else {
        format!("{base}.com.br")
    };

    vec![
        format!("new-{base}.{tld}"),
        format!("{base}-oficial.{tld}"),
        format!("{base}-site.{tld}"),
        format!("my{base}.{tld}"),
        swapped,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions_order() {
        assert_eq!(
            suggest_alternatives("mytest.com"),
            vec!["new-mytest.com", "mytest-oficial.com", "mytest-site.com"]
        );
    }

    #[test]
    fn test_multi_label_tld() {
        assert_eq!(
            suggest_alternatives("acme.com.br"),
            vec![
                "new-acme.com.br",
                "acme-oficial.com.br",
                "acme-site.com.br"
            ]
        );
    }

    #[test]
    fn test_tld_swap_candidate() {
        let candidates = candidate_domains("testshop.com");
        assert_eq!(candidates[3], "mytestshop.com");
        assert_eq!(candidates[4], "testshop.com.br");

        let candidates = candidate_domains("testshop.com.br");
        assert_eq!(candidates[4], "testshop.com");
        let candidates = candidate_domains("testshop.br");
        assert_eq!(candidates[4], "testshop.com");
    }

    #[test]
    fn test_deterministic_and_bounded() {
        let first = suggest_alternatives("contest.org");
        let second = suggest_alternatives("contest.org");
        assert_eq!(first, second);
        assert!(first.len() <= MAX_SUGGESTIONS);
    }

    #[test]
    fn test_no_tld_yields_nothing() {
        assert!(suggest_alternatives("localhost").is_empty());
        assert!(suggest_alternatives(".com").is_empty());
        assert!(suggest_alternatives("acme.").is_empty());
    }
}
