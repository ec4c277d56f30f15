//! WHOIS data conversion.

use chrono::SecondsFormat;
use whois_service::{LookupStatus, ParsedWhoisData, WhoisResponse};

use crate::report::WhoisInfo;

/// Converts a whois-service response into the report structure.
///
/// The parser keeps the first value of a repeated key, so every field is the
/// first element of the registry's list, the scalar itself, or `null`.
/// Unregistered domains and answers without parsed data convert to an empty
/// `WhoisInfo`.
pub fn convert_parsed_data(response: &WhoisResponse) -> WhoisInfo {
    if response.lookup_status == LookupStatus::NotFound {
        return WhoisInfo::default();
    }
    match &response.parsed_data {
        Some(parsed) => convert_fields(parsed),
        None => WhoisInfo::default(),
    }
}

fn convert_fields(parsed: &ParsedWhoisData) -> WhoisInfo {
    let non_blank = |value: &Option<String>| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };
    let list = |values: Vec<String>| (!values.is_empty()).then_some(values);

    let mut name_servers: Vec<String> = Vec::new();
    for ns in &parsed.name_servers {
        let ns = first_token(ns).trim_end_matches('.').to_lowercase();
        if !ns.is_empty() && !name_servers.contains(&ns) {
            name_servers.push(ns);
        }
    }
    let mut status: Vec<String> = Vec::new();
    for s in &parsed.status {
        // "clientTransferProhibited https://icann.org/epp#..." -> first token
        let s = first_token(s).to_string();
        if !s.is_empty() && !status.contains(&s) {
            status.push(s);
        }
    }

    WhoisInfo {
        registrar: non_blank(&parsed.registrar),
        creation_date: non_blank(&parsed.creation_date).map(|d| normalize_date(&d)),
        expiration_date: non_blank(&parsed.expiration_date).map(|d| normalize_date(&d)),
        name_servers: list(name_servers),
        status: list(status),
    }
}

/// Renders a WHOIS date as RFC 3339 when it parses; otherwise keeps the raw text.
pub fn normalize_date(raw: &str) -> String {
    whois_service::parse_date(raw)
        .or_else(|| whois_service::parse_date(first_token(raw)))
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| raw.to_string())
}

fn first_token(value: &str) -> &str {
    value.split_whitespace().next().unwrap_or("")
}
