//! DNS record queries (A, MX, TXT).

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::{ProbeError, ProbeResult};

/// Queries A (IPv4 address) records for a domain.
///
/// # Returns
///
/// The addresses as strings, or an empty vector if the domain has none.
pub async fn lookup_a_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> ProbeResult<Vec<String>> {
    lookup(domain, resolver, RecordType::A, |rdata| match rdata {
        RData::A(a) => Some(a.to_string()),
        _ => None,
    })
    .await
}

/// Queries MX (mail exchanger) records for a domain.
///
/// # Returns
///
/// Exchange hostnames ordered by preference (lowest first), without the trailing dot.
pub async fn lookup_mx_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> ProbeResult<Vec<String>> {
    let mut exchanges = lookup(domain, resolver, RecordType::MX, |rdata| match rdata {
        RData::MX(mx) => Some((
            mx.preference(),
            mx.exchange().to_utf8().trim_end_matches('.').to_string(),
        )),
        _ => None,
    })
    .await?;
    // Lower preference = higher priority
    exchanges.sort_by_key(|(preference, _)| *preference);
    Ok(exchanges.into_iter().map(|(_, host)| host).collect())
}

/// Queries TXT (text) records for a domain.
///
/// Multi-string TXT records are joined into a single string.
pub async fn lookup_txt_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> ProbeResult<Vec<String>> {
    lookup(domain, resolver, RecordType::TXT, |rdata| match rdata {
        RData::TXT(txt) => Some(
            txt.iter()
                .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                .collect::<Vec<String>>()
                .join(""),
        ),
        _ => None,
    })
    .await
}

async fn lookup<T, F>(
    domain: &str,
    resolver: &TokioAsyncResolver,
    record_type: RecordType,
    extract: F,
) -> ProbeResult<Vec<T>>
where
    F: Fn(&RData) -> Option<T>,
{
    match resolver.lookup(domain, record_type).await {
        Ok(lookup) => Ok(lookup.iter().filter_map(&extract).collect()),
        Err(e) if is_no_records(&e) => {
            log::debug!("No {record_type} records for {domain}");
            Ok(Vec::new())
        }
        Err(e) => {
            log::warn!("Failed to lookup {record_type} records for {domain}: {e}");
            Err(ProbeError::Dns(format!("{record_type} lookup: {e}")))
        }
    }
}

/// NXDOMAIN and empty answers are expected outcomes, not failures.
fn is_no_records(e: &ResolveError) -> bool {
    matches!(e.kind(), ResolveErrorKind::NoRecordsFound { .. })
}
