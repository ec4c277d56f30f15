//! Small helpers shared by the probe pipeline.

use std::future::Future;
use std::time::Duration;

use crate::error_handling::{ProbeError, ProbeResult, Stage};

/// Runs a probe future under `limit`, converting an elapsed deadline into
/// [`ProbeError::Timeout`] for `stage`.
pub async fn probe_with_timeout<T, F>(stage: Stage, limit: Duration, fut: F) -> ProbeResult<T>
where
    F: Future<Output = ProbeResult<T>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => {
            log::warn!("{stage} timed out after {:?}", limit);
            Err(ProbeError::Timeout {
                stage,
                secs: limit.as_secs(),
            })
        }
    }
}

/// Converts a `Duration` to whole milliseconds, saturating at `u64::MAX`.
pub fn duration_to_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}
