use std::time::Duration;

use crate::error::ExtractError;
use crate::extractors::JobExtractor;
use crate::models::job::JobRecord;

/// Per-URL retry budget. `max_attempts` counts every call including the
/// first; the wait before retry `k` is `k * backoff_unit`.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff_unit: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 3,
            backoff_unit: Duration::from_secs(5),
        }
    }
}

/// Drive one extraction to success or exhaustion. The first attempt runs
/// immediately; each retry waits one backoff step longer than the last.
/// After the final attempt the error is returned unchanged.
pub async fn fetch_with_retry(
    extractor: &dyn JobExtractor,
    url: &str,
    policy: RetryPolicy,
) -> Result<Vec<JobRecord>, ExtractError> {
    let attempts = policy.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        match extractor.extract(url).await {
            Ok(jobs) => return Ok(jobs),
            Err(e) => {
                attempt += 1;
                if attempt >= attempts {
                    return Err(e);
                }
                let delay = policy.backoff_unit * attempt;
                tracing::warn!(
                    "Attempt {attempt}/{attempts} failed for {url}: {e}; retrying in {}s",
                    delay.as_secs()
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}
