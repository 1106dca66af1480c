use crate::extractors::JobExtractor;
use crate::models::outcome::{BatchResult, SourceOutcome};
use crate::scrape::retry::{fetch_with_retry, RetryPolicy};

/// Scrape every source in order, one at a time. Each URL gets its own
/// retry budget; a source that exhausts it contributes a failure outcome
/// instead of aborting the batch. The result has one entry per input URL,
/// in input order.
pub async fn run_batch(
    extractor: &dyn JobExtractor,
    urls: &[String],
    policy: RetryPolicy,
) -> BatchResult {
    let mut outcomes = Vec::with_capacity(urls.len());

    for url in urls {
        match fetch_with_retry(extractor, url, policy).await {
            Ok(jobs) => {
                tracing::info!("Extracted {} postings from {url}", jobs.len());
                outcomes.push(SourceOutcome::success(url.clone(), jobs));
            }
            Err(e) => {
                let error = e.to_string();
                tracing::error!("Giving up on {url}: {error}");
                outcomes.push(SourceOutcome::failure(url.clone(), error));
            }
        }
    }

    outcomes
}
