use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::extractors::JobExtractor;
use crate::scrape::retry::RetryPolicy;
use crate::scrape::runner::run_batch;
use crate::scrape::store::{ResultStore, ResultsSnapshot, RunToken};

/// Reply to a start request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    AlreadyRunning,
}

/// Cloneable facade over the scrape lifecycle. The result slot sits behind
/// a single mutex and the idle-to-scraping transition is one locked
/// check-and-set, so concurrent start calls schedule exactly one batch.
/// The lock is never held across an await.
#[derive(Clone)]
pub struct ScrapeService {
    inner: Arc<Inner>,
}

struct Inner {
    extractor: Arc<dyn JobExtractor>,
    sources: Vec<String>,
    retry: RetryPolicy,
    retention: Duration,
    store: Mutex<ResultStore>,
}

impl ScrapeService {
    pub fn new(
        extractor: Arc<dyn JobExtractor>,
        sources: Vec<String>,
        retry: RetryPolicy,
        retention: Duration,
    ) -> ScrapeService {
        ScrapeService {
            inner: Arc::new(Inner {
                extractor,
                sources,
                retry,
                retention,
                store: Mutex::new(ResultStore::new()),
            }),
        }
    }

    /// Kick off a batch unless one is already in flight. Returns as soon as
    /// the run is claimed; the batch itself runs on a spawned task.
    pub fn start(&self) -> StartOutcome {
        let token = {
            let mut store = self.inner.store.lock();
            if store.is_scraping() {
                return StartOutcome::AlreadyRunning;
            }
            store.start_scraping()
        };

        tracing::info!(
            "Starting scrape of {} sources with the {} engine",
            self.inner.sources.len(),
            self.inner.extractor.name()
        );

        let service = self.clone();
        tokio::spawn(async move { service.run_to_expiry(token).await });

        StartOutcome::Started
    }

    /// Current state, copied out under the lock.
    pub fn snapshot(&self) -> ResultsSnapshot {
        self.inner.store.lock().snapshot()
    }

    async fn run_to_expiry(self, token: RunToken) {
        let batch = run_batch(
            self.inner.extractor.as_ref(),
            &self.inner.sources,
            self.inner.retry,
        )
        .await;

        let failures = batch.iter().filter(|o| o.error.is_some()).count();
        tracing::info!(
            "Batch complete: {} sources, {failures} failed; retaining results for {}s",
            batch.len(),
            self.inner.retention.as_secs()
        );
        self.inner.store.lock().set_results(batch);

        tokio::time::sleep(self.inner.retention).await;
        if self.inner.store.lock().clear_expired(token) {
            tracing::info!("Retention window elapsed; results cleared");
        }
    }
}
