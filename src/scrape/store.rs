use chrono::{DateTime, Utc};

use crate::models::outcome::BatchResult;

/// Identifies one start-to-clear scrape lifecycle. The delayed retention
/// clear presents its token, so it can never wipe a newer run's slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunToken(u64);

/// Single-slot holder for the latest batch. Plain state with no locking of
/// its own; the service keeps it behind one mutex.
#[derive(Debug, Default)]
pub struct ResultStore {
    data: Option<BatchResult>,
    is_scraping: bool,
    last_updated: Option<DateTime<Utc>>,
    run_seq: u64,
}

/// By-value view of the store for readers.
#[derive(Debug, Clone)]
pub struct ResultsSnapshot {
    pub data: Option<BatchResult>,
    pub is_scraping: bool,
    pub last_updated: Option<DateTime<Utc>>,
}

impl ResultStore {
    pub fn new() -> ResultStore {
        ResultStore::default()
    }

    pub fn is_scraping(&self) -> bool {
        self.is_scraping
    }

    /// Mark a run as in flight and drop any previous results. Callers must
    /// check `is_scraping` under the same lock; the store does not.
    pub fn start_scraping(&mut self) -> RunToken {
        self.is_scraping = true;
        self.data = None;
        self.last_updated = None;
        self.run_seq += 1;
        RunToken(self.run_seq)
    }

    /// Record a finished batch and stamp it.
    pub fn set_results(&mut self, batch: BatchResult) {
        self.data = Some(batch);
        self.is_scraping = false;
        self.last_updated = Some(Utc::now());
    }

    /// Reset to the idle state, discarding any results.
    pub fn clear(&mut self) {
        self.data = None;
        self.is_scraping = false;
        self.last_updated = None;
    }

    /// Clear only if `token` still identifies the current run. A stale
    /// token means a newer run has started since; that is a no-op.
    pub fn clear_expired(&mut self, token: RunToken) -> bool {
        if RunToken(self.run_seq) != token {
            return false;
        }
        self.clear();
        true
    }

    pub fn snapshot(&self) -> ResultsSnapshot {
        ResultsSnapshot {
            data: self.data.clone(),
            is_scraping: self.is_scraping,
            last_updated: self.last_updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::outcome::SourceOutcome;

    fn sample_batch() -> BatchResult {
        vec![SourceOutcome::success(
            "https://boards.example.com/a".to_string(),
            vec![],
        )]
    }

    #[test]
    fn fresh_store_is_idle_and_empty() {
        let store = ResultStore::new();
        let snap = store.snapshot();

        assert!(!snap.is_scraping);
        assert!(snap.data.is_none());
        assert!(snap.last_updated.is_none());
    }

    #[test]
    fn start_scraping_discards_previous_results() {
        let mut store = ResultStore::new();
        store.set_results(sample_batch());

        store.start_scraping();
        let snap = store.snapshot();

        assert!(snap.is_scraping);
        assert!(snap.data.is_none());
        assert!(snap.last_updated.is_none());
    }

    #[test]
    fn set_results_completes_the_run_and_stamps_it() {
        let mut store = ResultStore::new();
        store.start_scraping();

        store.set_results(sample_batch());
        let snap = store.snapshot();

        assert!(!snap.is_scraping);
        assert_eq!(snap.data.as_ref().map(Vec::len), Some(1));
        assert!(snap.last_updated.is_some());
    }

    #[test]
    fn clear_expired_honors_only_the_current_token() {
        let mut store = ResultStore::new();
        let stale = store.start_scraping();
        store.set_results(sample_batch());

        // A newer run takes the slot before the first run's expiry fires.
        let current = store.start_scraping();
        store.set_results(sample_batch());

        assert!(!store.clear_expired(stale));
        assert!(store.snapshot().data.is_some());

        assert!(store.clear_expired(current));
        let snap = store.snapshot();
        assert!(snap.data.is_none());
        assert!(snap.last_updated.is_none());
    }

    #[test]
    fn snapshot_is_detached_from_later_writes() {
        let mut store = ResultStore::new();
        store.set_results(sample_batch());

        let snap = store.snapshot();
        store.clear();

        assert!(snap.data.is_some());
        assert!(store.snapshot().data.is_none());
    }
}
