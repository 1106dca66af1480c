//! Scrape lifecycle: per-URL retries, sequential batch runs, and the
//! single-slot result store with its retention timer.

pub mod retry;
pub mod runner;
pub mod service;
pub mod store;

pub use retry::RetryPolicy;
pub use service::{ScrapeService, StartOutcome};
pub use store::{ResultStore, ResultsSnapshot, RunToken};
