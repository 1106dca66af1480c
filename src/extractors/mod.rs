// Extraction engines. The scrape lifecycle only ever sees this trait; the
// one production implementation drives a chat-completions model.

pub mod openai;
pub mod page;

use async_trait::async_trait;

use crate::error::ExtractError;
use crate::models::job::JobRecord;

pub use openai::OpenAiExtractor;

/// An engine that turns a job-board page into structured postings.
/// Implementations may be slow (seconds to minutes) and may fail with any
/// transient error; callers are expected to retry.
#[async_trait]
pub trait JobExtractor: Send + Sync {
    /// Short engine name for logs.
    fn name(&self) -> &str;

    /// Extract every matching job posting from the page at `url`.
    async fn extract(&self, url: &str) -> Result<Vec<JobRecord>, ExtractError>;
}
