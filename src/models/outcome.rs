use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::job::JobRecord;

/// One full pass over the configured source URLs, in source-list order.
pub type BatchResult = Vec<SourceOutcome>;

/// Result of processing a single source URL within a batch. Exactly one of
/// `data`/`error` is populated; failures also carry the time the URL was
/// given up on. Absent fields are left out of the JSON entirely.
#[derive(Debug, Clone, Serialize)]
pub struct SourceOutcome {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<JobRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl SourceOutcome {
    pub fn success(url: String, jobs: Vec<JobRecord>) -> SourceOutcome {
        SourceOutcome {
            url,
            data: Some(jobs),
            error: None,
            timestamp: None,
        }
    }

    pub fn failure(url: String, error: String) -> SourceOutcome {
        SourceOutcome {
            url,
            data: None,
            error: Some(error),
            timestamp: Some(Utc::now()),
        }
    }
}
