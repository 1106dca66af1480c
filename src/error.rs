use reqwest::StatusCode;

/// Failure modes of a single extraction attempt. Retried per the batch
/// retry policy; only the final attempt's error reaches a SourceOutcome.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    PageStatus { url: String, status: StatusCode },

    #[error("Extraction API error: {0}")]
    Api(String),

    #[error("Unparseable extraction output: {0}")]
    Parse(String),
}
