use std::time::Duration;

use clap::Parser;

use crate::scrape::RetryPolicy;

/// Boards scraped when JOB_URLS is not set.
const DEFAULT_JOB_URLS: &str = "https://www.linkedin.com/jobs/search/?keywords=software%20engineer&location=United%20States&trk=public_jobs_jobs-search-bar_search-submit&redirect=false&position=1&pageNum=0,https://www.workatastartup.com/jobs";

#[derive(Parser, Debug, Clone)]
#[command(name = "jobscout", about = "Job board scraping service")]
pub struct Config {
    /// API key for the extraction backend
    #[arg(long, env = "OPENAI_API_KEY")]
    pub openai_api_key: String,

    /// Chat model used for extraction
    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-4o-mini")]
    pub model: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "10000")]
    pub port: u16,

    /// Comma-separated job board URLs scraped on each batch
    #[arg(long, env = "JOB_URLS", value_delimiter = ',', default_value = DEFAULT_JOB_URLS)]
    pub job_urls: Vec<String>,

    /// Extraction attempts per URL before recording a failure
    #[arg(long, env = "MAX_RETRIES", default_value = "3")]
    pub max_retries: u32,

    /// Backoff unit in seconds; retry k waits k times this long
    #[arg(long, env = "RETRY_BACKOFF_SECS", default_value = "5")]
    pub retry_backoff_secs: u64,

    /// How long completed results stay available before being discarded
    #[arg(long, env = "RESULT_TTL_SECS", default_value = "300")]
    pub result_ttl_secs: u64,
}

impl Config {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_retries,
            backoff_unit: Duration::from_secs(self.retry_backoff_secs),
        }
    }

    pub fn retention(&self) -> Duration {
        Duration::from_secs(self.result_ttl_secs)
    }
}
