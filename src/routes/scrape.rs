use axum::Json;
use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::outcome::BatchResult;
use crate::scrape::{ResultsSnapshot, ScrapeService, StartOutcome};

#[derive(Debug, Serialize)]
pub struct TriggerResponse {
    pub message: &'static str,
}

/// Wire shape of `GET /results`, keyed by the `status` field.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResultsResponse {
    Scraping {
        message: &'static str,
    },
    NoData {
        message: &'static str,
    },
    Complete {
        results: BatchResult,
        last_updated: DateTime<Utc>,
    },
}

impl From<ResultsSnapshot> for ResultsResponse {
    fn from(snap: ResultsSnapshot) -> ResultsResponse {
        if snap.is_scraping {
            return ResultsResponse::Scraping {
                message: "Scraping in progress, please check back later",
            };
        }
        match (snap.data, snap.last_updated) {
            (Some(results), Some(last_updated)) => ResultsResponse::Complete {
                results,
                last_updated,
            },
            _ => ResultsResponse::NoData {
                message: "No results available. Try initiating a scrape first.",
            },
        }
    }
}

/// GET /scrape
///
/// Kick off a background batch over the configured boards. Replies
/// immediately; progress and results are reported by `GET /results`.
pub async fn trigger(State(service): State<ScrapeService>) -> Json<TriggerResponse> {
    let message = match service.start() {
        StartOutcome::Started => "Scraping started. Check the /results endpoint for updates.",
        StartOutcome::AlreadyRunning => {
            "Scraping already in progress. Please check /results endpoint later."
        }
    };
    Json(TriggerResponse { message })
}

/// GET /results
///
/// Report the current slot: in progress, empty, or the completed batch
/// with its timestamp. Always 200; per-source errors ride in the body.
pub async fn results(State(service): State<ScrapeService>) -> Json<ResultsResponse> {
    Json(ResultsResponse::from(service.snapshot()))
}
