pub mod scrape;

use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;

use crate::scrape::ScrapeService;

async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub fn router(service: ScrapeService) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/scrape", get(scrape::trigger))
        .route("/results", get(scrape::results))
        .with_state(service)
}
