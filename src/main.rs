use std::sync::Arc;

use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use jobscout::config::Config;
use jobscout::extractors::OpenAiExtractor;
use jobscout::routes;
use jobscout::scrape::ScrapeService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("jobscout=info,tower_http=info")),
        )
        .init();

    let config = Config::parse();

    let extractor = Arc::new(
        OpenAiExtractor::new(&config.openai_api_key).with_model(&config.model),
    );
    let service = ScrapeService::new(
        extractor,
        config.job_urls.clone(),
        config.retry_policy(),
        config.retention(),
    );

    let app = routes::router(service)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
