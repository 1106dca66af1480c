pub mod config;
pub mod error;
pub mod extractors;
pub mod models;
pub mod routes;
pub mod scrape;
