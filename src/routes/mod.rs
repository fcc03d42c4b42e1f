use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use http::StatusCode;
use serde_json::json;
use std::{error::Error, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt, Registry};

pub mod details;
pub mod race;
pub mod standings;

use crate::{
    client::JolpicaClient,
    routes::{
        details::{driver_routes, team_routes},
        race::race_routes,
        standings::standings_routes,
    },
    stats::StatsPipeline,
    utils::{config::Config, rate_limiter::RateLimiter, state::AppState},
};

pub fn init_tracing(log_level: &str) {
    let level = match log_level {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    let filter = filter::Targets::new()
        .with_target("tower_http::trace::on_response", Level::TRACE)
        .with_target("tower_http::trace::on_request", Level::TRACE)
        .with_target("tower_http::trace::make_span", Level::DEBUG)
        .with_target("axum::rejection", Level::TRACE)
        .with_target(env!("CARGO_CRATE_NAME"), level)
        .with_default(Level::INFO);

    let tracing_layer = tracing_subscriber::fmt::layer();

    Registry::default().with(tracing_layer).with(filter).init();
}

pub async fn make_app(config: Config) -> Result<Router, Box<dyn Error>> {
    info!("Initializing application...");
    let source = JolpicaClient::new(&config.api_base_url)?;
    let limiter = RateLimiter::new(config.max_concurrent_fetches, config.min_request_delay_ms);
    info!(
        "Statistics provider {} (timeout {:?}, {} concurrent fetches)",
        config.api_base_url, config.fetch_timeout, config.max_concurrent_fetches
    );

    let pipeline = StatsPipeline::new(Arc::new(source), limiter, config.fetch_timeout);
    let state = Arc::new(AppState { config, pipeline });

    info!("Application initialized successfully");
    Ok(router(state))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .nest("/drivers", driver_routes())
        .nest("/teams", team_routes())
        .nest("/standings", standings_routes())
        .nest("/race", race_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({"message": "ok", "provider": state.config.api_base_url})),
    )
}
