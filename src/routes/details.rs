use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    handlers::details::{driver_details, team_details},
    utils::state::AppState,
};

pub fn driver_routes() -> Router<Arc<AppState>> {
    Router::new().route("/{season}/{driver_id}", get(driver_details))
}

pub fn team_routes() -> Router<Arc<AppState>> {
    Router::new().route("/{season}/{team_id}", get(team_details))
}
