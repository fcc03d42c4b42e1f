use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{handlers::race::last_race_results, utils::state::AppState};

pub fn race_routes() -> Router<Arc<AppState>> {
    Router::new().route("/last_results/{season}", get(last_race_results))
}
