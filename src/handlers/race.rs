use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{Datelike, Utc};

use crate::{
    models::{ergast::Race, error::ApiError},
    utils::{race_utils::parse_season, state::AppState},
};

/// Classification of the last race run in `season`.
pub async fn last_race_results(
    State(state): State<Arc<AppState>>,
    Path(season): Path<String>,
) -> Result<Json<Race>, ApiError> {
    let season = parse_season(&season, Utc::now().year())?;
    let data = state
        .pipeline
        .fetch(&format!("{season}/last/results.json"))
        .await;

    data.and_then(|d| d.races().into_iter().next())
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("No race results for {season}")))
}
