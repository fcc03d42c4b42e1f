use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{Datelike, Utc};

use crate::{
    models::{error::ApiError, response::ResponseDocument, stats::EntityKind},
    utils::{race_utils::parse_season, state::AppState},
};

pub async fn driver_details(
    State(state): State<Arc<AppState>>,
    Path((season, driver_id)): Path<(String, String)>,
) -> Result<Json<ResponseDocument>, ApiError> {
    entity_details(state, EntityKind::Driver, season, driver_id).await
}

pub async fn team_details(
    State(state): State<Arc<AppState>>,
    Path((season, team_id)): Path<(String, String)>,
) -> Result<Json<ResponseDocument>, ApiError> {
    entity_details(state, EntityKind::Team, season, team_id).await
}

/// Runs the pipeline on its own task so a panic while aggregating becomes a
/// 500 instead of a dropped connection.
async fn entity_details(
    state: Arc<AppState>,
    kind: EntityKind,
    season: String,
    id: String,
) -> Result<Json<ResponseDocument>, ApiError> {
    let calendar_year = Utc::now().year();
    let season = parse_season(&season, calendar_year)?;
    let pipeline = state.pipeline.clone();

    let doc = tokio::spawn(async move {
        pipeline
            .entity_details(kind, &id, season, calendar_year)
            .await
    })
    .await??;

    Ok(Json(doc))
}
