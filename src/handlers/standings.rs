use std::{collections::HashMap, sync::Arc};

use crate::{
    models::{ergast::Standing, error::ApiError, stats::EntityKind},
    utils::{race_utils::parse_season, state::AppState},
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{Datelike, Utc};

pub async fn driver_standings(
    State(state): State<Arc<AppState>>,
    Path(season): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Standing>>, ApiError> {
    championship_table(&state, EntityKind::Driver, &season, &params).await
}

pub async fn constructor_standings(
    State(state): State<Arc<AppState>>,
    Path(season): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Standing>>, ApiError> {
    championship_table(&state, EntityKind::Team, &season, &params).await
}

async fn championship_table(
    state: &AppState,
    kind: EntityKind,
    season: &str,
    params: &HashMap<String, String>,
) -> Result<Json<Vec<Standing>>, ApiError> {
    let season = parse_season(season, Utc::now().year())?;
    let limit = params
        .get("limit")
        .and_then(|l| l.parse::<u32>().ok())
        .unwrap_or(30);

    let data = state
        .pipeline
        .fetch(&format!(
            "{season}/{}.json?limit={limit}",
            kind.standings_resource()
        ))
        .await
        .ok_or_else(|| ApiError::NotFound(format!("No standings for {season}")))?;

    let Some(list) = data.first_standings_list() else {
        return Ok(Json(Vec::new()));
    };
    let rows = match kind {
        EntityKind::Driver => list.driver_standings.clone(),
        EntityKind::Team => list.constructor_standings.clone(),
    };
    Ok(Json(rows))
}
