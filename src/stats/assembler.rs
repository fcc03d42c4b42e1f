use std::iter::once;

use tracing::{debug, info};

use crate::{
    models::{
        error::ApiError,
        response::{DriverIdentity, EntityIdentity, ResponseDocument, TeamIdentity},
        stats::{EntityKind, SeasonOutcome},
    },
    stats::{
        aggregator::{count_titles, fold_career, is_final_standing, season_snapshot},
        extractor::{extract_season, recent_races},
        planner::plan_seasons,
        StatsPipeline,
    },
};

const RECENT_RACES: usize = 5;

impl StatsPipeline {
    /// Looks the entity up as listed in `season`. `None` when the provider has
    /// no such entity for that season or could not be reached.
    pub async fn resolve_identity(
        &self,
        kind: EntityKind,
        id: &str,
        season: i32,
    ) -> Option<EntityIdentity> {
        let data = self
            .fetch(&format!("{season}/{}/{id}.json", kind.collection()))
            .await?;
        match kind {
            EntityKind::Driver => {
                DriverIdentity::from_driver(data.first_driver()?).map(EntityIdentity::Driver)
            }
            EntityKind::Team => {
                TeamIdentity::from_constructor(data.first_constructor()?).map(EntityIdentity::Team)
            }
        }
    }

    /// Full statistics document for one entity and season. Nothing beyond the
    /// identity lookup is fetched when the entity is unknown.
    pub async fn entity_details(
        &self,
        kind: EntityKind,
        id: &str,
        season: i32,
        calendar_year: i32,
    ) -> Result<ResponseDocument, ApiError> {
        let entity = self
            .resolve_identity(kind, id, season)
            .await
            .ok_or_else(|| ApiError::NotFound(format!("{kind:?} {id} not found in {season}")))?;

        let history_seasons = plan_seasons(season, kind.lookback(), calendar_year);
        info!(
            "{kind:?} {id}: aggregating {season} plus {} past seasons",
            history_seasons.len()
        );

        let (history, history_standings, current, current_standing) = tokio::join!(
            self.fetch_seasons(kind, id, &history_seasons),
            self.fetch_standings(kind, id, &history_seasons),
            self.season_results(kind, id, season),
            self.season_standing(kind, id, season),
        );

        let mut final_standings = Vec::new();
        for (year, standing) in history_standings
            .iter()
            .map(|(year, standing)| (*year, standing.as_ref()))
            .chain(once((season, current_standing.as_ref())))
        {
            let Some(standing) = standing else {
                continue;
            };
            // Only a leader in an unfinished year needs the calendar.
            let scheduled = if year >= calendar_year && standing.standing.position_or_zero() == 1 {
                self.scheduled_rounds(year).await
            } else {
                None
            };
            if is_final_standing(year, standing.round, calendar_year, scheduled) {
                final_standings.push(&standing.standing);
            } else {
                debug!("{kind:?} {id}: {year} standings after round {} not final", standing.round);
            }
        }

        let mut career = fold_career(&history, &current);
        career.championship_titles = count_titles(final_standings.into_iter().map(Some));

        let recent = match &current {
            SeasonOutcome::Races(races) => recent_races(races, RECENT_RACES),
            SeasonOutcome::Unavailable => Vec::new(),
        };

        Ok(ResponseDocument {
            kind,
            entity,
            season,
            current_season: season_snapshot(
                extract_season(&current),
                current_standing.as_ref().map(|s| &s.standing),
            ),
            career,
            recent_races: recent,
        })
    }
}
