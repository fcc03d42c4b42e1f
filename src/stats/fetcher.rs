use futures::future::join_all;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::{
    models::{
        ergast::{count_or_zero, MrData, Race},
        stats::{EntityKind, SeasonOutcome, SeasonStanding},
    },
    stats::StatsPipeline,
};

/// Largest page the provider serves.
pub const PAGE_SIZE: u32 = 100;

impl StatsPipeline {
    /// One provider call behind the shared limiter, raced against the fetch
    /// timeout. The timeout only starts once a slot is granted.
    pub async fn fetch(&self, path: &str) -> Option<MrData> {
        debug!(
            "{} fetch slots free before {path}",
            self.limiter.available_permits()
        );
        let _guard = match self.limiter.acquire().await {
            Ok(guard) => guard,
            Err(e) => {
                warn!("Limiter closed, skipping {path}: {e}");
                return None;
            }
        };

        match timeout(self.fetch_timeout, self.source.fetch(path)).await {
            Ok(data) => data,
            Err(_) => {
                warn!("Timed out after {:?} fetching {path}", self.fetch_timeout);
                None
            }
        }
    }

    /// Every race result of `id` in `season`, following pagination. Any
    /// failed page makes the whole season unavailable.
    pub async fn season_results(&self, kind: EntityKind, id: &str, season: i32) -> SeasonOutcome {
        let base = format!("{season}/{}/{id}/results.json", kind.collection());

        let Some(first) = self.fetch(&format!("{base}?limit={PAGE_SIZE}")).await else {
            return SeasonOutcome::Unavailable;
        };
        let total = first.total_or_zero();
        let mut races = first.races();
        let mut seen = result_rows(&races);

        while seen < total {
            let Some(page) = self
                .fetch(&format!("{base}?limit={PAGE_SIZE}&offset={seen}"))
                .await
            else {
                warn!("{kind:?} {id}: page at offset {seen} of {season} unavailable");
                return SeasonOutcome::Unavailable;
            };
            let page_races = page.races();
            let rows = result_rows(&page_races);
            if rows == 0 {
                break;
            }
            seen += rows;
            merge_races(&mut races, page_races);
        }

        debug!("{kind:?} {id}: {} races in {season}", races.len());
        SeasonOutcome::Races(races)
    }

    /// Results for each season, concurrently. Always yields one outcome per
    /// requested season, in the order requested.
    pub async fn fetch_seasons(
        &self,
        kind: EntityKind,
        id: &str,
        seasons: &[i32],
    ) -> Vec<(i32, SeasonOutcome)> {
        let outcomes = join_all(
            seasons
                .iter()
                .map(|&season| async move { (season, self.season_results(kind, id, season).await) }),
        )
        .await;

        let unavailable = outcomes.iter().filter(|(_, o)| !o.is_available()).count();
        if unavailable > 0 {
            warn!(
                "{kind:?} {id}: {unavailable} of {} seasons unavailable",
                seasons.len()
            );
        }
        outcomes
    }

    /// The entity's row in the championship table for `season`.
    pub async fn season_standing(
        &self,
        kind: EntityKind,
        id: &str,
        season: i32,
    ) -> Option<SeasonStanding> {
        let path = format!(
            "{season}/{}/{id}/{}.json",
            kind.collection(),
            kind.standings_resource()
        );
        let data = self.fetch(&path).await?;
        let list = data.first_standings_list()?;
        let rows = match kind {
            EntityKind::Driver => &list.driver_standings,
            EntityKind::Team => &list.constructor_standings,
        };
        Some(SeasonStanding {
            round: count_or_zero(&list.round),
            standing: rows.first()?.clone(),
        })
    }

    /// Number of rounds on the `season` calendar.
    pub async fn scheduled_rounds(&self, season: i32) -> Option<u32> {
        let data = self.fetch(&format!("{season}.json?limit={PAGE_SIZE}")).await?;
        Some(data.total_or_zero().max(data.races().len() as u32))
    }

    pub async fn fetch_standings(
        &self,
        kind: EntityKind,
        id: &str,
        seasons: &[i32],
    ) -> Vec<(i32, Option<SeasonStanding>)> {
        join_all(
            seasons
                .iter()
                .map(|&season| async move { (season, self.season_standing(kind, id, season).await) }),
        )
        .await
    }
}

fn result_rows(races: &[Race]) -> u32 {
    races.iter().map(|r| r.results.len() as u32).sum()
}

/// Appends a page of races, joining a race that was split across the page
/// boundary.
fn merge_races(races: &mut Vec<Race>, page: Vec<Race>) {
    for race in page {
        match races.last_mut() {
            Some(last) if last.season == race.season && last.round == race.round => {
                last.results.extend(race.results);
            }
            _ => races.push(race),
        }
    }
}
