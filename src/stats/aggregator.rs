use crate::{
    models::{
        ergast::Standing,
        response::SeasonSnapshot,
        stats::{CareerStats, SeasonOutcome, SeasonStats},
    },
    stats::extractor::extract_season,
};

/// Sums every season's counters plus the current season. Unavailable seasons
/// contribute zero and are not counted in `seasons_counted`.
pub fn fold_career(history: &[(i32, SeasonOutcome)], current: &SeasonOutcome) -> CareerStats {
    history
        .iter()
        .map(|(_, outcome)| outcome)
        .chain(std::iter::once(current))
        .fold(CareerStats::default(), |mut career, outcome| {
            if outcome.is_available() {
                career.seasons_counted += 1;
            }
            career.add_season(extract_season(outcome));
            career
        })
}

/// Seasons in which the entity finished first in the championship.
pub fn count_titles<'a, I>(standings: I) -> u32
where
    I: IntoIterator<Item = Option<&'a Standing>>,
{
    standings
        .into_iter()
        .flatten()
        .filter(|s| s.position_or_zero() == 1)
        .count() as u32
}

/// Standings are final once the season lies before the calendar year, or
/// once the table was taken after the last scheduled round.
pub fn is_final_standing(
    season: i32,
    round: u32,
    calendar_year: i32,
    scheduled_rounds: Option<u32>,
) -> bool {
    season < calendar_year || scheduled_rounds.is_some_and(|rounds| rounds > 0 && round >= rounds)
}

/// Championship figures come from the standings when the provider has them;
/// otherwise the result-derived counters are used.
pub fn season_snapshot(stats: SeasonStats, standing: Option<&Standing>) -> SeasonSnapshot {
    SeasonSnapshot {
        position: standing.map(Standing::position_or_zero).filter(|&p| p > 0),
        points: standing.map_or(stats.points, Standing::points_or_zero),
        wins: standing.map_or(stats.wins, Standing::wins_or_zero),
        podiums: stats.podiums,
        poles: stats.poles,
        fastest_laps: stats.fastest_laps,
        races: stats.races,
    }
}
