use crate::models::{
    ergast::{Race, RaceResult},
    response::RecentRace,
    stats::{SeasonOutcome, SeasonStats},
};

/// Counters for one season. Each result entry counts separately, so a team
/// race can add up to two wins, podiums, poles or fastest laps.
pub fn extract_season(outcome: &SeasonOutcome) -> SeasonStats {
    match outcome {
        SeasonOutcome::Unavailable => SeasonStats::default(),
        SeasonOutcome::Races(races) => races
            .iter()
            .flat_map(|race| race.results.iter())
            .fold(SeasonStats::default(), |acc, result| acc + result_stats(result)),
    }
}

fn result_stats(result: &RaceResult) -> SeasonStats {
    let position = result.position_or_zero();
    SeasonStats {
        races: 1,
        wins: (position == 1) as u32,
        podiums: (1..=3).contains(&position) as u32,
        poles: (result.grid_or_zero() == 1) as u32,
        fastest_laps: (result.fastest_lap_rank_or_zero() == 1) as u32,
        points: result.points_or_zero(),
    }
}

/// The latest `count` races, most recent first. Races are ordered by date
/// then round rather than trusting the provider's ordering.
pub fn recent_races(races: &[Race], count: usize) -> Vec<RecentRace> {
    let mut ordered: Vec<&Race> = races.iter().collect();
    ordered.sort_by(|a, b| {
        let a_date = a.date.as_deref().unwrap_or_default();
        let b_date = b.date.as_deref().unwrap_or_default();
        a_date
            .cmp(b_date)
            .then_with(|| a.round_or_zero().cmp(&b.round_or_zero()))
    });

    ordered
        .into_iter()
        .rev()
        .take(count)
        .map(recent_race)
        .collect()
}

/// For a team the best classified car, summed points, and pole or fastest lap
/// if either car took it.
fn recent_race(race: &Race) -> RecentRace {
    RecentRace {
        round: race.round_or_zero(),
        race_name: race.race_name.clone().unwrap_or_default(),
        date: race.date.clone().unwrap_or_default(),
        position: race
            .results
            .iter()
            .map(RaceResult::position_or_zero)
            .filter(|&p| p > 0)
            .min(),
        points: race.results.iter().map(RaceResult::points_or_zero).sum(),
        pole: race.results.iter().any(|r| r.grid_or_zero() == 1),
        fastest_lap: race
            .results
            .iter()
            .any(|r| r.fastest_lap_rank_or_zero() == 1),
    }
}
