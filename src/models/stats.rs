use serde::Serialize;

use crate::models::ergast::{Race, Standing};

/// Subject of a statistics lookup.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Driver,
    Team,
}

impl EntityKind {
    /// How many seasons back career totals reach.
    pub fn lookback(self) -> i32 {
        match self {
            EntityKind::Driver => 15,
            EntityKind::Team => 75,
        }
    }

    /// Provider path segment for this kind of entity.
    pub fn collection(self) -> &'static str {
        match self {
            EntityKind::Driver => "drivers",
            EntityKind::Team => "constructors",
        }
    }

    pub fn standings_resource(self) -> &'static str {
        match self {
            EntityKind::Driver => "driverstandings",
            EntityKind::Team => "constructorstandings",
        }
    }
}

/// One season's fetch outcome. `Unavailable` is never conflated with a
/// season in which the entity simply did not race.
#[derive(Debug, Clone)]
pub enum SeasonOutcome {
    Races(Vec<Race>),
    Unavailable,
}

impl SeasonOutcome {
    pub fn is_available(&self) -> bool {
        matches!(self, SeasonOutcome::Races(_))
    }
}

/// The entity's championship row together with the round the table was
/// taken after.
#[derive(Debug, Clone)]
pub struct SeasonStanding {
    pub round: u32,
    pub standing: Standing,
}

/// Counters for one season. `races` counts result entries, so for a team
/// each car start counts once, which keeps `wins <= podiums <= races`.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeasonStats {
    pub races: u32,
    pub wins: u32,
    pub podiums: u32,
    pub poles: u32,
    pub fastest_laps: u32,
    pub points: f64,
}

impl std::ops::Add for SeasonStats {
    type Output = SeasonStats;

    fn add(self, other: SeasonStats) -> SeasonStats {
        SeasonStats {
            races: self.races + other.races,
            wins: self.wins + other.wins,
            podiums: self.podiums + other.podiums,
            poles: self.poles + other.poles,
            fastest_laps: self.fastest_laps + other.fastest_laps,
            points: self.points + other.points,
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CareerStats {
    pub races: u32,
    pub wins: u32,
    pub podiums: u32,
    pub poles: u32,
    pub fastest_laps: u32,
    pub points: f64,
    pub championship_titles: u32,
    pub seasons_counted: u32,
}

impl CareerStats {
    pub fn add_season(&mut self, stats: SeasonStats) {
        self.races += stats.races;
        self.wins += stats.wins;
        self.podiums += stats.podiums;
        self.poles += stats.poles;
        self.fastest_laps += stats.fastest_laps;
        self.points += stats.points;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_paths() {
        assert_eq!(EntityKind::Driver.lookback(), 15);
        assert_eq!(EntityKind::Team.lookback(), 75);
        assert_eq!(EntityKind::Team.collection(), "constructors");
        assert_eq!(EntityKind::Driver.standings_resource(), "driverstandings");
        assert_eq!(
            serde_json::to_value(EntityKind::Team).unwrap(),
            serde_json::json!("team")
        );
    }

    #[test]
    fn test_season_stats_add() {
        let a = SeasonStats {
            races: 2,
            wins: 1,
            podiums: 2,
            poles: 1,
            fastest_laps: 0,
            points: 43.0,
        };
        let sum = a + a;
        assert_eq!(sum.races, 4);
        assert_eq!(sum.points, 86.0);
        assert_eq!(a + SeasonStats::default(), a);
    }
}
