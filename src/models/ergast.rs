//! Typed view over the Ergast-compatible `MRData` envelope served by Jolpica.
//!
//! Every field is optional and every scalar accepts either a JSON string or a
//! number, so a provider schema change degrades to missing values instead of a
//! failed request. Numeric coercion happens through the `*_or_zero` helpers.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Envelope {
    #[serde(rename = "MRData", default)]
    pub mr_data: Option<MrData>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct MrData {
    #[serde(default, deserialize_with = "lenient")]
    pub limit: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub offset: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub total: Option<String>,
    #[serde(rename = "RaceTable", default)]
    pub race_table: Option<RaceTable>,
    #[serde(rename = "StandingsTable", default)]
    pub standings_table: Option<StandingsTable>,
    #[serde(rename = "DriverTable", default)]
    pub driver_table: Option<DriverTable>,
    #[serde(rename = "ConstructorTable", default)]
    pub constructor_table: Option<ConstructorTable>,
}

impl MrData {
    pub fn races(&self) -> Vec<Race> {
        self.race_table
            .as_ref()
            .map(|t| t.races.clone())
            .unwrap_or_default()
    }

    pub fn first_standings_list(&self) -> Option<&StandingsList> {
        self.standings_table.as_ref()?.standings_lists.first()
    }

    pub fn first_driver(&self) -> Option<&Driver> {
        self.driver_table.as_ref()?.drivers.first()
    }

    pub fn first_constructor(&self) -> Option<&Constructor> {
        self.constructor_table.as_ref()?.constructors.first()
    }

    pub fn total_or_zero(&self) -> u32 {
        count_or_zero(&self.total)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct RaceTable {
    #[serde(default, deserialize_with = "lenient")]
    pub season: Option<String>,
    #[serde(rename = "Races", default, deserialize_with = "lenient_list")]
    pub races: Vec<Race>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    #[serde(default, deserialize_with = "lenient")]
    pub season: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub round: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub race_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub time: Option<String>,
    #[serde(rename = "Circuit", default)]
    pub circuit: Option<Circuit>,
    #[serde(rename = "Results", default, deserialize_with = "lenient_list")]
    pub results: Vec<RaceResult>,
}

impl Race {
    pub fn round_or_zero(&self) -> u32 {
        count_or_zero(&self.round)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Circuit {
    #[serde(default, deserialize_with = "lenient")]
    pub circuit_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub circuit_name: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RaceResult {
    #[serde(default, deserialize_with = "lenient")]
    pub number: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub position_text: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub points: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub grid: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub laps: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(rename = "Driver", default)]
    pub driver: Option<Driver>,
    #[serde(rename = "Constructor", default)]
    pub constructor: Option<Constructor>,
    #[serde(rename = "FastestLap", default)]
    pub fastest_lap: Option<FastestLap>,
}

impl RaceResult {
    pub fn position_or_zero(&self) -> u32 {
        count_or_zero(&self.position)
    }

    pub fn grid_or_zero(&self) -> u32 {
        count_or_zero(&self.grid)
    }

    pub fn points_or_zero(&self) -> f64 {
        points_or_zero(&self.points)
    }

    pub fn fastest_lap_rank_or_zero(&self) -> u32 {
        self.fastest_lap
            .as_ref()
            .map(|f| count_or_zero(&f.rank))
            .unwrap_or(0)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct FastestLap {
    #[serde(default, deserialize_with = "lenient")]
    pub rank: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub lap: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct StandingsTable {
    #[serde(default, deserialize_with = "lenient")]
    pub season: Option<String>,
    #[serde(rename = "StandingsLists", default, deserialize_with = "lenient_list")]
    pub standings_lists: Vec<StandingsList>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct StandingsList {
    #[serde(default, deserialize_with = "lenient")]
    pub season: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub round: Option<String>,
    #[serde(rename = "DriverStandings", default, deserialize_with = "lenient_list")]
    pub driver_standings: Vec<Standing>,
    #[serde(
        rename = "ConstructorStandings",
        default,
        deserialize_with = "lenient_list"
    )]
    pub constructor_standings: Vec<Standing>,
}

/// One row of either a driver or a constructor championship table.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    #[serde(default, deserialize_with = "lenient")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub position_text: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub points: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub wins: Option<String>,
    #[serde(rename = "Driver", default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<Driver>,
    #[serde(rename = "Constructor", default, skip_serializing_if = "Option::is_none")]
    pub constructor: Option<Constructor>,
    #[serde(
        rename = "Constructors",
        default,
        deserialize_with = "lenient_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub constructors: Vec<Constructor>,
}

impl Standing {
    pub fn position_or_zero(&self) -> u32 {
        count_or_zero(&self.position)
    }

    pub fn points_or_zero(&self) -> f64 {
        points_or_zero(&self.points)
    }

    pub fn wins_or_zero(&self) -> u32 {
        count_or_zero(&self.wins)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct DriverTable {
    #[serde(rename = "Drivers", default, deserialize_with = "lenient_list")]
    pub drivers: Vec<Driver>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    #[serde(default, deserialize_with = "lenient")]
    pub driver_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub permanent_number: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub given_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub family_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub date_of_birth: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub nationality: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ConstructorTable {
    #[serde(rename = "Constructors", default, deserialize_with = "lenient_list")]
    pub constructors: Vec<Constructor>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Constructor {
    #[serde(default, deserialize_with = "lenient")]
    pub constructor_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub nationality: Option<String>,
}

/// Non-negative integer field, 0 when missing or malformed.
pub fn count_or_zero(raw: &Option<String>) -> u32 {
    raw.as_deref()
        .and_then(|s| s.trim().parse::<u32>().ok())
        .unwrap_or(0)
}

/// Points can be fractional (half points), 0 when missing, malformed or negative.
pub fn points_or_zero(raw: &Option<String>) -> f64 {
    raw.as_deref()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|p| p.is_finite() && *p >= 0.0)
        .unwrap_or(0.0)
}

fn lenient<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Accepts a list whose elements may be malformed; bad elements are dropped.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}
