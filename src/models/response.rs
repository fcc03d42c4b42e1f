use serde::Serialize;

use crate::models::{
    ergast::{Constructor, Driver},
    stats::{CareerStats, EntityKind},
};

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DriverIdentity {
    pub driver_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permanent_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub given_name: String,
    pub family_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl DriverIdentity {
    /// Returns `None` when the provider record has no id to anchor on.
    pub fn from_driver(driver: &Driver) -> Option<Self> {
        Some(Self {
            driver_id: driver.driver_id.clone()?,
            permanent_number: driver.permanent_number.clone(),
            code: driver.code.clone(),
            given_name: driver.given_name.clone().unwrap_or_default(),
            family_name: driver.family_name.clone().unwrap_or_default(),
            date_of_birth: driver.date_of_birth.clone(),
            nationality: driver.nationality.clone(),
            url: driver.url.clone(),
        })
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamIdentity {
    pub constructor_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl TeamIdentity {
    pub fn from_constructor(constructor: &Constructor) -> Option<Self> {
        let constructor_id = constructor.constructor_id.clone()?;
        Some(Self {
            name: constructor
                .name
                .clone()
                .unwrap_or_else(|| constructor_id.clone()),
            constructor_id,
            nationality: constructor.nationality.clone(),
            url: constructor.url.clone(),
        })
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum EntityIdentity {
    Driver(DriverIdentity),
    Team(TeamIdentity),
}

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeasonSnapshot {
    /// Championship position, absent when the season has no standings yet.
    pub position: Option<u32>,
    pub points: f64,
    pub wins: u32,
    pub podiums: u32,
    pub poles: u32,
    pub fastest_laps: u32,
    pub races: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecentRace {
    pub round: u32,
    pub race_name: String,
    pub date: String,
    pub position: Option<u32>,
    pub points: f64,
    pub pole: bool,
    pub fastest_lap: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDocument {
    pub kind: EntityKind,
    pub entity: EntityIdentity,
    pub season: i32,
    pub current_season: SeasonSnapshot,
    pub career: CareerStats,
    pub recent_races: Vec<RecentRace>,
}
