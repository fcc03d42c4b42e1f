//! In-memory provider and JSON builders for pipeline tests.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::{
    client::StatsSource,
    models::{
        ergast::{Envelope, MrData},
        stats::EntityKind,
    },
    stats::StatsPipeline,
    utils::rate_limiter::RateLimiter,
};

/// Serves canned documents keyed by exact request path. Unknown paths are
/// unavailable. Every requested path is recorded.
#[derive(Default)]
pub struct FakeSource {
    responses: HashMap<String, Value>,
    delays: HashMap<String, Duration>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: &str, body: Value) -> Self {
        self.responses.insert(path.to_string(), body);
        self
    }

    pub fn slow(mut self, path: &str, delay: Duration) -> Self {
        self.delays.insert(path.to_string(), delay);
        self
    }

    pub fn calls_handle(&self) -> Arc<Mutex<Vec<String>>> {
        self.calls.clone()
    }

    pub fn pipeline(self, fetch_timeout: Duration) -> StatsPipeline {
        StatsPipeline::new(Arc::new(self), RateLimiter::new(16, 0), fetch_timeout)
    }
}

#[async_trait]
impl StatsSource for FakeSource {
    async fn fetch(&self, path: &str) -> Option<MrData> {
        self.calls.lock().unwrap().push(path.to_string());
        if let Some(delay) = self.delays.get(path) {
            tokio::time::sleep(*delay).await;
        }
        let body = self.responses.get(path)?.clone();
        serde_json::from_value::<Envelope>(body).ok()?.mr_data
    }
}

pub fn race_result(position: &str, grid: &str, points: &str) -> Value {
    json!({"position": position, "grid": grid, "points": points})
}

pub fn race_result_with_fastest_lap(position: &str, grid: &str, points: &str, rank: &str) -> Value {
    json!({
        "position": position,
        "grid": grid,
        "points": points,
        "FastestLap": {"rank": rank}
    })
}

pub fn race(round: &str, date: &str, results: Vec<Value>) -> Value {
    json!({
        "season": &date[..4],
        "round": round,
        "raceName": format!("Round {round} Grand Prix"),
        "date": date,
        "Results": results
    })
}

pub fn results_doc(races: Vec<Value>) -> Value {
    let total: usize = races
        .iter()
        .map(|r| r["Results"].as_array().map_or(0, Vec::len))
        .sum();
    json!({
        "MRData": {
            "limit": "100",
            "offset": "0",
            "total": total.to_string(),
            "RaceTable": {"Races": races}
        }
    })
}

pub fn standing_doc(kind: EntityKind, position: &str, points: &str, wins: &str) -> Value {
    let row = json!({"position": position, "points": points, "wins": wins});
    let list = match kind {
        EntityKind::Driver => json!({"DriverStandings": [row]}),
        EntityKind::Team => json!({"ConstructorStandings": [row]}),
    };
    json!({"MRData": {"StandingsTable": {"StandingsLists": [list]}}})
}

pub fn standing_after_round(kind: EntityKind, position: &str, round: &str) -> Value {
    let mut doc = standing_doc(kind, position, "0", "0");
    doc["MRData"]["StandingsTable"]["StandingsLists"][0]["round"] = json!(round);
    doc
}

pub fn schedule_doc(rounds: u32) -> Value {
    let races: Vec<Value> = (1..=rounds)
        .map(|round| json!({"round": round.to_string()}))
        .collect();
    json!({
        "MRData": {
            "total": rounds.to_string(),
            "RaceTable": {"Races": races}
        }
    })
}

pub fn driver_doc(driver_id: &str) -> Value {
    json!({
        "MRData": {
            "DriverTable": {"Drivers": [{
                "driverId": driver_id,
                "givenName": "Test",
                "familyName": driver_id,
                "nationality": "Dutch"
            }]}
        }
    })
}

pub fn constructor_doc(constructor_id: &str, name: &str) -> Value {
    json!({
        "MRData": {
            "ConstructorTable": {"Constructors": [{
                "constructorId": constructor_id,
                "name": name,
                "nationality": "German"
            }]}
        }
    })
}
