/// First world championship season; nothing before it exists upstream.
pub const FIRST_SEASON: i32 = 1950;

/// Seasons to query for career totals.
///
/// Covers `max(1950, current_season - lookback)` up to and including
/// `calendar_year`, minus `current_season` itself, which is fetched on its own
/// path. A season in the future yields only past years (or nothing).
pub fn plan_seasons(current_season: i32, lookback: i32, calendar_year: i32) -> Vec<i32> {
    let start = (current_season - lookback).max(FIRST_SEASON);
    (start..=calendar_year)
        .filter(|&year| year != current_season)
        .collect()
}
