use crate::{models::error::ApiError, stats::planner::FIRST_SEASON};

/// Accepts a four-digit year or `current`.
pub fn parse_season(raw: &str, calendar_year: i32) -> Result<i32, ApiError> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("current") {
        return Ok(calendar_year);
    }
    match raw.parse::<i32>() {
        Ok(season) if raw.len() == 4 && season >= FIRST_SEASON => Ok(season),
        _ => Err(ApiError::BadRequest(format!("Invalid season: {raw}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_season() {
        assert_eq!(parse_season("2024", 2026).unwrap(), 2024);
        assert_eq!(parse_season("current", 2026).unwrap(), 2026);
        assert_eq!(parse_season("Current", 2026).unwrap(), 2026);
        assert_eq!(parse_season("2031", 2026).unwrap(), 2031);
        assert!(parse_season("1949", 2026).is_err());
        assert!(parse_season("+2024", 2026).is_err());
        assert!(parse_season("twenty", 2026).is_err());
        assert!(parse_season("", 2026).is_err());
    }
}
