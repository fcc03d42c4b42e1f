use std::{str::FromStr, time::Duration};

use tracing::warn;

pub const DEFAULT_API_BASE_URL: &str = "https://api.jolpi.ca/ergast/f1";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub api_base_url: String,
    pub fetch_timeout: Duration,
    pub max_concurrent_fetches: usize,
    pub min_request_delay_ms: u64,
}

impl Config {
    pub fn init() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Config {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "127.0.0.1:3000".to_string()),
            api_base_url: lookup("F1_API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            fetch_timeout: Duration::from_secs(parse_or(&lookup, "FETCH_TIMEOUT_SECS", 10)),
            max_concurrent_fetches: parse_or(&lookup, "MAX_CONCURRENT_FETCHES", 8usize).max(1),
            min_request_delay_ms: parse_or(&lookup, "MIN_REQUEST_DELAY_MS", 0),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Debug,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{key}={raw:?} is not valid, using {default:?}");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.bind_addr, "127.0.0.1:3000");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
        assert_eq!(config.max_concurrent_fetches, 8);
        assert_eq!(config.min_request_delay_ms, 0);
    }

    #[test]
    fn test_overrides_and_bad_values() {
        let config = config_from(&[
            ("F1_API_BASE_URL", "http://localhost:9000/f1/"),
            ("FETCH_TIMEOUT_SECS", "three"),
            ("MAX_CONCURRENT_FETCHES", "0"),
            ("MIN_REQUEST_DELAY_MS", "250"),
        ]);
        assert_eq!(config.api_base_url, "http://localhost:9000/f1");
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
        assert_eq!(config.max_concurrent_fetches, 1);
        assert_eq!(config.min_request_delay_ms, 250);
    }
}
