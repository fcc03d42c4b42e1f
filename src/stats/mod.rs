//! Career statistics pipeline for one driver or team.
//!
//! The season planner picks historical seasons, the fetcher pulls their results
//! and standings concurrently behind the shared limiter, the extractor turns
//! each season into counters, the aggregator folds them into career totals,
//! and the assembler builds the response document.

pub mod aggregator;
pub mod assembler;
pub mod extractor;
pub mod fetcher;
pub mod planner;

#[cfg(test)]
pub mod test_support;

use std::{sync::Arc, time::Duration};

use crate::{client::StatsSource, utils::rate_limiter::RateLimiter};

#[derive(Clone)]
pub struct StatsPipeline {
    source: Arc<dyn StatsSource>,
    limiter: RateLimiter,
    fetch_timeout: Duration,
}

impl StatsPipeline {
    pub fn new(source: Arc<dyn StatsSource>, limiter: RateLimiter, fetch_timeout: Duration) -> Self {
        Self {
            source,
            limiter,
            fetch_timeout,
        }
    }
}
