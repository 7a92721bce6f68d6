// Configuration constants and environment helpers
use std::ops::RangeInclusive;
use tracing::warn;

use crate::errors::SeedError;

// Randomized dataset shape
pub const USER_COUNT_RANGE: RangeInclusive<usize> = 100..=200;
pub const RATIO_DIVISOR_RANGE: RangeInclusive<usize> = 15..=20;
pub const GROUPS_PER_TEACHER_RANGE: RangeInclusive<usize> = 2..=3;
pub const SCHOOL_NAME: &str = "Test School";

// Concurrency limits
pub const DEFAULT_CONCURRENCY_LIMIT: usize = 50;

// Progress reporting intervals
pub const PROGRESS_REPORT_INTERVAL: usize = 100;

/// Dataset used when no fixture file is given.
pub const BUNDLED_FIXTURE: &str = include_str!("../fixtures/school.json");

/// Connection settings for Neo4j.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neo4jSettings {
    pub uri: String,
    pub user: String,
    pub password: String,
}

/// Get Neo4j connection settings from environment
///
/// `NEO4J_URI` is required; `NEO4J_USER` and `NEO4J_PASSWORD` default to empty.
pub fn get_neo4j_settings() -> Result<Neo4jSettings, SeedError> {
    let uri = std::env::var("NEO4J_URI").map_err(|_| SeedError::config("NEO4J_URI must be set"))?;

    Ok(Neo4jSettings {
        uri,
        user: std::env::var("NEO4J_USER").unwrap_or_default(),
        password: std::env::var("NEO4J_PASSWORD").unwrap_or_default(),
    })
}

/// Get the per-phase concurrency limit from `SEED_CONCURRENCY_LIMIT`
pub fn get_concurrency_limit() -> usize {
    match std::env::var("SEED_CONCURRENCY_LIMIT") {
        Ok(value) => parse_concurrency_limit(&value).unwrap_or_else(|| {
            warn!(
                value = %value,
                default = DEFAULT_CONCURRENCY_LIMIT,
                "Invalid SEED_CONCURRENCY_LIMIT, using default"
            );
            DEFAULT_CONCURRENCY_LIMIT
        }),
        Err(_) => DEFAULT_CONCURRENCY_LIMIT,
    }
}

fn parse_concurrency_limit(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok().filter(|limit| *limit > 0)
}
