use std::env;
use std::str::FromStr;

use chrono::TimeDelta;

use business::domain::pool::model::DEFAULT_POOL_SIZE;
use cache::pool_cache::DEFAULT_TTL_MINUTES;

/// Recipe pool sizing and freshness.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub pool_size: usize,
    pub ttl_minutes: i64,
}

impl PoolConfig {
    /// Environment variables:
    /// - RECIPE_POOL_SIZE: recipes requested per pool (default: 50)
    /// - RECIPE_POOL_TTL_MINUTES: minutes a pool stays cached (default: 30)
    ///
    /// Unparseable or non-positive values fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            pool_size: parse_positive(env::var("RECIPE_POOL_SIZE").ok(), DEFAULT_POOL_SIZE),
            ttl_minutes: parse_positive(
                env::var("RECIPE_POOL_TTL_MINUTES").ok(),
                DEFAULT_TTL_MINUTES,
            ),
        }
    }

    /// Cache TTL. Values too large for a `TimeDelta` use the default.
    pub fn ttl(&self) -> TimeDelta {
        TimeDelta::try_minutes(self.ttl_minutes)
            .unwrap_or_else(|| TimeDelta::minutes(DEFAULT_TTL_MINUTES))
    }
}

fn parse_positive<T>(value: Option<String>, default: T) -> T
where
    T: FromStr + PartialOrd + Default,
{
    value
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .filter(|parsed| *parsed > T::default())
        .unwrap_or(default)
}
