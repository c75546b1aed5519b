use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

use crate::budget::{DEFAULT_DAY_BUDGET, MAX_DAY_BUDGET};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: Option<String>,
    pub day_budget: i64,
    pub max_day_budget: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            day_budget: DEFAULT_DAY_BUDGET,
            max_day_budget: MAX_DAY_BUDGET,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Missing or unparsable
    /// values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            day_budget: try_load(&lookup, "ROAD_PRIORITY_DAY_BUDGET", defaults.day_budget),
            max_day_budget: try_load(
                &lookup,
                "ROAD_PRIORITY_MAX_DAY_BUDGET",
                defaults.max_day_budget,
            ),
        }
    }
}

fn try_load<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };

    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}
