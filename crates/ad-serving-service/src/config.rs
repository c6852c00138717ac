//! Configuration management for the Ad Serving Service

use admatch_engine::pricing::DEFAULT_PRICE_PER_IMPRESSION;
use admatch_engine::{MatchWeights, PriceSchedule};

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind host
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Price schedule applied to ad posts
    pub schedule: PriceSchedule,

    /// Per-attribute weights applied when scoring candidates
    pub weights: MatchWeights,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparseable variables fall back to the engine defaults, so
    /// a bare environment yields a working service.
    pub fn from_env() -> Self {
        let host = std::env::var("ADMATCH_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("ADMATCH_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8084);

        let price_per_impression = env_u64("PRICE_PER_IMPRESSION", DEFAULT_PRICE_PER_IMPRESSION);

        let defaults = MatchWeights::default();
        let weights = MatchWeights {
            age: env_u64("AGE_WEIGHT", defaults.age),
            salary: env_u64("SALARY_WEIGHT", defaults.salary),
            embedding: env_u64("EMBEDDING_WEIGHT", defaults.embedding),
            location: env_u64("LOCATION_WEIGHT", defaults.location),
        };

        Self {
            host,
            port,
            schedule: PriceSchedule::new(price_per_impression),
            weights,
        }
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
