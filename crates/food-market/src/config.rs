//! Runtime settings for [`MarketSystem`](crate::runtime::MarketSystem).

use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

/// Settings for the actors and the identifier allocator.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketConfig {
    /// Capacity of every actor's request channel.
    pub channel_buffer: usize,
    /// Collection that holds the counter rows.
    pub sequence_collection: String,
    /// How many times an allocation is attempted before giving up on write conflicts.
    pub sequence_max_attempts: u32,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            sequence_collection: "counters".to_string(),
            sequence_max_attempts: 5,
        }
    }
}

impl MarketConfig {
    /// Reads `MARKET_CHANNEL_BUFFER`, `MARKET_SEQUENCE_COLLECTION` and
    /// `MARKET_SEQUENCE_MAX_ATTEMPTS`. Missing or malformed values keep their default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            channel_buffer: try_load("MARKET_CHANNEL_BUFFER", defaults.channel_buffer),
            sequence_collection: try_load(
                "MARKET_SEQUENCE_COLLECTION",
                defaults.sequence_collection,
            ),
            sequence_max_attempts: try_load(
                "MARKET_SEQUENCE_MAX_ATTEMPTS",
                defaults.sequence_max_attempts,
            ),
        }
    }
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Ok(raw) = env::var(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };

    raw.parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MarketConfig::default();
        assert_eq!(config.channel_buffer, 32);
        assert_eq!(config.sequence_collection, "counters");
        assert_eq!(config.sequence_max_attempts, 5);
    }

    #[test]
    fn test_malformed_value_falls_back() {
        // Variables private to this test.
        env::set_var("MARKET_TEST_ATTEMPTS_MALFORMED", "many");
        env::set_var("MARKET_TEST_ATTEMPTS_VALID", "9");

        assert_eq!(try_load("MARKET_TEST_ATTEMPTS_MALFORMED", 5u32), 5);
        assert_eq!(try_load("MARKET_TEST_ATTEMPTS_VALID", 5u32), 9);
        assert_eq!(try_load("MARKET_TEST_ATTEMPTS_MISSING", 5u32), 5);
    }
}
