//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;
use std::time::Duration;

use elevator_core::FloorRange;
use runtime::{DEFAULT_POLL_INTERVAL, ServiceConfig};

/// Frontend-specific configuration.
#[derive(Clone, Debug)]
pub struct FrontendConfig {
    pub messages: MessageConfig,

    /// Floors accepted by ride validation.
    pub floors: FloorRange,

    /// Interval handed to the service when the user starts the simulation.
    pub poll_interval: Duration,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            messages: MessageConfig::default(),
            floors: FloorRange::DEFAULT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig, floors: FloorRange, poll_interval: Duration) -> Self {
        Self {
            messages,
            floors,
            poll_interval,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `RIDE_MESSAGE_TTL_MS` - How long a ride message stays visible (default: 5000)
    /// - `ELEVATOR_MIN_FLOOR` - Lowest floor accepted (default: 1)
    /// - `ELEVATOR_MAX_FLOOR` - Highest floor accepted (default: 10)
    /// - `ELEVATOR_POLL_INTERVAL_MS` - Status poll interval (default: 1000)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("RIDE_MESSAGE_TTL_MS") {
            config.messages.clear_after = Duration::from_millis(ms);
        }

        let min = read_env("ELEVATOR_MIN_FLOOR").unwrap_or(FloorRange::DEFAULT.min());
        let max = read_env("ELEVATOR_MAX_FLOOR").unwrap_or(FloorRange::DEFAULT.max());
        match FloorRange::new(min, max) {
            Some(range) => config.floors = range,
            None => tracing::warn!(
                "Ignoring floor range {}..={}: minimum exceeds maximum, using {}",
                min,
                max,
                FloorRange::DEFAULT
            ),
        }

        config.poll_interval = ServiceConfig::from_env().poll_interval;

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    /// Delay after which a ride message is cleared.
    pub clear_after: Duration,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            clear_after: Duration::from_millis(5000),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
