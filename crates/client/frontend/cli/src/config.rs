//! CLI-specific configuration for terminal UI.
use std::env;
use std::time::Duration;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_TICK_INTERVAL_MS` - Keyboard polling interval in milliseconds (default: 16)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("CLI_TICK_INTERVAL_MS") {
            config.ui.tick_interval = Duration::from_millis(ms.max(1));
        }

        config
    }
}

/// UI timing and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// How often pending key presses are read.
    pub tick_interval: Duration,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(16),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
