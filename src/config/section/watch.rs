//! `[watch]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [watch]
//! debounce_ms = 200   # Quiet window before a burst of changes triggers a run
//! ```

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    pub debounce_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { debounce_ms: 200 }
    }
}

impl WatchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn validate(&self, errors: &mut Vec<String>) {
        if self.debounce_ms == 0 {
            errors.push("[watch.debounce_ms] must be greater than 0".into());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::config::test_parse_config;

    #[test]
    fn test_watch_config() {
        let config = test_parse_config("[watch]\ndebounce_ms = 50");
        assert_eq!(config.watch.debounce(), Duration::from_millis(50));

        let config = test_parse_config("");
        assert_eq!(config.watch.debounce(), Duration::from_millis(200));
    }
}
