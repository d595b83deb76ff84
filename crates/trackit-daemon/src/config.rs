//! Daemon configuration

use std::time::Duration;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

use trackit_emitter::DEFAULT_COLLECTOR_URL;

const DEFAULT_HEARTBEAT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Collector endpoint lifecycle events are POSTed to
    pub collector_url: String,
    /// Heartbeat period in seconds; must be positive
    pub heartbeat_secs: u64,
}

impl Config {
    /// Build from environment overrides, falling back to defaults.
    ///
    /// `TRACKIT_COLLECTOR_URL` and `TRACKIT_HEARTBEAT_SECS` are read.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Config::default();

        if let Ok(url) = std::env::var("TRACKIT_COLLECTOR_URL") {
            config.collector_url = url;
        }
        if let Ok(secs) = std::env::var("TRACKIT_HEARTBEAT_SECS") {
            config.heartbeat_secs = secs
                .parse()
                .with_context(|| format!("Invalid TRACKIT_HEARTBEAT_SECS: {}", secs))?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.heartbeat_secs == 0 {
            bail!("heartbeat_secs must be positive");
        }
        Ok(())
    }

    pub fn heartbeat(&self) -> Duration {
        Duration::from_secs(self.heartbeat_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            collector_url: DEFAULT_COLLECTOR_URL.to_string(),
            heartbeat_secs: DEFAULT_HEARTBEAT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.collector_url, "http://localhost:6001/log_url");
        assert_eq!(config.heartbeat(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_heartbeat_rejected() {
        let config = Config {
            heartbeat_secs: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
