use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_KEEP_ALIVE_SECS, DEFAULT_RETRY_MS,
    MAX_KEEP_ALIVE_SECS, MAX_RETRY_MS, MIN_KEEP_ALIVE_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Event stream connection settings (`[stream]`)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SseConfig {
    /// Seconds between keep-alive comments on idle streams (0 = disabled)
    pub keep_alive_secs: u64,
    /// Client reconnect delay sent in the first frame (0 = not sent)
    pub retry_ms: u64,
}

impl Default for SseConfig {
    fn default() -> Self {
        Self {
            keep_alive_secs: DEFAULT_KEEP_ALIVE_SECS,
            retry_ms: DEFAULT_RETRY_MS,
        }
    }
}

impl SseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.keep_alive_secs != 0
            && !(MIN_KEEP_ALIVE_SECS..=MAX_KEEP_ALIVE_SECS).contains(&self.keep_alive_secs)
        {
            return Err(ConfigError::stream(format!(
                "stream.keep_alive_secs must be 0 (disabled) or {}-{}, got {}",
                MIN_KEEP_ALIVE_SECS, MAX_KEEP_ALIVE_SECS, self.keep_alive_secs
            )));
        }

        if self.retry_ms > MAX_RETRY_MS {
            return Err(ConfigError::stream(format!(
                "stream.retry_ms must be 0-{}, got {}",
                MAX_RETRY_MS, self.retry_ms
            )));
        }

        Ok(())
    }

    pub fn keep_alive(&self) -> Option<Duration> {
        (self.keep_alive_secs > 0).then(|| Duration::from_secs(self.keep_alive_secs))
    }

    pub fn retry_ms(&self) -> Option<u64> {
        (self.retry_ms > 0).then_some(self.retry_ms)
    }
}
