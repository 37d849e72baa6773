use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SUBSCRIBER_CAPACITY, MAX_SUBSCRIBER_CAPACITY,
    MIN_SUBSCRIBER_CAPACITY,
};

use serde::Deserialize;

/// Broadcast bus settings (`[bus]`)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BroadcastConfig {
    /// Events buffered per subscriber; a subscriber that falls further behind is evicted
    pub subscriber_capacity: usize,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            subscriber_capacity: DEFAULT_SUBSCRIBER_CAPACITY,
        }
    }
}

impl BroadcastConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.subscriber_capacity < MIN_SUBSCRIBER_CAPACITY
            || self.subscriber_capacity > MAX_SUBSCRIBER_CAPACITY
        {
            return Err(ConfigError::broadcast(format!(
                "bus.subscriber_capacity must be {}-{}, got {}",
                MIN_SUBSCRIBER_CAPACITY, MAX_SUBSCRIBER_CAPACITY, self.subscriber_capacity
            )));
        }

        Ok(())
    }
}
