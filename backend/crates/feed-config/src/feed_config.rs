use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MAX_IMAGES, DEFAULT_MAX_MESSAGE_LENGTH,
    MAX_MAX_IMAGES, MAX_MAX_MESSAGE_LENGTH, MIN_MAX_IMAGES, MIN_MAX_MESSAGE_LENGTH,
};

use serde::Deserialize;

/// Image feed settings (`[feed]`)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Images kept in memory; the oldest are dropped first
    pub max_images: usize,
    /// Maximum characters in an image caption
    pub max_message_length: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            max_images: DEFAULT_MAX_IMAGES,
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
        }
    }
}

impl FeedConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_MAX_IMAGES..=MAX_MAX_IMAGES).contains(&self.max_images) {
            return Err(ConfigError::feed(format!(
                "feed.max_images must be {}-{}, got {}",
                MIN_MAX_IMAGES, MAX_MAX_IMAGES, self.max_images
            )));
        }

        if !(MIN_MAX_MESSAGE_LENGTH..=MAX_MAX_MESSAGE_LENGTH).contains(&self.max_message_length) {
            return Err(ConfigError::feed(format!(
                "feed.max_message_length must be {}-{}, got {}",
                MIN_MAX_MESSAGE_LENGTH, MAX_MAX_MESSAGE_LENGTH, self.max_message_length
            )));
        }

        Ok(())
    }
}
