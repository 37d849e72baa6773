mod broadcast_config;
mod config;
mod error;
mod feed_config;
mod log_level;
mod logging_config;
mod metrics_config;
mod server_config;
mod sse_config;

#[cfg(test)]
mod tests;

pub use broadcast_config::BroadcastConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use feed_config::FeedConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use metrics_config::MetricsConfig;
pub use server_config::ServerConfig;
pub use sse_config::SseConfig;

pub const CONFIG_DIR_ENV: &str = "FEED_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".feed";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const MIN_PORT: u16 = 1024;

const DEFAULT_SUBSCRIBER_CAPACITY: usize = 5;
const MIN_SUBSCRIBER_CAPACITY: usize = 1;
const MAX_SUBSCRIBER_CAPACITY: usize = 1024;

const DEFAULT_KEEP_ALIVE_SECS: u64 = 15;
const MIN_KEEP_ALIVE_SECS: u64 = 5;
const MAX_KEEP_ALIVE_SECS: u64 = 300;
const DEFAULT_RETRY_MS: u64 = 3000;
const MAX_RETRY_MS: u64 = 60_000;

const DEFAULT_MAX_IMAGES: usize = 500;
const MIN_MAX_IMAGES: usize = 1;
const MAX_MAX_IMAGES: usize = 100_000;
const DEFAULT_MAX_MESSAGE_LENGTH: usize = 2000;
const MIN_MAX_MESSAGE_LENGTH: usize = 1;
const MAX_MAX_MESSAGE_LENGTH: usize = 4000;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
