use crate::{
    BroadcastConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, FeedConfig, LoggingConfig, MetricsConfig, ServerConfig, SseConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub bus: BroadcastConfig,
    pub stream: SseConfig,
    pub feed: FeedConfig,
    pub logging: LoggingConfig,
    pub metrics: MetricsConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. FEED_CONFIG_DIR env var, else ./.feed/
    /// 2. Create the config directory if missing
    /// 3. Read config.toml if present, else defaults
    /// 4. Apply FEED_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Config directory: FEED_CONFIG_DIR > ./.feed/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate every section. Call after load() to fail fast at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.bus.validate()?;
        self.stream.validate()?;
        self.feed.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    /// Absolute path of the log file, if file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let log_dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(log_dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  bus: subscriber_capacity={}",
            self.bus.subscriber_capacity
        );
        info!(
            "  stream: keep_alive={}s, retry={}ms",
            self.stream.keep_alive_secs, self.stream.retry_ms
        );
        info!(
            "  feed: max_images={}, max_message_length={}",
            self.feed.max_images, self.feed.max_message_length
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  metrics: {}",
            if self.metrics.enabled {
                "enabled"
            } else {
                "disabled"
            }
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("FEED_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("FEED_SERVER_PORT", &mut self.server.port);

        // Bus
        Self::apply_env_parse(
            "FEED_BUS_SUBSCRIBER_CAPACITY",
            &mut self.bus.subscriber_capacity,
        );

        // Stream
        Self::apply_env_parse(
            "FEED_STREAM_KEEP_ALIVE_SECS",
            &mut self.stream.keep_alive_secs,
        );
        Self::apply_env_parse("FEED_STREAM_RETRY_MS", &mut self.stream.retry_ms);

        // Feed
        Self::apply_env_parse("FEED_MAX_IMAGES", &mut self.feed.max_images);
        Self::apply_env_parse(
            "FEED_MAX_MESSAGE_LENGTH",
            &mut self.feed.max_message_length,
        );

        // Logging
        Self::apply_env_parse("FEED_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("FEED_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("FEED_LOG_FILE", &mut self.logging.file);

        // Metrics
        Self::apply_env_bool("FEED_METRICS_ENABLED", &mut self.metrics.enabled);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"; anything else is false
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
