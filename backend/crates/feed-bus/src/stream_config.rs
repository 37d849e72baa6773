use std::time::Duration;

/// Configuration for SSE stream connections
#[derive(Debug, Clone)]
pub struct StreamConfig {
    /// Interval between keep-alive comments on an idle stream (None = disabled)
    pub keep_alive: Option<Duration>,
    /// Reconnect delay advertised to the client in the first frame (None = omitted)
    pub retry_ms: Option<u64>,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            keep_alive: Some(Duration::from_secs(15)),
            retry_ms: Some(3000),
        }
    }
}
