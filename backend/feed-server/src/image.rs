use chrono::{DateTime, Utc};

/// An image posted to the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Absolute http(s) URL
    pub url: String,
    pub date: DateTime<Utc>,
    pub message: Option<String>,
}

impl Image {
    /// Stamp a new image with the current time
    pub fn now(url: impl Into<String>, message: Option<String>) -> Self {
        Self {
            url: url.into(),
            date: Utc::now(),
            message,
        }
    }
}
