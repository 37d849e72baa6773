use crate::Image;

use chrono::SecondsFormat;
use serde::Serialize;

/// Image DTO for JSON serialization, also the `new_msg` event payload
#[derive(Debug, Clone, Serialize)]
pub struct ImageDto {
    pub url: String,
    /// RFC 3339, UTC
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<Image> for ImageDto {
    fn from(image: Image) -> Self {
        Self {
            url: image.url,
            date: image.date.to_rfc3339_opts(SecondsFormat::Secs, true),
            message: image.message,
        }
    }
}
