use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SendImageRequest {
    /// Absolute http(s) image URL (required)
    pub url: String,

    /// Optional caption shown next to the image
    #[serde(default)]
    pub message: Option<String>,
}
