use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PublishEventRequest {
    /// SSE `event:` name; unnamed events reach `onmessage`
    #[serde(default)]
    pub event_type: Option<String>,

    pub data: String,
}
