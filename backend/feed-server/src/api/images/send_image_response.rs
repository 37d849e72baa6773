use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SendImageResponse {
    pub received: bool,
    pub url: String,
}
