use crate::ImageDto;

use serde::Serialize;

/// Response for GET /api/v1/images
#[derive(Debug, Serialize)]
pub struct ImageListResponse {
    pub success: bool,
    pub data: Vec<ImageDto>,
}
