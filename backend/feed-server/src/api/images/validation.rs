use crate::{ApiError, ApiResult};

use http::Uri;

/// Accept only absolute http/https URLs with a host. Returns the trimmed URL.
#[track_caller]
pub fn validate_image_url(raw: &str) -> ApiResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation("url", "url is required"));
    }

    let uri: Uri = trimmed
        .parse()
        .map_err(|e| ApiError::validation("url", format!("url is not a valid URI: {e}")))?;

    match uri.scheme_str() {
        Some("http") | Some("https") => {}
        _ => {
            return Err(ApiError::validation(
                "url",
                "url must use the http or https scheme",
            ));
        }
    }

    if uri.host().is_none_or(str::is_empty) {
        return Err(ApiError::validation("url", "url must include a host"));
    }

    Ok(trimmed.to_string())
}

/// Blank captions are dropped; captions over `max_length` characters are rejected
#[track_caller]
pub fn validate_message(message: Option<String>, max_length: usize) -> ApiResult<Option<String>> {
    let Some(message) = message else {
        return Ok(None);
    };

    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let length = trimmed.chars().count();
    if length > max_length {
        return Err(ApiError::validation(
            "message",
            format!("message must be at most {max_length} characters, got {length}"),
        ));
    }

    Ok(Some(trimmed.to_string()))
}
