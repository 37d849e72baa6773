use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BusError {
    #[error("Connection closed: {reason} {location}")]
    ConnectionClosed {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Invalid event type {event_type:?}: {message} {location}")]
    InvalidEventType {
        event_type: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Event payload encode failed: {source} {location}")]
    PayloadEncode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl BusError {
    /// Short machine-readable code, used for metrics labels and API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConnectionClosed { .. } => "CONNECTION_CLOSED",
            Self::InvalidEventType { .. } => "INVALID_EVENT_TYPE",
            Self::PayloadEncode { .. } => "ENCODE_ERROR",
        }
    }
}

impl From<serde_json::Error> for BusError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::PayloadEncode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, BusError>;
