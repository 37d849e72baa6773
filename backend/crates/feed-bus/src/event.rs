use crate::{BusError, Result as BusResult, frame};

use std::panic::Location;

use bytes::Bytes;
use error_location::ErrorLocation;
use serde::Serialize;

/// An immutable notification ready for wire encoding.
///
/// Once handed to [`crate::BroadcastBus::publish`] the bus owns it and shares a
/// single `Arc<Event>` with every subscriber, so no consumer can alter what the
/// others see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    event_type: Option<String>,
    data: String,
}

impl Event {
    /// Create an event with an optional type tag.
    ///
    /// The type is written on its own `event:` line, so it must be non-empty
    /// and free of line breaks.
    #[track_caller]
    pub fn new(event_type: Option<&str>, data: impl Into<String>) -> BusResult<Self> {
        if let Some(event_type) = event_type {
            validate_event_type(event_type)?;
        }

        Ok(Self {
            event_type: event_type.map(str::to_owned),
            data: data.into(),
        })
    }

    /// Create an untyped event (delivered to the browser's `onmessage`)
    pub fn message(data: impl Into<String>) -> Self {
        Self {
            event_type: None,
            data: data.into(),
        }
    }

    /// Create a typed event whose data is the JSON encoding of `value`
    #[track_caller]
    pub fn json<T: Serialize>(event_type: &str, value: &T) -> BusResult<Self> {
        validate_event_type(event_type)?;
        let data = serde_json::to_string(value)?;

        Ok(Self {
            event_type: Some(event_type.to_owned()),
            data,
        })
    }

    pub fn event_type(&self) -> Option<&str> {
        self.event_type.as_deref()
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    /// Encode as a blank-line-terminated stream frame
    pub fn to_frame(&self) -> Bytes {
        frame::encode_event(self.event_type(), &self.data)
    }
}

#[track_caller]
fn validate_event_type(event_type: &str) -> BusResult<()> {
    let message = if event_type.is_empty() {
        "must not be empty"
    } else if event_type.contains(['\n', '\r']) {
        "must not contain line breaks"
    } else {
        return Ok(());
    };

    Err(BusError::InvalidEventType {
        event_type: event_type.to_owned(),
        message: message.to_owned(),
        location: ErrorLocation::from(Location::caller()),
    })
}
