pub mod events;
pub mod publish_event_request;
pub mod publish_event_response;
