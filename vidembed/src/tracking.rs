use serde::Serialize;

use crate::dom::MediaEvent;

/**
    Name of the bubbling DOM event analytics listeners subscribe to.
*/
pub const TRACKING_EVENT: &str = "oTracking.event";

/**
    Detail payload of an `oTracking.event`.
*/
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEvent {
    pub action: &'static str,
    pub category: &'static str,
    /// Media event type that triggered it (`play`, `pause`, `ended`).
    pub event: &'static str,
    pub media_type: &'static str,
    pub content_id: String,
    /// Playback progress in percent at the time of the event.
    pub progress: u8,
}

impl TrackingEvent {
    pub fn media(content_id: impl Into<String>, event: MediaEvent, progress: u8) -> Self {
        Self {
            action: "media",
            category: "video",
            event: event.as_str(),
            media_type: "video",
            content_id: content_id.into(),
            progress,
        }
    }
}
