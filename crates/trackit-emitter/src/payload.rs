//! Collector wire payload

use chrono::Local;
use serde::{Deserialize, Serialize};

use trackit_core::{EventKind, LifecycleEvent};

/// JSON body POSTed to the collector for every lifecycle event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPayload {
    /// Lifecycle event kind, e.g. "started" or "session terminated"
    pub event: EventKind,
    /// Normalized or display origin identifier
    pub origin: String,
    /// Local calendar date, YYYY-MM-DD
    pub date: String,
    /// Full instant, RFC 3339
    pub timestamp: String,
}

impl From<&LifecycleEvent> for EventPayload {
    fn from(event: &LifecycleEvent) -> Self {
        let local = event.timestamp.with_timezone(&Local);
        Self {
            event: event.kind,
            origin: event.origin.to_string(),
            date: local.format("%Y-%m-%d").to_string(),
            timestamp: event.timestamp.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use trackit_core::Origin;

    #[test]
    fn test_payload_shape() {
        let timestamp = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
        let event = LifecycleEvent::new(EventKind::Terminated, Origin::new("a.com"), timestamp);

        let payload = EventPayload::from(&event);
        let json: serde_json::Value = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["event"], "session terminated");
        assert_eq!(json["origin"], "a.com");
        assert_eq!(json["timestamp"], "2025-03-14T09:26:53+00:00");
        // Local date, but always the wire shape YYYY-MM-DD.
        let date = json["date"].as_str().unwrap();
        assert_eq!(date.len(), 10);
        assert_eq!(date.as_bytes()[4], b'-');
        assert_eq!(date.as_bytes()[7], b'-');
    }

    #[test]
    fn test_payload_round_trip() {
        let event = LifecycleEvent::new(EventKind::Heartbeat, Origin::new("b.com"), Utc::now());
        let payload = EventPayload::from(&event);
        let json = serde_json::to_string(&payload).unwrap();
        let back: EventPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);
    }
}
