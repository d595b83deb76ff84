//! Lifecycle events
//!
//! What the state machine emits. Delivery to the collector is a
//! collaborator concern behind the [`EventSink`] trait; the machine only
//! decides what to emit and when.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::origin::Origin;

/// The five lifecycle event kinds, in the only order they may occur for
/// one session: started, then any mix of paused/resumed/heartbeat, then
/// session terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Started,
    Paused,
    Resumed,
    Heartbeat,
    #[serde(rename = "session terminated")]
    Terminated,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Started => "started",
            EventKind::Paused => "paused",
            EventKind::Resumed => "resumed",
            EventKind::Heartbeat => "heartbeat",
            EventKind::Terminated => "session terminated",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "started" => Ok(EventKind::Started),
            "paused" => Ok(EventKind::Paused),
            "resumed" => Ok(EventKind::Resumed),
            "heartbeat" => Ok(EventKind::Heartbeat),
            "session terminated" => Ok(EventKind::Terminated),
            _ => Err(format!("Unknown event kind: {}", s)),
        }
    }
}

/// A single lifecycle event for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifecycleEvent {
    pub kind: EventKind,
    pub origin: Origin,
    pub timestamp: DateTime<Utc>,
}

impl LifecycleEvent {
    pub fn new(kind: EventKind, origin: Origin, timestamp: DateTime<Utc>) -> Self {
        Self {
            kind,
            origin,
            timestamp,
        }
    }
}

/// Snapshot answered by the status query: true iff a session is active
/// and the window is focused.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackStatus {
    pub active: bool,
}

/// Receives lifecycle events for delivery. Implementations must not
/// block: `emit` is called from the dispatch loop and its outcome is
/// never observed by the state machine.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: LifecycleEvent);
}
