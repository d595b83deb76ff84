//! Session data structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::origin::Origin;
use crate::signal::TabId;

/// One contiguous period during which a single origin is the tracked
/// active surface. `origin` and `tab_id` are immutable for the lifetime
/// of the session; changing either means ending this session and, where
/// applicable, starting a new one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier, used for log correlation only
    pub id: String,
    /// Normalized site identity being viewed
    pub origin: Origin,
    /// Tab currently hosting this origin
    pub tab_id: TabId,
    /// When the session began
    pub started_at: DateTime<Utc>,
    /// Whether the hosting window has input focus
    pub focused: bool,
}

impl Session {
    pub fn new(origin: Origin, tab_id: TabId, started_at: DateTime<Utc>, focused: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            origin,
            tab_id,
            started_at,
            focused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let now = Utc::now();
        let session = Session::new(Origin::new("example.com"), 7, now, true);
        assert_eq!(session.origin.as_str(), "example.com");
        assert_eq!(session.tab_id, 7);
        assert_eq!(session.started_at, now);
        assert!(session.focused);
    }
}
