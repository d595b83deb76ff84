//! Browser signals
//!
//! The tagged input set the state machine consumes. The host environment
//! delivers these in arrival order through one dispatch loop; a signal
//! may reference a tab that is not (or no longer) the active one, and
//! the machine treats such signals as no-ops.

use serde::{Deserialize, Serialize};

/// Identifier of a browser tab.
pub type TabId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Signal {
    /// A tab became the active one; `url` is the tab's current URL.
    TabActivated { tab: TabId, url: String },
    /// A tab finished loading a navigation to `url`.
    TabNavigated { tab: TabId, url: String },
    /// A tab was closed.
    TabClosed { tab: TabId },
    /// The browser window lost input focus.
    FocusLost,
    /// The browser window regained input focus.
    FocusGained,
    /// Periodic heartbeat timer fired.
    Tick,
    /// The host process is starting up.
    Startup,
    /// The host process is about to suspend.
    Suspend,
}
