//! TrackIT Core
//!
//! The session-tracking state machine and its runtime. Browser signals
//! (tab activated, tab navigated, tab closed, focus changes) are folded
//! into a single non-overlapping sequence of per-origin sessions, each
//! bounded by a `started` and a `session terminated` lifecycle event,
//! with periodic heartbeats while the session is active and focused.

mod error;
mod event;
mod machine;
mod origin;
mod session;
mod signal;
mod tracker;

pub use error::CoreError;
pub use event::{EventKind, EventSink, LifecycleEvent, TrackStatus};
pub use machine::SessionMachine;
pub use origin::Origin;
pub use session::Session;
pub use signal::{Signal, TabId};
pub use tracker::{spawn_tracker, TrackerHandle};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
