//! TrackIT Emitter
//!
//! Best-effort delivery of lifecycle events to the collector endpoint.
//! Delivery is one-way: failures are logged and swallowed, and never
//! reach the session state machine.

mod error;
mod http;
mod payload;

pub use error::EmitterError;
pub use http::{HttpEmitter, NullEmitter, DEFAULT_COLLECTOR_URL};
pub use payload::EventPayload;

pub type Result<T> = std::result::Result<T, EmitterError>;
