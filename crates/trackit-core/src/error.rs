//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Heartbeat period must be positive, got {0:?}")]
    InvalidHeartbeat(std::time::Duration),
}
