//! Emitter error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmitterError {
    #[error("Invalid collector URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
