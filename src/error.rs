//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.
//! Request-pipeline failures are not errors in this sense: they are folded
//! into [`crate::models::RequestOutcome`] so the presenter can map them to
//! user-facing messages.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
