//! Configuration error type.
//!
//! Every variant is raised by [`SimConfig::validate`][crate::SimConfig::validate]
//! before any entity array is allocated, so a failed run never leaves partial
//! simulation state behind.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("{what} must be positive")]
    NotPositive { what: &'static str },

    #[error("road length {length} is too short (must be at least {min})")]
    RoadTooShort { length: u32, min: u32 },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `rr-*` crates that only fail on configuration.
pub type CoreResult<T> = Result<T, CoreError>;
