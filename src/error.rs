//! Crate error type
//!
//! The simulation itself never fails; only loading balance data can.

use thiserror::Error;

/// Errors surfaced by the crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Tuning values parsed but are out of range.
    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    /// Tuning JSON could not be parsed.
    #[error("malformed tuning json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
