//! Error type shared by every fallible entry point of the library.
//!
//! All computation is pure, so errors only arise from validating inputs:
//! string identifiers coming from a host UI and instrument configurations.

use thiserror::Error;

/// Result alias for fretlib operations.
pub type Result<T> = std::result::Result<T, FretError>;

/// Errors produced while validating fretlib inputs.
#[derive(Debug, Error)]
pub enum FretError {
    /// Scale-type identifier not in the supported set.
    #[error("Invalid scale type: '{0}'")]
    InvalidScaleType(String),

    /// Note name that is not one of the 12 pitch classes.
    #[error("Invalid pitch class: '{0}'")]
    InvalidPitchClass(String),

    /// Guitar type identifier not in the supported set.
    #[error("Invalid guitar type: '{0}'")]
    InvalidGuitarType(String),

    /// Display mode identifier not in the supported set.
    #[error("Invalid display mode: '{0}'")]
    InvalidDisplayMode(String),

    /// Instrument configuration that cannot produce a fretboard.
    #[error("Invalid instrument config: {0}")]
    InvalidInstrument(String),

    /// Canvas too small for its padding, or not a finite size.
    #[error("Invalid canvas: {0}")]
    InvalidCanvas(String),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
