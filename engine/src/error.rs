//! Error handling for the estimation engine
//!
//! Only catalog construction and explicit lookups surface errors; the
//! estimation entry points absorb the unknown-crop case into documented
//! fallbacks and never fail.

use thiserror::Error;

/// Engine error types
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unknown crop type: {0}")]
    UnknownCrop(String),

    #[error("Invalid crop profile for {crop}: {reason}")]
    InvalidProfile { crop: String, reason: &'static str },

    #[error("Catalog parse error: {0}")]
    InvalidCatalog(#[from] serde_json::Error),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
