//! Error types for tonescale-enhance

use thiserror::Error;

/// Errors that can occur during tone adjustment
#[derive(Debug, Error)]
pub enum EnhanceError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] tonescale_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for enhance operations
pub type EnhanceResult<T> = Result<T, EnhanceError>;
