//! Error types for tonescale-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Tonescale core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Intensity sample outside the 8-bit range [0, 255]
    ///
    /// Signals a contract violation in an upstream collaborator
    /// (a bad decode or a bad transform), not a recoverable condition.
    #[error("invalid sample: value {value} at index {index} is outside [0, 255]")]
    InvalidSample { value: u16, index: usize },

    /// Image dimension mismatch
    #[error("dimension mismatch: expected {expected} samples for {width}x{height}x{channels}, got {actual}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        channels: u8,
        expected: u64,
        actual: u64,
    },
}

/// Result type alias for tonescale operations
pub type Result<T> = std::result::Result<T, Error>;
