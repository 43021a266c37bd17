//! Error types for encoding.

use thiserror::Error;

/// Errors that can occur while encoding JIF text or PNG bytes.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The JIF document could not be serialized
    #[error("JIF serialization failed: {0}")]
    SerializationFailed(String),

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}
