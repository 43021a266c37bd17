//! Core types for decoding.

use thiserror::Error;

/// Error types for decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The JIF document failed structural validation.
    #[error("Invalid JIF document: {0}")]
    InvalidDocument(String),

    /// The declared dimensions cannot be allocated.
    #[error("Invalid dimensions: {width}x{height} does not fit in memory")]
    InvalidDimensions { width: u64, height: u64 },

    /// The image file is corrupted or not in a supported format.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}

impl DecodeError {
    /// Whether this error means the input is not a usable JIF document.
    pub fn is_invalid_document(&self) -> bool {
        matches!(
            self,
            DecodeError::InvalidDocument(_) | DecodeError::InvalidDimensions { .. }
        )
    }
}
