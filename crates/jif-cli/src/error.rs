//! User-facing error taxonomy.
//!
//! The `Display` text of each variant is exactly what the tool prints on
//! stderr before exiting with status 1.

use std::path::PathBuf;

use jif_core::{DecodeError, EncodeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// No input path on the command line.
    #[error("No file was specified.")]
    NoFile,

    #[error("File {} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("File {} is not a PNG", .0.display())]
    NotPng(PathBuf),

    #[error("File {} is not a JIF", .0.display())]
    NotJif(PathBuf),

    /// The document failed validation, most often because of a missing or
    /// extra `--expanded`.
    #[error(
        "File {} is not a valid JIF! If it uses the expanded format, make sure to append the argument.",
        .0.display()
    )]
    InvalidJif(PathBuf),

    #[error("Failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Errors from the PNG decoder pass through with their own message.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}
