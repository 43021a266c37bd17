//! Decoding pipeline: JIF text to RGBA image, and PNG bytes to RGBA image.
//!
//! This module provides functionality for:
//! - Structural validation of JIF documents
//! - Painting JIF records into a freshly allocated image buffer
//! - Loading PNG files of any color type as 8-bit RGBA
//!
//! # Validation
//!
//! A document is accepted when `width`, `height` and `pixels` are present
//! and truthy and at least one record carries every field of the selected
//! format with a truthy value. Validation runs to completion before any
//! pixel is painted; a rejected document never yields a partial image.
//!
//! # Painting
//!
//! Records are applied in document order onto a transparent black buffer.
//! A later record at the same coordinate replaces the earlier color.
//! Records that cannot be read, or that fall outside the grid, are skipped.
//!
//! # Examples
//!
//! ```ignore
//! use jif_core::decode::decode_jif;
//! use jif_core::JifFormat;
//!
//! let text = br#"{"width":1,"height":1,"pixels":[{"p":"0,0","c":"1,2,3,4"}]}"#;
//! let image = decode_jif(text, JifFormat::Compact).unwrap();
//! assert_eq!(image.get_pixel(0, 0).0, [1, 2, 3, 4]);
//! ```

mod jif;
mod png;
mod types;
mod validate;

pub use jif::{decode_jif, decode_value};
#[cfg(test)]
pub(crate) use jif::read_record;
pub use png::decode_png;
pub use types::DecodeError;
