//! Encoding pipeline: RGBA image to JIF text, and RGBA image to PNG bytes.
//!
//! This module provides functionality for:
//! - Walking an image into a [`JifDocument`](crate::JifDocument)
//! - Serializing that document as compact or expanded JSON
//! - Encoding a painted image buffer back to PNG
//!
//! # Traversal Order
//!
//! Records are emitted column by column: the outer loop runs over `x`, the
//! inner loop over `y`. Decoding does not depend on this order, but keeping
//! it makes the output byte-for-byte reproducible.
//!
//! # Examples
//!
//! ```ignore
//! use jif_core::encode::encode_jif;
//! use jif_core::JifFormat;
//!
//! let image = image::RgbaImage::new(2, 2);
//! let text = encode_jif(&image, JifFormat::Compact).unwrap();
//! assert!(text.starts_with(r#"{"width":2,"height":2"#));
//! ```

mod jif;
mod png;
mod types;

pub use jif::{encode_document, encode_jif};
pub use png::encode_png;
pub use types::EncodeError;
