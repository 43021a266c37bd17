//! JIF Core - PNG to JSON pixel-dump codec
//!
//! This crate converts RGBA images into JIF documents, a JSON listing of
//! every pixel's coordinate and color, and paints JIF documents back into
//! images. PNG loading and saving are thin adapters over the `image` crate.
//!
//! # Module Structure
//!
//! - `format` - Compact / expanded record shape selector
//! - `document` - Document and record types
//! - `encode` - Image to JIF text, image to PNG bytes
//! - `decode` - JIF text to image, PNG bytes to image
//! - `paths` - Filename suffix checks and default output names

pub mod decode;
pub mod document;
pub mod encode;
pub mod format;
pub mod paths;

pub use decode::{decode_jif, decode_png, DecodeError};
pub use document::{JifDocument, Pixel, PixelRecord};
pub use encode::{encode_jif, encode_png, EncodeError};
pub use format::{JifFormat, JIF_SUFFIX, PNG_SUFFIX};
