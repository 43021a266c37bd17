//! PNG loading.

use std::io::Cursor;

use image::{ImageFormat, ImageReader, RgbaImage};
use log::debug;

use super::DecodeError;

/// Decode PNG bytes into an 8-bit RGBA image.
///
/// Grayscale, palette and 16-bit PNGs are converted to RGBA8.
///
/// # Errors
///
/// Returns `DecodeError::CorruptedFile` with the decoder's message if the
/// bytes are not a readable PNG.
pub fn decode_png(bytes: &[u8]) -> Result<RgbaImage, DecodeError> {
    let mut reader = ImageReader::new(Cursor::new(bytes));
    reader.set_format(ImageFormat::Png);

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    debug!(
        "decoded {}x{} PNG ({:?})",
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img.into_rgba8())
}
