//! PNG encoding for decoded JIF images.
//!
//! Uses the `image` crate's PNG encoder with default compression. Output is
//! always 8-bit RGBA so alpha from the JIF document survives unchanged.

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use image::RgbaImage;
use std::io::Cursor;

use super::EncodeError;

/// Encode an RGBA image to PNG bytes.
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` if the image is empty and
/// `EncodeError::EncodingFailed` if the PNG encoder rejects the data.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let mut buffer = Cursor::new(Vec::new());
    let encoder = PngEncoder::new(&mut buffer);

    encoder
        .write_image(image.as_raw(), width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}
