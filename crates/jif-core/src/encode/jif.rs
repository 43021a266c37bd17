//! Image to JIF document conversion.

use image::RgbaImage;
use log::debug;

use super::EncodeError;
use crate::document::{JifDocument, Pixel};
use crate::format::JifFormat;

/// Walk every pixel of `image` into a JIF document.
///
/// Records are pushed in column-major order (`x` outer, `y` inner), one per
/// pixel, each shaped according to `format`.
pub fn encode_document(image: &RgbaImage, format: JifFormat) -> JifDocument {
    let (width, height) = image.dimensions();
    let mut document = JifDocument::new(width, height);

    for x in 0..width {
        for y in 0..height {
            let rgba = image.get_pixel(x, y).0;
            document.pixels.push(Pixel::new(x, y, rgba).to_record(format));
        }
    }

    debug!(
        "encoded {}x{} image into {} {:?} records",
        width,
        height,
        document.len(),
        format
    );
    document
}

/// Encode `image` as JIF text.
///
/// Compact documents are minified, expanded documents are pretty-printed.
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for an empty image and
/// `EncodeError::SerializationFailed` if JSON serialization fails.
pub fn encode_jif(image: &RgbaImage, format: JifFormat) -> Result<String, EncodeError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    encode_document(image, format)
        .to_json(format)
        .map_err(|e| EncodeError::SerializationFailed(e.to_string()))
}
