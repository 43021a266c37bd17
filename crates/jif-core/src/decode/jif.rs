//! JIF document to image conversion.

use image::{Limits, Rgba, RgbaImage};
use log::{debug, warn};
use serde_json::Value;

use super::validate::validate;
use super::DecodeError;
use crate::document::{parse_color, parse_coordinate, Pixel};
use crate::format::JifFormat;

/// Decode JIF text into an RGBA image.
///
/// # Arguments
///
/// * `text` - Raw bytes of the JIF file (UTF-8 JSON)
/// * `format` - Record shape the document was written with
///
/// # Errors
///
/// Returns `DecodeError::InvalidDocument` if the bytes are not JSON or the
/// document fails validation, and `DecodeError::InvalidDimensions` if the
/// declared grid is too large to allocate.
pub fn decode_jif(text: &[u8], format: JifFormat) -> Result<RgbaImage, DecodeError> {
    let document: Value = serde_json::from_slice(text)
        .map_err(|e| DecodeError::InvalidDocument(format!("not valid JSON: {e}")))?;
    decode_value(&document, format)
}

/// Validate an already parsed JIF document and paint it into an image.
///
/// Every check happens before the buffer is allocated, so an error never
/// leaves a partially painted image behind.
pub fn decode_value(document: &Value, format: JifFormat) -> Result<RgbaImage, DecodeError> {
    let records = validate(document, format)?;
    let width = dimension(document, "width")?;
    let height = dimension(document, "height")?;

    let mut image = allocate(width, height)?;
    let mut skipped = 0usize;

    for record in records {
        match read_record(record, format) {
            Some(Pixel { x, y, rgba }) if x < width && y < height => {
                image.put_pixel(x, y, Rgba(rgba));
            }
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!(
            "skipped {} of {} records that could not be painted",
            skipped,
            records.len()
        );
    }
    debug!(
        "decoded {}x{} image from {} {:?} records",
        width,
        height,
        records.len() - skipped,
        format
    );

    Ok(image)
}

/// Allocate a transparent black buffer, refusing grids larger than the
/// `image` crate's default allocation limit.
fn allocate(width: u32, height: u32) -> Result<RgbaImage, DecodeError> {
    let too_large = || DecodeError::InvalidDimensions {
        width: width.into(),
        height: height.into(),
    };

    let max_alloc = Limits::default().max_alloc.unwrap_or(u64::MAX);
    let bytes = u64::from(width) * u64::from(height) * 4;
    if bytes > max_alloc {
        return Err(too_large());
    }
    let len = usize::try_from(bytes).map_err(|_| too_large())?;

    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len).map_err(|_| too_large())?;
    buffer.resize(len, 0u8);

    RgbaImage::from_raw(width, height, buffer).ok_or_else(too_large)
}

/// Read a positive `u32` dimension from the document.
fn dimension(document: &Value, key: &str) -> Result<u32, DecodeError> {
    document
        .get(key)
        .and_then(as_integer)
        .filter(|&v| v > 0)
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| DecodeError::InvalidDocument(format!("`{key}` must be a positive integer")))
}

/// Extract coordinate and color from one record.
///
/// Negative coordinates come back as `None`; channels are clamped to 0-255.
/// Grid bounds are left to the caller.
pub(crate) fn read_record(record: &Value, format: JifFormat) -> Option<Pixel> {
    let ([x, y], [r, g, b, a]) = match format {
        JifFormat::Compact => (
            parse_coordinate(record.get("p")?.as_str()?)?,
            parse_color(record.get("c")?.as_str()?)?,
        ),
        JifFormat::Expanded => {
            let field = |key: &str| record.get(key).and_then(as_integer);
            (
                [field("x")?, field("y")?],
                [field("r")?, field("g")?, field("b")?, field("a")?],
            )
        }
    };

    Some(Pixel::new(
        u32::try_from(x).ok()?,
        u32::try_from(y).ok()?,
        [clamp_channel(r), clamp_channel(g), clamp_channel(b), clamp_channel(a)],
    ))
}

/// Integer value of a JSON number, accepting floats with no fractional part.
fn as_integer(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

#[inline]
fn clamp_channel(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_compact() {
        let text = br#"{"width":2,"height":1,"pixels":[{"p":"0,0","c":"255,0,0,255"},{"p":"1,0","c":"0,255,0,255"}]}"#;
        let img = decode_jif(text, JifFormat::Compact).unwrap();

        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [0, 255, 0, 255]);
    }

    #[test]
    fn test_decode_expanded() {
        let doc = json!({
            "width": 2, "height": 2,
            "pixels": [
                {"x": 1, "y": 1, "r": 9, "g": 8, "b": 7, "a": 6},
                {"x": 0, "y": 1, "r": 0, "g": 0, "b": 0, "a": 255}
            ]
        });
        let img = decode_value(&doc, JifFormat::Expanded).unwrap();

        assert_eq!(img.get_pixel(1, 1).0, [9, 8, 7, 6]);
        assert_eq!(img.get_pixel(0, 1).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_last_write_wins() {
        let doc = json!({
            "width": 1, "height": 1,
            "pixels": [
                {"p": "0,0", "c": "255,0,0,255"},
                {"p": "0,0", "c": "0,0,255,128"}
            ]
        });
        let img = decode_value(&doc, JifFormat::Compact).unwrap();
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 255, 128]);
    }

    #[test]
    fn test_missing_coordinates_stay_transparent() {
        let doc = json!({
            "width": 2, "height": 2,
            "pixels": [{"p": "1,1", "c": "5,5,5,5"}]
        });
        let img = decode_value(&doc, JifFormat::Compact).unwrap();

        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(1, 1).0, [5, 5, 5, 5]);
    }

    #[test]
    fn test_record_order_does_not_matter() {
        let forward = json!({
            "width": 2, "height": 1,
            "pixels": [{"p": "0,0", "c": "1,1,1,1"}, {"p": "1,0", "c": "2,2,2,2"}]
        });
        let reversed = json!({
            "width": 2, "height": 1,
            "pixels": [{"p": "1,0", "c": "2,2,2,2"}, {"p": "0,0", "c": "1,1,1,1"}]
        });
        assert_eq!(
            decode_value(&forward, JifFormat::Compact).unwrap(),
            decode_value(&reversed, JifFormat::Compact).unwrap()
        );
    }

    #[test]
    fn test_unreadable_records_are_skipped() {
        let doc = json!({
            "width": 2, "height": 2,
            "pixels": [
                {"p": "9,9", "c": "1,1,1,1"},
                {"p": "-1,0", "c": "1,1,1,1"},
                {"p": "0", "c": "1,1,1,1"},
                {"p": "0,1", "c": "1,1"},
                {"q": "1,0"},
                null,
                {"p": "1,1", "c": "7,7,7,7"}
            ]
        });
        let img = decode_value(&doc, JifFormat::Compact).unwrap();

        assert_eq!(img.get_pixel(1, 1).0, [7, 7, 7, 7]);
        assert_eq!(img.get_pixel(0, 1).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_channels_are_clamped() {
        let doc = json!({
            "width": 2, "height": 2,
            "pixels": [{"x": 1, "y": 1, "r": 300, "g": -5, "b": 10, "a": 255}]
        });
        let img = decode_value(&doc, JifFormat::Expanded).unwrap();
        assert_eq!(img.get_pixel(1, 1).0, [255, 0, 10, 255]);
    }

    #[test]
    fn test_integral_floats_accepted() {
        let doc = json!({
            "width": 2.0, "height": 2,
            "pixels": [{"x": 1.0, "y": 1, "r": 3.0, "g": 4, "b": 5, "a": 6}]
        });
        let img = decode_value(&doc, JifFormat::Expanded).unwrap();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get_pixel(1, 1).0, [3, 4, 5, 6]);
    }

    #[test]
    fn test_bad_dimensions() {
        let doc = json!({"width": "wide", "height": 1, "pixels": [{"p": "0,0", "c": "1,1,1,1"}]});
        assert!(matches!(
            decode_value(&doc, JifFormat::Compact),
            Err(DecodeError::InvalidDocument(_))
        ));

        let doc = json!({"width": -3, "height": 1, "pixels": [{"p": "0,0", "c": "1,1,1,1"}]});
        assert!(decode_value(&doc, JifFormat::Compact).is_err());

        let doc = json!({"width": 1.5, "height": 1, "pixels": [{"p": "0,0", "c": "1,1,1,1"}]});
        assert!(decode_value(&doc, JifFormat::Compact).is_err());

        let doc = json!({"width": 5_000_000_000u64, "height": 1, "pixels": [{"p": "0,0", "c": "1,1,1,1"}]});
        assert!(decode_value(&doc, JifFormat::Compact).is_err());
    }

    #[test]
    fn test_oversized_grid_is_rejected_without_allocating() {
        let text = br#"{"width":4294967295,"height":1,"pixels":[{"p":"1,0","c":"1,1,1,1"}]}"#;
        let result = decode_jif(text, JifFormat::Compact);
        assert!(matches!(
            result,
            Err(DecodeError::InvalidDimensions {
                width: 4_294_967_295,
                height: 1
            })
        ));

        let doc = json!({"width": 65536, "height": 65536, "pixels": [{"p": "1,1", "c": "1,1,1,1"}]});
        let err = decode_value(&doc, JifFormat::Compact).unwrap_err();
        assert!(err.is_invalid_document());
    }

    #[test]
    fn test_read_record_clamps_and_rejects() {
        let record = json!({"p": "1,0", "c": "300,1,1,1"});
        assert_eq!(
            read_record(&record, JifFormat::Compact),
            Some(Pixel::new(1, 0, [255, 1, 1, 1]))
        );

        let record = json!({"p": "-1,0", "c": "1,1,1,1"});
        assert_eq!(read_record(&record, JifFormat::Compact), None);

        let record = json!({"x": 2, "y": 3, "r": -4, "g": 5, "b": 6, "a": 999});
        assert_eq!(
            read_record(&record, JifFormat::Expanded),
            Some(Pixel::new(2, 3, [0, 5, 6, 255]))
        );
    }

    #[test]
    fn test_not_json() {
        let result = decode_jif(b"this is not json", JifFormat::Compact);
        assert!(matches!(result, Err(DecodeError::InvalidDocument(_))));

        let result = decode_jif(&[0xFF, 0xFE, 0x00], JifFormat::Compact);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_mismatch() {
        let compact = br#"{"width":1,"height":1,"pixels":[{"p":"0,0","c":"1,2,3,4"}]}"#;
        assert!(decode_jif(compact, JifFormat::Expanded).is_err());

        let expanded = br#"{"width":2,"height":2,"pixels":[{"x":1,"y":1,"r":1,"g":2,"b":3,"a":4}]}"#;
        assert!(decode_jif(expanded, JifFormat::Compact).is_err());
    }
}
