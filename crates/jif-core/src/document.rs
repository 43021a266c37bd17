//! JIF document types.
//!
//! A JIF document stores an image as its dimensions plus one record per
//! pixel. Records come in two shapes selected by [`JifFormat`]; a document
//! never mixes them.

use serde::Serialize;

use crate::format::JifFormat;

/// A complete JIF document as produced by the encoder.
///
/// Field order matters for byte-exact output: `width`, `height`, `pixels`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JifDocument {
    /// Pixel grid width.
    pub width: u32,
    /// Pixel grid height.
    pub height: u32,
    /// One record per pixel, in encoder traversal order.
    pub pixels: Vec<PixelRecord>,
}

impl JifDocument {
    /// Create an empty document for a grid of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: Vec::with_capacity(width as usize * height as usize),
        }
    }

    /// Number of records in the document.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the document holds no records.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Serialize the document, minified for compact and indented for expanded.
    pub fn to_json(&self, format: JifFormat) -> serde_json::Result<String> {
        if format.is_pretty() {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// One entry of the `pixels` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PixelRecord {
    /// `p` is `"x,y"`, `c` is `"r,g,b,a"`.
    Compact { p: String, c: String },
    /// Every coordinate and channel as its own integer field.
    Expanded {
        x: u32,
        y: u32,
        r: u8,
        g: u8,
        b: u8,
        a: u8,
    },
}

impl PixelRecord {
    /// The format this record belongs to.
    pub fn format(&self) -> JifFormat {
        match self {
            PixelRecord::Compact { .. } => JifFormat::Compact,
            PixelRecord::Expanded { .. } => JifFormat::Expanded,
        }
    }
}

/// A coordinate and its RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    /// Zero-based column.
    pub x: u32,
    /// Zero-based row.
    pub y: u32,
    /// Red, green, blue and alpha, 0-255 each.
    pub rgba: [u8; 4],
}

impl Pixel {
    /// Create a pixel at `(x, y)` with the given color.
    pub fn new(x: u32, y: u32, rgba: [u8; 4]) -> Self {
        Self { x, y, rgba }
    }

    /// Build the record for this pixel in the given format.
    pub fn to_record(self, format: JifFormat) -> PixelRecord {
        let [r, g, b, a] = self.rgba;
        match format {
            JifFormat::Compact => PixelRecord::Compact {
                p: format!("{},{}", self.x, self.y),
                c: format!("{},{},{},{}", r, g, b, a),
            },
            JifFormat::Expanded => PixelRecord::Expanded {
                x: self.x,
                y: self.y,
                r,
                g,
                b,
                a,
            },
        }
    }
}

/// Parse a leading base-10 integer, ignoring leading whitespace and any
/// trailing garbage (`" 12px"` is 12). Returns `None` when no digit is found.
pub(crate) fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Split `"x,y"` into its first two integers.
pub(crate) fn parse_coordinate(p: &str) -> Option<[i64; 2]> {
    let mut parts = p.split(',');
    Some([
        parse_leading_int(parts.next()?)?,
        parse_leading_int(parts.next()?)?,
    ])
}

/// Split `"r,g,b,a"` into its first four integers.
pub(crate) fn parse_color(c: &str) -> Option<[i64; 4]> {
    let mut parts = c.split(',');
    let mut out = [0i64; 4];
    for slot in &mut out {
        *slot = parse_leading_int(parts.next()?)?;
    }
    Some(out)
}
