//! The JIF record shape selector.

/// File suffix of JIF documents, including the dot.
pub const JIF_SUFFIX: &str = ".jif";

/// File suffix of PNG images, including the dot.
pub const PNG_SUFFIX: &str = ".png";

/// Record shape used by a whole JIF document.
///
/// The format is not stored in the document itself, so the same value must
/// be used to encode and to decode a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JifFormat {
    /// `{"p": "x,y", "c": "r,g,b,a"}` records, minified JSON.
    #[default]
    Compact,
    /// `{"x", "y", "r", "g", "b", "a"}` integer records, pretty-printed JSON.
    Expanded,
}

impl JifFormat {
    /// Pick the format from the `--expanded` flag.
    pub fn from_expanded(expanded: bool) -> Self {
        if expanded {
            JifFormat::Expanded
        } else {
            JifFormat::Compact
        }
    }

    /// Whether documents in this format are written with indentation.
    #[inline]
    pub fn is_pretty(self) -> bool {
        matches!(self, JifFormat::Expanded)
    }

    /// Record keys that must all be present for a record of this format.
    pub fn record_keys(self) -> &'static [&'static str] {
        match self {
            JifFormat::Compact => &["p", "c"],
            JifFormat::Expanded => &["x", "y", "r", "g", "b", "a"],
        }
    }
}
