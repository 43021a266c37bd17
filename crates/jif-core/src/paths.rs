//! Filename checks and default output naming.
//!
//! Both helpers work on the textual form of the path only; file contents
//! are never inspected.

use std::path::{Path, PathBuf};

/// Case-sensitive check that `path` ends with `suffix` (e.g. `".png"`).
pub fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.to_string_lossy().ends_with(suffix)
}

/// Replace a trailing extension of 2-4 ASCII letters with `new_ext`.
///
/// `new_ext` is given without the dot. Paths whose last extension does not
/// fit that shape are returned unchanged.
pub fn swap_extension(path: &Path, new_ext: &str) -> PathBuf {
    let Some(text) = path.to_str() else {
        return path.with_extension(new_ext);
    };

    match trailing_extension_start(text) {
        Some(dot) => PathBuf::from(format!("{}.{}", &text[..dot], new_ext)),
        None => path.to_path_buf(),
    }
}

/// Byte offset of the dot that starts a trailing `.[a-zA-Z]{2,4}` extension.
fn trailing_extension_start(text: &str) -> Option<usize> {
    let letters = text
        .bytes()
        .rev()
        .take_while(|b| b.is_ascii_alphabetic())
        .count()
        .min(4);

    (2..=letters).rev().find_map(|n| {
        let dot = text.len().checked_sub(n + 1)?;
        (text.as_bytes()[dot] == b'.').then_some(dot)
    })
}
