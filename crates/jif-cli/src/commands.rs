//! File-level encode and decode commands.
//!
//! Each command checks the input path, reads it, runs the codec, and writes
//! the result. Nothing is written unless every earlier step succeeded.

use std::fs;
use std::path::{Path, PathBuf};

use jif_core::paths::{has_suffix, swap_extension};
use jif_core::{decode_jif, decode_png, encode_jif, encode_png, JifFormat, JIF_SUFFIX, PNG_SUFFIX};
use log::{debug, info};

use crate::error::CliError;

/// Convert a PNG file to JIF.
///
/// Writes to `output`, or next to `input` with a `.jif` extension, and
/// returns the path written.
pub fn encode_file(
    input: &Path,
    output: Option<&Path>,
    format: JifFormat,
) -> Result<PathBuf, CliError> {
    check_input(input, PNG_SUFFIX, CliError::NotPng)?;

    let bytes = read(input)?;
    let image = decode_png(&bytes)?;
    let text = encode_jif(&image, format)?;

    let out = output_path(input, output, "jif");
    write(&out, text.as_bytes())?;
    info!(
        "encoded {} ({}x{}) as {:?} JIF, {} bytes",
        input.display(),
        image.width(),
        image.height(),
        format,
        text.len()
    );
    Ok(out)
}

/// Convert a JIF file to PNG.
///
/// `format` must match the one the file was written with. Writes to
/// `output`, or next to `input` with a `.png` extension, and returns the
/// path written.
pub fn decode_file(
    input: &Path,
    output: Option<&Path>,
    format: JifFormat,
) -> Result<PathBuf, CliError> {
    check_input(input, JIF_SUFFIX, CliError::NotJif)?;

    let bytes = read(input)?;
    let image = decode_jif(&bytes, format).map_err(|e| {
        if e.is_invalid_document() {
            debug!("{}: {}", input.display(), e);
            CliError::InvalidJif(input.to_path_buf())
        } else {
            e.into()
        }
    })?;
    let png = encode_png(&image)?;

    let out = output_path(input, output, "png");
    write(&out, &png)?;
    info!(
        "decoded {} into {}x{} PNG, {} bytes",
        input.display(),
        image.width(),
        image.height(),
        png.len()
    );
    Ok(out)
}

/// Existence first, then the filename suffix. Contents are not inspected.
fn check_input(
    input: &Path,
    suffix: &str,
    wrong_suffix: fn(PathBuf) -> CliError,
) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::NotFound(input.to_path_buf()));
    }
    if !has_suffix(input, suffix) {
        return Err(wrong_suffix(input.to_path_buf()));
    }
    Ok(())
}

fn output_path(input: &Path, output: Option<&Path>, ext: &str) -> PathBuf {
    output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| swap_extension(input, ext))
}

fn read(path: &Path) -> Result<Vec<u8>, CliError> {
    fs::read(path).map_err(|source| CliError::Io {
        action: "read",
        path: path.to_path_buf(),
        source,
    })
}

fn write(path: &Path, contents: &[u8]) -> Result<(), CliError> {
    fs::write(path, contents).map_err(|source| CliError::Io {
        action: "write",
        path: path.to_path_buf(),
        source,
    })
}
