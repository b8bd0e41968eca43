//! FILENAME: core/converter/src/path.rs
//! PURPOSE: Source path validation and output path computation.

use crate::ConvertError;
use std::path::{Path, PathBuf};

pub const PNG_EXTENSION: &str = "png";
pub const ICO_EXTENSION: &str = "ico";
const PNG_SUFFIX: &str = ".png";

/// Case-insensitive check for a trailing `.png`.
///
/// Matches on the raw path bytes rather than `Path::extension` so that a bare
/// `.png` file name is treated the same way as `icon.png`.
pub fn is_png_path(path: &Path) -> bool {
    let bytes = path.as_os_str().as_encoded_bytes();
    let suffix = PNG_SUFFIX.as_bytes();
    bytes.len() >= suffix.len() && bytes[bytes.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

pub fn validate_png_path(path: &Path) -> Result<&Path, ConvertError> {
    if is_png_path(path) {
        Ok(path)
    } else {
        Err(ConvertError::Validation)
    }
}

/// Sibling path with the `.png` suffix replaced by `.ico`.
///
/// `/tmp/icon.png` becomes `/tmp/icon.ico`; `/tmp/ICON.PNG` becomes
/// `/tmp/ICON.ico`. Callers validate first; a path without the suffix simply
/// gets `.ico` appended.
pub fn ico_output_path(path: &Path) -> PathBuf {
    let has_png_extension = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PNG_EXTENSION));

    if has_png_extension {
        path.with_extension(ICO_EXTENSION)
    } else if is_png_path(path) {
        // Bare ".png" file name: Path sees it as a stem with no extension.
        path.with_file_name(format!(".{}", ICO_EXTENSION))
    } else {
        let mut raw = path.as_os_str().to_owned();
        raw.push(".");
        raw.push(ICO_EXTENSION);
        PathBuf::from(raw)
    }
}
