//! FILENAME: core/converter/src/lib.rs
//! ICO Converter Core
//!
//! Validates a PNG path, encodes the image as a multi-resolution Windows icon
//! and writes it beside the source as `<stem>.ico`.

mod encoder;
mod error;
mod path;
mod writer;

pub use encoder::{encode_png_to_ico, IconSizes, DEFAULT_ICON_SIZES, MAX_ICON_EDGE};
pub use error::{ConvertError, NOT_PNG_MESSAGE};
pub use path::{ico_output_path, is_png_path, validate_png_path, ICO_EXTENSION, PNG_EXTENSION};
pub use writer::write_output;

use std::path::{Path, PathBuf};

/// Convert `source` into an icon with the default sizes.
///
/// Returns the path of the written `.ico`. Validation happens before any I/O,
/// so a non-PNG path never touches the file system.
pub fn convert_file(source: &Path) -> Result<PathBuf, ConvertError> {
    convert_file_with_sizes(source, &IconSizes::default())
}

pub fn convert_file_with_sizes(source: &Path, sizes: &IconSizes) -> Result<PathBuf, ConvertError> {
    let source = validate_png_path(source)?;
    let output = ico_output_path(source);

    let png_bytes = std::fs::read(source)?;
    let ico_bytes = encode_png_to_ico(&png_bytes, sizes)?;
    write_output(&output, &ico_bytes)?;

    log::info!(
        "converted {} -> {} ({} bytes)",
        source.display(),
        output.display(),
        ico_bytes.len()
    );
    Ok(output)
}
