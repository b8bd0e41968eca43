//! FILENAME: core/converter/src/error.rs

use thiserror::Error;

/// Message shown when the selected file does not carry a `.png` extension.
pub const NOT_PNG_MESSAGE: &str = "please select a PNG file";

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("{}", NOT_PNG_MESSAGE)]
    Validation,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Icon encode error: {0}")]
    Encode(String),
}

impl ConvertError {
    /// True for errors raised before any file was touched.
    pub fn is_validation(&self) -> bool {
        matches!(self, ConvertError::Validation)
    }
}
