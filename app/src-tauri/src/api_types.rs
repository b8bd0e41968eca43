//! FILENAME: app/src-tauri/src/api_types.rs
// PURPOSE: Shared type definitions for Tauri API communication.
// CONTEXT: All structs use camelCase serialization for JavaScript interoperability.

use converter::ConvertError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fallback text when a failure carries no message of its own.
pub const CONVERSION_FAILED: &str = "conversion failed";

/// Outcome of one conversion request, returned to the frontend.
/// Exactly one of `output_path` / `message` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ConversionResult {
    pub fn converted(output_path: impl Into<String>) -> Self {
        ConversionResult {
            success: true,
            output_path: Some(output_path.into()),
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        let message = message.into();
        ConversionResult {
            success: false,
            output_path: None,
            message: Some(if message.is_empty() {
                CONVERSION_FAILED.to_string()
            } else {
                message
            }),
        }
    }
}

impl From<Result<PathBuf, ConvertError>> for ConversionResult {
    fn from(result: Result<PathBuf, ConvertError>) -> Self {
        match result {
            Ok(path) => ConversionResult::converted(path.to_string_lossy()),
            Err(e) => ConversionResult::failed(e.to_string()),
        }
    }
}

/// Relative window move requested while dragging the custom title bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragDelta {
    pub delta_x: i32,
    pub delta_y: i32,
}

/// A file dropped onto the window. The UI only ever sees the handle and the
/// display name; `get_file_path` resolves the handle on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DroppedFile {
    pub handle: u64,
    pub name: String,
}
