//! FILENAME: app/src-tauri/src/convert.rs
// PURPOSE: The conversion request handler exposed to the UI.

use crate::api_types::ConversionResult;
use crate::{log_enter_info, log_error, log_exit_info};
use std::path::PathBuf;

/// Validate, convert and write `path` off the event loop.
///
/// Every failure, including a panic inside the worker, is reported as a
/// `success: false` result; nothing here can take the host process down.
pub async fn handle_conversion(path: String) -> ConversionResult {
    log_enter_info!("CONV", "convert_png_to_ico", "path={}", path);

    let source = PathBuf::from(&path);
    let outcome = tokio::task::spawn_blocking(move || converter::convert_file(&source)).await;

    let result = match outcome {
        Ok(result) => ConversionResult::from(result),
        Err(join_error) => {
            log_error!("CONV", "conversion worker failed: {}", join_error);
            ConversionResult::failed("")
        }
    };

    match (&result.output_path, &result.message) {
        (Some(out), _) => log_exit_info!("CONV", "convert_png_to_ico", "ok {}", out),
        (None, Some(msg)) => log_exit_info!("CONV", "convert_png_to_ico", "failed: {}", msg),
        (None, None) => log_exit_info!("CONV", "convert_png_to_ico"),
    }
    result
}

#[tauri::command]
pub async fn convert_png_to_ico(path: String) -> ConversionResult {
    handle_conversion(path).await
}
