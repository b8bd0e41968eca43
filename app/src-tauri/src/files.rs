//! FILENAME: app/src-tauri/src/files.rs
// PURPOSE: Opaque handles for files the user dropped or picked.
// CONTEXT: The UI receives handles, never raw paths; get_file_path resolves
// a handle to the on-disk path right before conversion.

use crate::api_types::DroppedFile;
use crate::{log_debug, log_info};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tauri::{AppHandle, State};
use tauri_plugin_dialog::{DialogExt, FilePath};
use tokio::sync::oneshot;

/// Event carrying `Vec<DroppedFile>` after a native drop.
pub const FILES_DROPPED_EVENT: &str = "files-dropped";

pub struct DroppedFiles {
    next_handle: AtomicU64,
    paths: Mutex<HashMap<u64, PathBuf>>,
}

impl DroppedFiles {
    pub fn new() -> Self {
        DroppedFiles {
            next_handle: AtomicU64::new(1),
            paths: Mutex::new(HashMap::new()),
        }
    }

    pub fn register(&self, path: PathBuf) -> DroppedFile {
        let handle = self.next_handle.fetch_add(1, Ordering::SeqCst);
        let name = display_name(&path);
        if let Ok(mut paths) = self.paths.lock() {
            paths.insert(handle, path);
        }
        DroppedFile { handle, name }
    }

    pub fn register_all(&self, paths: impl IntoIterator<Item = PathBuf>) -> Vec<DroppedFile> {
        paths.into_iter().map(|p| self.register(p)).collect()
    }

    pub fn resolve(&self, handle: u64) -> Option<PathBuf> {
        self.paths.lock().ok().and_then(|paths| paths.get(&handle).cloned())
    }

    pub fn len(&self) -> usize {
        self.paths.lock().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every registration. Handles are not reused afterwards.
    pub fn clear(&self) {
        if let Ok(mut paths) = self.paths.lock() {
            paths.clear();
        }
    }
}

impl Default for DroppedFiles {
    fn default() -> Self {
        Self::new()
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

// ============================================================================
// TAURI COMMANDS
// ============================================================================

/// Resolve a dropped-file handle to its local path.
#[tauri::command]
pub fn get_file_path(files: State<DroppedFiles>, handle: u64) -> Result<String, String> {
    files
        .resolve(handle)
        .map(|p| p.to_string_lossy().into_owned())
        .ok_or_else(|| format!("Unknown file handle: {}", handle))
}

/// Turn the dialog's answer into the command result.
///
/// A closed channel (the dialog went away without answering) counts as a
/// cancel.
pub async fn await_picked(
    rx: oneshot::Receiver<Option<FilePath>>,
) -> Result<Option<String>, String> {
    let Ok(Some(file_path)) = rx.await else {
        return Ok(None);
    };
    let path = file_path.into_path().map_err(|e| e.to_string())?;
    log_info!("FILE", "picked {}", path.display());
    Ok(Some(path.to_string_lossy().into_owned()))
}

/// Show a native open dialog restricted to PNG files.
/// Returns `None` when the user cancels.
#[tauri::command]
pub async fn pick_png_file(app: AppHandle) -> Result<Option<String>, String> {
    log_debug!("FILE", "pick_png_file");
    let (tx, rx) = oneshot::channel();
    app.dialog()
        .file()
        .set_title("Select a PNG file")
        .add_filter("PNG image", &[converter::PNG_EXTENSION])
        .pick_file(move |picked| {
            let _ = tx.send(picked);
        });

    await_picked(rx).await
}
