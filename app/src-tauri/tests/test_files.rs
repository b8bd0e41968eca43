//! FILENAME: tests/test_files.rs
//! Integration tests for dropped-file handles and the native picker result.

mod common;

use common::Workspace;
use icoconv_lib::files::await_picked;
use icoconv_lib::{handle_conversion, DroppedFiles};
use std::path::PathBuf;
use tauri_plugin_dialog::FilePath;
use tokio::sync::oneshot;

#[test]
fn test_register_assigns_increasing_handles() {
    let files = DroppedFiles::new();

    let a = files.register(PathBuf::from("/tmp/a.png"));
    let b = files.register(PathBuf::from("/tmp/b.png"));

    assert_eq!(a.handle, 1);
    assert_eq!(b.handle, 2);
    assert_eq!(a.name, "a.png");
    assert_eq!(files.len(), 2);
}

#[test]
fn test_resolve_known_and_unknown() {
    let files = DroppedFiles::new();
    let dropped = files.register(PathBuf::from("/tmp/icon.png"));

    assert_eq!(files.resolve(dropped.handle), Some(PathBuf::from("/tmp/icon.png")));
    assert_eq!(files.resolve(999), None);
}

#[test]
fn test_clear_does_not_reuse_handles() {
    let files = DroppedFiles::new();
    let first = files.register(PathBuf::from("/tmp/a.png"));
    files.clear();

    assert!(files.is_empty());
    assert_eq!(files.resolve(first.handle), None);
    let next = files.register(PathBuf::from("/tmp/b.png"));
    assert!(next.handle > first.handle);
}

#[test]
fn test_dropped_file_serializes_without_path() {
    let files = DroppedFiles::new();
    let dropped = files.register(PathBuf::from("/secret/dir/icon.png"));

    let json = serde_json::to_value(&dropped).unwrap();

    assert_eq!(json, serde_json::json!({ "handle": 1, "name": "icon.png" }));
}

#[tokio::test]
async fn test_drop_resolve_convert() {
    let ws = Workspace::new();
    let source = ws.png("dropped.png", 32, 32);
    let files = DroppedFiles::new();

    let dropped = files.register_all(vec![source.clone()]);
    let path = files.resolve(dropped[0].handle).unwrap();
    let result = handle_conversion(path.to_string_lossy().into_owned()).await;

    assert!(result.success);
    assert!(ws.path("dropped.ico").exists());
}

// ============================================================================
// NATIVE PICKER RESULT
// ============================================================================

#[tokio::test]
async fn test_picked_path_is_returned() {
    let (tx, rx) = oneshot::channel();
    tx.send(Some(FilePath::Path(PathBuf::from("/tmp/chosen.png")))).unwrap();

    assert_eq!(await_picked(rx).await, Ok(Some("/tmp/chosen.png".to_string())));
}

#[tokio::test]
async fn test_cancelled_pick_is_none() {
    let (tx, rx) = oneshot::channel();
    tx.send(None).unwrap();

    assert_eq!(await_picked(rx).await, Ok(None));
}

#[tokio::test]
async fn test_dialog_dropped_without_answer_is_none() {
    let (tx, rx) = oneshot::channel::<Option<FilePath>>();
    drop(tx);

    assert_eq!(await_picked(rx).await, Ok(None));
}

#[tokio::test]
async fn test_pick_waits_for_the_dialog_callback() {
    let (tx, rx) = oneshot::channel();
    let pending = tokio::spawn(await_picked(rx));

    tokio::task::yield_now().await;
    assert!(!pending.is_finished());
    tx.send(Some(FilePath::Path(PathBuf::from("/tmp/late.png")))).unwrap();

    assert_eq!(pending.await.unwrap(), Ok(Some("/tmp/late.png".to_string())));
}
