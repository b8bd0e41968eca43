//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for ICO Converter backend integration tests.

#![allow(dead_code)]

use icoconv_lib::{MainWindow, WindowControl};
use image::{ImageFormat, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tempfile::TempDir;

// ============================================================================
// FAKE WINDOW
// ============================================================================

/// In-memory stand-in for the native window.
#[derive(Debug, Default)]
pub struct FakeWindow {
    pub state: Mutex<FakeWindowState>,
}

#[derive(Debug, Default, Clone)]
pub struct FakeWindowState {
    pub maximized: bool,
    pub minimized: bool,
    pub closed: bool,
    pub position: (i32, i32),
    pub calls: Vec<&'static str>,
}

impl FakeWindow {
    pub fn at(x: i32, y: i32) -> Arc<Self> {
        let window = FakeWindow::default();
        window.state.lock().unwrap().position = (x, y);
        Arc::new(window)
    }

    pub fn snapshot(&self) -> FakeWindowState {
        self.state.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) -> MutexGuard<'_, FakeWindowState> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        state
    }
}

impl WindowControl for FakeWindow {
    fn minimize(&self) -> Result<(), String> {
        self.record("minimize").minimized = true;
        Ok(())
    }

    fn maximize(&self) -> Result<(), String> {
        self.record("maximize").maximized = true;
        Ok(())
    }

    fn unmaximize(&self) -> Result<(), String> {
        self.record("unmaximize").maximized = false;
        Ok(())
    }

    fn is_maximized(&self) -> Result<bool, String> {
        Ok(self.state.lock().unwrap().maximized)
    }

    fn close(&self) -> Result<(), String> {
        self.record("close").closed = true;
        Ok(())
    }

    fn outer_position(&self) -> Result<(i32, i32), String> {
        Ok(self.state.lock().unwrap().position)
    }

    fn set_position(&self, x: i32, y: i32) -> Result<(), String> {
        self.record("set_position").position = (x, y);
        Ok(())
    }
}

/// A `MainWindow` with a fake window already installed.
pub fn installed_window(x: i32, y: i32) -> (MainWindow, Arc<FakeWindow>) {
    let fake = FakeWindow::at(x, y);
    let main_window = MainWindow::new();
    main_window.install(fake.clone());
    (main_window, fake)
}

// ============================================================================
// FILE FIXTURES
// ============================================================================

/// Temporary directory holding conversion inputs and outputs.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Workspace { dir: tempfile::tempdir().unwrap() }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a solid-color PNG of the given size.
    pub fn png(&self, name: &str, width: u32, height: u32) -> PathBuf {
        let path = self.path(name);
        RgbaImage::from_pixel(width, height, Rgba([37, 99, 235, 255]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();
        path
    }

    pub fn file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

pub fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
