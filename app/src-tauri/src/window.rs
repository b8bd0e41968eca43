//! FILENAME: app/src-tauri/src/window.rs
// PURPOSE: Window-control commands and the maximize-state broadcast.
// CONTEXT: Commands reach the native window only through the WindowControl
// trait held by the MainWindow singleton; the UI never gets a window handle.

use crate::api_types::DragDelta;
use crate::{log_debug, log_warn};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex};
use tauri::{AppHandle, PhysicalPosition, Runtime, State, WebviewWindow};

/// Event carrying the new maximize state (bool) to the UI.
pub const MAXIMIZED_CHANGE_EVENT: &str = "window-maximized-change";

// ============================================================================
// WINDOW CAPABILITY
// ============================================================================

/// The privileged window operations the bridge is allowed to perform.
pub trait WindowControl: Send + Sync {
    fn minimize(&self) -> Result<(), String>;
    fn maximize(&self) -> Result<(), String>;
    fn unmaximize(&self) -> Result<(), String>;
    fn is_maximized(&self) -> Result<bool, String>;
    fn close(&self) -> Result<(), String>;
    fn outer_position(&self) -> Result<(i32, i32), String>;
    fn set_position(&self, x: i32, y: i32) -> Result<(), String>;
}

impl<R: Runtime> WindowControl for WebviewWindow<R> {
    fn minimize(&self) -> Result<(), String> {
        WebviewWindow::minimize(self).map_err(|e| e.to_string())
    }

    fn maximize(&self) -> Result<(), String> {
        WebviewWindow::maximize(self).map_err(|e| e.to_string())
    }

    fn unmaximize(&self) -> Result<(), String> {
        WebviewWindow::unmaximize(self).map_err(|e| e.to_string())
    }

    fn is_maximized(&self) -> Result<bool, String> {
        WebviewWindow::is_maximized(self).map_err(|e| e.to_string())
    }

    fn close(&self) -> Result<(), String> {
        WebviewWindow::close(self).map_err(|e| e.to_string())
    }

    fn outer_position(&self) -> Result<(i32, i32), String> {
        let pos = WebviewWindow::outer_position(self).map_err(|e| e.to_string())?;
        Ok((pos.x, pos.y))
    }

    fn set_position(&self, x: i32, y: i32) -> Result<(), String> {
        WebviewWindow::set_position(self, PhysicalPosition::new(x, y)).map_err(|e| e.to_string())
    }
}

// ============================================================================
// MAIN WINDOW SINGLETON
// ============================================================================

/// Process-wide handle to the single top-level window.
///
/// Installed once the window is built and released when it is destroyed.
/// Operations on a released handle are no-ops.
#[derive(Default)]
pub struct MainWindow {
    handle: Mutex<Option<Arc<dyn WindowControl>>>,
}

impl MainWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install(&self, window: Arc<dyn WindowControl>) {
        if let Ok(mut guard) = self.handle.lock() {
            *guard = Some(window);
        }
    }

    pub fn release(&self) {
        if let Ok(mut guard) = self.handle.lock() {
            guard.take();
        }
    }

    pub fn is_installed(&self) -> bool {
        self.get().is_some()
    }

    /// Clone the handle out so the lock is never held across a native call.
    fn get(&self) -> Option<Arc<dyn WindowControl>> {
        self.handle.lock().ok().and_then(|guard| guard.clone())
    }

    pub fn minimize(&self) -> Result<(), String> {
        match self.get() {
            Some(window) => window.minimize(),
            None => Ok(()),
        }
    }

    /// Maximize when restored, restore when maximized.
    pub fn toggle_maximize(&self) -> Result<(), String> {
        let Some(window) = self.get() else {
            return Ok(());
        };
        if window.is_maximized()? {
            window.unmaximize()
        } else {
            window.maximize()
        }
    }

    pub fn close(&self) -> Result<(), String> {
        match self.get() {
            Some(window) => window.close(),
            None => Ok(()),
        }
    }

    pub fn drag_by(&self, delta: DragDelta) -> Result<(), String> {
        let Some(window) = self.get() else {
            return Ok(());
        };
        let (x, y) = window.outer_position()?;
        window.set_position(x.saturating_add(delta.delta_x), y.saturating_add(delta.delta_y))
    }

    /// Current native maximize state; `false` when no window is installed.
    pub fn is_maximized(&self) -> bool {
        match self.get() {
            Some(window) => window.is_maximized().unwrap_or_else(|e| {
                log_warn!("WIN", "is_maximized failed: {}", e);
                false
            }),
            None => false,
        }
    }
}

// ============================================================================
// MAXIMIZE TRACKER
// ============================================================================

const STATE_UNKNOWN: u8 = 0;
const STATE_RESTORED: u8 = 1;
const STATE_MAXIMIZED: u8 = 2;

/// Remembers the last maximize state sent to the UI so resize events only
/// produce a notification when the state actually flips.
pub struct MaximizeTracker {
    last: AtomicU8,
}

impl MaximizeTracker {
    pub fn new() -> Self {
        MaximizeTracker {
            last: AtomicU8::new(STATE_UNKNOWN),
        }
    }

    /// Record the initial state without reporting it.
    pub fn prime(&self, maximized: bool) {
        self.last.store(encode_state(maximized), Ordering::SeqCst);
    }

    /// Feed the state observed after a resize. Returns the new state on a
    /// transition, `None` otherwise.
    pub fn observe(&self, maximized: bool) -> Option<bool> {
        let next = encode_state(maximized);
        let prev = self.last.swap(next, Ordering::SeqCst);
        (prev != next).then_some(maximized)
    }

    pub fn reset(&self) {
        self.last.store(STATE_UNKNOWN, Ordering::SeqCst);
    }
}

impl Default for MaximizeTracker {
    fn default() -> Self {
        Self::new()
    }
}

fn encode_state(maximized: bool) -> u8 {
    if maximized {
        STATE_MAXIMIZED
    } else {
        STATE_RESTORED
    }
}

// ============================================================================
// TAURI COMMANDS
// ============================================================================

#[tauri::command]
pub fn minimize_window(main_window: State<MainWindow>) {
    if let Err(e) = main_window.minimize() {
        log_warn!("WIN", "minimize failed: {}", e);
    }
}

#[tauri::command]
pub fn maximize_window(main_window: State<MainWindow>) {
    if let Err(e) = main_window.toggle_maximize() {
        log_warn!("WIN", "toggle maximize failed: {}", e);
    }
}

#[tauri::command]
pub fn close_window(main_window: State<MainWindow>) {
    log_debug!("WIN", "close_window");
    if let Err(e) = main_window.close() {
        log_warn!("WIN", "close failed: {}", e);
    }
}

/// Quit the whole application.
#[tauri::command]
pub fn close_app(app: AppHandle) {
    log_debug!("WIN", "close_app");
    app.exit(0);
}

#[tauri::command]
pub fn drag_window(main_window: State<MainWindow>, delta_x: i32, delta_y: i32) {
    if let Err(e) = main_window.drag_by(DragDelta { delta_x, delta_y }) {
        log_warn!("WIN", "drag failed: {}", e);
    }
}

#[tauri::command]
pub fn is_window_maximized(main_window: State<MainWindow>) -> bool {
    main_window.is_maximized()
}
