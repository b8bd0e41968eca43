//! FILENAME: app/src-tauri/src/lib.rs
// PURPOSE: Main library entry point (Tauri Bridge).
// CONTEXT: The host owns the window and the file system; the UI reaches them
// only through the commands registered in run().

use std::sync::Arc;
use tauri::webview::PageLoadEvent;
use tauri::{
    AppHandle, DragDropEvent, Emitter, Manager, WebviewWindow, WebviewWindowBuilder, WindowEvent,
};

pub mod api_types;
pub mod config;
pub mod convert;
pub mod files;
pub mod logging;
pub mod window;

pub use api_types::{ConversionResult, DragDelta, DroppedFile, CONVERSION_FAILED};
pub use config::{AppConfig, LoadSource};
pub use convert::handle_conversion;
pub use files::{DroppedFiles, FILES_DROPPED_EVENT};
pub use logging::{get_log_path, init_log_file, next_seq, write_log};
pub use window::{MainWindow, MaximizeTracker, WindowControl, MAXIMIZED_CHANGE_EVENT};


// ============================================================================
// MAIN WINDOW
// ============================================================================

/// Build the single top-level window described by `config`.
pub fn create_main_window(app: &AppHandle, config: &AppConfig) -> tauri::Result<WebviewWindow> {
    let mut builder =
        WebviewWindowBuilder::new(app, config.label, config.load_source.webview_url())
            .title(config.title)
            .inner_size(config.width, config.height)
            .min_inner_size(config.min_width, config.min_height);

    if config.hidden_title_bar {
        #[cfg(target_os = "macos")]
        {
            builder = builder
                .title_bar_style(tauri::TitleBarStyle::Overlay)
                .hidden_title(true);
        }
        #[cfg(not(target_os = "macos"))]
        {
            builder = builder.decorations(false);
        }
    }

    if config.show_on_load {
        builder = builder.visible(false).on_page_load(|window, payload| {
            if reveals_window(payload.event()) {
                if let Err(e) = window.show() {
                    log_warn!("WIN", "show failed: {}", e);
                }
            }
        });
    }

    let window = builder.build()?;

    #[cfg(debug_assertions)]
    if config.load_source.is_dev() {
        window.open_devtools();
    }

    Ok(window)
}

/// The window stays hidden until its first page has finished loading.
pub fn reveals_window(event: PageLoadEvent) -> bool {
    matches!(event, PageLoadEvent::Finished)
}

/// Native window events the host reacts to.
fn on_main_window_event(app: &AppHandle, event: &WindowEvent) {
    match event {
        WindowEvent::Resized(_) => {
            let maximized = app.state::<MainWindow>().is_maximized();
            if let Some(state) = app.state::<MaximizeTracker>().observe(maximized) {
                log_debug!("WIN", "maximized={}", state);
                if let Err(e) = app.emit(MAXIMIZED_CHANGE_EVENT, state) {
                    log_warn!("WIN", "emit {} failed: {}", MAXIMIZED_CHANGE_EVENT, e);
                }
            }
        }
        WindowEvent::DragDrop(DragDropEvent::Drop { paths, .. }) => {
            let dropped = app.state::<DroppedFiles>().register_all(paths.iter().cloned());
            log_info!("FILE", "dropped {} file(s)", dropped.len());
            if let Err(e) = app.emit(FILES_DROPPED_EVENT, dropped) {
                log_warn!("FILE", "emit {} failed: {}", FILES_DROPPED_EVENT, e);
            }
        }
        WindowEvent::Destroyed => {
            log_info!("WIN", "main window destroyed");
            app.state::<MainWindow>().release();
            app.state::<MaximizeTracker>().reset();
            app.state::<DroppedFiles>().clear();
        }
        _ => {}
    }
}

fn setup(app: &mut tauri::App) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env();
    log_info!(
        "SYS",
        "loading UI from {}",
        match &config.load_source {
            LoadSource::DevServer(url) => url.as_str(),
            LoadSource::Bundled => "bundled assets",
        }
    );

    let handle = app.handle().clone();
    let window = create_main_window(&handle, &config)?;

    let tracker = handle.state::<MaximizeTracker>();
    tracker.prime(window.is_maximized().unwrap_or(false));
    handle.state::<MainWindow>().install(Arc::new(window.clone()));

    let event_handle = handle.clone();
    window.on_window_event(move |event| on_main_window_event(&event_handle, event));

    Ok(())
}

// ============================================================================
// TAURI APP ENTRY
// ============================================================================

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    match init_log_file() {
        Ok(path) => {
            eprintln!("[LOG_INIT] SUCCESS - Log file: {:?}", path);
            log_info!("SYS", "Tauri backend starting, log={}", path.display());
        }
        Err(e) => {
            eprintln!("[LOG_INIT] FAILED: {}", e);
            eprintln!("[LOG_INIT] Continuing with console-only logging");
        }
    }
    logging::install_log_bridge();

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(MainWindow::new())
        .manage(MaximizeTracker::new())
        .manage(DroppedFiles::new())
        .setup(setup)
        .invoke_handler(tauri::generate_handler![
            // Conversion
            convert::convert_png_to_ico,
            // File selection
            files::get_file_path,
            files::pick_png_file,
            // Window control
            window::close_app,
            window::minimize_window,
            window::maximize_window,
            window::close_window,
            window::drag_window,
            window::is_window_maximized,
            // Logging
            logging::log_frontend,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
