//! FILENAME: app/src-tauri/src/config.rs
// PURPOSE: Window and load-source configuration for the main window.

use tauri::{Url, WebviewUrl};

/// When set, the window loads this URL (frontend dev server) instead of the
/// bundled assets.
pub const DEV_SERVER_URL_ENV: &str = "ICOCONV_DEV_SERVER_URL";

pub const MAIN_WINDOW_LABEL: &str = "main";
pub const WINDOW_TITLE: &str = "ICO Converter";
pub const WINDOW_WIDTH: f64 = 600.0;
pub const WINDOW_HEIGHT: f64 = 480.0;

/// Where the UI process gets its page from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    DevServer(Url),
    Bundled,
}

impl LoadSource {
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(DEV_SERVER_URL_ENV).ok().as_deref())
    }

    /// An unset, blank or unparsable value falls back to the bundled page.
    pub fn from_value(value: Option<&str>) -> Self {
        let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return LoadSource::Bundled;
        };
        match Url::parse(raw) {
            Ok(url) => LoadSource::DevServer(url),
            Err(e) => {
                eprintln!("[CONFIG] Ignoring {}={:?}: {}", DEV_SERVER_URL_ENV, raw, e);
                LoadSource::Bundled
            }
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, LoadSource::DevServer(_))
    }

    pub fn webview_url(&self) -> WebviewUrl {
        match self {
            LoadSource::DevServer(url) => WebviewUrl::External(url.clone()),
            LoadSource::Bundled => WebviewUrl::App("index.html".into()),
        }
    }
}

/// Settings for the single top-level window.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub label: &'static str,
    pub title: &'static str,
    pub width: f64,
    pub height: f64,
    pub min_width: f64,
    pub min_height: f64,
    /// Custom title bar drawn by the UI. On macOS the native title bar is
    /// overlaid so the traffic lights stay; elsewhere decorations are off.
    pub hidden_title_bar: bool,
    /// Build the window hidden and show it once the page has loaded.
    pub show_on_load: bool,
    pub load_source: LoadSource,
}

impl AppConfig {
    pub fn from_env() -> Self {
        AppConfig {
            load_source: LoadSource::from_env(),
            ..AppConfig::default()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            label: MAIN_WINDOW_LABEL,
            title: WINDOW_TITLE,
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            min_width: WINDOW_WIDTH,
            min_height: WINDOW_HEIGHT,
            hidden_title_bar: true,
            show_on_load: true,
            load_source: LoadSource::Bundled,
        }
    }
}
