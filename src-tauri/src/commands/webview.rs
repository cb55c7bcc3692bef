//! Dashboard webview management
//!
//! The shell hosts exactly one content webview, pointed at the fixed
//! CCTV dashboard URL. It lives as a child of the main window below the
//! header, starts hidden behind the splash, and is shown/hidden as the
//! user switches between the dashboard and info tabs.

use parking_lot::RwLock;
use std::sync::Arc;
use tauri::webview::{PageLoadEvent, WebviewBuilder};
use tauri::{AppHandle, Emitter, LogicalPosition, LogicalSize, Manager, WebviewUrl, Window};

use atcs_core::{Config, LifecycleEvent, PageHost, SessionError};

use super::session::{CommandResult, SessionInfo};
use crate::state::AppState;

/// Label of the single content webview
pub const DASHBOARD_WEBVIEW: &str = "dashboard";

/// Area of the window the dashboard occupies (below header, above tab bar)
#[derive(Clone, Copy)]
pub struct ContentBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for ContentBounds {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 56.0, // header height
            width: 420.0,
            height: 751.0,
        }
    }
}

/// Tracks the content area so resize and re-creation agree on bounds
pub struct DashboardLayout {
    bounds: Arc<RwLock<ContentBounds>>,
}

impl DashboardLayout {
    pub fn new() -> Self {
        Self {
            bounds: Arc::new(RwLock::new(ContentBounds::default())),
        }
    }

    pub fn get(&self) -> ContentBounds {
        *self.bounds.read()
    }

    pub fn set(&self, bounds: ContentBounds) {
        *self.bounds.write() = bounds;
    }
}

impl Default for DashboardLayout {
    fn default() -> Self {
        Self::new()
    }
}

/// `PageHost` implementation over the Tauri content webview
pub struct DashboardHost {
    app: AppHandle,
}

impl DashboardHost {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }

    fn webview(&self) -> Result<tauri::Webview, SessionError> {
        self.app
            .get_webview(DASHBOARD_WEBVIEW)
            .ok_or_else(|| SessionError::host("Dashboard webview not found"))
    }
}

impl PageHost for DashboardHost {
    fn reload(&self) -> Result<(), SessionError> {
        self.webview()?
            .reload()
            .map_err(|e| SessionError::host(e.to_string()))
    }

    fn go_back(&self) -> Result<(), SessionError> {
        self.webview()?
            .eval("history.back()")
            .map_err(|e| SessionError::host(e.to_string()))
    }

    fn navigate(&self, url: &str) -> Result<(), SessionError> {
        let parsed: url::Url = url
            .parse()
            .map_err(|_| SessionError::InvalidUrl(url.to_string()))?;

        self.webview()?
            .navigate(parsed)
            .map_err(|e| SessionError::host(e.to_string()))
    }

    fn target_url(&self) -> String {
        self.webview()
            .ok()
            .and_then(|w| w.url().ok())
            .map(|u| u.to_string())
            .unwrap_or_else(|| Config::default().dashboard_url)
    }
}

/// Create the content webview as a hidden child of the main window
///
/// Page-load lifecycle events flow straight into the session reducer;
/// every navigation inside the surface is permitted.
pub fn create_dashboard_webview(
    app: &AppHandle,
    window: &Window,
    state: &AppState,
) -> Result<(), Box<dyn std::error::Error>> {
    let dashboard_url = state.monitor().config().dashboard_url.clone();
    let webview_url = WebviewUrl::External(dashboard_url.parse::<url::Url>()?);

    let ui_label = super::ui_webview_label(window.label());
    let app_for_load = app.clone();

    let builder = WebviewBuilder::new(DASHBOARD_WEBVIEW, webview_url)
        .auto_resize()
        .user_agent(Config::user_agent())
        .on_navigation(|_url| {
            // All navigations inside the embedded surface are permitted
            true
        })
        .on_page_load(move |_webview, payload| {
            let event = match payload.event() {
                PageLoadEvent::Started => LifecycleEvent::LoadStarted,
                PageLoadEvent::Finished => LifecycleEvent::LoadFinished,
            };

            if let Some(state) = app_for_load.try_state::<AppState>() {
                state.monitor().handle_event(event);

                let info = SessionInfo::from(state.monitor().session_state());
                let _ = app_for_load.emit_to(ui_label.as_str(), "session-updated", info);
            }
        });

    let layout = app
        .try_state::<DashboardLayout>()
        .map(|l| l.get())
        .unwrap_or_default();

    let webview = window.add_child(
        builder,
        LogicalPosition::new(layout.x, layout.y),
        LogicalSize::new(layout.width, layout.height),
    )?;

    // Hidden until the splash hands over to the main view
    let _ = webview.hide();

    tracing::info!(label = DASHBOARD_WEBVIEW, url = %dashboard_url, "Created dashboard webview");
    Ok(())
}

#[tauri::command]
pub fn show_dashboard(app: AppHandle) -> CommandResult<()> {
    let webview = match app.get_webview(DASHBOARD_WEBVIEW) {
        Some(w) => w,
        None => return CommandResult::err("Dashboard webview not found".to_string()),
    };

    match webview.show() {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(format!("Failed to show dashboard: {}", e)),
    }
}

#[tauri::command]
pub fn hide_dashboard(app: AppHandle) -> CommandResult<()> {
    let webview = match app.get_webview(DASHBOARD_WEBVIEW) {
        Some(w) => w,
        None => return CommandResult::err("Dashboard webview not found".to_string()),
    };

    match webview.hide() {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(format!("Failed to hide dashboard: {}", e)),
    }
}

/// Update the content area when the window or chrome changes size
#[tauri::command]
pub fn set_dashboard_bounds(
    app: AppHandle,
    layout: tauri::State<DashboardLayout>,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> CommandResult<()> {
    layout.set(ContentBounds {
        x,
        y,
        width,
        height,
    });

    let webview = match app.get_webview(DASHBOARD_WEBVIEW) {
        Some(w) => w,
        None => return CommandResult::err("Dashboard webview not found".to_string()),
    };

    if let Err(e) = webview.set_position(LogicalPosition::new(x, y)) {
        return CommandResult::err(format!("Failed to set position: {}", e));
    }

    if let Err(e) = webview.set_size(LogicalSize::new(width, height)) {
        return CommandResult::err(format!("Failed to set size: {}", e));
    }

    CommandResult::ok(())
}
