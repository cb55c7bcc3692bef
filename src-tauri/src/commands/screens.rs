//! Splash and info screen commands
//!
//! The splash screen is the only place with a pending operation: a fixed
//! countdown that hands over to the main view unless torn down first.
//! The info screen is a stateless render fed by `AppInfo`.

use serde::{Deserialize, Serialize};
use tauri::{AppHandle, Emitter, Manager, State, Window};
use tauri_plugin_opener::OpenerExt;

use atcs_core::SplashTimer;

use super::session::CommandResult;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub tagline: String,
    pub description: String,
    pub disclaimer: String,
    pub repository_url: String,
}

impl AppInfo {
    fn current(state: &AppState) -> Self {
        Self {
            name: "ATCS Monitor Indonesia".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            tagline: "Lalu lintas dalam genggaman.".to_string(),
            description: "Sumber data CCTV pada aplikasi ini berasal dari layanan publik \
                          yang tersedia untuk umum."
                .to_string(),
            disclaimer: "Keakuratan dan ketersediaan streaming bergantung pada masing-masing \
                         penyedia layanan."
                .to_string(),
            repository_url: state.monitor().config().repository_url.clone(),
        }
    }
}

#[tauri::command]
pub fn get_app_info(state: State<AppState>) -> CommandResult<AppInfo> {
    CommandResult::ok(AppInfo::current(&state))
}

#[tauri::command]
pub fn get_active_screen(state: State<AppState>) -> CommandResult<String> {
    CommandResult::ok(state.monitor().active_screen().as_str().to_string())
}

/// Start the splash countdown; on expiry the main view takes over and
/// the dashboard webview becomes visible
#[tauri::command]
pub async fn start_splash(
    app: AppHandle,
    window: Window,
    state: State<'_, AppState>,
) -> Result<CommandResult<()>, String> {
    let monitor = state.monitor().clone();
    let duration = monitor.config().splash_duration();
    let ui_label = super::ui_webview_label(window.label());
    let app_for_expiry = app.clone();

    let timer = SplashTimer::start(duration, move || {
        monitor.enter_main();

        if let Some(webview) = app_for_expiry.get_webview(super::webview::DASHBOARD_WEBVIEW) {
            let _ = webview.show();
        }

        let _ = app_for_expiry.emit_to(ui_label.as_str(), "screen-changed", "main");
    });

    state.store_splash(timer);

    tracing::info!(duration_ms = duration.as_millis() as u64, "Splash started");
    Ok(CommandResult::ok(()))
}

/// Tear down the splash before expiry; the pending transition must not fire
#[tauri::command]
pub fn cancel_splash(state: State<AppState>) -> CommandResult<()> {
    state.cancel_splash();
    tracing::debug!("Splash cancelled");
    CommandResult::ok(())
}

/// Open the project repository in the platform's default handler
#[tauri::command]
pub fn open_repository(app: AppHandle, state: State<AppState>) -> CommandResult<()> {
    let url = state.monitor().config().repository_url.clone();

    match app.opener().open_url(&url, None::<&str>) {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(format!("Failed to open repository link: {}", e)),
    }
}
