//! ATCS Monitor Indonesia - Tauri Application
//!
//! A shell around the public ATCS CCTV dashboard:
//! - The UI webview renders the chrome (splash, header, tabs, error view)
//! - The content webview renders the remote dashboard page
//! - Rust owns all state: session phase, navigation, active screen

mod commands;
mod state;

use commands::webview::DashboardLayout;
use state::AppState;
use tauri::webview::WebviewBuilder;
use tauri::window::WindowBuilder;
use tauri::{LogicalPosition, LogicalSize, Manager, WebviewUrl};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging
    atcs_core::init_logging();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let state = AppState::new();
            app.manage(state);
            app.manage(DashboardLayout::new());

            let window_label = "main";

            let window = WindowBuilder::new(app, window_label)
                .title("ATCS Monitor Indonesia")
                .inner_size(420.0, 860.0)
                .min_inner_size(360.0, 640.0)
                .center()
                .build()?;

            // Chrome webview: splash, header, tabs, info screen, error view
            let ui_webview = WebviewBuilder::new(
                commands::ui_webview_label(window_label),
                WebviewUrl::App("index.html".into()),
            )
            .auto_resize();

            let ui_webview = window.add_child(
                ui_webview,
                LogicalPosition::new(0.0, 0.0),
                LogicalSize::new(420.0, 860.0),
            )?;
            let _ = ui_webview.show();

            // Content webview: the embedded dashboard, hidden behind the splash
            let state = app.state::<AppState>();
            commands::webview::create_dashboard_webview(app.handle(), &window, state.inner())?;

            tracing::info!("ATCS Monitor started");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Diagnostics
            commands::diagnostics::frontend_ready,
            // Session commands
            commands::session::get_session_state,
            commands::session::reload_page,
            commands::session::go_back,
            commands::session::report_navigation,
            commands::session::report_http_error,
            commands::session::report_load_failure,
            // Screen commands
            commands::screens::get_app_info,
            commands::screens::get_active_screen,
            commands::screens::start_splash,
            commands::screens::cancel_splash,
            commands::screens::open_repository,
            // Webview commands
            commands::webview::show_dashboard,
            commands::webview::hide_dashboard,
            commands::webview::set_dashboard_bounds,
        ])
        .run(tauri::generate_context!())
        .expect("error while running ATCS Monitor");
}
