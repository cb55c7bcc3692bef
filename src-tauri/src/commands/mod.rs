//! Tauri IPC Commands
//!
//! These commands bridge the frontend to the Rust core. The shell owns
//! all state; the UI webview renders it.

pub mod diagnostics;
pub mod screens;
pub mod session;
pub mod webview;

pub fn ui_webview_label(window_label: &str) -> String {
    format!("ui-{window_label}")
}
