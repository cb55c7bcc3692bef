//! Session commands
//!
//! Snapshot of the tracked page session for the UI, user actions
//! (reload, go-back), and lifecycle reports feeding the reducer. Every
//! mutation is followed by a `session-updated` event so the UI webview
//! re-renders the header, the loading overlay, and the error view.

use serde::{Deserialize, Serialize};
use tauri::{AppHandle, Emitter, State, Window};

use atcs_core::{ConnectionStatus, LifecycleEvent, SessionController};

use super::webview::DashboardHost;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub phase: String,
    pub can_go_back: bool,
    pub error_detail: Option<String>,
    pub status_label: String,
    pub status_color: String,
    pub location: Option<String>,
}

impl From<atcs_core::SessionState> for SessionInfo {
    fn from(state: atcs_core::SessionState) -> Self {
        let status = ConnectionStatus::from(state.phase);
        Self {
            phase: state.phase.as_str().to_string(),
            can_go_back: state.can_go_back,
            error_detail: state.error_detail,
            status_label: status.label().to_string(),
            status_color: status.color().to_string(),
            location: status.location().map(|l| l.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

fn emit_session_updated(app: &AppHandle, window: &Window, state: &State<AppState>) {
    let info = SessionInfo::from(state.monitor().session_state());
    let _ = app.emit_to(super::ui_webview_label(window.label()), "session-updated", info);
}

#[tauri::command]
pub fn get_session_state(state: State<AppState>) -> CommandResult<SessionInfo> {
    CommandResult::ok(state.monitor().session_state().into())
}

/// User-initiated reload; valid in any phase and the sole recovery path
/// out of an errored session
#[tauri::command]
pub fn reload_page(app: AppHandle, window: Window, state: State<AppState>) -> CommandResult<()> {
    let controller = SessionController::new(
        DashboardHost::new(app.clone()),
        state.monitor().session_handle(),
    );

    match controller.reload() {
        Ok(()) => {
            emit_session_updated(&app, &window, &state);
            CommandResult::ok(())
        }
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// User-initiated back navigation; no-op without backward history
#[tauri::command]
pub fn go_back(app: AppHandle, window: Window, state: State<AppState>) -> CommandResult<()> {
    let controller = SessionController::new(
        DashboardHost::new(app.clone()),
        state.monitor().session_handle(),
    );

    match controller.go_back() {
        Ok(()) => {
            emit_session_updated(&app, &window, &state);
            CommandResult::ok(())
        }
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Engine navigation report: backward-history availability changed
#[tauri::command]
pub fn report_navigation(
    app: AppHandle,
    window: Window,
    state: State<AppState>,
    can_go_back: bool,
) -> CommandResult<()> {
    state
        .monitor()
        .handle_event(LifecycleEvent::NavigationChanged { can_go_back });
    emit_session_updated(&app, &window, &state);
    CommandResult::ok(())
}

/// Engine report: the remote server answered with an HTTP status
#[tauri::command]
pub fn report_http_error(
    app: AppHandle,
    window: Window,
    state: State<AppState>,
    status_code: u16,
) -> CommandResult<()> {
    state
        .monitor()
        .handle_event(LifecycleEvent::HttpError {
            status: status_code,
        });
    emit_session_updated(&app, &window, &state);
    CommandResult::ok(())
}

/// Engine report: the load failed at the network level
#[tauri::command]
pub fn report_load_failure(
    app: AppHandle,
    window: Window,
    state: State<AppState>,
    description: Option<String>,
) -> CommandResult<()> {
    state
        .monitor()
        .handle_event(LifecycleEvent::LoadFailed { description });
    emit_session_updated(&app, &window, &state);
    CommandResult::ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use atcs_core::SessionState;

    #[test]
    fn test_session_info_snapshot() {
        let mut state = SessionState::new();
        state.apply(LifecycleEvent::HttpError { status: 503 });

        // Event payloads are cloned per listener, so the DTO must be Clone
        let payload = SessionInfo::from(state).clone();
        assert_eq!(payload.phase, "errored");
        assert_eq!(payload.status_label, "Disconnected");
        assert_eq!(payload.status_color, "#ef4444");
        assert_eq!(payload.error_detail.as_deref(), Some("HTTP Error: 503"));
        assert!(payload.location.is_none());
    }

    #[test]
    fn test_session_info_ready_carries_location() {
        let mut state = SessionState::new();
        state.apply(LifecycleEvent::LoadFinished);

        let payload = SessionInfo::from(state);
        assert_eq!(payload.phase, "ready");
        assert_eq!(payload.status_label, "Connected:");
        assert_eq!(payload.location.as_deref(), Some("Indonesia"));
    }
}
