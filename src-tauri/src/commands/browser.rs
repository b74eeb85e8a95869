//! Embedded browser commands
//!
//! Thin wrappers over the shell's lifecycle controller. Each mutating
//! command returns a fresh session snapshot so the UI can re-render
//! from the reply alone.

use serde::Serialize;
use tauri::{AppHandle, Manager, State};

use couch_bridge::Viewport;
use couch_core::Session;

use super::CommandResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BrowserStateInfo {
    pub webview_id: Option<String>,
    pub current_url: String,
    pub loading: bool,
    pub error: Option<String>,
    pub phase: String,
}

impl From<Session> for BrowserStateInfo {
    fn from(session: Session) -> Self {
        Self {
            webview_id: session.webview_id,
            current_url: session.current_url,
            loading: session.loading,
            error: session.error,
            phase: session.phase.as_str().to_string(),
        }
    }
}

#[tauri::command]
pub fn get_browser_state(state: State<AppState>) -> CommandResult<Option<BrowserStateInfo>> {
    CommandResult::ok(state.shell().browser_session().map(Into::into))
}

#[tauri::command]
pub async fn browser_navigate(
    app: AppHandle,
    url: String,
) -> CommandResult<Option<BrowserStateInfo>> {
    let state = match app.try_state::<AppState>() {
        Some(s) => s,
        None => return CommandResult::err("AppState not found".to_string()),
    };

    match state.shell().navigate(url).await {
        Ok(()) => CommandResult::ok(state.shell().browser_session().map(Into::into)),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub async fn browser_reload(app: AppHandle) -> CommandResult<Option<BrowserStateInfo>> {
    let state = match app.try_state::<AppState>() {
        Some(s) => s,
        None => return CommandResult::err("AppState not found".to_string()),
    };

    match state.shell().reload().await {
        Ok(()) => CommandResult::ok(state.shell().browser_session().map(Into::into)),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub async fn browser_back(app: AppHandle) -> CommandResult<()> {
    let state = match app.try_state::<AppState>() {
        Some(s) => s,
        None => return CommandResult::err("AppState not found".to_string()),
    };

    state.shell().go_back().await;
    CommandResult::ok(())
}

#[tauri::command]
pub async fn browser_forward(app: AppHandle) -> CommandResult<()> {
    let state = match app.try_state::<AppState>() {
        Some(s) => s,
        None => return CommandResult::err("AppState not found".to_string()),
    };

    state.shell().go_forward().await;
    CommandResult::ok(())
}

#[tauri::command]
pub async fn browser_toggle_fullscreen(app: AppHandle) -> CommandResult<()> {
    let state = match app.try_state::<AppState>() {
        Some(s) => s,
        None => return CommandResult::err("AppState not found".to_string()),
    };

    state.shell().toggle_fullscreen().await;
    CommandResult::ok(())
}

/// Re-issue creation after a failure.
#[tauri::command]
pub async fn browser_retry(
    app: AppHandle,
    viewport: Viewport,
) -> CommandResult<Option<BrowserStateInfo>> {
    let state = match app.try_state::<AppState>() {
        Some(s) => s,
        None => return CommandResult::err("AppState not found".to_string()),
    };

    match state.shell().retry_browser(viewport).await {
        Ok(()) => CommandResult::ok(state.shell().browser_session().map(Into::into)),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
