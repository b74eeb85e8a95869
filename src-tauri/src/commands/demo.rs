//! Greeting demo commands

use tauri::{AppHandle, Manager, WebviewWindow};

use couch_core::GreetingState;

use super::CommandResult;
use crate::state::AppState;

#[tauri::command]
pub async fn greet(app: AppHandle, name: String) -> CommandResult<GreetingState> {
    let state = match app.try_state::<AppState>() {
        Some(s) => s,
        None => return CommandResult::err("AppState not found".to_string()),
    };

    CommandResult::ok(state.shell().greet(&name).await)
}

/// Toggle developer tools for the UI webview
#[tauri::command]
pub async fn toggle_devtools(window: WebviewWindow) {
    #[cfg(debug_assertions)]
    window.open_devtools();
    #[cfg(not(debug_assertions))]
    let _ = window;
}
