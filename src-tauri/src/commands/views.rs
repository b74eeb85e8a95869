//! View switching commands

use serde::Serialize;
use tauri::{AppHandle, Manager, State};

use couch_bridge::Viewport;
use couch_core::ViewState;

use super::CommandResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ViewInfo {
    pub view: String,
}

impl From<ViewState> for ViewInfo {
    fn from(view: ViewState) -> Self {
        Self {
            view: view.as_str().to_string(),
        }
    }
}

#[tauri::command]
pub async fn set_view(app: AppHandle, view: String, viewport: Viewport) -> CommandResult<ViewInfo> {
    let state = match app.try_state::<AppState>() {
        Some(s) => s,
        None => return CommandResult::err("AppState not found".to_string()),
    };

    let target = match view.parse::<ViewState>() {
        Ok(v) => v,
        Err(e) => return CommandResult::err(e),
    };

    match state.shell().set_view(target, viewport).await {
        Ok(current) => CommandResult::ok(current.into()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn get_view(state: State<AppState>) -> CommandResult<ViewInfo> {
    CommandResult::ok(state.shell().current_view().into())
}
