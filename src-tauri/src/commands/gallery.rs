//! Gallery and quick-link commands

use tauri::{AppHandle, Manager, State};

use couch_core::{CatalogEntry, Category, QuickLink};

use super::CommandResult;
use crate::state::AppState;

#[tauri::command]
pub fn get_quick_links() -> CommandResult<Vec<QuickLink>> {
    CommandResult::ok(couch_core::quick_links().to_vec())
}

#[tauri::command]
pub fn browse_catalog(
    state: State<AppState>,
    category: Option<String>,
    query: Option<String>,
) -> CommandResult<Vec<CatalogEntry>> {
    let category = match category.as_deref() {
        Some(raw) => match raw.parse::<Category>() {
            Ok(c) => Some(c),
            Err(e) => return CommandResult::err(e),
        },
        None => None,
    };

    CommandResult::ok(state.shell().browse_catalog(category, query.as_deref()))
}

/// Open a gallery entry in the system default browser.
#[tauri::command]
pub async fn open_url(app: AppHandle, url: String, title: String) -> CommandResult<()> {
    let state = match app.try_state::<AppState>() {
        Some(s) => s,
        None => return CommandResult::err("AppState not found".to_string()),
    };

    match state.shell().open_external(url, title).await {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
