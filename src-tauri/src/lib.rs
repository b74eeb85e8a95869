//! Couch - Tauri Application
//!
//! Rust owns all state: the UI webview renders what the shell reports
//! and calls back in through the IPC commands below. The embedded
//! Crunchyroll webviews are real windows managed by the host registry.

mod bridge;
mod commands;
mod host;
mod state;

use std::sync::Arc;

use tauri::{Manager, WebviewUrl, WebviewWindowBuilder};

use couch_core::{Config, Shell};

use crate::bridge::HostBridge;
use crate::host::WebviewHost;
use crate::state::AppState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging
    couch_core::init_logging();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let config = Config::default();

            // Wire the shell to the production bridge
            let host = WebviewHost::new(app.handle().clone(), config.user_agent.clone());
            let bridge = Arc::new(HostBridge::new(app.handle().clone(), host));
            let shell = Arc::new(Shell::new(config.clone(), bridge));
            app.manage(AppState::new(shell));

            let window =
                WebviewWindowBuilder::new(app, "main", WebviewUrl::App("index.html".into()))
                    .title("Couch")
                    .inner_size(config.window_width, config.window_height)
                    .min_inner_size(800.0, 600.0)
                    .center()
                    .build()?;

            // Auto-open devtools in debug mode
            #[cfg(debug_assertions)]
            window.open_devtools();
            #[cfg(not(debug_assertions))]
            let _ = window;

            tracing::info!("Couch started");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Diagnostics
            commands::diagnostics::frontend_ready,
            // View commands
            commands::views::set_view,
            commands::views::get_view,
            // Demo commands
            commands::demo::greet,
            commands::demo::toggle_devtools,
            // Browser commands
            commands::browser::get_browser_state,
            commands::browser::browser_navigate,
            commands::browser::browser_reload,
            commands::browser::browser_back,
            commands::browser::browser_forward,
            commands::browser::browser_toggle_fullscreen,
            commands::browser::browser_retry,
            // Gallery commands
            commands::gallery::get_quick_links,
            commands::gallery::browse_catalog,
            commands::gallery::open_url,
        ])
        .run(tauri::generate_context!())
        .expect("error while running couch");
}
