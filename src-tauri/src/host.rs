//! Native webview host
//!
//! Owns the real webview windows behind the command bridge. Identifiers
//! are handed out here, and the registry is the single source of truth
//! for which webviews are alive. Errors are plain strings; the bridge
//! surfaces them verbatim.

use std::collections::HashMap;

use parking_lot::RwLock;
use tauri::{AppHandle, Url, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use couch_bridge::WebviewBounds;

pub struct WebviewHost {
    app: AppHandle,
    user_agent: String,
    webviews: RwLock<HashMap<String, WebviewWindow>>,
}

impl WebviewHost {
    pub fn new(app: AppHandle, user_agent: String) -> Self {
        Self {
            app,
            user_agent,
            webviews: RwLock::new(HashMap::new()),
        }
    }

    pub fn create(&self, url: &str, bounds: WebviewBounds) -> Result<String, String> {
        let webview_id = format!("crunchyroll_{}", chrono::Utc::now().timestamp_millis());
        let external: Url = url.parse().map_err(|e| format!("Invalid URL: {}", e))?;

        tracing::info!(webview_id = %webview_id, url = %url, "creating crunchyroll webview");

        let webview =
            WebviewWindowBuilder::new(&self.app, &webview_id, WebviewUrl::External(external))
                .title("Crunchyroll")
                .inner_size(bounds.width as f64, bounds.height as f64)
                .position(bounds.x as f64, bounds.y as f64)
                .resizable(true)
                // No window decorations for an embedded feel
                .decorations(false)
                .always_on_top(false)
                .visible(true)
                .user_agent(&self.user_agent)
                .build()
                .map_err(|e| format!("Failed to create webview: {}", e))?;

        self.webviews.write().insert(webview_id.clone(), webview);

        Ok(webview_id)
    }

    pub fn navigate(&self, webview_id: &str, url: &str) -> Result<(), String> {
        let webview = self.get(webview_id)?;
        let parsed: Url = url.parse().map_err(|e| format!("Invalid URL: {}", e))?;

        tracing::info!(webview_id = %webview_id, url = %url, "navigating webview");

        webview
            .navigate(parsed)
            .map_err(|e| format!("Failed to navigate: {}", e))
    }

    pub fn reload(&self, webview_id: &str) -> Result<(), String> {
        let webview = self.get(webview_id)?;

        // Re-navigate to the current URL; uniform across platform webviews
        let current = webview
            .url()
            .map_err(|e| format!("Failed to get current URL: {}", e))?;
        webview
            .navigate(current)
            .map_err(|e| format!("Failed to reload: {}", e))
    }

    pub fn go_back(&self, webview_id: &str) -> Result<(), String> {
        // No direct history API on the window; drive it from script
        self.get(webview_id)?
            .eval("window.history.back()")
            .map_err(|e| format!("Failed to go back: {}", e))
    }

    pub fn go_forward(&self, webview_id: &str) -> Result<(), String> {
        self.get(webview_id)?
            .eval("window.history.forward()")
            .map_err(|e| format!("Failed to go forward: {}", e))
    }

    pub fn toggle_fullscreen(&self, webview_id: &str) -> Result<(), String> {
        let webview = self.get(webview_id)?;
        let is_fullscreen = webview
            .is_fullscreen()
            .map_err(|e| format!("Failed to check fullscreen: {}", e))?;
        webview
            .set_fullscreen(!is_fullscreen)
            .map_err(|e| format!("Failed to toggle fullscreen: {}", e))
    }

    pub fn destroy(&self, webview_id: &str) -> Result<(), String> {
        let Some(webview) = self.webviews.write().remove(webview_id) else {
            return Err(format!("Webview {} not found", webview_id));
        };

        tracing::info!(webview_id = %webview_id, "destroying webview");

        webview
            .close()
            .map_err(|e| format!("Failed to close webview: {}", e))
    }

    fn get(&self, webview_id: &str) -> Result<WebviewWindow, String> {
        self.webviews
            .read()
            .get(webview_id)
            .cloned()
            .ok_or_else(|| format!("Webview {} not found", webview_id))
    }
}
