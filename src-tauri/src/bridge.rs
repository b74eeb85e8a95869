//! Production command bridge
//!
//! Routes named commands to their native implementations: webview
//! lifecycle to the host registry, greet locally, open_url to the
//! system browser.

use async_trait::async_trait;
use tauri::AppHandle;
use tauri_plugin_opener::OpenerExt;

use couch_bridge::{BridgeCommand, BridgeError, BridgeResponse, CommandBridge, WebviewBounds};

use crate::host::WebviewHost;

pub struct HostBridge {
    app: AppHandle,
    host: WebviewHost,
}

impl HostBridge {
    pub fn new(app: AppHandle, host: WebviewHost) -> Self {
        Self { app, host }
    }

    fn greet(name: &str) -> Result<String, String> {
        if name.is_empty() {
            return Err("Name cannot be empty".to_string());
        }

        tracing::info!(name = %name, "greet requested");
        Ok(format!("Hello, {}! Greetings from Rust", name))
    }

    fn open_url(&self, url: &str, title: &str) -> Result<(), String> {
        tracing::info!(url = %url, title = %title, "opening url in system browser");

        self.app
            .opener()
            .open_url(url, None::<&str>)
            .map_err(|e| format!("Failed to open URL: {}", e))
    }
}

#[async_trait]
impl CommandBridge for HostBridge {
    async fn invoke(&self, command: BridgeCommand) -> couch_bridge::Result<BridgeResponse> {
        tracing::debug!(command = command.name(), "bridge command");

        let result = match command {
            BridgeCommand::Greet { name } => Self::greet(&name).map(BridgeResponse::Greeting),
            BridgeCommand::CreateCrunchyrollWebview {
                url,
                x,
                y,
                width,
                height,
            } => self
                .host
                .create(
                    &url,
                    WebviewBounds {
                        x,
                        y,
                        width,
                        height,
                    },
                )
                .map(BridgeResponse::WebviewId),
            BridgeCommand::WebviewNavigate { webview_id, url } => self
                .host
                .navigate(&webview_id, &url)
                .map(|_| BridgeResponse::Done),
            BridgeCommand::WebviewReload { webview_id } => {
                self.host.reload(&webview_id).map(|_| BridgeResponse::Done)
            }
            BridgeCommand::WebviewGoBack { webview_id } => {
                self.host.go_back(&webview_id).map(|_| BridgeResponse::Done)
            }
            BridgeCommand::WebviewGoForward { webview_id } => self
                .host
                .go_forward(&webview_id)
                .map(|_| BridgeResponse::Done),
            BridgeCommand::ToggleWebviewFullscreen { webview_id } => self
                .host
                .toggle_fullscreen(&webview_id)
                .map(|_| BridgeResponse::Done),
            BridgeCommand::DestroyWebview { webview_id } => {
                self.host.destroy(&webview_id).map(|_| BridgeResponse::Done)
            }
            BridgeCommand::OpenUrl { url, title } => {
                self.open_url(&url, &title).map(|_| BridgeResponse::Done)
            }
        };

        result.map_err(BridgeError::Rejected)
    }
}
