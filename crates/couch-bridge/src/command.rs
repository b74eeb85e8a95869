//! The named command set
//!
//! Wire names are fixed: the UI, the shell and the host all refer to
//! commands by these tags, and the tests assert against them.

use serde::{Deserialize, Serialize};

use crate::bounds::WebviewBounds;
use crate::error::BridgeError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "args", rename_all = "snake_case")]
pub enum BridgeCommand {
    Greet {
        name: String,
    },
    CreateCrunchyrollWebview {
        url: String,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
    WebviewNavigate {
        webview_id: String,
        url: String,
    },
    WebviewReload {
        webview_id: String,
    },
    WebviewGoBack {
        webview_id: String,
    },
    WebviewGoForward {
        webview_id: String,
    },
    ToggleWebviewFullscreen {
        webview_id: String,
    },
    DestroyWebview {
        webview_id: String,
    },
    /// Open a link in the system default browser.
    OpenUrl {
        url: String,
        title: String,
    },
}

impl BridgeCommand {
    /// Create command for a webview filling `bounds`.
    pub fn create_webview(url: String, bounds: WebviewBounds) -> Self {
        BridgeCommand::CreateCrunchyrollWebview {
            url,
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BridgeCommand::Greet { .. } => "greet",
            BridgeCommand::CreateCrunchyrollWebview { .. } => "create_crunchyroll_webview",
            BridgeCommand::WebviewNavigate { .. } => "webview_navigate",
            BridgeCommand::WebviewReload { .. } => "webview_reload",
            BridgeCommand::WebviewGoBack { .. } => "webview_go_back",
            BridgeCommand::WebviewGoForward { .. } => "webview_go_forward",
            BridgeCommand::ToggleWebviewFullscreen { .. } => "toggle_webview_fullscreen",
            BridgeCommand::DestroyWebview { .. } => "destroy_webview",
            BridgeCommand::OpenUrl { .. } => "open_url",
        }
    }

    /// The webview this command targets, if it targets one.
    pub fn webview_id(&self) -> Option<&str> {
        match self {
            BridgeCommand::WebviewNavigate { webview_id, .. }
            | BridgeCommand::WebviewReload { webview_id }
            | BridgeCommand::WebviewGoBack { webview_id }
            | BridgeCommand::WebviewGoForward { webview_id }
            | BridgeCommand::ToggleWebviewFullscreen { webview_id }
            | BridgeCommand::DestroyWebview { webview_id } => Some(webview_id),
            _ => None,
        }
    }
}

/// Successful command results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BridgeResponse {
    Greeting(String),
    WebviewId(String),
    Done,
}

impl BridgeResponse {
    pub fn into_greeting(self) -> crate::Result<String> {
        match self {
            BridgeResponse::Greeting(greeting) => Ok(greeting),
            _ => Err(BridgeError::UnexpectedResponse { command: "greet" }),
        }
    }

    pub fn into_webview_id(self) -> crate::Result<String> {
        match self {
            BridgeResponse::WebviewId(id) => Ok(id),
            _ => Err(BridgeError::UnexpectedResponse {
                command: "create_crunchyroll_webview",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::Viewport;

    #[test]
    fn test_wire_names() {
        let create = BridgeCommand::create_webview(
            "https://www.crunchyroll.com".to_string(),
            WebviewBounds::content_area(Viewport {
                width: 1280,
                height: 800,
            }),
        );
        assert_eq!(create.name(), "create_crunchyroll_webview");

        let navigate = BridgeCommand::WebviewNavigate {
            webview_id: "w-1".to_string(),
            url: "https://www.crunchyroll.com/simulcasts".to_string(),
        };
        assert_eq!(navigate.name(), "webview_navigate");

        let destroy = BridgeCommand::DestroyWebview {
            webview_id: "w-1".to_string(),
        };
        assert_eq!(destroy.name(), "destroy_webview");
    }

    #[test]
    fn test_create_serializes_flat_geometry() {
        let create = BridgeCommand::create_webview(
            "https://www.crunchyroll.com".to_string(),
            WebviewBounds {
                x: 0,
                y: 80,
                width: 1280,
                height: 720,
            },
        );

        let value = serde_json::to_value(&create).unwrap();
        assert_eq!(value["command"], "create_crunchyroll_webview");
        assert_eq!(value["args"]["url"], "https://www.crunchyroll.com");
        assert_eq!(value["args"]["x"], 0);
        assert_eq!(value["args"]["y"], 80);
        assert_eq!(value["args"]["width"], 1280);
        assert_eq!(value["args"]["height"], 720);
    }

    #[test]
    fn test_webview_id_accessor() {
        let reload = BridgeCommand::WebviewReload {
            webview_id: "w-9".to_string(),
        };
        assert_eq!(reload.webview_id(), Some("w-9"));

        let greet = BridgeCommand::Greet {
            name: "Rei".to_string(),
        };
        assert_eq!(greet.webview_id(), None);
    }

    #[test]
    fn test_response_extraction() {
        let id = BridgeResponse::WebviewId("w-1".to_string())
            .into_webview_id()
            .unwrap();
        assert_eq!(id, "w-1");

        assert!(BridgeResponse::Done.into_greeting().is_err());
    }
}
