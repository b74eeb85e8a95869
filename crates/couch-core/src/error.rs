//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Webview error: {0}")]
    Webview(#[from] couch_webview::WebviewError),

    #[error("Bridge error: {0}")]
    Bridge(#[from] couch_bridge::BridgeError),
}
