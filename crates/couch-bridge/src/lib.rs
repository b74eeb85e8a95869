//! Couch Command Bridge
//!
//! The shell never talks to the native host directly. Every backend
//! operation is a named command with arguments, answered by a single
//! result or a single failure. This crate defines that boundary: the
//! command set, the response set, the failure type, and the geometry
//! helpers for placing the embedded webview.

mod bounds;
mod command;
mod error;

pub use bounds::{Viewport, WebviewBounds, CONTROL_BAR_HEIGHT};
pub use command::{BridgeCommand, BridgeResponse};
pub use error::BridgeError;

use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, BridgeError>;

/// The native-host capability consumed by the shell.
///
/// Implementations execute one command at a time and must be shareable
/// across the async runtime; the production implementation lives in the
/// Tauri application, tests substitute recording mocks.
#[async_trait]
pub trait CommandBridge: Send + Sync {
    async fn invoke(&self, command: BridgeCommand) -> Result<BridgeResponse>;
}
