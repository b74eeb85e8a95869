//! Tauri IPC Commands
//!
//! These commands bridge the UI webview to the Rust shell. Everything
//! returns the same envelope so the frontend handles success and failure
//! uniformly.

pub mod browser;
pub mod demo;
pub mod diagnostics;
pub mod gallery;
pub mod views;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}
