//! Webview placement
//!
//! The embedded browser view reserves a fixed-height strip at the top of
//! the window for its control bar; the webview fills the rest.

use serde::{Deserialize, Serialize};

/// Height of the browser control bar in logical pixels.
pub const CONTROL_BAR_HEIGHT: u32 = 80;

/// Available window area, as reported by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Placement rectangle for an embedded webview, relative to the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebviewBounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl WebviewBounds {
    /// The content area below the control bar.
    pub fn content_area(viewport: Viewport) -> Self {
        Self {
            x: 0,
            y: CONTROL_BAR_HEIGHT as i32,
            width: viewport.width,
            height: viewport.height.saturating_sub(CONTROL_BAR_HEIGHT),
        }
    }
}
