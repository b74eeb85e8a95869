//! Couch Core
//!
//! Central coordination layer for the Couch application shell. Rust owns
//! all state; the UI webview is a stateless renderer driving the [`Shell`]
//! through IPC.

mod config;
mod error;
mod greeter;
mod shell;

pub use config::Config;
pub use error::CoreError;
pub use greeter::{Greeter, GreetingState};
pub use shell::Shell;

// Re-export core components
pub use couch_bridge::{
    BridgeCommand, BridgeError, BridgeResponse, CommandBridge, Viewport, WebviewBounds,
    CONTROL_BAR_HEIGHT,
};
pub use couch_gallery::{quick_links, Catalog, CatalogEntry, Category, QuickLink};
pub use couch_views::{ViewNavigator, ViewState};
pub use couch_webview::{Session, SessionPhase, WebviewController, WebviewError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
