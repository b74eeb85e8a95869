//! Couch Webview Lifecycle
//!
//! Owns the one embedded-browser session the application may have live at
//! a time. The controller issues lifecycle commands through the command
//! bridge and reflects their results into an observable [`Session`];
//! everything the UI shows about the embedded browser is read from here.

mod controller;
mod error;
mod phase;
mod session;

pub use controller::WebviewController;
pub use error::WebviewError;
pub use phase::SessionPhase;
pub use session::Session;

pub type Result<T> = std::result::Result<T, WebviewError>;
