//! Webview session error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebviewError {
    #[error("Invalid session transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    /// A lifecycle command is already in flight for this session.
    #[error("Session is busy: {phase}")]
    Busy { phase: String },
}
