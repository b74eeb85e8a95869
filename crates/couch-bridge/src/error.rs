//! Bridge error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    /// The host executed the command and reported a failure. The message
    /// is already human-readable and is shown to the user as-is.
    #[error("{0}")]
    Rejected(String),

    #[error("unexpected response to {command}")]
    UnexpectedResponse { command: &'static str },
}
