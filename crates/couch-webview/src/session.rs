//! Session data structure

use serde::{Deserialize, Serialize};

use crate::error::WebviewError;
use crate::phase::SessionPhase;
use crate::Result;

/// Observable record of one embedded-browser instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Identifier assigned by the host's create response; absent until
    /// creation succeeds and after teardown
    pub webview_id: Option<String>,
    /// URL the session points at. Updated optimistically on navigation,
    /// so it may be ahead of the actual webview when a navigate fails
    pub current_url: String,
    /// A lifecycle command is in flight
    pub loading: bool,
    /// Last surfaced failure, human-readable
    pub error: Option<String>,
    pub phase: SessionPhase,
}

impl Session {
    pub fn new(initial_url: impl Into<String>) -> Self {
        Self {
            webview_id: None,
            current_url: initial_url.into(),
            loading: false,
            error: None,
            phase: SessionPhase::Uninitialized,
        }
    }

    /// True once the host has handed out a webview identifier.
    pub fn is_live(&self) -> bool {
        self.webview_id.is_some()
    }

    /// Attempt a validated phase transition.
    pub(crate) fn transition(&mut self, next: SessionPhase) -> Result<()> {
        if !self.phase.can_transition_to(next) {
            return Err(WebviewError::InvalidTransition {
                from: self.phase.to_string(),
                to: next.to_string(),
            });
        }

        tracing::debug!(from = %self.phase, to = %next, "session phase transition");
        self.phase = next;
        Ok(())
    }

    /// Unconditional teardown; valid from every phase. Returns the live
    /// webview id, if any, so the caller can notify the host.
    pub(crate) fn discard(&mut self) -> Option<String> {
        tracing::debug!(from = %self.phase, "session discarded");
        self.loading = false;
        self.phase = SessionPhase::Destroyed;
        self.webview_id.take()
    }
}
