//! Session phase state machine
//!
//! ```text
//! Uninitialized
//!   ↓ create
//! Creating ──fail──> Failed ──retry──> Creating
//!   ↓ ok
//! Ready ⇄ Navigating / Refreshing (fail → Failed)
//!
//! any ──view exit──> Destroyed
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    /// No webview requested yet
    Uninitialized,
    /// Create command in flight
    Creating,
    /// Webview live and idle
    Ready,
    /// Navigate command in flight
    Navigating,
    /// Reload command in flight
    Refreshing,
    /// Last lifecycle command failed; retry re-creates
    Failed,
    /// View exited, session discarded
    Destroyed,
}

impl SessionPhase {
    /// Check if transition to another phase is valid.
    ///
    /// Deliberately no same-phase allowance: re-entering an in-flight
    /// phase is exactly the double-command case the table exists to
    /// reject.
    pub fn can_transition_to(&self, target: SessionPhase) -> bool {
        match (self, target) {
            // Creation, including user-triggered retry after a failure
            (SessionPhase::Uninitialized, SessionPhase::Creating) => true,
            (SessionPhase::Failed, SessionPhase::Creating) => true,
            (SessionPhase::Creating, SessionPhase::Ready) => true,
            (SessionPhase::Creating, SessionPhase::Failed) => true,
            // Lifecycle commands only start from an idle webview
            (SessionPhase::Ready, SessionPhase::Navigating) => true,
            (SessionPhase::Ready, SessionPhase::Refreshing) => true,
            (SessionPhase::Navigating, SessionPhase::Ready) => true,
            (SessionPhase::Navigating, SessionPhase::Failed) => true,
            (SessionPhase::Refreshing, SessionPhase::Ready) => true,
            (SessionPhase::Refreshing, SessionPhase::Failed) => true,
            // Teardown is unconditional
            (_, SessionPhase::Destroyed) => true,
            _ => false,
        }
    }

    /// Returns true while a lifecycle command is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            SessionPhase::Creating | SessionPhase::Navigating | SessionPhase::Refreshing
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::Uninitialized => "uninitialized",
            SessionPhase::Creating => "creating",
            SessionPhase::Ready => "ready",
            SessionPhase::Navigating => "navigating",
            SessionPhase::Refreshing => "refreshing",
            SessionPhase::Failed => "failed",
            SessionPhase::Destroyed => "destroyed",
        }
    }
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_transitions() {
        assert!(SessionPhase::Uninitialized.can_transition_to(SessionPhase::Creating));
        assert!(SessionPhase::Creating.can_transition_to(SessionPhase::Ready));
        assert!(SessionPhase::Creating.can_transition_to(SessionPhase::Failed));
        assert!(SessionPhase::Failed.can_transition_to(SessionPhase::Creating));
        assert!(SessionPhase::Ready.can_transition_to(SessionPhase::Navigating));
        assert!(SessionPhase::Ready.can_transition_to(SessionPhase::Refreshing));
        assert!(SessionPhase::Navigating.can_transition_to(SessionPhase::Ready));
        assert!(SessionPhase::Refreshing.can_transition_to(SessionPhase::Failed));
    }

    #[test]
    fn test_destroy_is_valid_from_everywhere() {
        for phase in [
            SessionPhase::Uninitialized,
            SessionPhase::Creating,
            SessionPhase::Ready,
            SessionPhase::Navigating,
            SessionPhase::Refreshing,
            SessionPhase::Failed,
            SessionPhase::Destroyed,
        ] {
            assert!(phase.can_transition_to(SessionPhase::Destroyed));
        }
    }

    #[test]
    fn test_invalid_transitions() {
        // No navigation before the webview exists
        assert!(!SessionPhase::Uninitialized.can_transition_to(SessionPhase::Navigating));
        // No second command while one is in flight
        assert!(!SessionPhase::Navigating.can_transition_to(SessionPhase::Navigating));
        assert!(!SessionPhase::Navigating.can_transition_to(SessionPhase::Refreshing));
        assert!(!SessionPhase::Creating.can_transition_to(SessionPhase::Creating));
        // A destroyed session never comes back
        assert!(!SessionPhase::Destroyed.can_transition_to(SessionPhase::Creating));
        assert!(!SessionPhase::Destroyed.can_transition_to(SessionPhase::Ready));
    }

    #[test]
    fn test_busy_phases() {
        assert!(SessionPhase::Creating.is_busy());
        assert!(SessionPhase::Navigating.is_busy());
        assert!(SessionPhase::Refreshing.is_busy());
        assert!(!SessionPhase::Ready.is_busy());
        assert!(!SessionPhase::Failed.is_busy());
    }
}
