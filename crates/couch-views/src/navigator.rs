//! View Navigator
//!
//! A single selector variable with process lifetime. Transitions are
//! unconditional and every view is reachable from every other.

use crate::state::ViewState;

#[derive(Debug, Default)]
pub struct ViewNavigator {
    current: ViewState,
}

impl ViewNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ViewState {
        self.current
    }

    /// Switch to `target` and return the view that was active before.
    pub fn set_view(&mut self, target: ViewState) -> ViewState {
        let previous = std::mem::replace(&mut self.current, target);
        if previous != target {
            tracing::debug!(from = %previous, to = %target, "view changed");
        }
        previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_home() {
        let navigator = ViewNavigator::new();
        assert_eq!(navigator.current(), ViewState::Home);
    }

    #[test]
    fn test_set_view_returns_previous() {
        let mut navigator = ViewNavigator::new();

        assert_eq!(navigator.set_view(ViewState::Browser), ViewState::Home);
        assert_eq!(navigator.current(), ViewState::Browser);

        assert_eq!(navigator.set_view(ViewState::Gallery), ViewState::Browser);
        assert_eq!(navigator.current(), ViewState::Gallery);
    }

    #[test]
    fn test_every_view_reachable_from_every_other() {
        let views = [ViewState::Home, ViewState::Gallery, ViewState::Browser];
        for from in views {
            for to in views {
                let mut navigator = ViewNavigator::new();
                navigator.set_view(from);
                navigator.set_view(to);
                assert_eq!(navigator.current(), to);
            }
        }
    }

    #[test]
    fn test_reselecting_active_view_is_a_noop() {
        let mut navigator = ViewNavigator::new();
        navigator.set_view(ViewState::Browser);

        assert_eq!(navigator.set_view(ViewState::Browser), ViewState::Browser);
        assert_eq!(navigator.current(), ViewState::Browser);
    }
}
