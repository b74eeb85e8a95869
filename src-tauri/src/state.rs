//! Application state management

use std::sync::Arc;

use couch_core::Shell;

/// The shell handle managed by Tauri.
pub struct AppState {
    shell: Arc<Shell>,
}

impl AppState {
    pub fn new(shell: Arc<Shell>) -> Self {
        Self { shell }
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }
}
