//! Webview Lifecycle Controller
//!
//! Drives one embedded-browser session through create / navigate /
//! reload / teardown against the command bridge. Bridge failures never
//! propagate out of here: they land in the session's `error` field (or
//! are only logged, for the best-effort commands) and the caller's
//! `Result` reports local misuse alone.
//!
//! The state lock is never held across an await; in-flight results are
//! matched against a generation counter so anything that settles after
//! teardown is recognized as stale.

use std::sync::Arc;

use parking_lot::Mutex;

use couch_bridge::{BridgeCommand, BridgeResponse, CommandBridge, Viewport, WebviewBounds};

use crate::error::WebviewError;
use crate::phase::SessionPhase;
use crate::session::Session;
use crate::Result;

pub struct WebviewController {
    bridge: Arc<dyn CommandBridge>,
    state: Mutex<ControllerState>,
}

struct ControllerState {
    session: Session,
    /// Bumped on teardown; results carrying an older generation are stale.
    generation: u64,
}

impl WebviewController {
    pub fn new(bridge: Arc<dyn CommandBridge>, initial_url: impl Into<String>) -> Self {
        Self {
            bridge,
            state: Mutex::new(ControllerState {
                session: Session::new(initial_url),
                generation: 0,
            }),
        }
    }

    /// Current session snapshot for rendering.
    pub fn session(&self) -> Session {
        self.state.lock().session.clone()
    }

    /// Request a webview for the session's current URL, sized to fill the
    /// viewport below the control bar.
    ///
    /// Valid on a fresh session and as the user-triggered retry after a
    /// failure; a retry that still records a webview id releases that
    /// webview first, so at most one is ever live.
    pub async fn create(&self, viewport: Viewport) -> Result<()> {
        let (generation, url, leftover) = {
            let mut state = self.state.lock();
            if state.session.phase.is_busy() {
                return Err(WebviewError::Busy {
                    phase: state.session.phase.to_string(),
                });
            }
            state.session.transition(SessionPhase::Creating)?;
            state.session.loading = true;
            state.session.error = None;
            let leftover = state.session.webview_id.take();
            (
                state.generation,
                state.session.current_url.clone(),
                leftover,
            )
        };

        if let Some(id) = leftover {
            self.release(&id).await;
        }

        let bounds = WebviewBounds::content_area(viewport);
        let outcome = self
            .bridge
            .invoke(BridgeCommand::create_webview(url.clone(), bounds))
            .await
            .and_then(BridgeResponse::into_webview_id);

        let mut state = self.state.lock();
        if state.generation != generation {
            drop(state);
            // The view exited while the create was in flight. The session
            // is already discarded; release the orphan instead of adopting
            // it.
            if let Ok(id) = outcome {
                tracing::warn!(webview_id = %id, "webview created after teardown, releasing");
                self.release(&id).await;
            }
            return Ok(());
        }

        state.session.loading = false;
        match outcome {
            Ok(id) => {
                tracing::info!(webview_id = %id, url = %url, "webview created");
                state.session.webview_id = Some(id);
                state.session.transition(SessionPhase::Ready)
            }
            Err(e) => {
                tracing::error!(error = %e, url = %url, "webview creation failed");
                state.session.error = Some(format!("Failed to create webview: {}", e));
                state.session.transition(SessionPhase::Failed)
            }
        }
    }

    /// Point the webview at `url`.
    ///
    /// The session records the target before the host confirms, and keeps
    /// it when the command fails; the displayed URL can therefore run
    /// ahead of the actual webview.
    pub async fn navigate(&self, url: impl Into<String>) -> Result<()> {
        let url = url.into();
        let (generation, webview_id) = {
            let mut state = self.state.lock();
            let Some(id) = state.session.webview_id.clone() else {
                tracing::debug!(url = %url, "navigate ignored: no live webview");
                return Ok(());
            };
            if state.session.phase.is_busy() {
                return Err(WebviewError::Busy {
                    phase: state.session.phase.to_string(),
                });
            }
            state.session.transition(SessionPhase::Navigating)?;
            state.session.current_url = url.clone();
            state.session.loading = true;
            (state.generation, id)
        };

        let outcome = self
            .bridge
            .invoke(BridgeCommand::WebviewNavigate { webview_id, url })
            .await;
        self.settle(generation, outcome.map(|_| ()), "Navigation failed");
        Ok(())
    }

    /// Reload the current page; `current_url` is left untouched.
    pub async fn reload(&self) -> Result<()> {
        let (generation, webview_id) = {
            let mut state = self.state.lock();
            let Some(id) = state.session.webview_id.clone() else {
                tracing::debug!("reload ignored: no live webview");
                return Ok(());
            };
            if state.session.phase.is_busy() {
                return Err(WebviewError::Busy {
                    phase: state.session.phase.to_string(),
                });
            }
            state.session.transition(SessionPhase::Refreshing)?;
            state.session.loading = true;
            (state.generation, id)
        };

        let outcome = self
            .bridge
            .invoke(BridgeCommand::WebviewReload { webview_id })
            .await;
        self.settle(generation, outcome.map(|_| ()), "Refresh failed");
        Ok(())
    }

    pub async fn go_back(&self) {
        self.fire(
            |webview_id| BridgeCommand::WebviewGoBack { webview_id },
            "history back",
        )
        .await;
    }

    pub async fn go_forward(&self) {
        self.fire(
            |webview_id| BridgeCommand::WebviewGoForward { webview_id },
            "history forward",
        )
        .await;
    }

    pub async fn toggle_fullscreen(&self) {
        self.fire(
            |webview_id| BridgeCommand::ToggleWebviewFullscreen { webview_id },
            "fullscreen toggle",
        )
        .await;
    }

    /// Tear the session down. Runs once per view exit: issues one destroy
    /// when an identifier is present, none otherwise, and discards state
    /// regardless of the command outcome.
    pub async fn destroy(&self) {
        let webview_id = {
            let mut state = self.state.lock();
            state.generation += 1;
            state.session.discard()
        };

        match webview_id {
            Some(id) => self.release(&id).await,
            None => tracing::debug!("destroy skipped: no live webview"),
        }
    }

    /// Best-effort commands: no loading flag, no surfaced error.
    async fn fire(&self, command: impl FnOnce(String) -> BridgeCommand, what: &str) {
        let webview_id = self.state.lock().session.webview_id.clone();
        let Some(id) = webview_id else {
            tracing::debug!("{} ignored: no live webview", what);
            return;
        };

        if let Err(e) = self.bridge.invoke(command(id)).await {
            tracing::warn!(error = %e, "{} failed", what);
        }
    }

    /// Apply the result of an in-flight navigate/reload, unless the
    /// session was torn down in the meantime.
    fn settle(&self, generation: u64, outcome: couch_bridge::Result<()>, label: &str) {
        let mut state = self.state.lock();
        if state.generation != generation {
            tracing::debug!("stale command result ignored");
            return;
        }

        state.session.loading = false;
        match outcome {
            Ok(()) => {
                let _ = state.session.transition(SessionPhase::Ready);
            }
            Err(e) => {
                tracing::error!(error = %e, "{}", label);
                state.session.error = Some(format!("{}: {}", label, e));
                let _ = state.session.transition(SessionPhase::Failed);
            }
        }
    }

    async fn release(&self, webview_id: &str) {
        let command = BridgeCommand::DestroyWebview {
            webview_id: webview_id.to_string(),
        };
        if let Err(e) = self.bridge.invoke(command).await {
            tracing::warn!(webview_id = %webview_id, error = %e, "webview destroy failed");
        }
    }
}
