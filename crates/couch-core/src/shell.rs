//! Application shell
//!
//! The single state container behind the UI. Owns the view navigator,
//! the greeting demo, the gallery catalog and, while the browser view is
//! active, the webview lifecycle controller. View switching is
//! unconditional; the webview create/destroy side effects live here, not
//! in the navigator, and are tied to actually entering or leaving the
//! browser view.

use std::sync::Arc;

use parking_lot::RwLock;

use couch_bridge::{BridgeCommand, CommandBridge, Viewport};
use couch_gallery::{quick_links, Catalog, CatalogEntry, Category, QuickLink};
use couch_views::{ViewNavigator, ViewState};
use couch_webview::{Session, WebviewController};

use crate::config::Config;
use crate::greeter::{Greeter, GreetingState};
use crate::Result;

pub struct Shell {
    config: Config,
    bridge: Arc<dyn CommandBridge>,
    navigator: RwLock<ViewNavigator>,
    greeter: Greeter,
    catalog: Catalog,
    /// Present exactly while the browser view is active
    browser: RwLock<Option<Arc<WebviewController>>>,
}

impl Shell {
    pub fn new(config: Config, bridge: Arc<dyn CommandBridge>) -> Self {
        Self {
            config,
            bridge: Arc::clone(&bridge),
            navigator: RwLock::new(ViewNavigator::new()),
            greeter: Greeter::new(bridge),
            catalog: Catalog::builtin(),
            browser: RwLock::new(None),
        }
    }

    pub fn current_view(&self) -> ViewState {
        self.navigator.read().current()
    }

    /// Switch the presented view.
    ///
    /// Re-selecting the active view is a no-op, which is what gates
    /// webview creation on view entry rather than on every re-render.
    /// Leaving the browser view tears its session down exactly once.
    pub async fn set_view(&self, target: ViewState, viewport: Viewport) -> Result<ViewState> {
        let previous = self.navigator.write().set_view(target);
        if previous == target {
            return Ok(target);
        }

        if previous == ViewState::Browser {
            let controller = self.browser.write().take();
            if let Some(controller) = controller {
                controller.destroy().await;
            }
        }

        if target == ViewState::Browser {
            let controller = Arc::new(WebviewController::new(
                Arc::clone(&self.bridge),
                self.config.homepage.clone(),
            ));
            *self.browser.write() = Some(Arc::clone(&controller));
            controller.create(viewport).await?;
        }

        Ok(target)
    }

    /// Snapshot of the embedded-browser session, if the view is active.
    pub fn browser_session(&self) -> Option<Session> {
        self.browser.read().as_ref().map(|c| c.session())
    }

    pub async fn navigate(&self, url: String) -> Result<()> {
        match self.browser() {
            Some(controller) => Ok(controller.navigate(url).await?),
            None => {
                tracing::debug!(url = %url, "navigate ignored: browser view not active");
                Ok(())
            }
        }
    }

    pub async fn reload(&self) -> Result<()> {
        match self.browser() {
            Some(controller) => Ok(controller.reload().await?),
            None => Ok(()),
        }
    }

    pub async fn go_back(&self) {
        if let Some(controller) = self.browser() {
            controller.go_back().await;
        }
    }

    pub async fn go_forward(&self) {
        if let Some(controller) = self.browser() {
            controller.go_forward().await;
        }
    }

    pub async fn toggle_fullscreen(&self) {
        if let Some(controller) = self.browser() {
            controller.toggle_fullscreen().await;
        }
    }

    /// User-triggered retry after a creation failure.
    pub async fn retry_browser(&self, viewport: Viewport) -> Result<()> {
        match self.browser() {
            Some(controller) => Ok(controller.create(viewport).await?),
            None => {
                tracing::debug!("retry ignored: browser view not active");
                Ok(())
            }
        }
    }

    pub async fn greet(&self, name: &str) -> GreetingState {
        self.greeter.greet(name).await
    }

    pub fn greeting(&self) -> GreetingState {
        self.greeter.state()
    }

    pub fn quick_links(&self) -> &'static [QuickLink] {
        quick_links()
    }

    pub fn browse_catalog(
        &self,
        category: Option<Category>,
        query: Option<&str>,
    ) -> Vec<CatalogEntry> {
        self.catalog.browse(category, query)
    }

    /// Open a gallery entry in the system default browser.
    pub async fn open_external(&self, url: String, title: String) -> Result<()> {
        self.bridge
            .invoke(BridgeCommand::OpenUrl { url, title })
            .await?;
        Ok(())
    }

    fn browser(&self) -> Option<Arc<WebviewController>> {
        self.browser.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use parking_lot::Mutex;

    use async_trait::async_trait;
    use couch_bridge::{BridgeError, BridgeResponse};
    use couch_webview::SessionPhase;

    fn viewport() -> Viewport {
        Viewport {
            width: 1280,
            height: 800,
        }
    }

    #[derive(Default)]
    struct RecordingBridge {
        recorded: Mutex<Vec<BridgeCommand>>,
        fail_next: Mutex<Option<String>>,
    }

    impl RecordingBridge {
        fn names(&self) -> Vec<&'static str> {
            self.recorded.lock().iter().map(|c| c.name()).collect()
        }

        fn fail_next(&self, message: &str) {
            *self.fail_next.lock() = Some(message.to_string());
        }
    }

    #[async_trait]
    impl CommandBridge for RecordingBridge {
        async fn invoke(&self, command: BridgeCommand) -> couch_bridge::Result<BridgeResponse> {
            self.recorded.lock().push(command.clone());

            if let Some(message) = self.fail_next.lock().take() {
                return Err(BridgeError::Rejected(message));
            }

            Ok(match command {
                BridgeCommand::Greet { name } => {
                    BridgeResponse::Greeting(format!("Hello, {}! Greetings from Rust", name))
                }
                BridgeCommand::CreateCrunchyrollWebview { .. } => {
                    BridgeResponse::WebviewId("webview-1".to_string())
                }
                _ => BridgeResponse::Done,
            })
        }
    }

    fn setup() -> (Arc<RecordingBridge>, Shell) {
        let bridge = Arc::new(RecordingBridge::default());
        let shell = Shell::new(Config::default(), bridge.clone());
        (bridge, shell)
    }

    #[tokio::test]
    async fn test_starts_on_home_with_no_session() {
        let (bridge, shell) = setup();

        assert_eq!(shell.current_view(), ViewState::Home);
        assert!(shell.browser_session().is_none());
        assert!(bridge.names().is_empty());
    }

    #[tokio::test]
    async fn test_view_switching_is_unconditional() {
        let (_, shell) = setup();

        shell.set_view(ViewState::Gallery, viewport()).await.unwrap();
        assert_eq!(shell.current_view(), ViewState::Gallery);

        shell.set_view(ViewState::Home, viewport()).await.unwrap();
        assert_eq!(shell.current_view(), ViewState::Home);
    }

    #[tokio::test]
    async fn test_entering_browser_creates_one_webview() {
        let (bridge, shell) = setup();

        shell.set_view(ViewState::Browser, viewport()).await.unwrap();

        assert_eq!(bridge.names(), vec!["create_crunchyroll_webview"]);
        match &bridge.recorded.lock()[0] {
            BridgeCommand::CreateCrunchyrollWebview { url, height, .. } => {
                assert_eq!(url, "https://www.crunchyroll.com");
                assert_eq!(*height, 800 - 80);
            }
            other => panic!("expected create, got {:?}", other),
        }

        let session = shell.browser_session().unwrap();
        assert_eq!(session.phase, SessionPhase::Ready);
        assert_eq!(session.webview_id.as_deref(), Some("webview-1"));
    }

    #[tokio::test]
    async fn test_reentering_browser_view_is_a_noop() {
        let (bridge, shell) = setup();

        shell.set_view(ViewState::Browser, viewport()).await.unwrap();
        shell.set_view(ViewState::Browser, viewport()).await.unwrap();

        // Still exactly one create: re-selection must not spawn a second
        // webview
        assert_eq!(bridge.names(), vec!["create_crunchyroll_webview"]);
    }

    #[tokio::test]
    async fn test_leaving_browser_destroys_exactly_once() {
        let (bridge, shell) = setup();

        shell.set_view(ViewState::Browser, viewport()).await.unwrap();
        shell.set_view(ViewState::Home, viewport()).await.unwrap();

        assert_eq!(
            bridge.names(),
            vec!["create_crunchyroll_webview", "destroy_webview"]
        );
        assert!(shell.browser_session().is_none());

        // Leaving again with no live session issues nothing further
        shell.set_view(ViewState::Gallery, viewport()).await.unwrap();
        assert_eq!(bridge.names().len(), 2);
    }

    #[tokio::test]
    async fn test_leaving_browser_without_identifier_skips_destroy() {
        let (bridge, shell) = setup();

        bridge.fail_next("no backend");
        shell.set_view(ViewState::Browser, viewport()).await.unwrap();
        assert_eq!(
            shell.browser_session().unwrap().phase,
            SessionPhase::Failed
        );

        shell.set_view(ViewState::Home, viewport()).await.unwrap();
        assert_eq!(bridge.names(), vec!["create_crunchyroll_webview"]);
    }

    #[tokio::test]
    async fn test_quick_link_navigation_flows_through_session() {
        let (bridge, shell) = setup();
        shell.set_view(ViewState::Browser, viewport()).await.unwrap();

        let link = shell.quick_links()[3];
        shell.navigate(link.url.to_string()).await.unwrap();

        let session = shell.browser_session().unwrap();
        assert_eq!(session.current_url, link.url);
        match &bridge.recorded.lock()[1] {
            BridgeCommand::WebviewNavigate { webview_id, url } => {
                assert_eq!(webview_id, "webview-1");
                assert_eq!(url, link.url);
            }
            other => panic!("expected navigate, got {:?}", other),
        };
    }

    #[tokio::test]
    async fn test_browser_commands_are_noops_outside_browser_view() {
        let (bridge, shell) = setup();

        shell
            .navigate("https://www.crunchyroll.com".to_string())
            .await
            .unwrap();
        shell.reload().await.unwrap();
        shell.go_back().await;
        shell.retry_browser(viewport()).await.unwrap();

        assert!(bridge.names().is_empty());
    }

    #[tokio::test]
    async fn test_greet_rejects_blank_names_locally() {
        let (bridge, shell) = setup();

        let state = shell.greet("   ").await;

        assert_eq!(state.error.as_deref(), Some("Please enter a name"));
        assert!(state.greeting.is_none());
        assert!(bridge.names().is_empty());
    }

    #[tokio::test]
    async fn test_greet_round_trip_clears_prior_error() {
        let (bridge, shell) = setup();

        shell.greet("").await;
        let state = shell.greet("Yuki").await;

        assert_eq!(
            state.greeting.as_deref(),
            Some("Hello, Yuki! Greetings from Rust")
        );
        assert!(state.error.is_none());
        assert_eq!(bridge.names(), vec!["greet"]);

        // The stored state matches what the call returned
        assert_eq!(shell.greeting().greeting, state.greeting);
    }

    #[tokio::test]
    async fn test_greet_failure_keeps_previous_greeting() {
        let (bridge, shell) = setup();

        shell.greet("Yuki").await;
        bridge.fail_next("backend offline");
        let state = shell.greet("Rei").await;

        assert_eq!(
            state.greeting.as_deref(),
            Some("Hello, Yuki! Greetings from Rust")
        );
        let message = state.error.unwrap();
        assert!(message.contains("Failed to greet"));
        assert!(message.contains("backend offline"));
    }

    #[tokio::test]
    async fn test_open_external_issues_open_url() {
        let (bridge, shell) = setup();

        let entry = shell.browse_catalog(None, Some("frieren")).remove(0);
        shell
            .open_external(entry.url.clone(), entry.title.clone())
            .await
            .unwrap();

        match &bridge.recorded.lock()[0] {
            BridgeCommand::OpenUrl { url, .. } => assert_eq!(url, &entry.url),
            other => panic!("expected open_url, got {:?}", other),
        };
    }
}
