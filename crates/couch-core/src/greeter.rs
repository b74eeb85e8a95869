//! Greeting demo
//!
//! The home screen's round-trip demo: send a name to the native side,
//! show the reply. Empty input never reaches the bridge.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;

use couch_bridge::{BridgeCommand, BridgeResponse, CommandBridge};

#[derive(Debug, Clone, Default, Serialize)]
pub struct GreetingState {
    pub greeting: Option<String>,
    pub error: Option<String>,
}

pub struct Greeter {
    bridge: Arc<dyn CommandBridge>,
    state: Mutex<GreetingState>,
}

impl Greeter {
    pub fn new(bridge: Arc<dyn CommandBridge>) -> Self {
        Self {
            bridge,
            state: Mutex::new(GreetingState::default()),
        }
    }

    pub fn state(&self) -> GreetingState {
        self.state.lock().clone()
    }

    /// Submit a name. Whitespace-only input is rejected locally; a bridge
    /// failure keeps the previous greeting on display.
    pub async fn greet(&self, name: &str) -> GreetingState {
        if name.trim().is_empty() {
            let mut state = self.state.lock();
            state.error = Some("Please enter a name".to_string());
            return state.clone();
        }

        let outcome = self
            .bridge
            .invoke(BridgeCommand::Greet {
                name: name.to_string(),
            })
            .await
            .and_then(BridgeResponse::into_greeting);

        let mut state = self.state.lock();
        match outcome {
            Ok(greeting) => {
                state.greeting = Some(greeting);
                state.error = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "greet failed");
                state.error = Some(format!("Failed to greet: {}", e));
            }
        }
        state.clone()
    }
}
