//! Application configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// First page the embedded browser loads
    pub homepage: String,
    /// Initial main-window size in logical pixels
    pub window_width: f64,
    pub window_height: f64,
    /// User agent reported by the embedded webview. Crunchyroll serves a
    /// degraded player to unknown agents, so we present a desktop Chrome
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            homepage: "https://www.crunchyroll.com".to_string(),
            window_width: 1280.0,
            window_height: 800.0,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
        }
    }
}
