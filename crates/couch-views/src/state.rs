//! Top-level view states

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    /// Landing screen with the feature cards
    #[default]
    Home,
    /// Static anime-link gallery
    Gallery,
    /// Embedded Crunchyroll browser
    Browser,
}

impl ViewState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewState::Home => "home",
            ViewState::Gallery => "gallery",
            ViewState::Browser => "browser",
        }
    }
}

impl std::fmt::Display for ViewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ViewState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" => Ok(ViewState::Home),
            "gallery" => Ok(ViewState::Gallery),
            "browser" => Ok(ViewState::Browser),
            _ => Err(format!("Unknown view: {}", s)),
        }
    }
}
