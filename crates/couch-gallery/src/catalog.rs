//! Anime catalog
//!
//! The gallery view shows a fixed showcase of popular series that open on
//! Crunchyroll. Entries can be narrowed by category and by a quick text
//! search; both filters compose.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Action,
    Comedy,
    Romance,
    Fantasy,
    SliceOfLife,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Action => "action",
            Category::Comedy => "comedy",
            Category::Romance => "romance",
            Category::Fantasy => "fantasy",
            Category::SliceOfLife => "slice-of-life",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "action" => Ok(Category::Action),
            "comedy" => Ok(Category::Comedy),
            "romance" => Ok(Category::Romance),
            "fantasy" => Ok(Category::Fantasy),
            "slice-of-life" => Ok(Category::SliceOfLife),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub title: String,
    pub url: String,
    pub category: Category,
}

impl CatalogEntry {
    fn new(title: &str, slug: &str, category: Category) -> Self {
        Self {
            title: title.to_string(),
            url: format!("https://www.crunchyroll.com/series/{}", slug),
            category,
        }
    }
}

pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// The built-in showcase.
    pub fn builtin() -> Self {
        let entries = vec![
            CatalogEntry::new("One Piece", "one-piece", Category::Action),
            CatalogEntry::new("Jujutsu Kaisen", "jujutsu-kaisen", Category::Action),
            CatalogEntry::new(
                "Demon Slayer: Kimetsu no Yaiba",
                "demon-slayer-kimetsu-no-yaiba",
                Category::Action,
            ),
            CatalogEntry::new("Attack on Titan", "attack-on-titan", Category::Action),
            CatalogEntry::new("Chainsaw Man", "chainsaw-man", Category::Action),
            CatalogEntry::new("Spy x Family", "spy-x-family", Category::Comedy),
            CatalogEntry::new(
                "Kaguya-sama: Love Is War",
                "kaguya-sama-love-is-war",
                Category::Romance,
            ),
            CatalogEntry::new("Horimiya", "horimiya", Category::Romance),
            CatalogEntry::new(
                "Frieren: Beyond Journey's End",
                "frieren-beyond-journeys-end",
                Category::Fantasy,
            ),
            CatalogEntry::new(
                "Mushoku Tensei: Jobless Reincarnation",
                "mushoku-tensei-jobless-reincarnation",
                Category::Fantasy,
            ),
            CatalogEntry::new("Laid-Back Camp", "laid-back-camp", Category::SliceOfLife),
            CatalogEntry::new("Bocchi the Rock!", "bocchi-the-rock", Category::SliceOfLife),
        ];

        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Narrow the showcase by category and/or case-insensitive title match.
    /// `None` / empty query leave the corresponding filter off.
    pub fn browse(&self, category: Option<Category>, query: Option<&str>) -> Vec<CatalogEntry> {
        let needle = query.map(|q| q.trim().to_lowercase()).unwrap_or_default();

        self.entries
            .iter()
            .filter(|entry| category.is_none_or(|c| entry.category == c))
            .filter(|entry| needle.is_empty() || entry.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
