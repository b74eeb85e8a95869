//! Browser quick links

use serde::Serialize;

/// A predefined navigation shortcut offered in the browser control bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickLink {
    pub label: &'static str,
    pub url: &'static str,
}

const QUICK_LINKS: &[QuickLink] = &[
    QuickLink {
        label: "Home",
        url: "https://www.crunchyroll.com",
    },
    QuickLink {
        label: "Browse",
        url: "https://www.crunchyroll.com/videos/anime",
    },
    QuickLink {
        label: "Popular",
        url: "https://www.crunchyroll.com/videos/anime/popular",
    },
    QuickLink {
        label: "Simulcasts",
        url: "https://www.crunchyroll.com/simulcasts",
    },
    QuickLink {
        label: "My List",
        url: "https://www.crunchyroll.com/watchlist",
    },
];

pub fn quick_links() -> &'static [QuickLink] {
    QUICK_LINKS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_links_are_the_five_shortcuts() {
        let links = quick_links();

        assert_eq!(links.len(), 5);
        assert_eq!(links[0].label, "Home");
        assert_eq!(links[0].url, "https://www.crunchyroll.com");
    }

    #[test]
    fn test_quick_links_are_https() {
        for link in quick_links() {
            assert!(link.url.starts_with("https://"), "{}", link.url);
        }
    }
}
