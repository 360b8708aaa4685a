use serde::Serialize;

use crate::types::bookmark::Bookmark;
use crate::types::history::HistoryEntry;

/// Sentinel URL for a tab that has not navigated anywhere yet.
pub const ABOUT_BLANK: &str = "about:blank";

/// Maximum number of history entries offered as address-bar suggestions.
const HISTORY_SUGGESTION_LIMIT: usize = 5;
/// Maximum number of bookmarks offered as address-bar suggestions.
const BOOKMARK_SUGGESTION_LIMIT: usize = 3;

/// Where an address-bar suggestion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionSource {
    History,
    Bookmark,
}

/// A single address-bar suggestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub title: String,
    pub url: String,
    pub source: SuggestionSource,
}

/// Turns raw address-bar input into a loadable URL.
///
/// Input carrying a recognized scheme passes through unchanged; something
/// that looks like a bare domain gets `https://` prepended; everything else
/// becomes a query against the configured search engine. Returns `None` for
/// empty or whitespace-only input.
pub fn normalize_input(input: &str, engine: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with("http://")
        || trimmed.starts_with("https://")
        || trimmed.starts_with("file://")
        || trimmed.starts_with("about:")
    {
        return Some(trimmed.to_string());
    }
    if trimmed.contains('.') && !trimmed.chars().any(char::is_whitespace) {
        return Some(format!("https://{}", trimmed));
    }
    Some(search_url(engine, trimmed))
}

/// Builds a search URL for the given engine name. Unknown engines fall back
/// to Google.
pub fn search_url(engine: &str, query: &str) -> String {
    let encoded = urlencoding::encode(query);
    match engine {
        "bing" => format!("https://www.bing.com/search?q={}", encoded),
        "duckduckgo" => format!("https://duckduckgo.com/?q={}", encoded),
        "yahoo" => format!("https://search.yahoo.com/search?p={}", encoded),
        "yandex" => format!("https://yandex.com/search/?text={}", encoded),
        _ => format!("https://www.google.com/search?q={}", encoded),
    }
}

/// Collects address-bar suggestions for a partial input: up to five history
/// entries followed by up to three bookmarks, matched case-insensitively
/// against title and URL.
pub fn suggestions(
    history: &[HistoryEntry],
    bookmarks: &[Bookmark],
    query: &str,
) -> Vec<Suggestion> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    let matches = |title: &str, url: &str| {
        title.to_lowercase().contains(&needle) || url.to_lowercase().contains(&needle)
    };

    let mut out: Vec<Suggestion> = history
        .iter()
        .filter(|entry| matches(&entry.title, &entry.url))
        .take(HISTORY_SUGGESTION_LIMIT)
        .map(|entry| Suggestion {
            title: entry.title.clone(),
            url: entry.url.clone(),
            source: SuggestionSource::History,
        })
        .collect();

    out.extend(
        bookmarks
            .iter()
            .filter(|bookmark| matches(&bookmark.title, &bookmark.url))
            .take(BOOKMARK_SUGGESTION_LIMIT)
            .map(|bookmark| Suggestion {
                title: bookmark.title.clone(),
                url: bookmark.url.clone(),
                source: SuggestionSource::Bookmark,
            }),
    );

    out
}
