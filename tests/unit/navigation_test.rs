//! Unit tests for address-bar input normalization, search URLs, and
//! suggestions.

use rstest::rstest;

use tabshell::services::navigation::{
    normalize_input, search_url, suggestions, SuggestionSource,
};
use tabshell::types::bookmark::Bookmark;
use tabshell::types::history::HistoryEntry;

// ─── Normalization policy ───

#[rstest]
#[case("http://example.com", "http://example.com")]
#[case("https://example.com/path?q=1", "https://example.com/path?q=1")]
#[case("file:///home/user/page.html", "file:///home/user/page.html")]
#[case("about:blank", "about:blank")]
#[case("example.com", "https://example.com")]
#[case("sub.domain.example.co.uk", "https://sub.domain.example.co.uk")]
#[case("localhost.localdomain:8080", "https://localhost.localdomain:8080")]
fn test_normalize_passthrough_and_domains(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(normalize_input(input, "google").as_deref(), Some(expected));
}

#[rstest]
#[case("hello world", "https://www.google.com/search?q=hello%20world")]
#[case("rust", "https://www.google.com/search?q=rust")]
#[case("what is a.b c", "https://www.google.com/search?q=what%20is%20a.b%20c")]
fn test_normalize_search_fallback(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(normalize_input(input, "google").as_deref(), Some(expected));
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn test_normalize_empty_input_is_none(#[case] input: &str) {
    assert_eq!(normalize_input(input, "google"), None);
}

#[test]
fn test_normalize_trims_surrounding_whitespace() {
    assert_eq!(
        normalize_input("  example.com  ", "google").as_deref(),
        Some("https://example.com")
    );
}

// ─── Search engine table ───

#[rstest]
#[case("google", "https://www.google.com/search?q=rust")]
#[case("bing", "https://www.bing.com/search?q=rust")]
#[case("duckduckgo", "https://duckduckgo.com/?q=rust")]
#[case("yahoo", "https://search.yahoo.com/search?p=rust")]
#[case("yandex", "https://yandex.com/search/?text=rust")]
#[case("altavista", "https://www.google.com/search?q=rust")]
fn test_search_url_engine_table(#[case] engine: &str, #[case] expected: &str) {
    assert_eq!(search_url(engine, "rust"), expected);
}

#[test]
fn test_search_url_percent_encodes_query() {
    let url = search_url("google", "a&b=c?d #e");
    assert!(url.contains("a%26b%3Dc%3Fd%20%23e"), "got {}", url);
}

// ─── Suggestions ───

fn history_entry(title: &str, url: &str) -> HistoryEntry {
    HistoryEntry {
        id: 1,
        title: title.to_string(),
        url: url.to_string(),
        visited_at: chrono::Utc::now(),
    }
}

fn bookmark(title: &str, url: &str) -> Bookmark {
    Bookmark {
        id: 1,
        title: title.to_string(),
        url: url.to_string(),
        created_at: chrono::Utc::now(),
    }
}

#[test]
fn test_suggestions_empty_query_yields_nothing() {
    let history = vec![history_entry("Rust", "https://www.rust-lang.org")];
    assert!(suggestions(&history, &[], "").is_empty());
    assert!(suggestions(&history, &[], "   ").is_empty());
}

#[test]
fn test_suggestions_match_title_and_url_case_insensitively() {
    let history = vec![history_entry("The Rust Book", "https://doc.rust-lang.org/book/")];
    let bookmarks = vec![bookmark("Crates", "https://CRATES.io")];

    let by_title = suggestions(&history, &bookmarks, "RUST");
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].source, SuggestionSource::History);

    let by_url = suggestions(&history, &bookmarks, "crates.io");
    assert_eq!(by_url.len(), 1);
    assert_eq!(by_url[0].source, SuggestionSource::Bookmark);
}

#[test]
fn test_suggestions_history_before_bookmarks() {
    let history = vec![history_entry("Example page", "https://example.com/page")];
    let bookmarks = vec![bookmark("Example home", "https://example.com")];
    let out = suggestions(&history, &bookmarks, "example");
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].source, SuggestionSource::History);
    assert_eq!(out[1].source, SuggestionSource::Bookmark);
}

#[test]
fn test_suggestions_limits() {
    let history: Vec<HistoryEntry> = (0..10)
        .map(|i| history_entry(&format!("Example {}", i), &format!("https://example.com/{}", i)))
        .collect();
    let bookmarks: Vec<Bookmark> = (0..10)
        .map(|i| bookmark(&format!("Example {}", i), &format!("https://example.org/{}", i)))
        .collect();

    let out = suggestions(&history, &bookmarks, "example");
    assert_eq!(out.len(), 8);
    assert_eq!(
        out.iter().filter(|s| s.source == SuggestionSource::History).count(),
        5
    );
    assert_eq!(
        out.iter().filter(|s| s.source == SuggestionSource::Bookmark).count(),
        3
    );
}
