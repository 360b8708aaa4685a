//! Property-based tests for the history collection: URL dedupe,
//! most-recent-first ordering, and the 1,000-entry cap.

use proptest::prelude::*;
use tempfile::TempDir;

use tabshell::services::collection_store::{CollectionStore, CollectionStoreTrait};

fn setup() -> (CollectionStore, TempDir) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let mut store = CollectionStore::new(Some(tmp.path().to_string_lossy().to_string()));
    store.load();
    (store, tmp)
}

/// Visits drawn from a small URL pool so collisions are common.
fn arb_visits() -> impl Strategy<Value = Vec<(String, u8)>> {
    prop::collection::vec(("[a-z]{0,8}", 0..12u8), 1..60)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    // **Property 1: at most one entry per URL, newest first**
    //
    // However visits interleave, each URL appears at most once, the most
    // recent visit sits at the front, and its title is the latest one.
    #[test]
    fn history_dedupes_by_url(visits in arb_visits()) {
        let (mut store, _tmp) = setup();

        for (title, slot) in &visits {
            let url = format!("https://site-{}.example", slot);
            store.add_history(title, &url).unwrap();

            prop_assert_eq!(store.history()[0].url.clone(), url.clone());
            prop_assert_eq!(&store.history()[0].title, title);
            let occurrences = store.history().iter().filter(|e| e.url == url).count();
            prop_assert_eq!(occurrences, 1);
        }

        // Total length equals the number of distinct URLs visited.
        let mut distinct: Vec<u8> = visits.iter().map(|(_, slot)| *slot).collect();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(store.history().len(), distinct.len());
    }

    // **Property 2: re-adding the front entry is idempotent on count**
    #[test]
    fn readding_front_url_keeps_count(title in "[a-z]{1,8}", second_title in "[a-z]{1,8}") {
        let (mut store, _tmp) = setup();
        store.add_history(&title, "https://example.com").unwrap();
        let count = store.history().len();
        store.add_history(&second_title, "https://example.com").unwrap();
        prop_assert_eq!(store.history().len(), count);
        prop_assert_eq!(&store.history()[0].title, &second_title);
    }

    // **Property 3: every entry carries a distinct id**
    #[test]
    fn history_ids_unique(visits in arb_visits()) {
        let (mut store, _tmp) = setup();
        for (title, slot) in &visits {
            store
                .add_history(title, &format!("https://site-{}.example", slot))
                .unwrap();
        }
        let mut ids: Vec<i64> = store.history().iter().map(|e| e.id).collect();
        let len = ids.len();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), len);
    }
}

// The cap check needs exactly 1,001 distinct URLs, so it runs as a plain
// test rather than a generated one.
#[test]
fn history_capped_at_1000_entries() {
    let (mut store, _tmp) = setup();
    for i in 0..1001 {
        store
            .add_history(&format!("Page {}", i), &format!("https://example.com/{}", i))
            .unwrap();
    }
    assert_eq!(store.history().len(), 1000);
    assert_eq!(store.history()[0].url, "https://example.com/1000");
    assert_eq!(store.history()[999].url, "https://example.com/1");
}

#[test]
fn clear_history_then_reload_stays_empty() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().to_string_lossy().to_string();

    let mut store = CollectionStore::new(Some(dir.clone()));
    store.load();
    store.add_history("Example", "https://example.com").unwrap();
    store.clear_history();

    let mut reloaded = CollectionStore::new(Some(dir));
    reloaded.load();
    assert!(reloaded.history().is_empty());
}
