//! Unit tests for the session state table: id allocation, activation rules,
//! and minimal-diff change notifications.

use std::sync::{Arc, Mutex};

use tabshell::managers::tab_registry::{TabRegistry, TabRegistryTrait};
use tabshell::types::tab::{TabField, TabId};

/// Subscribes a listener that collects every notification into a shared log.
fn subscribe_log(registry: &mut TabRegistry) -> Arc<Mutex<Vec<(TabId, Vec<TabField>)>>> {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = log.clone();
    registry.subscribe(Box::new(move |id, fields| {
        sink.lock().unwrap().push((id, fields.to_vec()));
    }));
    log
}

#[test]
fn test_insert_returns_unique_monotonic_ids() {
    let mut registry = TabRegistry::new();
    let a = registry.insert("about:blank");
    let b = registry.insert("about:blank");
    assert_ne!(a, b);
    assert!(a < b);
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_first_insert_becomes_active() {
    let mut registry = TabRegistry::new();
    let a = registry.insert("about:blank");
    registry.insert("about:blank");
    assert_eq!(registry.active_id(), Some(a));
}

#[test]
fn test_insert_defaults() {
    let mut registry = TabRegistry::new();
    let id = registry.insert("https://example.com");
    let tab = registry.get(id).unwrap();
    assert_eq!(tab.title, "New Tab");
    assert_eq!(tab.url, "https://example.com");
    assert_eq!(tab.favicon, None);
    assert!(!tab.loading);
    assert!(!tab.can_go_back);
    assert!(!tab.can_go_forward);
}

#[test]
fn test_ids_never_reused_after_remove() {
    let mut registry = TabRegistry::new();
    let a = registry.insert("about:blank");
    registry.remove(a);
    let b = registry.insert("about:blank");
    assert_ne!(a, b);
    assert!(b > a);
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let mut registry = TabRegistry::new();
    registry.insert("about:blank");
    assert!(!registry.remove(TabId(999)));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_remove_active_clears_marker_without_reselecting() {
    let mut registry = TabRegistry::new();
    let a = registry.insert("about:blank");
    registry.insert("about:blank");
    assert!(registry.remove(a));
    // Activation policy belongs to the controller, not the table.
    assert_eq!(registry.active_id(), None);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_set_active_unknown_id_is_silent_noop() {
    let mut registry = TabRegistry::new();
    let a = registry.insert("about:blank");
    registry.set_active(TabId(42));
    assert_eq!(registry.active_id(), Some(a));
}

#[test]
fn test_set_active_marks_exactly_one() {
    let mut registry = TabRegistry::new();
    let a = registry.insert("about:blank");
    let b = registry.insert("about:blank");
    registry.set_active(b);
    assert_eq!(registry.active_id(), Some(b));
    registry.set_active(a);
    assert_eq!(registry.active_id(), Some(a));
    assert_eq!(registry.active_tab().unwrap().id, a);
}

#[test]
fn test_list_preserves_creation_order() {
    let mut registry = TabRegistry::new();
    let a = registry.insert("about:blank");
    let b = registry.insert("about:blank");
    let c = registry.insert("about:blank");
    registry.remove(b);
    let ids: Vec<TabId> = registry.list().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![a, c]);
}

#[test]
fn test_field_update_notifies_changed_field_only() {
    let mut registry = TabRegistry::new();
    let id = registry.insert("about:blank");
    let log = subscribe_log(&mut registry);

    registry.set_title(id, "Example");
    registry.set_loading(id, true);

    let notifications = log.lock().unwrap();
    assert_eq!(notifications.len(), 2);
    assert_eq!(notifications[0], (id, vec![TabField::Title]));
    assert_eq!(notifications[1], (id, vec![TabField::Loading]));
}

#[test]
fn test_same_value_write_is_silent() {
    let mut registry = TabRegistry::new();
    let id = registry.insert("about:blank");
    registry.set_title(id, "Example");
    let log = subscribe_log(&mut registry);

    registry.set_title(id, "Example");
    registry.set_loading(id, false);
    registry.set_url(id, "about:blank");

    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn test_field_update_unknown_id_is_silent_noop() {
    let mut registry = TabRegistry::new();
    registry.insert("about:blank");
    let log = subscribe_log(&mut registry);

    registry.set_title(TabId(77), "ghost");
    registry.set_nav_state(TabId(77), true, true);

    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn test_set_nav_state_notifies_only_flags_that_changed() {
    let mut registry = TabRegistry::new();
    let id = registry.insert("about:blank");
    let log = subscribe_log(&mut registry);

    registry.set_nav_state(id, true, false);
    registry.set_nav_state(id, true, true);
    registry.set_nav_state(id, false, false);

    let notifications = log.lock().unwrap();
    assert_eq!(notifications[0].1, vec![TabField::CanGoBack]);
    assert_eq!(notifications[1].1, vec![TabField::CanGoForward]);
    assert_eq!(
        notifications[2].1,
        vec![TabField::CanGoBack, TabField::CanGoForward]
    );
}

#[test]
fn test_set_favicon() {
    let mut registry = TabRegistry::new();
    let id = registry.insert("about:blank");
    registry.set_favicon(id, "https://example.com/favicon.ico");
    assert_eq!(
        registry.get(id).unwrap().favicon.as_deref(),
        Some("https://example.com/favicon.ico")
    );
}

#[test]
fn test_tab_serializes_camel_case() {
    let mut registry = TabRegistry::new();
    let id = registry.insert("https://example.com");
    registry.set_nav_state(id, true, false);
    let json = serde_json::to_value(registry.get(id).unwrap()).unwrap();
    assert_eq!(json["canGoBack"], serde_json::json!(true));
    assert_eq!(json["canGoForward"], serde_json::json!(false));
    assert!(json.get("can_go_back").is_none());
}
