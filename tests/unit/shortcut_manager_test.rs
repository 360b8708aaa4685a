//! Unit tests for keyboard shortcut bindings, conflict detection, and
//! reverse lookup.

use tabshell::managers::shortcut_manager::{ShortcutManager, ShortcutManagerTrait};

fn expected_keys(keys: &str) -> String {
    if cfg!(target_os = "macos") {
        keys.replace("Ctrl+", "Cmd+")
    } else {
        keys.to_string()
    }
}

#[test]
fn test_defaults_cover_core_actions() {
    let mgr = ShortcutManager::new();
    for action in [
        "new_tab",
        "close_tab",
        "reload",
        "back",
        "forward",
        "address_bar",
        "bookmark_page",
        "history",
        "zoom_in",
        "zoom_out",
        "zoom_reset",
        "fullscreen",
        "dev_tools",
        "stop_loading",
        "find",
    ] {
        assert!(
            mgr.get_shortcut(action).is_some(),
            "missing default binding for {}",
            action
        );
    }
}

#[test]
fn test_default_bindings() {
    let mgr = ShortcutManager::new();
    assert_eq!(mgr.get_shortcut("new_tab"), Some(expected_keys("Ctrl+T").as_str()));
    assert_eq!(mgr.get_shortcut("close_tab"), Some(expected_keys("Ctrl+W").as_str()));
    assert_eq!(mgr.get_shortcut("back"), Some("Alt+Left"));
    assert_eq!(mgr.get_shortcut("fullscreen"), Some("F11"));
}

#[test]
fn test_action_for_keys_reverse_lookup() {
    let mgr = ShortcutManager::new();
    assert_eq!(mgr.action_for_keys("Ctrl+T"), Some("new_tab"));
    assert_eq!(mgr.action_for_keys("F12"), Some("dev_tools"));
    assert_eq!(mgr.action_for_keys("Ctrl+Shift+Q"), None);
}

#[test]
fn test_register_custom_shortcut() {
    let mut mgr = ShortcutManager::new();
    mgr.register_shortcut("reopen_tab", "Ctrl+Shift+T").unwrap();
    assert_eq!(
        mgr.get_shortcut("reopen_tab"),
        Some(expected_keys("Ctrl+Shift+T").as_str())
    );
}

#[test]
fn test_register_rejects_conflicting_keys() {
    let mut mgr = ShortcutManager::new();
    let result = mgr.register_shortcut("my_action", "Ctrl+T");
    assert!(result.is_err());
    assert!(mgr.get_shortcut("my_action").is_none());
}

#[test]
fn test_register_same_action_rebind_is_allowed() {
    let mut mgr = ShortcutManager::new();
    let current = mgr.get_shortcut("find").unwrap().to_string();
    mgr.register_shortcut("find", &current).unwrap();
    assert_eq!(mgr.get_shortcut("find").unwrap(), current);
}

#[test]
fn test_register_rejects_empty_keys() {
    let mut mgr = ShortcutManager::new();
    assert!(mgr.register_shortcut("something", "").is_err());
}

#[test]
fn test_unregister_and_reset() {
    let mut mgr = ShortcutManager::new();
    mgr.unregister_shortcut("find").unwrap();
    assert!(mgr.get_shortcut("find").is_none());
    assert!(mgr.unregister_shortcut("find").is_err());

    mgr.reset_to_defaults();
    assert!(mgr.get_shortcut("find").is_some());
}

#[test]
fn test_has_conflict_reports_owning_action() {
    let mgr = ShortcutManager::new();
    assert_eq!(mgr.has_conflict("Ctrl+W", None), Some("close_tab".to_string()));
    assert_eq!(mgr.has_conflict("Ctrl+W", Some("close_tab")), None);
    assert_eq!(mgr.has_conflict("Ctrl+Shift+Z", None), None);
}
