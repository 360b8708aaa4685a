//! Tabshell — a multi-tab desktop browser shell.
//!
//! Entry point: opens the windowed shell when built with the `gui` feature.
//! Without it, runs a console demo that exercises the headless core.

#[cfg(feature = "gui")]
fn main() {
    tabshell::ui::shell::run();
}

#[cfg(not(feature = "gui"))]
fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                Tabshell v{} — Demo Mode                   ║", env!("CARGO_PKG_VERSION"));
    println!("║        Multi-tab browser shell, running headless             ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_settings();
    demo_navigation_policy();
    demo_tab_lifecycle();
    demo_collections();
    demo_shortcuts();
    demo_app_core();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✓ All core components demonstrated successfully.");
    println!("═══════════════════════════════════════════════════════════════");
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

#[cfg(not(feature = "gui"))]
fn demo_dir(label: &str) -> String {
    let dir = std::env::temp_dir()
        .join("tabshell-demo")
        .join(label)
        .join(format!("{}", std::process::id()));
    dir.to_string_lossy().to_string()
}

#[cfg(not(feature = "gui"))]
fn demo_settings() {
    use tabshell::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
    section("Settings Engine");

    let path = format!("{}/settings.json", demo_dir("settings"));
    let mut engine = SettingsEngine::new(Some(path));
    let settings = engine.load();
    println!("  Homepage: {}", settings.homepage);
    println!("  Search engine: {}", settings.search_engine);
    println!("  Zoom: {}%", settings.zoom);

    engine
        .set_value("searchEngine", serde_json::json!("duckduckgo"))
        .unwrap();
    println!("  Changed search engine to: {}", engine.get_settings().search_engine);

    let zoom = engine.adjust_zoom(25);
    println!("  Zoomed in to {}%", zoom);
    println!("  ✓ SettingsEngine OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_navigation_policy() {
    use tabshell::services::navigation;
    section("Navigation Policy");

    for input in ["example.com", "http://example.com", "hello world"] {
        let url = navigation::normalize_input(input, "google").unwrap();
        println!("  {:?} -> {}", input, url);
    }
    println!("  ✓ Navigation OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_tab_lifecycle() {
    use tabshell::managers::tab_controller::{TabController, TabControllerTrait};
    use tabshell::managers::tab_registry::TabRegistryTrait;
    use tabshell::page_view::HeadlessViewFactory;
    use tabshell::services::collection_store::{CollectionStore, CollectionStoreTrait};
    use tabshell::types::events::PageViewEvent;
    use tabshell::types::settings::BrowserSettings;
    section("Tab Lifecycle");

    let settings = BrowserSettings::default();
    let mut store = CollectionStore::new(Some(demo_dir("tabs")));
    let mut tabs = TabController::new(Box::new(HeadlessViewFactory));

    let first = tabs.create_tab(&settings, None);
    let second = tabs.create_tab(&settings, Some("https://example.com"));
    println!("  Opened {} tabs, active: {:?}", tabs.registry().len(), tabs.registry().active_id());

    // Synthetic engine events for the second tab.
    tabs.handle_event(&mut store, &settings, second, PageViewEvent::NavigationStarted);
    tabs.handle_event(
        &mut store,
        &settings,
        second,
        PageViewEvent::TitleChanged("Example Domain".to_string()),
    );
    tabs.handle_event(&mut store, &settings, second, PageViewEvent::NavigationStopped);
    let tab = tabs.registry().get(second).unwrap();
    println!("  Tab {}: \"{}\" at {} (loading: {})", tab.id, tab.title, tab.url, tab.loading);
    println!("  Recorded {} history entries", store.history().len());

    tabs.close_tab(&settings, second);
    println!(
        "  Closed active tab; {} remain, active: {:?}",
        tabs.registry().len(),
        tabs.registry().active_id()
    );
    assert_eq!(tabs.registry().active_id(), Some(first));
    println!("  ✓ TabController OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_collections() {
    use tabshell::services::collection_store::{CollectionStore, CollectionStoreTrait};
    section("Persisted Collections");

    let mut store = CollectionStore::new(Some(demo_dir("collections")));
    store.load();

    let bookmark = store
        .add_bookmark("Example", "https://example.com")
        .unwrap();
    println!("  Added bookmark #{}: {}", bookmark.id, bookmark.url);

    store.add_history("Rust", "https://www.rust-lang.org").unwrap();
    store.add_history("Example", "https://example.com").unwrap();
    store.add_history("Rust again", "https://www.rust-lang.org").unwrap();
    println!(
        "  History after dedupe: {} entries, newest: {}",
        store.history().len(),
        store.history()[0].url
    );

    let bookmarked = store.toggle_bookmark("Example", "https://example.com").unwrap();
    println!("  Toggled bookmark off: bookmarked = {}", bookmarked);
    println!("  ✓ CollectionStore OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_shortcuts() {
    use tabshell::managers::shortcut_manager::{ShortcutManager, ShortcutManagerTrait};
    section("Keyboard Shortcuts");

    let mut mgr = ShortcutManager::new();
    println!("  {} default bindings", mgr.list_shortcuts().len());
    println!("  new_tab -> {}", mgr.get_shortcut("new_tab").unwrap());
    println!("  Ctrl+T -> {:?}", mgr.action_for_keys("Ctrl+T"));

    match mgr.register_shortcut("my_action", "Ctrl+T") {
        Err(e) => println!("  Conflict rejected: {}", e),
        Ok(_) => println!("  Unexpectedly registered a conflicting binding"),
    }
    println!("  ✓ ShortcutManager OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_app_core() {
    use tabshell::app::{App, AutoConfirm};
    use tabshell::managers::tab_controller::TabControllerTrait;
    use tabshell::page_view::HeadlessViewFactory;
    use tabshell::services::settings_engine::SettingsEngineTrait;
    use tabshell::types::events::PageViewEvent;
    section("App Core (full lifecycle)");

    let dir = demo_dir("app");
    let mut app = App::with_paths(
        Box::new(HeadlessViewFactory),
        Some(format!("{}/settings.json", dir)),
        Some(dir),
    );
    app.startup();
    println!("  Startup: settings + collections loaded");

    let id = {
        let settings = app.settings.get_settings().clone();
        app.tabs.create_tab(&settings, Some("https://www.rust-lang.org"))
    };
    app.handle_page_event(id, PageViewEvent::TitleChanged("Rust".to_string()));
    app.handle_page_event(id, PageViewEvent::NavigationStopped);

    let bookmarked = app.toggle_bookmark_for_active_tab();
    println!("  Bookmarked active tab: {:?}", bookmarked);
    println!("  Suggestions for \"rust\": {}", app.suggest("rust").len());

    app.clear_history(&AutoConfirm);
    app.shutdown();
    println!("  Shutdown: settings flushed");
    println!("  ✓ App Core OK");
}
