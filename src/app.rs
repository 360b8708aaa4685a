//! App Core for Tabshell.
//!
//! Central struct wiring the settings engine, the collections store, the tab
//! lifecycle controller, and the shortcut manager together. Components never
//! reach for globals; whatever they need is passed in explicitly.

use crate::managers::shortcut_manager::ShortcutManager;
use crate::managers::tab_controller::TabController;
use crate::page_view::PageViewFactory;
use crate::services::collection_store::CollectionStore;
use crate::services::navigation::{self, Suggestion};
use crate::services::settings_engine::SettingsEngine;
use crate::types::events::PageViewEvent;
use crate::types::tab::TabId;

/// Yes/no decision supplied by the host UI before a destructive operation.
pub trait ConfirmationPrompt {
    fn confirm(&self, message: &str) -> bool;
}

/// Prompt that approves everything; used by non-interactive surfaces.
pub struct AutoConfirm;

impl ConfirmationPrompt for AutoConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

/// Central application struct holding all managers and services.
pub struct App {
    pub settings: SettingsEngine,
    pub collections: CollectionStore,
    pub tabs: TabController,
    pub shortcuts: ShortcutManager,
}

impl App {
    /// Creates a new App using the platform-default file locations.
    pub fn new(factory: Box<dyn PageViewFactory>) -> Self {
        Self::with_paths(factory, None, None)
    }

    /// Creates a new App with explicit file locations.
    ///
    /// `settings_path` is the settings file; `data_dir` is the directory
    /// holding the bookmark and history files. `None` picks the platform
    /// default. Tests pass temp paths here.
    pub fn with_paths(
        factory: Box<dyn PageViewFactory>,
        settings_path: Option<String>,
        data_dir: Option<String>,
    ) -> Self {
        Self {
            settings: SettingsEngine::new(settings_path),
            collections: CollectionStore::new(data_dir),
            tabs: TabController::new(factory),
            shortcuts: ShortcutManager::new(),
        }
    }

    /// Startup sequence: load settings and the persisted collections.
    pub fn startup(&mut self) {
        use crate::services::collection_store::CollectionStoreTrait;
        use crate::services::settings_engine::SettingsEngineTrait;

        self.settings.load();
        self.collections.load();
    }

    /// Routes a page-view event into the tab controller, splitting the
    /// borrows so the controller can read settings and write history.
    pub fn handle_page_event(&mut self, id: TabId, event: PageViewEvent) {
        use crate::managers::tab_controller::TabControllerTrait;
        use crate::services::settings_engine::SettingsEngineTrait;

        self.tabs
            .handle_event(&mut self.collections, self.settings.get_settings(), id, event);
    }

    /// Bookmarks the active tab's page, or removes the bookmark if one
    /// already exists for its URL. Returns whether the page is bookmarked
    /// afterwards; `None` when there is no active tab.
    pub fn toggle_bookmark_for_active_tab(&mut self) -> Option<bool> {
        use crate::managers::tab_registry::TabRegistryTrait;
        use crate::services::collection_store::CollectionStoreTrait;

        let (title, url) = match self.tabs.registry().active_tab() {
            Some(tab) => (tab.title.clone(), tab.url.clone()),
            None => return None,
        };
        match self.collections.toggle_bookmark(&title, &url) {
            Ok(added) => Some(added),
            Err(err) => {
                log::warn!("Could not toggle bookmark for {}: {}", url, err);
                None
            }
        }
    }

    /// Clears the browsing history if the prompt approves. Returns whether
    /// the history was cleared.
    pub fn clear_history(&mut self, prompt: &dyn ConfirmationPrompt) -> bool {
        use crate::services::collection_store::CollectionStoreTrait;

        if !prompt.confirm("Clear all browsing history?") {
            return false;
        }
        self.collections.clear_history();
        true
    }

    /// Address-bar suggestions for a partial input.
    pub fn suggest(&self, query: &str) -> Vec<Suggestion> {
        use crate::services::collection_store::CollectionStoreTrait;

        navigation::suggestions(self.collections.history(), self.collections.bookmarks(), query)
    }

    /// Shutdown sequence: flush settings to disk.
    pub fn shutdown(&mut self) {
        use crate::services::settings_engine::SettingsEngineTrait;

        if let Err(err) = self.settings.save() {
            log::warn!("Could not flush settings on shutdown: {}", err);
        }
    }
}
