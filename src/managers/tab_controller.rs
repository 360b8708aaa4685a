use std::collections::HashMap;

use crate::managers::tab_registry::{TabRegistry, TabRegistryTrait};
use crate::page_view::{PageView, PageViewFactory};
use crate::services::collection_store::{CollectionStore, CollectionStoreTrait};
use crate::services::navigation;
use crate::types::events::PageViewEvent;
use crate::types::settings::BrowserSettings;
use crate::types::tab::{TabId, WindowDirective};

/// Trait defining the tab lifecycle interface.
///
/// Settings and the collections store are passed in by the caller; the
/// controller holds no reference to either.
pub trait TabControllerTrait {
    fn create_tab(&mut self, settings: &BrowserSettings, url: Option<&str>) -> TabId;
    fn navigate(&mut self, settings: &BrowserSettings, id: TabId, input: &str);
    fn close_tab(&mut self, settings: &BrowserSettings, id: TabId) -> WindowDirective;
    fn go_back(&mut self, id: TabId) -> Option<String>;
    fn go_forward(&mut self, id: TabId) -> Option<String>;
    fn reload(&mut self, id: TabId);
    fn handle_event(
        &mut self,
        store: &mut CollectionStore,
        settings: &BrowserSettings,
        id: TabId,
        event: PageViewEvent,
    );
}

/// Drives tab lifecycle: the only component that creates or destroys page
/// views, and the single dispatch point for their asynchronous events.
pub struct TabController {
    registry: TabRegistry,
    views: HashMap<TabId, Box<dyn PageView>>,
    factory: Box<dyn PageViewFactory>,
}

impl TabController {
    pub fn new(factory: Box<dyn PageViewFactory>) -> Self {
        Self {
            registry: TabRegistry::new(),
            views: HashMap::new(),
            factory,
        }
    }

    /// Read access to the session state table.
    pub fn registry(&self) -> &TabRegistry {
        &self.registry
    }

    /// Mutable access for UI adapters that subscribe to change
    /// notifications.
    pub fn registry_mut(&mut self) -> &mut TabRegistry {
        &mut self.registry
    }

    /// Appends the tab's current title and URL to the history collection.
    /// Internal pages are skipped; a failed write is logged and dropped.
    fn record_visit(&self, store: &mut CollectionStore, id: TabId) {
        let (title, url) = match self.registry.get(id) {
            Some(tab) => (tab.title.clone(), tab.url.clone()),
            None => return,
        };
        if url.starts_with("about:") {
            return;
        }
        if let Err(err) = store.add_history(&title, &url) {
            log::warn!("Failed to record visit to {}: {}", url, err);
        }
    }
}

impl TabControllerTrait for TabController {
    /// Create a tab: a fresh record, a page view bound to its id, and an
    /// initial navigation to the given URL or the configured homepage. The
    /// new tab becomes active. Passing `about:blank` leaves the view blank.
    fn create_tab(&mut self, settings: &BrowserSettings, url: Option<&str>) -> TabId {
        let id = self.registry.insert(navigation::ABOUT_BLANK);
        self.views.insert(id, self.factory.create_view(id));
        self.registry.set_active(id);

        let target = url.unwrap_or(settings.homepage.as_str());
        if target != navigation::ABOUT_BLANK {
            self.navigate(settings, id, target);
        }
        id
    }

    /// Resolve address-bar input and start loading it. The record's URL is
    /// updated immediately so the UI reflects the target before the engine
    /// confirms it; the committed URL overwrites it later. Empty input and
    /// unknown ids do nothing.
    fn navigate(&mut self, settings: &BrowserSettings, id: TabId, input: &str) {
        if self.registry.get(id).is_none() {
            return;
        }
        let url = match navigation::normalize_input(input, &settings.search_engine) {
            Some(url) => url,
            None => return,
        };
        self.registry.set_url(id, &url);
        if let Some(view) = self.views.get_mut(&id) {
            view.load_url(&url);
        }
    }

    /// Close a tab. Closing the active tab activates the most recently
    /// created remaining one. Closing the last tab either spawns a fresh
    /// default tab or, when `closeWindowOnLastTab` is set, tells the owning
    /// window to close.
    fn close_tab(&mut self, settings: &BrowserSettings, id: TabId) -> WindowDirective {
        let was_active = self.registry.active_id() == Some(id);
        if !self.registry.remove(id) {
            return WindowDirective::Keep;
        }
        self.views.remove(&id);

        if self.registry.is_empty() {
            if settings.close_window_on_last_tab {
                return WindowDirective::Close;
            }
            self.create_tab(settings, None);
            return WindowDirective::Keep;
        }

        if was_active {
            // Most recently created wins, not most recently used.
            if let Some(last) = self.registry.list().last().map(|t| t.id) {
                self.registry.set_active(last);
            }
        }
        WindowDirective::Keep
    }

    /// Step the tab's view back one history entry, if the record says an
    /// earlier entry exists. Returns the URL stepped to so the embedding
    /// shell can load it; the registry record catches up when the engine
    /// reports the committed navigation.
    fn go_back(&mut self, id: TabId) -> Option<String> {
        let allowed = self.registry.get(id).map(|t| t.can_go_back).unwrap_or(false);
        if !allowed {
            return None;
        }
        let view = self.views.get_mut(&id)?;
        if !view.go_back() {
            return None;
        }
        view.current_url().map(str::to_string)
    }

    /// Step the tab's view forward one history entry, if the record says a
    /// later entry exists. Returns the URL stepped to, as [`go_back`] does.
    ///
    /// [`go_back`]: TabControllerTrait::go_back
    fn go_forward(&mut self, id: TabId) -> Option<String> {
        let allowed = self
            .registry
            .get(id)
            .map(|t| t.can_go_forward)
            .unwrap_or(false);
        if !allowed {
            return None;
        }
        let view = self.views.get_mut(&id)?;
        if !view.go_forward() {
            return None;
        }
        view.current_url().map(str::to_string)
    }

    fn reload(&mut self, id: TabId) {
        if let Some(view) = self.views.get_mut(&id) {
            view.reload();
        }
    }

    /// React to an asynchronous page-view event by mutating the session
    /// state table. Events for ids no longer in the table are dropped, so a
    /// late event from a closed tab cannot touch anything.
    fn handle_event(
        &mut self,
        store: &mut CollectionStore,
        settings: &BrowserSettings,
        id: TabId,
        event: PageViewEvent,
    ) {
        if self.registry.get(id).is_none() {
            log::debug!("Dropping event for unknown tab {}: {:?}", id, event);
            return;
        }
        match event {
            PageViewEvent::NavigationStarted => {
                self.registry.set_loading(id, true);
            }
            PageViewEvent::NavigationStopped => {
                self.registry.set_loading(id, false);
                if let Some(view) = self.views.get(&id) {
                    let (back, forward) = (view.can_go_back(), view.can_go_forward());
                    self.registry.set_nav_state(id, back, forward);
                }
                self.record_visit(store, id);
            }
            PageViewEvent::TitleChanged(title) => {
                self.registry.set_title(id, &title);
            }
            PageViewEvent::FaviconChanged(favicon) => {
                self.registry.set_favicon(id, &favicon);
            }
            PageViewEvent::NavigationCommitted(url) => {
                // The committed URL wins over any optimistic value.
                self.registry.set_url(id, &url);
                // Engine-driven navigations (link clicks, redirects) also
                // advance the view's history model.
                if let Some(view) = self.views.get_mut(&id) {
                    if view.current_url() != Some(url.as_str()) {
                        view.load_url(&url);
                    }
                }
            }
            PageViewEvent::LoadFailed(reason) => {
                log::warn!("Tab {} failed to load: {}", id, reason);
                self.registry.set_title(id, "Failed to load");
            }
            PageViewEvent::NewWindowRequested(url) => {
                self.create_tab(settings, Some(&url));
            }
        }
    }
}
