use crate::types::tab::{Tab, TabField, TabId};

/// Callback run after a tab record changes, carrying the changed fields.
pub type TabChangeListener = Box<dyn Fn(TabId, &[TabField]) + Send>;

/// Trait defining the session state table interface.
pub trait TabRegistryTrait {
    fn insert(&mut self, url: &str) -> TabId;
    fn remove(&mut self, id: TabId) -> bool;
    fn set_active(&mut self, id: TabId);
    fn get(&self, id: TabId) -> Option<&Tab>;
    fn list(&self) -> &[Tab];
    fn active_id(&self) -> Option<TabId>;
    fn active_tab(&self) -> Option<&Tab>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
    fn set_title(&mut self, id: TabId, title: &str);
    fn set_url(&mut self, id: TabId, url: &str);
    fn set_favicon(&mut self, id: TabId, favicon: &str);
    fn set_loading(&mut self, id: TabId, loading: bool);
    fn set_nav_state(&mut self, id: TabId, can_go_back: bool, can_go_forward: bool);
    fn subscribe(&mut self, listener: TabChangeListener);
}

/// In-memory session state table: every live tab in creation order, with at
/// most one active tab.
///
/// Ids come from a monotonic counter and are never reused within a process
/// lifetime. Field writes notify subscribers with exactly the fields whose
/// stored value changed; a write that matches the stored value is silent.
pub struct TabRegistry {
    tabs: Vec<Tab>,
    active: Option<TabId>,
    next_id: u64,
    listeners: Vec<TabChangeListener>,
}

impl TabRegistry {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active: None,
            next_id: 1,
            listeners: Vec::new(),
        }
    }

    fn find_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    fn notify(&self, id: TabId, fields: &[TabField]) {
        for listener in &self.listeners {
            listener(id, fields);
        }
    }
}

impl Default for TabRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TabRegistryTrait for TabRegistry {
    /// Create a record for a new tab and return its id. The first record in
    /// an empty table becomes active.
    fn insert(&mut self, url: &str) -> TabId {
        let id = TabId(self.next_id);
        self.next_id += 1;
        self.tabs.push(Tab {
            id,
            title: "New Tab".to_string(),
            url: url.to_string(),
            favicon: None,
            loading: false,
            can_go_back: false,
            can_go_forward: false,
        });
        if self.active.is_none() {
            self.active = Some(id);
        }
        id
    }

    /// Delete a record. Activation policy stays with the caller; removing
    /// the active tab just clears the active marker.
    fn remove(&mut self, id: TabId) -> bool {
        match self.tabs.iter().position(|t| t.id == id) {
            Some(index) => {
                self.tabs.remove(index);
                if self.active == Some(id) {
                    self.active = None;
                }
                true
            }
            None => false,
        }
    }

    /// Mark the given tab active. Unknown ids are ignored.
    fn set_active(&mut self, id: TabId) {
        if self.tabs.iter().any(|t| t.id == id) {
            self.active = Some(id);
        }
    }

    fn get(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    fn list(&self) -> &[Tab] {
        &self.tabs
    }

    fn active_id(&self) -> Option<TabId> {
        self.active
    }

    fn active_tab(&self) -> Option<&Tab> {
        self.active.and_then(|id| self.tabs.iter().find(|t| t.id == id))
    }

    fn len(&self) -> usize {
        self.tabs.len()
    }

    fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    fn set_title(&mut self, id: TabId, title: &str) {
        let changed = match self.find_mut(id) {
            Some(tab) if tab.title != title => {
                tab.title = title.to_string();
                true
            }
            _ => false,
        };
        if changed {
            self.notify(id, &[TabField::Title]);
        }
    }

    fn set_url(&mut self, id: TabId, url: &str) {
        let changed = match self.find_mut(id) {
            Some(tab) if tab.url != url => {
                tab.url = url.to_string();
                true
            }
            _ => false,
        };
        if changed {
            self.notify(id, &[TabField::Url]);
        }
    }

    fn set_favicon(&mut self, id: TabId, favicon: &str) {
        let changed = match self.find_mut(id) {
            Some(tab) if tab.favicon.as_deref() != Some(favicon) => {
                tab.favicon = Some(favicon.to_string());
                true
            }
            _ => false,
        };
        if changed {
            self.notify(id, &[TabField::Favicon]);
        }
    }

    fn set_loading(&mut self, id: TabId, loading: bool) {
        let changed = match self.find_mut(id) {
            Some(tab) if tab.loading != loading => {
                tab.loading = loading;
                true
            }
            _ => false,
        };
        if changed {
            self.notify(id, &[TabField::Loading]);
        }
    }

    /// Update both history-capability flags, notifying with only the ones
    /// that actually changed.
    fn set_nav_state(&mut self, id: TabId, can_go_back: bool, can_go_forward: bool) {
        let mut changed = Vec::new();
        if let Some(tab) = self.find_mut(id) {
            if tab.can_go_back != can_go_back {
                tab.can_go_back = can_go_back;
                changed.push(TabField::CanGoBack);
            }
            if tab.can_go_forward != can_go_forward {
                tab.can_go_forward = can_go_forward;
                changed.push(TabField::CanGoForward);
            }
        }
        if !changed.is_empty() {
            self.notify(id, &changed);
        }
    }

    fn subscribe(&mut self, listener: TabChangeListener) {
        self.listeners.push(listener);
    }
}
