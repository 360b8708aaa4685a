use crate::types::tab::TabId;

/// Abstraction over the engine-backed view that renders a single tab.
///
/// The controller only ever talks to this trait, so tab lifecycle logic can
/// be exercised without a real rendering engine.
pub trait PageView: Send {
    /// Navigates the view to the given URL.
    fn load_url(&mut self, url: &str);

    /// Reloads the current page.
    fn reload(&mut self);

    /// Steps back one entry in the view's history. Returns `false` when
    /// there is no earlier entry.
    fn go_back(&mut self) -> bool;

    /// Steps forward one entry in the view's history. Returns `false` when
    /// there is no later entry.
    fn go_forward(&mut self) -> bool;

    /// Whether an earlier history entry exists.
    fn can_go_back(&self) -> bool;

    /// Whether a later history entry exists.
    fn can_go_forward(&self) -> bool;

    /// The URL of the current history entry, if any.
    fn current_url(&self) -> Option<&str>;
}

/// Creates one [`PageView`] per tab.
pub trait PageViewFactory: Send {
    /// Builds the view backing a newly created tab.
    fn create_view(&mut self, id: TabId) -> Box<dyn PageView>;
}

/// In-process [`PageView`] that keeps a history stack but renders nothing.
///
/// Used directly in headless mode and as the state model behind the real
/// webview in windowed mode.
pub struct HeadlessPageView {
    entries: Vec<String>,
    index: Option<usize>,
}

impl HeadlessPageView {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: None,
        }
    }
}

impl Default for HeadlessPageView {
    fn default() -> Self {
        Self::new()
    }
}

impl PageView for HeadlessPageView {
    fn load_url(&mut self, url: &str) {
        // A fresh navigation discards any forward entries.
        if let Some(index) = self.index {
            self.entries.truncate(index + 1);
        }
        self.entries.push(url.to_string());
        self.index = Some(self.entries.len() - 1);
    }

    fn reload(&mut self) {}

    fn go_back(&mut self) -> bool {
        match self.index {
            Some(index) if index > 0 => {
                self.index = Some(index - 1);
                true
            }
            _ => false,
        }
    }

    fn go_forward(&mut self) -> bool {
        match self.index {
            Some(index) if index + 1 < self.entries.len() => {
                self.index = Some(index + 1);
                true
            }
            _ => false,
        }
    }

    fn can_go_back(&self) -> bool {
        matches!(self.index, Some(index) if index > 0)
    }

    fn can_go_forward(&self) -> bool {
        matches!(self.index, Some(index) if index + 1 < self.entries.len())
    }

    fn current_url(&self) -> Option<&str> {
        self.entries.get(self.index?).map(String::as_str)
    }
}

/// Factory producing [`HeadlessPageView`] instances.
pub struct HeadlessViewFactory;

impl PageViewFactory for HeadlessViewFactory {
    fn create_view(&mut self, _id: TabId) -> Box<dyn PageView> {
        Box::new(HeadlessPageView::new())
    }
}
