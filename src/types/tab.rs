use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier for a live tab.
///
/// Allocated from a monotonic counter owned by the tab registry; values are
/// never reused within a process lifetime, so a stale id held by a UI surface
/// can never alias a newer tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(pub u64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a browser tab with its current state.
///
/// `url` may be optimistic: it is written as soon as a navigation is issued
/// and overwritten when the engine commits. The capability flags reflect the
/// page view's navigation history as of the last query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub id: TabId,
    pub title: String,
    pub url: String,
    pub favicon: Option<String>,
    pub loading: bool,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

/// Names one mutable field of the tab record.
///
/// Change notifications carry the fields that actually changed, nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabField {
    Title,
    Url,
    Favicon,
    Loading,
    CanGoBack,
    CanGoForward,
}

/// What the owning window should do after a tab close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowDirective {
    /// Tabs remain (or a replacement was opened); keep the window.
    Keep,
    /// The last tab closed and settings ask for the window to close.
    Close,
}
