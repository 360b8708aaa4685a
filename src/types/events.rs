/// Asynchronous notifications emitted by a page view as a navigation
/// progresses.
///
/// The embedding runtime translates whatever callback surface its engine
/// exposes into these variants and feeds them, serially, to
/// `TabController::handle_event`. Events are keyed by tab id at the dispatch
/// call site; an event arriving for an id that has since been closed is
/// dropped there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageViewEvent {
    /// The engine started loading a document.
    NavigationStarted,
    /// The engine finished loading (successfully or not).
    NavigationStopped,
    /// The document reported a new title.
    TitleChanged(String),
    /// The document reported a favicon URL.
    FaviconChanged(String),
    /// The engine committed a navigation to this URL. Authoritative: wins
    /// over any optimistic URL written when the navigation was issued.
    NavigationCommitted(String),
    /// The main resource failed to load; carries an engine-supplied reason.
    LoadFailed(String),
    /// The page asked for a new window (popup, target=_blank).
    NewWindowRequested(String),
}
