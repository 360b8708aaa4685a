// Tabshell Collections Store
// Owns the bookmark and history collections and their on-disk JSON files.
// Every mutation rewrites the affected file in full; a failed write keeps
// the in-memory state and is logged rather than surfaced.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::platform;
use crate::types::bookmark::Bookmark;
use crate::types::errors::StoreError;
use crate::types::history::HistoryEntry;

/// Hard cap on retained history entries; the oldest fall off the end.
const HISTORY_CAP: usize = 1000;

/// Trait defining the persisted collections interface.
pub trait CollectionStoreTrait {
    fn load(&mut self);
    fn add_bookmark(&mut self, title: &str, url: &str) -> Result<Bookmark, StoreError>;
    fn remove_bookmark(&mut self, id: i64);
    fn is_bookmarked(&self, url: &str) -> bool;
    fn toggle_bookmark(&mut self, title: &str, url: &str) -> Result<bool, StoreError>;
    fn add_history(&mut self, title: &str, url: &str) -> Result<HistoryEntry, StoreError>;
    fn clear_history(&mut self);
    fn bookmarks(&self) -> &[Bookmark];
    fn history(&self) -> &[HistoryEntry];
}

/// Collections store implementation backed by two JSON files in the
/// per-application data directory.
pub struct CollectionStore {
    bookmarks_path: String,
    history_path: String,
    bookmarks: Vec<Bookmark>,
    history: Vec<HistoryEntry>,
}

impl CollectionStore {
    /// Creates a new CollectionStore.
    ///
    /// If `dir_override` is `Some`, both files live in that directory.
    /// Otherwise, uses the platform-specific data directory.
    pub fn new(dir_override: Option<String>) -> Self {
        let data_dir = match dir_override {
            Some(dir) => PathBuf::from(dir),
            None => platform::get_data_dir(),
        };

        Self {
            bookmarks_path: data_dir
                .join("bookmarks.json")
                .to_string_lossy()
                .to_string(),
            history_path: data_dir.join("history.json").to_string_lossy().to_string(),
            bookmarks: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Path of the bookmarks file.
    pub fn bookmarks_path(&self) -> &str {
        &self.bookmarks_path
    }

    /// Path of the history file.
    pub fn history_path(&self) -> &str {
        &self.history_path
    }

    /// Timestamp-based id, bumped past the collection's current maximum so
    /// two entries created within the same millisecond stay distinct.
    fn allocate_id(ids: impl Iterator<Item = i64>) -> i64 {
        let candidate = Utc::now().timestamp_millis();
        match ids.max() {
            Some(max) if candidate <= max => max + 1,
            _ => candidate,
        }
    }

    fn load_collection<T: DeserializeOwned>(path: &str) -> Vec<T> {
        let file = Path::new(path);
        if !file.exists() {
            return Vec::new();
        }
        let content = match fs::read_to_string(file) {
            Ok(content) => content,
            Err(err) => {
                log::warn!("Failed to read {}: {}", path, err);
                return Vec::new();
            }
        };
        match serde_json::from_str(&content) {
            Ok(items) => items,
            Err(err) => {
                log::warn!("Malformed collection file {}, starting empty: {}", path, err);
                Vec::new()
            }
        }
    }

    fn write_collection<T: Serialize>(path: &str, items: &[T]) -> Result<(), StoreError> {
        let file = Path::new(path);
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::IoError(format!("Failed to create data directory: {}", e))
            })?;
        }
        let json = serde_json::to_string_pretty(items)
            .map_err(|e| StoreError::SerializationError(e.to_string()))?;
        fs::write(file, json)
            .map_err(|e| StoreError::IoError(format!("Failed to write {}: {}", path, e)))?;
        Ok(())
    }

    fn persist_bookmarks(&self) {
        if let Err(err) = Self::write_collection(&self.bookmarks_path, &self.bookmarks) {
            log::warn!("Dropping bookmarks write: {}", err);
        }
    }

    fn persist_history(&self) {
        if let Err(err) = Self::write_collection(&self.history_path, &self.history) {
            log::warn!("Dropping history write: {}", err);
        }
    }
}

impl CollectionStoreTrait for CollectionStore {
    /// Loads both collections from disk. A missing file is an empty
    /// collection; an unreadable or malformed one is treated as empty after
    /// a logged warning.
    fn load(&mut self) {
        self.bookmarks = Self::load_collection(&self.bookmarks_path);
        self.history = Self::load_collection(&self.history_path);
    }

    /// Adds a bookmark and persists the collection. Empty titles and URLs
    /// are rejected before anything changes.
    fn add_bookmark(&mut self, title: &str, url: &str) -> Result<Bookmark, StoreError> {
        let title = title.trim();
        let url = url.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        if url.is_empty() {
            return Err(StoreError::EmptyUrl);
        }

        let bookmark = Bookmark {
            id: Self::allocate_id(self.bookmarks.iter().map(|b| b.id)),
            title: title.to_string(),
            url: url.to_string(),
            created_at: Utc::now(),
        };
        self.bookmarks.push(bookmark.clone());
        self.persist_bookmarks();
        Ok(bookmark)
    }

    /// Removes the bookmark with the given id. An unknown id leaves the
    /// collection untouched.
    fn remove_bookmark(&mut self, id: i64) {
        let before = self.bookmarks.len();
        self.bookmarks.retain(|b| b.id != id);
        if self.bookmarks.len() != before {
            self.persist_bookmarks();
        }
    }

    fn is_bookmarked(&self, url: &str) -> bool {
        self.bookmarks.iter().any(|b| b.url == url)
    }

    /// Removes the first bookmark matching the URL, or adds one when none
    /// matches. Returns whether the URL is bookmarked afterwards.
    fn toggle_bookmark(&mut self, title: &str, url: &str) -> Result<bool, StoreError> {
        match self.bookmarks.iter().position(|b| b.url == url) {
            Some(index) => {
                self.bookmarks.remove(index);
                self.persist_bookmarks();
                Ok(false)
            }
            None => {
                self.add_bookmark(title, url)?;
                Ok(true)
            }
        }
    }

    /// Records a visit: any earlier entry for the URL is dropped, the new
    /// entry goes to the front, and the list is trimmed to the cap.
    fn add_history(&mut self, title: &str, url: &str) -> Result<HistoryEntry, StoreError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(StoreError::EmptyUrl);
        }

        self.history.retain(|e| e.url != url);
        let entry = HistoryEntry {
            id: Self::allocate_id(self.history.iter().map(|e| e.id)),
            title: title.to_string(),
            url: url.to_string(),
            visited_at: Utc::now(),
        };
        self.history.insert(0, entry.clone());
        self.history.truncate(HISTORY_CAP);
        self.persist_history();
        Ok(entry)
    }

    fn clear_history(&mut self) {
        self.history.clear();
        self.persist_history();
    }

    fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    fn history(&self) -> &[HistoryEntry] {
        &self.history
    }
}
