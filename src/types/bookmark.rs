use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a saved bookmark.
///
/// Serialized camelCase into `bookmarks.json`; `created_at` becomes an
/// ISO-8601 `createdAt` string. Ids are epoch-millisecond numbers assigned
/// by the store. Duplicate URLs are permitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}
