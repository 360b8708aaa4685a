use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a single history entry for a visited page.
///
/// Serialized camelCase into `history.json`; `visited_at` becomes an
/// ISO-8601 `visitedAt` string. The list the store keeps is ordered
/// most-recent-first, deduplicated by URL, and capped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub visited_at: DateTime<Utc>,
}
