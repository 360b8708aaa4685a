use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Lower bound for the page zoom level, in percent.
pub const ZOOM_MIN: u32 = 25;
/// Upper bound for the page zoom level, in percent.
pub const ZOOM_MAX: u32 = 500;

/// User-facing browser settings, stored as a single flat JSON object.
///
/// Every field carries a serde default so a settings file that predates a
/// key still loads; keys this build does not recognize are kept in `extra`
/// and written back out unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BrowserSettings {
    #[serde(default = "default_homepage")]
    pub homepage: String,
    #[serde(default = "default_search_engine")]
    pub search_engine: String,
    #[serde(default = "default_true")]
    pub popup_blocker: bool,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub download_path: String,
    #[serde(default)]
    pub clear_data_on_exit: bool,
    #[serde(default = "default_true")]
    pub auto_updates: bool,
    #[serde(default = "default_true")]
    pub show_bookmarks_bar: bool,
    #[serde(default = "default_true")]
    pub tab_preview: bool,
    #[serde(default = "default_true")]
    pub notifications: bool,
    #[serde(default = "default_zoom")]
    pub zoom: u32,
    #[serde(default)]
    pub close_window_on_last_tab: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_homepage() -> String {
    "https://www.google.com".to_string()
}

fn default_search_engine() -> String {
    "google".to_string()
}

fn default_true() -> bool {
    true
}

fn default_zoom() -> u32 {
    100
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            homepage: default_homepage(),
            search_engine: default_search_engine(),
            popup_blocker: true,
            dark_mode: false,
            download_path: String::new(),
            clear_data_on_exit: false,
            auto_updates: true,
            show_bookmarks_bar: true,
            tab_preview: true,
            notifications: true,
            zoom: default_zoom(),
            close_window_on_last_tab: false,
            extra: Map::new(),
        }
    }
}

impl BrowserSettings {
    /// Clamps a requested zoom level into the supported range. Takes an
    /// `i64` so callers can apply signed deltas without underflow.
    pub fn clamp_zoom(level: i64) -> u32 {
        level.clamp(ZOOM_MIN as i64, ZOOM_MAX as i64) as u32
    }
}
