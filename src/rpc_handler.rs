//! RPC command handler for the Tabshell JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! The `handle_command` function dispatches string-keyed commands onto the
//! boundary operations exposed by the `App` struct.

use std::sync::Mutex;

use crate::app::{App, AutoConfirm};
use crate::managers::shortcut_manager::ShortcutManagerTrait;
use crate::managers::tab_controller::TabControllerTrait;
use crate::managers::tab_registry::TabRegistryTrait;
use crate::services::collection_store::CollectionStoreTrait;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::events::PageViewEvent;
use crate::types::tab::{TabId, WindowDirective};

use serde_json::{json, Value};

fn tab_id_param(params: &Value) -> Result<TabId, String> {
    params
        .get("id")
        .and_then(|v| v.as_u64())
        .map(TabId)
        .ok_or_else(|| "missing id".to_string())
}

/// Builds a page-view event from flat RPC params. Drivers use this to feed
/// synthetic engine events into a headless instance.
fn event_param(params: &Value) -> Result<PageViewEvent, String> {
    let kind = params
        .get("event")
        .and_then(|v| v.as_str())
        .ok_or("missing event")?;
    let str_param = |key: &str| -> Result<String, String> {
        params
            .get(key)
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| format!("missing {}", key))
    };
    match kind {
        "navigation_started" => Ok(PageViewEvent::NavigationStarted),
        "navigation_stopped" => Ok(PageViewEvent::NavigationStopped),
        "title_changed" => Ok(PageViewEvent::TitleChanged(str_param("title")?)),
        "favicon_changed" => Ok(PageViewEvent::FaviconChanged(str_param("favicon")?)),
        "navigation_committed" => Ok(PageViewEvent::NavigationCommitted(str_param("url")?)),
        "load_failed" => Ok(PageViewEvent::LoadFailed(
            params
                .get("reason")
                .and_then(|v| v.as_str())
                .unwrap_or("load failed")
                .to_string(),
        )),
        "new_window_requested" => Ok(PageViewEvent::NewWindowRequested(str_param("url")?)),
        _ => Err(format!("unknown event: {}", kind)),
    }
}

/// Dispatch a command to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_command(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        // ─── Tabs ───
        "tab.create" => {
            let url = params.get("url").and_then(|v| v.as_str());
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let a = &mut *a;
            let id = a.tabs.create_tab(a.settings.get_settings(), url);
            Ok(json!({"id": id}))
        }
        "tab.close" => {
            let id = tab_id_param(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let a = &mut *a;
            let directive = a.tabs.close_tab(a.settings.get_settings(), id);
            let window = match directive {
                WindowDirective::Close => "close",
                WindowDirective::Keep => "keep",
            };
            Ok(json!({"window": window}))
        }
        "tab.switch" => {
            let id = tab_id_param(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.tabs.registry_mut().set_active(id);
            Ok(json!({"activeId": a.tabs.registry().active_id()}))
        }
        "tab.navigate" => {
            let id = tab_id_param(params)?;
            let input = params
                .get("input")
                .and_then(|v| v.as_str())
                .ok_or("missing input")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let a = &mut *a;
            a.tabs.navigate(a.settings.get_settings(), id, input);
            let url = a.tabs.registry().get(id).map(|t| t.url.clone());
            Ok(json!({"url": url}))
        }
        "tab.back" => {
            let id = tab_id_param(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let url = a.tabs.go_back(id);
            Ok(json!({"url": url}))
        }
        "tab.forward" => {
            let id = tab_id_param(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let url = a.tabs.go_forward(id);
            Ok(json!({"url": url}))
        }
        "tab.reload" => {
            let id = tab_id_param(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.tabs.reload(id);
            Ok(json!({"ok": true}))
        }
        "tab.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let tabs = serde_json::to_value(a.tabs.registry().list()).map_err(|e| e.to_string())?;
            Ok(json!({"tabs": tabs, "activeId": a.tabs.registry().active_id()}))
        }
        "tab.event" => {
            let id = tab_id_param(params)?;
            let event = event_param(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.handle_page_event(id, event);
            Ok(json!({"ok": true}))
        }

        // ─── Bookmarks ───
        "bookmark.add" => {
            let title = params
                .get("title")
                .and_then(|v| v.as_str())
                .ok_or("missing title")?;
            let url = params
                .get("url")
                .and_then(|v| v.as_str())
                .ok_or("missing url")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let bookmark = a
                .collections
                .add_bookmark(title, url)
                .map_err(|e| e.to_string())?;
            serde_json::to_value(bookmark).map_err(|e| e.to_string())
        }
        "bookmark.remove" => {
            let id = params
                .get("id")
                .and_then(|v| v.as_i64())
                .ok_or("missing id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.collections.remove_bookmark(id);
            Ok(json!({"ok": true}))
        }
        "bookmark.toggle" => {
            let title = params
                .get("title")
                .and_then(|v| v.as_str())
                .ok_or("missing title")?;
            let url = params
                .get("url")
                .and_then(|v| v.as_str())
                .ok_or("missing url")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let bookmarked = a
                .collections
                .toggle_bookmark(title, url)
                .map_err(|e| e.to_string())?;
            Ok(json!({"bookmarked": bookmarked}))
        }
        "bookmark.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.collections.bookmarks()).map_err(|e| e.to_string())
        }

        // ─── History ───
        "history.add" => {
            let title = params
                .get("title")
                .and_then(|v| v.as_str())
                .ok_or("missing title")?;
            let url = params
                .get("url")
                .and_then(|v| v.as_str())
                .ok_or("missing url")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let entry = a
                .collections
                .add_history(title, url)
                .map_err(|e| e.to_string())?;
            serde_json::to_value(entry).map_err(|e| e.to_string())
        }
        "history.clear" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let cleared = a.clear_history(&AutoConfirm);
            Ok(json!({"ok": cleared}))
        }
        "history.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.collections.history()).map_err(|e| e.to_string())
        }

        // ─── Suggestions ───
        "suggest.query" => {
            let query = params
                .get("query")
                .and_then(|v| v.as_str())
                .ok_or("missing query")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.suggest(query)).map_err(|e| e.to_string())
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = params
                .get("key")
                .and_then(|v| v.as_str())
                .ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings.set_value(key, value).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "settings.reset" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings.reset().map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Shortcuts ───
        "shortcut.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.shortcuts.list_shortcuts()).map_err(|e| e.to_string())
        }
        "shortcut.lookup" => {
            let action = params
                .get("action")
                .and_then(|v| v.as_str())
                .ok_or("missing action")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let keys = a
                .shortcuts
                .get_shortcut(action)
                .ok_or_else(|| format!("unknown action: {}", action))?;
            Ok(json!({"keys": keys}))
        }

        // ─── Ping ───
        "ping" => Ok(json!({"pong": true})),

        _ => Err(format!("unknown method: {}", method)),
    }
}
