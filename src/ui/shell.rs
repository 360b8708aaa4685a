//! WebView-based shell using `wry` + `tao`.
//!
//! Architecture:
//! - One window, one webview, multiplexed across the session's tabs. The tab
//!   strip and toolbar are plain HTML injected into every page with
//!   `with_initialization_script`.
//! - The internal new-tab page is served via the `shell://` custom protocol.
//! - IPC from JS to Rust via `window.ipc.postMessage()`; results flow back as
//!   evaluated scripts.
//! - The page reports lifecycle changes through the same IPC channel; they
//!   are translated into `PageViewEvent`s and dispatched through the core.

use std::sync::{Arc, Mutex};

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use wry::WebViewBuilder;

use crate::app::App;
use crate::managers::tab_controller::TabControllerTrait;
use crate::managers::tab_registry::TabRegistryTrait;
use crate::page_view::HeadlessViewFactory;
use crate::services::collection_store::CollectionStoreTrait;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::events::PageViewEvent;
use crate::types::tab::{TabId, WindowDirective};

#[derive(Debug)]
enum UserEvent {
    LoadUrl(String),
    EvalScript(String),
    /// A page asked for a new window; open the URL in a new tab instead.
    OpenInNewTab(String),
    /// The last tab closed and settings ask for the window to go with it.
    CloseWindow,
}

const NEWTAB_URL: &str = "shell://localhost/newtab";

/// Injected on every page: renders the tab strip and toolbar, wires clicks
/// and the address bar to IPC, and reports page state back to the core.
const TOOLBAR_JS: &str = r#"
(function(){
  if (window.__ts_booted) return;
  window.__ts_booted = true;
  window.__ts_ipc = function(cmd, args){
    var msg = Object.assign({cmd: cmd}, args || {});
    if (window.ipc) window.ipc.postMessage(JSON.stringify(msg));
  };
  window.__ts_setBookmarked = function(on){
    var b = document.getElementById('__ts_star');
    if (b) b.textContent = on ? '★' : '☆';
  };
  window.__ts_updateTabs = function(state){
    var bar = document.getElementById('__ts_tabs');
    if (!bar) return;
    bar.innerHTML = '';
    state.tabs.forEach(function(t){
      var el = document.createElement('span');
      el.className = 'ts-tab' + (t.id === state.activeId ? ' active' : '');
      el.textContent = t.loading ? '… ' + t.title : t.title;
      el.onclick = function(){ __ts_ipc('switch_tab', {id: t.id}); };
      var x = document.createElement('b');
      x.textContent = ' ×';
      x.onclick = function(ev){ ev.stopPropagation(); __ts_ipc('close_tab', {id: t.id}); };
      el.appendChild(x);
      bar.appendChild(el);
    });
    var addr = document.getElementById('__ts_addr');
    var active = state.tabs.find(function(t){ return t.id === state.activeId; });
    if (addr && active && document.activeElement !== addr) addr.value = active.url;
  };
  function boot(){
    var root = document.createElement('div');
    root.id = '__ts_root';
    root.innerHTML =
      '<div id="__ts_tabs"></div>' +
      '<div id="__ts_nav">' +
      '<button id="__ts_back">◀</button><button id="__ts_fwd">▶</button>' +
      '<button id="__ts_reload">⟳</button>' +
      '<input id="__ts_addr" type="text" spellcheck="false"/>' +
      '<button id="__ts_star">☆</button><button id="__ts_plus">+</button>' +
      '</div>';
    document.body.prepend(root);
    document.getElementById('__ts_back').onclick = function(){ __ts_ipc('back'); };
    document.getElementById('__ts_fwd').onclick = function(){ __ts_ipc('forward'); };
    document.getElementById('__ts_reload').onclick = function(){ __ts_ipc('reload'); };
    document.getElementById('__ts_star').onclick = function(){ __ts_ipc('toggle_bookmark'); };
    document.getElementById('__ts_plus').onclick = function(){ __ts_ipc('new_tab'); };
    document.getElementById('__ts_addr').addEventListener('keydown', function(e){
      if (e.key === 'Enter' && e.target.value.trim())
        __ts_ipc('navigate', {input: e.target.value.trim()});
    });
    __ts_ipc('page_state', {url: location.href, title: document.title});
    __ts_ipc('ui_ready');
  }
  if (document.readyState === 'loading')
    document.addEventListener('DOMContentLoaded', boot);
  else
    boot();
})();
"#;

const TOOLBAR_CSS: &str = r#"
#__ts_root{position:fixed;top:0;left:0;right:0;z-index:2147483647;
  background:#1c2128;color:#e6edf3;font:13px sans-serif}
#__ts_tabs{display:flex;overflow-x:auto;padding:4px 4px 0}
.ts-tab{padding:4px 10px;margin-right:2px;border-radius:6px 6px 0 0;
  background:#161b22;cursor:pointer;white-space:nowrap}
.ts-tab.active{background:#30363d}
#__ts_nav{display:flex;gap:4px;padding:4px}
#__ts_addr{flex:1;background:#0d1117;color:inherit;border:1px solid #30363d;
  border-radius:6px;padding:3px 8px}
#__ts_nav button{background:none;border:none;color:inherit;cursor:pointer}
body{margin-top:70px}
"#;

fn newtab_html() -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><style>{}\
         body{{background:#0d1117;color:#e6edf3;font-family:sans-serif;\
         display:flex;align-items:center;justify-content:center;height:100vh}}\
         </style></head><body><div><h1>Tabshell</h1>\
         <p>Type an address or search above.</p></div>\
         <script>{}</script></body></html>",
        TOOLBAR_CSS, TOOLBAR_JS
    )
}

// ─── IPC handler ───

fn active_id(app: &App) -> Option<TabId> {
    app.tabs.registry().active_id()
}

fn active_url(app: &App) -> String {
    app.tabs
        .registry()
        .active_tab()
        .map(|t| t.url.clone())
        .unwrap_or_else(|| "about:blank".to_string())
}

fn url_to_event(url: &str) -> UserEvent {
    if url.starts_with("http://") || url.starts_with("https://") || url.starts_with("file://") {
        UserEvent::LoadUrl(url.to_string())
    } else {
        UserEvent::LoadUrl(NEWTAB_URL.to_string())
    }
}

fn build_tabs_update(app: &App) -> String {
    let tabs: Vec<serde_json::Value> = app
        .tabs
        .registry()
        .list()
        .iter()
        .map(|t| {
            serde_json::json!({
                "id": t.id, "title": t.title, "url": t.url, "loading": t.loading
            })
        })
        .collect();
    let state = serde_json::json!({"tabs": tabs, "activeId": active_id(app)});
    format!("if(window.__ts_updateTabs)__ts_updateTabs({})", state)
}

fn handle_ipc(app: &mut App, message: &str) -> Option<UserEvent> {
    let msg: serde_json::Value = serde_json::from_str(message).ok()?;
    let cmd = msg.get("cmd")?.as_str()?;

    match cmd {
        "ui_ready" => Some(UserEvent::EvalScript(build_tabs_update(app))),

        "new_tab" => {
            let settings = app.settings.get_settings().clone();
            app.tabs.create_tab(&settings, Some("about:blank"));
            Some(UserEvent::LoadUrl(NEWTAB_URL.to_string()))
        }

        "close_tab" => {
            let id = TabId(msg.get("id").and_then(|v| v.as_u64())?);
            let was_active = active_id(app) == Some(id);
            let settings = app.settings.get_settings().clone();
            if app.tabs.close_tab(&settings, id) == WindowDirective::Close {
                return Some(UserEvent::CloseWindow);
            }
            if was_active {
                Some(url_to_event(&active_url(app)))
            } else {
                // The page being shown stays put; only the tab strip changed.
                Some(UserEvent::EvalScript(build_tabs_update(app)))
            }
        }

        "switch_tab" => {
            let id = TabId(msg.get("id").and_then(|v| v.as_u64())?);
            app.tabs.registry_mut().set_active(id);
            Some(url_to_event(&active_url(app)))
        }

        "navigate" => {
            let input = msg.get("input").and_then(|v| v.as_str())?;
            let id = active_id(app)?;
            let settings = app.settings.get_settings().clone();
            app.tabs.navigate(&settings, id, input);
            app.handle_page_event(id, PageViewEvent::NavigationStarted);
            Some(url_to_event(&active_url(app)))
        }

        "back" => {
            let id = active_id(app)?;
            // Load the entry the view stepped to; the registry record still
            // holds the old URL until the page reports its state.
            let url = app.tabs.go_back(id)?;
            Some(url_to_event(&url))
        }

        "forward" => {
            let id = active_id(app)?;
            let url = app.tabs.go_forward(id)?;
            Some(url_to_event(&url))
        }

        "reload" => {
            let id = active_id(app)?;
            app.tabs.reload(id);
            Some(url_to_event(&active_url(app)))
        }

        "toggle_bookmark" => {
            let bookmarked = app.toggle_bookmark_for_active_tab()?;
            Some(UserEvent::EvalScript(format!(
                "if(window.__ts_setBookmarked)__ts_setBookmarked({})",
                bookmarked
            )))
        }

        // The injected script reports the loaded page's real URL and title.
        "page_state" => {
            let id = active_id(app)?;
            if let Some(url) = msg.get("url").and_then(|v| v.as_str()) {
                if !url.starts_with("shell://") {
                    app.handle_page_event(id, PageViewEvent::NavigationCommitted(url.to_string()));
                }
            }
            if let Some(title) = msg.get("title").and_then(|v| v.as_str()) {
                if !title.is_empty() {
                    app.handle_page_event(id, PageViewEvent::TitleChanged(title.to_string()));
                }
            }
            app.handle_page_event(id, PageViewEvent::NavigationStopped);
            let starred = app
                .tabs
                .registry()
                .active_tab()
                .map(|t| app.collections.is_bookmarked(&t.url))
                .unwrap_or(false);
            Some(UserEvent::EvalScript(format!(
                "{};if(window.__ts_setBookmarked)__ts_setBookmarked({})",
                build_tabs_update(app),
                starred
            )))
        }

        "set_setting" => {
            if let (Some(key), Some(value)) =
                (msg.get("key").and_then(|v| v.as_str()), msg.get("value"))
            {
                if let Err(err) = app.settings.set_value(key, value.clone()) {
                    log::warn!("Rejected setting {}: {}", key, err);
                }
            }
            None
        }

        "get_settings" => {
            let json = serde_json::to_string(app.settings.get_settings()).unwrap_or_default();
            Some(UserEvent::EvalScript(format!(
                "if(typeof applySettingsData==='function')applySettingsData({})",
                json
            )))
        }

        _ => None,
    }
}

// ─── Main entry point ───

pub fn run() {
    let mut app = App::new(Box::new(HeadlessViewFactory));
    app.startup();
    {
        let settings = app.settings.get_settings().clone();
        app.tabs.create_tab(&settings, Some("about:blank"));
    }
    let state = Arc::new(Mutex::new(app));

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title("Tabshell")
        .with_inner_size(tao::dpi::LogicalSize::new(1280.0, 800.0))
        .build(&event_loop)
        .expect("Failed to create window");

    let ipc_state = state.clone();
    let ipc_proxy = proxy.clone();
    let nw_proxy = proxy.clone();

    let builder = WebViewBuilder::new()
        .with_custom_protocol("shell".into(), move |_wv_id, request| {
            let html = match request.uri().path() {
                "/newtab" | "/" => newtab_html(),
                _ => newtab_html(),
            };
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(html.into_bytes().into())
                .unwrap()
        })
        .with_initialization_script(&format!(
            "(function(){{var s=document.createElement('style');s.textContent={:?};\
             document.documentElement.appendChild(s)}})();{}",
            TOOLBAR_CSS, TOOLBAR_JS
        ))
        .with_url(NEWTAB_URL)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let mut s = ipc_state.lock().unwrap();
            if let Some(event) = handle_ipc(&mut s, msg.body().as_str()) {
                let _ = ipc_proxy.send_event(event);
            }
        })
        .with_new_window_req_handler(move |url, _features| {
            if url.starts_with("http://") || url.starts_with("https://") {
                let _ = nw_proxy.send_event(UserEvent::OpenInNewTab(url));
            }
            wry::NewWindowResponse::Deny
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().expect("Failed to get GTK vbox");
        builder.build_gtk(vbox).expect("Failed to create WebView")
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window).expect("Failed to create WebView");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                let mut s = state.lock().unwrap();
                s.shutdown();
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(user_event) => match user_event {
                UserEvent::LoadUrl(url) => {
                    let _ = webview.load_url(&url);
                }
                UserEvent::EvalScript(js) => {
                    let _ = webview.evaluate_script(&js);
                }
                UserEvent::OpenInNewTab(url) => {
                    let target = {
                        let mut s = state.lock().unwrap();
                        let id = s.tabs.registry().active_id();
                        if let Some(id) = id {
                            s.handle_page_event(id, PageViewEvent::NewWindowRequested(url));
                        }
                        active_url(&s)
                    };
                    let _ = webview.load_url(&target);
                }
                UserEvent::CloseWindow => {
                    let mut s = state.lock().unwrap();
                    s.shutdown();
                    *control_flow = ControlFlow::Exit;
                }
            },

            _ => {}
        }
    });
}
