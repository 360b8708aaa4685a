//! Tabshell UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2 (Chromium-based)
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! One native window hosts a single webview multiplexed across the session's
//! tabs; the toolbar is injected into every page as JS, and communication
//! between the Rust core and the page uses wry IPC.

pub mod shell;
