//! Tabshell — a multi-tab desktop browser shell.
//!
//! This library crate exposes all modules for use by the binaries and
//! integration tests. Page rendering is delegated to an embedded view behind
//! the [`page_view::PageView`] trait; the session state table, tab lifecycle,
//! persisted bookmarks/history, and settings all live here and run headless.

pub mod app;
pub mod managers;
pub mod page_view;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
