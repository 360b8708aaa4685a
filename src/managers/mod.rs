// Tabshell state managers
// Managers handle stateful operations: the tab table, the tab lifecycle, shortcuts.

pub mod shortcut_manager;
pub mod tab_controller;
pub mod tab_registry;
