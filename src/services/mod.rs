// Tabshell services
// Services provide core functionality: persistence, settings, navigation policy.

pub mod collection_store;
pub mod navigation;
pub mod settings_engine;
