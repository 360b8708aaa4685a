// Tabshell Settings Engine
// Manages user settings: loading, saving, updating individual values, and resetting to defaults.
// Settings are stored as a flat JSON object at the platform-specific config path.

use std::fs;
use std::path::Path;

use chrono::Utc;

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::BrowserSettings;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> &BrowserSettings;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &BrowserSettings;
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError>;
    fn adjust_zoom(&mut self, delta: i32) -> u32;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn export_settings(&self) -> serde_json::Value;
    fn import_settings(&mut self, data: serde_json::Value) -> Result<(), SettingsError>;
    fn config_path(&self) -> &str;
}

/// Settings engine implementation that persists settings as JSON on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: BrowserSettings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise, uses the platform-specific config directory with `settings.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => {
                let config_dir = platform::get_config_dir();
                config_dir
                    .join("settings.json")
                    .to_string_lossy()
                    .to_string()
            }
        };

        Self {
            config_path,
            settings: BrowserSettings::default(),
        }
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file.
    ///
    /// A missing file yields the defaults. An unreadable or malformed file
    /// also yields the defaults, after a logged warning; loading never
    /// fails.
    fn load(&mut self) -> &BrowserSettings {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            self.settings = BrowserSettings::default();
            return &self.settings;
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                log::warn!(
                    "Failed to read {}, using defaults: {}",
                    self.config_path,
                    err
                );
                self.settings = BrowserSettings::default();
                return &self.settings;
            }
        };

        match serde_json::from_str(&content) {
            Ok(settings) => self.settings = settings,
            Err(err) => {
                log::warn!(
                    "Malformed settings file {}, using defaults: {}",
                    self.config_path,
                    err
                );
                self.settings = BrowserSettings::default();
            }
        }
        &self.settings
    }

    /// Saves the current settings to the JSON config file.
    ///
    /// Creates parent directories if they don't exist.
    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| SettingsError::IoError(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Returns a reference to the current in-memory settings.
    fn get_settings(&self) -> &BrowserSettings {
        &self.settings
    }

    /// Updates an individual setting by its flat JSON key.
    ///
    /// Converts the current settings to a `serde_json::Value`, replaces the
    /// key, then deserializes back into `BrowserSettings` so a mistyped
    /// value is rejected before anything changes. Saves to disk after a
    /// successful update.
    ///
    /// # Examples
    /// - `"searchEngine"` → updates the search engine name
    /// - `"darkMode"` → updates the dark mode flag
    /// - `"zoom"` → updates the zoom percentage
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        if key.is_empty() {
            return Err(SettingsError::InvalidKey("Key cannot be empty".to_string()));
        }

        // The recognized keys are exactly the fields of the default object.
        // Unrecognized keys survive load/save untouched but cannot be set
        // through here.
        let recognized = serde_json::to_value(BrowserSettings::default()).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;
        if recognized.get(key).is_none() {
            return Err(SettingsError::InvalidKey(format!(
                "Key '{}' not found in settings",
                key
            )));
        }

        let mut json_value = serde_json::to_value(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;
        match json_value {
            serde_json::Value::Object(ref mut map) => {
                map.insert(key.to_string(), value);
            }
            _ => {
                return Err(SettingsError::SerializationError(
                    "Settings did not serialize to an object".to_string(),
                ));
            }
        }

        // Deserialize back into BrowserSettings to validate the new value
        let new_settings: BrowserSettings = serde_json::from_value(json_value)
            .map_err(|e| {
                SettingsError::InvalidValue(format!("Invalid value for key '{}': {}", key, e))
            })?;

        self.settings = new_settings;

        // Persist to disk
        self.save()?;

        Ok(())
    }

    /// Applies a signed delta to the zoom percentage, clamped to the
    /// supported range, and returns the resulting zoom. The change is
    /// persisted; a failed write keeps the in-memory value.
    fn adjust_zoom(&mut self, delta: i32) -> u32 {
        let zoom = BrowserSettings::clamp_zoom(self.settings.zoom as i64 + delta as i64);
        if zoom != self.settings.zoom {
            self.settings.zoom = zoom;
            if let Err(err) = self.save() {
                log::warn!("Dropping zoom write: {}", err);
            }
        }
        self.settings.zoom
    }

    /// Resets all settings to factory defaults and saves to disk.
    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = BrowserSettings::default();
        self.save()?;
        Ok(())
    }

    /// Packages the current settings for export, tagged with the crate
    /// version and an export timestamp.
    fn export_settings(&self) -> serde_json::Value {
        serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "settings": self.settings,
            "exportDate": Utc::now().to_rfc3339(),
        })
    }

    /// Replaces the current settings with an exported payload. The payload
    /// must carry a `settings` object; keys it omits take their defaults.
    fn import_settings(&mut self, data: serde_json::Value) -> Result<(), SettingsError> {
        let settings_value = match data.get("settings") {
            Some(value) => value.clone(),
            None => {
                return Err(SettingsError::InvalidValue(
                    "Missing 'settings' object".to_string(),
                ));
            }
        };

        let imported: BrowserSettings = serde_json::from_value(settings_value).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse imported settings: {}", e))
        })?;

        self.settings = imported;
        self.save()?;
        Ok(())
    }

    /// Returns the path to the config file.
    fn config_path(&self) -> &str {
        &self.config_path
    }
}
