use tabshell::types::errors::*;

// === StoreError Tests ===

#[test]
fn store_error_empty_title_display() {
    assert_eq!(StoreError::EmptyTitle.to_string(), "Title must not be empty");
}

#[test]
fn store_error_empty_url_display() {
    assert_eq!(StoreError::EmptyUrl.to_string(), "URL must not be empty");
}

#[test]
fn store_error_io_display() {
    let err = StoreError::IoError("disk full".to_string());
    assert_eq!(err.to_string(), "Collection I/O error: disk full");
}

#[test]
fn store_error_serialization_display() {
    let err = StoreError::SerializationError("bad json".to_string());
    assert_eq!(err.to_string(), "Collection serialization error: bad json");
}

#[test]
fn store_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(StoreError::EmptyUrl);
    assert!(err.source().is_none());
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("permission denied".to_string()).to_string(),
        "Settings I/O error: permission denied"
    );
    assert_eq!(
        SettingsError::SerializationError("truncated".to_string()).to_string(),
        "Settings serialization error: truncated"
    );
    assert_eq!(
        SettingsError::InvalidKey("colour".to_string()).to_string(),
        "Invalid settings key: colour"
    );
    assert_eq!(
        SettingsError::InvalidValue("zoom wants a number".to_string()).to_string(),
        "Invalid settings value: zoom wants a number"
    );
}

#[test]
fn settings_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(SettingsError::InvalidKey("x".to_string()));
    assert!(err.source().is_none());
}

// === ShortcutError Tests ===

#[test]
fn shortcut_error_display_variants() {
    assert_eq!(
        ShortcutError::NotFound("new_tab".to_string()).to_string(),
        "Shortcut not found for action: new_tab"
    );
    assert_eq!(
        ShortcutError::Conflict("Ctrl+T taken".to_string()).to_string(),
        "Shortcut conflict: Ctrl+T taken"
    );
    assert_eq!(
        ShortcutError::InvalidKeys("".to_string()).to_string(),
        "Invalid shortcut keys: "
    );
}

#[test]
fn shortcut_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(ShortcutError::NotFound("find".to_string()));
    assert!(err.source().is_none());
}
