use super::*;
use crate::kernel::services::adapters::MemoryStorage;
use crate::kernel::services::ports::FixedColorScheme;

fn storage_with(value: Option<&str>) -> Arc<MemoryStorage> {
    let storage = Arc::new(MemoryStorage::new());
    if let Some(value) = value {
        storage.set_item(THEME_STORAGE_KEY, value).unwrap();
    }
    storage
}

#[test]
fn parse_and_serialize() {
    assert_eq!(ThemeMode::parse("Dark"), Some(ThemeMode::Dark));
    assert_eq!(ThemeMode::parse("light"), Some(ThemeMode::Light));
    assert_eq!(ThemeMode::parse("auto"), None);
    assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
    assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
}

#[test]
fn stored_theme_wins_over_system() {
    let manager = ThemeManager::new(
        Some(storage_with(Some("light"))),
        &FixedColorScheme(Some(ThemeMode::Dark)),
    );
    assert_eq!(manager.current(), ThemeMode::Light);
}

#[test]
fn missing_stored_theme_uses_system() {
    let manager = ThemeManager::new(
        Some(storage_with(None)),
        &FixedColorScheme(Some(ThemeMode::Dark)),
    );
    assert_eq!(manager.current(), ThemeMode::Dark);
}

#[test]
fn invalid_stored_theme_uses_system() {
    let manager = ThemeManager::new(
        Some(storage_with(Some("purple"))),
        &FixedColorScheme(Some(ThemeMode::Dark)),
    );
    assert_eq!(manager.current(), ThemeMode::Dark);
}

#[test]
fn no_preference_anywhere_is_light() {
    let manager = ThemeManager::new(None, &FixedColorScheme(None));
    assert_eq!(manager.current(), ThemeMode::Light);
}

#[test]
fn toggle_persists() {
    let storage = storage_with(None);
    let mut manager = ThemeManager::new(Some(storage.clone()), &FixedColorScheme(None));

    assert_eq!(manager.toggle(), ThemeMode::Dark);
    assert_eq!(
        storage.get_item(THEME_STORAGE_KEY).unwrap().as_deref(),
        Some("dark")
    );
    assert_eq!(manager.toggle(), ThemeMode::Light);
    assert_eq!(
        storage.get_item(THEME_STORAGE_KEY).unwrap().as_deref(),
        Some("light")
    );
}

#[test]
fn set_theme_without_save_does_not_persist() {
    let storage = storage_with(None);
    let mut manager = ThemeManager::new(Some(storage.clone()), &FixedColorScheme(None));

    assert!(manager.set_theme(ThemeMode::Dark, false));
    assert_eq!(manager.current(), ThemeMode::Dark);
    assert_eq!(storage.get_item(THEME_STORAGE_KEY).unwrap(), None);
    assert!(!manager.set_theme(ThemeMode::Dark, false));
}

#[test]
fn system_change_applies_only_without_stored_choice() {
    let storage = storage_with(None);
    let mut manager = ThemeManager::new(Some(storage.clone()), &FixedColorScheme(None));

    assert!(manager.on_system_change(ThemeMode::Dark));
    assert_eq!(manager.current(), ThemeMode::Dark);
    assert_eq!(storage.get_item(THEME_STORAGE_KEY).unwrap(), None);

    manager.toggle();
    assert_eq!(manager.current(), ThemeMode::Light);
    assert!(!manager.on_system_change(ThemeMode::Dark));
    assert_eq!(manager.current(), ThemeMode::Light);
}

#[test]
fn theme_is_stored_under_shared_key() {
    let storage = storage_with(None);
    let mut manager = ThemeManager::new(Some(storage.clone()), &FixedColorScheme(None));
    manager.toggle();

    assert_eq!(
        storage.get_item("inicloud9-theme").unwrap().as_deref(),
        Some("dark")
    );
    assert_eq!(storage.get_item("checkov-theme").unwrap(), None);
}
