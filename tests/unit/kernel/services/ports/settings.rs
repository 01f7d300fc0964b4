use super::*;

#[test]
fn empty_object_uses_defaults() {
    let settings: Settings = serde_json::from_str("{}").expect("parse empty settings");
    assert!(settings.keybindings.is_empty());
    assert!(settings.storage.persist);
    assert!(settings.storage.path.is_none());
    assert!(settings.theme.accent_fg.is_none());
}

#[test]
fn partial_storage_section_keeps_persist_default() {
    let settings: Settings =
        serde_json::from_str(r#"{"storage":{"path":"/tmp/x.json"}}"#).expect("parse settings");
    assert!(settings.storage.persist);
    assert_eq!(settings.storage.path, Some(PathBuf::from("/tmp/x.json")));
}

#[test]
fn keybinding_rules_parse() {
    let settings: Settings = serde_json::from_str(
        r#"{"keybindings":[{"key":"ctrl+t","command":"toggleTheme"},{"key":"r","command":"","context":"checkov"}]}"#,
    )
    .expect("parse settings");
    assert_eq!(settings.keybindings.len(), 2);
    assert_eq!(settings.keybindings[0].context, None);
    assert_eq!(settings.keybindings[1].context.as_deref(), Some("checkov"));
}

#[test]
fn defaults_serialize_without_empty_overrides() {
    let json = serde_json::to_string(&Settings::default()).expect("serialize settings");
    assert!(!json.contains("accent_fg"));
    assert!(json.contains("\"persist\":true"));
}
