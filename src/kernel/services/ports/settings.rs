use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub keybindings: Vec<KeybindingRule>,
    #[serde(default)]
    pub theme: ThemeSettings,
    #[serde(default)]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Color overrides applied on top of the light/dark palette.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_done_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted_fg: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// `false` keeps checkbox and theme state in memory for the session only.
    #[serde(default = "default_persist")]
    pub persist: bool,
    /// Overrides the default `storage.json` location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn default_persist() -> bool {
    true
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            persist: default_persist(),
            path: None,
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
