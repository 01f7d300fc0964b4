//! Light/dark theme selection with persistence.

use crate::kernel::services::ports::{ColorSchemeProbe, KeyValueStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Storage key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "inicloud9-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Current theme plus its persisted preference.
///
/// Resolution on startup: stored value, then the platform preference, then
/// light. Platform preference changes only apply while nothing is stored.
pub struct ThemeManager {
    theme: ThemeMode,
    storage: Option<Arc<dyn KeyValueStore>>,
}

impl ThemeManager {
    pub fn new(storage: Option<Arc<dyn KeyValueStore>>, probe: &dyn ColorSchemeProbe) -> Self {
        let mut manager = Self {
            theme: ThemeMode::Light,
            storage,
        };
        manager.theme = manager
            .stored_theme()
            .or_else(|| probe.preferred())
            .unwrap_or_default();
        manager
    }

    pub fn current(&self) -> ThemeMode {
        self.theme
    }

    /// The persisted preference, if any. Unreadable storage counts as none.
    pub fn stored_theme(&self) -> Option<ThemeMode> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => {
                let parsed = ThemeMode::parse(&raw);
                if parsed.is_none() {
                    tracing::debug!(value = %raw, "ignoring unknown stored theme");
                }
                parsed
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "theme storage not available");
                None
            }
        }
    }

    /// Returns `true` if the theme changed.
    pub fn set_theme(&mut self, theme: ThemeMode, save: bool) -> bool {
        let changed = self.theme != theme;
        self.theme = theme;

        if save {
            if let Some(storage) = self.storage.as_ref() {
                if let Err(e) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
                    tracing::warn!(error = %e, "could not save theme preference");
                }
            }
        }

        if changed {
            tracing::debug!(theme = theme.as_str(), "theme changed");
        }
        changed
    }

    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.theme.toggled();
        self.set_theme(next, true);
        next
    }

    /// Applies a platform preference change unless the user picked a theme.
    pub fn on_system_change(&mut self, preferred: ThemeMode) -> bool {
        if self.stored_theme().is_some() {
            return false;
        }
        self.set_theme(preferred, false)
    }
}

impl std::fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeManager")
            .field("theme", &self.theme)
            .field("storage", &self.storage.as_ref().map(|s| s.describe()))
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/theme.rs"]
mod tests;
