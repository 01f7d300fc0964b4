//! Checkbox list state: the requested count, the identifiers it produces and
//! the persisted checked-state map.

use crate::kernel::services::ports::{KeyValueStore, StorageError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Storage key holding the serialized [`CheckboxState`].
pub const CHECKBOX_STATE_KEY: &str = "checkboxState";

pub const MIN_COUNT: u8 = 1;
pub const MAX_COUNT: u8 = 50;
pub const DEFAULT_COUNT: u8 = 5;

const ID_PREFIX: &str = "checkbox-";

pub fn checkbox_id(index: usize) -> String {
    format!("{}{}", ID_PREFIX, index)
}

/// Identifier → checked. Absent means unchecked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckboxState(BTreeMap<String, bool>);

impl CheckboxState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> bool {
        self.0.get(id).copied().unwrap_or(false)
    }

    pub fn set(&mut self, id: impl Into<String>, checked: bool) {
        self.0.insert(id.into(), checked);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

/// Number of checkboxes to render, always within `MIN_COUNT..=MAX_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DisplayCount(u8);

impl Default for DisplayCount {
    fn default() -> Self {
        Self(DEFAULT_COUNT)
    }
}

impl DisplayCount {
    pub fn new(value: i64) -> Self {
        Self(value.clamp(MIN_COUNT as i64, MAX_COUNT as i64) as u8)
    }

    /// Parses raw input text. Unparseable text yields the default; anything
    /// else is clamped into range.
    pub fn parse(raw: &str) -> Self {
        match parse_leading_int(raw) {
            Some(value) => Self::new(value),
            None => Self::default(),
        }
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }

    pub fn step(self, delta: i64) -> Self {
        Self::new(self.0 as i64 + delta)
    }

    /// `checkbox-1 ..= checkbox-N`, regenerated on every call.
    pub fn ids(self) -> impl Iterator<Item = String> {
        (1..=self.get()).map(checkbox_id)
    }
}

/// Reads an optionally signed integer prefix (`"  12abc"` → 12). Saturates
/// instead of overflowing.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen = true;
        value = value.saturating_mul(10).saturating_add((b - b'0') as i64);
    }

    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Decodes the persisted form. Malformed content is reported and treated as
/// "no saved state"; only an unreadable backing is an error.
pub fn load_checkbox_state(backing: &dyn KeyValueStore) -> Result<CheckboxState, StorageError> {
    let Some(raw) = backing.get_item(CHECKBOX_STATE_KEY)? else {
        return Ok(CheckboxState::new());
    };

    match CheckboxState::from_json(&raw) {
        Ok(state) => Ok(state),
        Err(e) => {
            tracing::warn!(error = %e, "failed to parse saved checkbox state");
            Ok(CheckboxState::new())
        }
    }
}

/// Owned checkbox state with write-through persistence.
///
/// Every mutation rewrites the whole map under [`CHECKBOX_STATE_KEY`], or
/// removes the key once the map is empty. The first storage failure is logged
/// and the store continues in memory only for the rest of the session.
///
/// Entries for ids beyond the current count are kept, so shrinking and then
/// growing the list restores earlier checks.
pub struct CheckboxStateStore {
    state: CheckboxState,
    backing: Option<Arc<dyn KeyValueStore>>,
    degraded: bool,
}

impl CheckboxStateStore {
    /// Hydrates from `backing`, or starts empty.
    pub fn open(backing: Arc<dyn KeyValueStore>) -> Self {
        match load_checkbox_state(backing.as_ref()) {
            Ok(state) => Self {
                state,
                backing: Some(backing),
                degraded: false,
            },
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    storage = %backing.describe(),
                    "checkbox state storage unreadable, continuing in memory"
                );
                Self {
                    state: CheckboxState::new(),
                    backing: None,
                    degraded: true,
                }
            }
        }
    }

    /// A store with no backing at all.
    pub fn detached() -> Self {
        Self {
            state: CheckboxState::new(),
            backing: None,
            degraded: false,
        }
    }

    /// Re-reads the persisted form, replacing the in-memory map.
    pub fn load(&mut self) -> &CheckboxState {
        if let Some(backing) = self.backing.clone() {
            match load_checkbox_state(backing.as_ref()) {
                Ok(state) => self.state = state,
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        storage = %backing.describe(),
                        "checkbox state storage unreadable, continuing in memory"
                    );
                    self.degrade();
                }
            }
        }
        &self.state
    }

    pub fn get(&self, id: &str) -> bool {
        self.state.get(id)
    }

    pub fn set(&mut self, id: &str, checked: bool) {
        self.state.set(id, checked);
        self.persist();
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        let checked = !self.get(id);
        self.set(id, checked);
        checked
    }

    pub fn reset(&mut self) {
        self.state.clear();
        self.persist();
    }

    pub fn state(&self) -> &CheckboxState {
        &self.state
    }

    /// `true` once a storage failure forced in-memory-only operation.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn backing_description(&self) -> Option<String> {
        self.backing.as_ref().map(|b| b.describe())
    }

    fn persist(&mut self) {
        let Some(backing) = self.backing.as_ref() else {
            return;
        };

        let result = if self.state.is_empty() {
            backing.remove_item(CHECKBOX_STATE_KEY)
        } else {
            match self.state.to_json() {
                Ok(json) => backing.set_item(CHECKBOX_STATE_KEY, &json),
                Err(e) => {
                    tracing::error!(error = %e, "failed to serialize checkbox state");
                    return;
                }
            }
        };

        if let Err(e) = result {
            tracing::warn!(
                error = %e,
                storage = %backing.describe(),
                "failed to persist checkbox state, continuing in memory"
            );
            self.degrade();
        }
    }

    fn degrade(&mut self) {
        self.backing = None;
        self.degraded = true;
    }
}

impl std::fmt::Debug for CheckboxStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckboxStateStore")
            .field("state", &self.state)
            .field("backing", &self.backing_description())
            .field("degraded", &self.degraded)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/checkbox.rs"]
mod tests;
