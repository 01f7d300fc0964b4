//! Service ports: traits + data contracts.

pub mod color_scheme;
pub mod settings;
pub mod storage;

pub use color_scheme::{ColorSchemeProbe, FixedColorScheme};
pub use settings::{KeybindingRule, Settings, StorageSettings, ThemeSettings};
pub use storage::{KeyValueStore, StorageError};
