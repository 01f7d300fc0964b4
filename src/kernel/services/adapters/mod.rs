//! Service adapters: OS specific implementations (IO/env).

pub mod color_scheme;
pub mod keybinding;
pub mod paths;
pub mod settings;
pub mod storage;

pub use color_scheme::EnvColorSchemeProbe;
pub use keybinding::{KeybindingContext, KeybindingService};
pub use paths::{ensure_config_dir, ensure_data_dir, ensure_log_dir, get_data_dir, get_log_dir};
pub use settings::{
    ensure_settings_file, ensure_settings_file_at, get_settings_path, load_settings,
    load_settings_from, parse_keybinding,
};
pub use storage::{FileStorage, MemoryStorage};
