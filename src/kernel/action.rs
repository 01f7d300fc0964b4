use super::state::{CheckovFocus, Route};
use super::theme::ThemeMode;
use crate::core::Command;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Action {
    RunCommand { command: Command, now: Instant },
    Navigate(Route),
    DashboardSelect { index: usize },
    CheckovSetCountInput { raw: String },
    CheckovSetFocus(CheckovFocus),
    CheckovSelect { index: usize },
    /// Flip the checkbox at a zero-based position (mouse click).
    CheckovToggle { index: usize },
    CheckovReset { now: Instant },
    ToggleTheme,
    /// The platform color-scheme preference was re-probed.
    SystemColorScheme(Option<ThemeMode>),
    WindowResized { width: u16, height: u16 },
    Tick { now: Instant },
}
