use super::checkbox::{CheckboxStateStore, DisplayCount};
use super::theme::ThemeManager;
use std::fmt;
use std::time::{Duration, Instant};

/// How long the reset button shows its confirmation label.
pub const RESET_FEEDBACK: Duration = Duration::from_millis(1000);
pub const RESET_LABEL: &str = "Reset All";
pub const RESET_DONE_LABEL: &str = "Reset Complete!";
pub const BACK_LABEL: &str = "← Back to Dashboard";

/// Checkboxes per grid row.
pub const GRID_COLUMNS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Checkov,
    WindowSize,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Checkov => "/checkov",
            Route::WindowSize => "/window-size",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardEntry {
    pub route: Route,
    pub title: &'static str,
    pub description: &'static str,
}

pub const DASHBOARD_TITLE: &str = "My Apps Dashboard";

pub const DASHBOARD_ENTRIES: [DashboardEntry; 2] = [
    DashboardEntry {
        route: Route::Checkov,
        title: "Checkov",
        description: "A simple, lightweight app for creating and managing checklists",
    },
    DashboardEntry {
        route: Route::WindowSize,
        title: "Browser Size",
        description: "Real-time browser window dimensions display",
    },
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub selected: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckovFocus {
    CountInput,
    #[default]
    Checkboxes,
    ResetButton,
    BackLink,
}

impl CheckovFocus {
    const ORDER: [CheckovFocus; 4] = [
        CheckovFocus::BackLink,
        CheckovFocus::CountInput,
        CheckovFocus::Checkboxes,
        CheckovFocus::ResetButton,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckovState {
    pub count: DisplayCount,
    /// Text currently in the count field; may be mid-edit and out of range.
    pub count_input: String,
    pub focus: CheckovFocus,
    /// Zero-based index of the highlighted checkbox.
    pub selected: usize,
    pub reset_feedback_until: Option<Instant>,
}

impl Default for CheckovState {
    fn default() -> Self {
        let count = DisplayCount::default();
        Self {
            count,
            count_input: count.get().to_string(),
            focus: CheckovFocus::default(),
            selected: 0,
            reset_feedback_until: None,
        }
    }
}

impl CheckovState {
    pub fn reset_label(&self, now: Instant) -> &'static str {
        if self.reset_feedback_active(now) {
            RESET_DONE_LABEL
        } else {
            RESET_LABEL
        }
    }

    pub fn reset_feedback_active(&self, now: Instant) -> bool {
        self.reset_feedback_until
            .is_some_and(|deadline| now < deadline)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowSize {
    pub width: u16,
    pub height: u16,
}

impl WindowSize {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub route: Route,
    pub log_panel_visible: bool,
}

#[derive(Debug)]
pub struct AppState {
    pub ui: UiState,
    pub dashboard: DashboardState,
    pub checkov: CheckovState,
    pub window: WindowSize,
    pub checkboxes: CheckboxStateStore,
    pub theme: ThemeManager,
}

impl AppState {
    pub fn new(checkboxes: CheckboxStateStore, theme: ThemeManager, window: WindowSize) -> Self {
        Self {
            ui: UiState::default(),
            dashboard: DashboardState::default(),
            checkov: CheckovState::default(),
            window,
            checkboxes,
            theme,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
