//! Headless application core (state/action/effect).

pub mod action;
pub mod checkbox;
pub mod effect;
pub mod services;
pub mod state;
pub mod store;
pub mod theme;

pub use action::Action;
pub use checkbox::{checkbox_id, CheckboxState, CheckboxStateStore, DisplayCount};
pub use effect::Effect;
pub use state::{
    AppState, CheckovFocus, CheckovState, DashboardState, Route, UiState, WindowSize,
};
pub use store::{DispatchResult, Store};
pub use theme::{ThemeManager, ThemeMode};
