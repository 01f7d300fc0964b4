//! TUI integration layer (crossterm + ratatui).
//!
//! Kept apart from `kernel` so the checklist core has no terminal dependency.

pub mod session;
pub mod view;
