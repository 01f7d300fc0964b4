use crate::core::Command;

use super::checkbox::{checkbox_id, DisplayCount};
use super::state::{CheckovFocus, Route, DASHBOARD_ENTRIES, GRID_COLUMNS, RESET_FEEDBACK};
use super::{Action, AppState, Effect};
use std::time::Instant;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn effect(effect: Effect) -> Self {
        Self {
            effects: vec![effect],
            state_changed: false,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::RunCommand { command, now } => self.dispatch_command(command, now),
            Action::Navigate(route) => DispatchResult::changed(self.navigate(route)),
            Action::DashboardSelect { index } => {
                let index = index.min(DASHBOARD_ENTRIES.len() - 1);
                let prev = self.state.dashboard.selected;
                self.state.dashboard.selected = index;
                DispatchResult::changed(prev != index)
            }
            Action::CheckovSetCountInput { raw } => {
                DispatchResult::changed(self.set_count_input(raw))
            }
            Action::CheckovSetFocus(focus) => DispatchResult::changed(self.set_focus(focus)),
            Action::CheckovSelect { index } => {
                let mut changed = self.set_focus(CheckovFocus::Checkboxes);
                changed |= self.select_checkbox(index);
                DispatchResult::changed(changed)
            }
            Action::CheckovToggle { index } => {
                if index >= self.state.checkov.count.get() {
                    return DispatchResult::changed(false);
                }
                self.set_focus(CheckovFocus::Checkboxes);
                self.select_checkbox(index);
                self.toggle_checkbox(index);
                DispatchResult::changed(true)
            }
            Action::CheckovReset { now } => {
                self.reset_all(now);
                DispatchResult::changed(true)
            }
            Action::ToggleTheme => {
                self.state.theme.toggle();
                DispatchResult::changed(true)
            }
            Action::SystemColorScheme(preferred) => {
                let Some(preferred) = preferred else {
                    return DispatchResult::changed(false);
                };
                DispatchResult::changed(self.state.theme.on_system_change(preferred))
            }
            Action::WindowResized { width, height } => {
                let prev = self.state.window;
                self.state.window.width = width;
                self.state.window.height = height;
                DispatchResult::changed(prev != self.state.window)
            }
            Action::Tick { now } => DispatchResult::changed(self.expire_reset_feedback(now)),
        }
    }

    fn dispatch_command(&mut self, command: Command, now: Instant) -> DispatchResult {
        match command {
            Command::Quit => return DispatchResult::effect(Effect::Quit),
            Command::ReloadSettings => return DispatchResult::effect(Effect::ReloadSettings),
            Command::ToggleTheme => return self.dispatch(Action::ToggleTheme),
            Command::ToggleLogPanel => {
                self.state.ui.log_panel_visible = !self.state.ui.log_panel_visible;
                return DispatchResult::changed(true);
            }
            Command::OpenDashboard => {
                return DispatchResult::changed(self.navigate(Route::Dashboard));
            }
            Command::OpenCheckov => return DispatchResult::changed(self.navigate(Route::Checkov)),
            Command::OpenWindowSize => {
                return DispatchResult::changed(self.navigate(Route::WindowSize));
            }
            Command::Back => {
                if self.state.ui.log_panel_visible {
                    self.state.ui.log_panel_visible = false;
                    return DispatchResult::changed(true);
                }
                return DispatchResult::changed(self.navigate(Route::Dashboard));
            }
            _ => {}
        }

        match self.state.ui.route {
            Route::Dashboard => DispatchResult::changed(self.dashboard_command(command)),
            Route::Checkov => DispatchResult::changed(self.checkov_command(command, now)),
            Route::WindowSize => DispatchResult::changed(false),
        }
    }

    fn navigate(&mut self, route: Route) -> bool {
        if self.state.ui.route == route {
            return false;
        }
        if self.state.ui.route == Route::Checkov {
            self.normalize_count_input();
        }
        if let Some(index) = DASHBOARD_ENTRIES.iter().position(|e| e.route == route) {
            self.state.dashboard.selected = index;
        }
        tracing::debug!(from = self.state.ui.route.path(), to = route.path(), "navigate");
        self.state.ui.route = route;
        true
    }

    fn dashboard_command(&mut self, command: Command) -> bool {
        let last = DASHBOARD_ENTRIES.len() - 1;
        let selected = self.state.dashboard.selected;
        match command {
            Command::MoveUp | Command::MoveLeft | Command::FocusPrev => {
                self.state.dashboard.selected = selected.saturating_sub(1);
                self.state.dashboard.selected != selected
            }
            Command::MoveDown | Command::MoveRight | Command::FocusNext => {
                self.state.dashboard.selected = (selected + 1).min(last);
                self.state.dashboard.selected != selected
            }
            Command::Activate => {
                let route = DASHBOARD_ENTRIES[selected.min(last)].route;
                self.navigate(route)
            }
            _ => false,
        }
    }

    fn checkov_command(&mut self, command: Command, now: Instant) -> bool {
        match command {
            Command::FocusNext => {
                let next = self.state.checkov.focus.next();
                return self.set_focus(next);
            }
            Command::FocusPrev => {
                let prev = self.state.checkov.focus.prev();
                return self.set_focus(prev);
            }
            Command::ResetAll => {
                self.reset_all(now);
                return true;
            }
            Command::IncrementCount => return self.step_count(1),
            Command::DecrementCount => return self.step_count(-1),
            _ => {}
        }

        match self.state.checkov.focus {
            CheckovFocus::CountInput => match command {
                Command::InsertChar(ch) => {
                    if !(ch.is_ascii_digit() || ch == '-' || ch == '+') {
                        return false;
                    }
                    let mut raw = self.state.checkov.count_input.clone();
                    raw.push(ch);
                    self.set_count_input(raw)
                }
                Command::DeleteBackward => {
                    let mut raw = self.state.checkov.count_input.clone();
                    if raw.pop().is_none() {
                        return false;
                    }
                    self.set_count_input(raw)
                }
                Command::MoveUp => self.step_count(1),
                Command::MoveDown => self.step_count(-1),
                Command::Activate => self.set_focus(CheckovFocus::Checkboxes),
                _ => false,
            },
            CheckovFocus::Checkboxes => {
                let selected = self.state.checkov.selected;
                let count = self.state.checkov.count.get();
                match command {
                    Command::MoveLeft => self.select_checkbox(selected.saturating_sub(1)),
                    Command::MoveRight => self.select_checkbox(selected + 1),
                    Command::MoveUp => match selected.checked_sub(GRID_COLUMNS) {
                        Some(index) => self.select_checkbox(index),
                        None => self.set_focus(CheckovFocus::CountInput),
                    },
                    Command::MoveDown => {
                        if selected + GRID_COLUMNS < count {
                            self.select_checkbox(selected + GRID_COLUMNS)
                        } else {
                            self.set_focus(CheckovFocus::ResetButton)
                        }
                    }
                    Command::Activate | Command::ToggleChecked => {
                        self.toggle_checkbox(selected);
                        true
                    }
                    _ => false,
                }
            }
            CheckovFocus::ResetButton => match command {
                Command::Activate | Command::ToggleChecked => {
                    self.reset_all(now);
                    true
                }
                Command::MoveUp => self.set_focus(CheckovFocus::Checkboxes),
                _ => false,
            },
            CheckovFocus::BackLink => match command {
                Command::Activate => self.navigate(Route::Dashboard),
                Command::MoveDown => self.set_focus(CheckovFocus::CountInput),
                _ => false,
            },
        }
    }

    fn set_focus(&mut self, focus: CheckovFocus) -> bool {
        let prev = self.state.checkov.focus;
        if prev == focus {
            return false;
        }
        if prev == CheckovFocus::CountInput {
            self.normalize_count_input();
        }
        self.state.checkov.focus = focus;
        true
    }

    fn set_count_input(&mut self, raw: String) -> bool {
        let count = DisplayCount::parse(&raw);
        let changed = raw != self.state.checkov.count_input || count != self.state.checkov.count;
        self.state.checkov.count_input = raw;
        self.apply_count(count);
        changed
    }

    fn step_count(&mut self, delta: i64) -> bool {
        let count = self.state.checkov.count.step(delta);
        let raw = count.get().to_string();
        let changed = raw != self.state.checkov.count_input || count != self.state.checkov.count;
        self.state.checkov.count_input = raw;
        self.apply_count(count);
        changed
    }

    fn apply_count(&mut self, count: DisplayCount) {
        if count != self.state.checkov.count {
            tracing::debug!(count = count.get(), "checkbox count changed");
        }
        self.state.checkov.count = count;
        let last = count.get() - 1;
        if self.state.checkov.selected > last {
            self.state.checkov.selected = last;
        }
    }

    fn normalize_count_input(&mut self) {
        self.state.checkov.count_input = self.state.checkov.count.get().to_string();
    }

    fn select_checkbox(&mut self, index: usize) -> bool {
        let index = index.min(self.state.checkov.count.get() - 1);
        let prev = self.state.checkov.selected;
        self.state.checkov.selected = index;
        prev != index
    }

    fn toggle_checkbox(&mut self, index: usize) {
        let id = checkbox_id(index + 1);
        let checked = self.state.checkboxes.toggle(&id);
        tracing::debug!(id = %id, checked, "checkbox toggled");
    }

    fn reset_all(&mut self, now: Instant) {
        self.state.checkboxes.reset();
        self.state.checkov.reset_feedback_until = Some(now + RESET_FEEDBACK);
        tracing::info!("checkbox state reset");
    }

    fn expire_reset_feedback(&mut self, now: Instant) -> bool {
        match self.state.checkov.reset_feedback_until {
            Some(deadline) if now >= deadline => {
                self.state.checkov.reset_feedback_until = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
