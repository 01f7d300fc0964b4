use super::util;
use super::{HitTarget, Workbench};
use crate::core::event::{
    InputEvent, Key, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use crate::core::Command;
use crate::kernel::services::adapters::KeybindingContext;
use crate::kernel::state::DASHBOARD_ENTRIES;
use crate::kernel::{Action as KernelAction, CheckovFocus, Route};
use crate::tui::view::EventResult;
use std::time::Instant;

pub(super) fn handle_input(workbench: &mut Workbench, event: &InputEvent) -> EventResult {
    match event {
        InputEvent::Key(key_event) => workbench.handle_key_event(key_event),
        InputEvent::Mouse(mouse_event) => workbench.handle_mouse_event(mouse_event),
        InputEvent::Paste(text) => workbench.handle_paste(text),
        InputEvent::Resize(width, height) => {
            let changed = workbench.dispatch_kernel(KernelAction::WindowResized {
                width: *width,
                height: *height,
            });
            consumed_if(changed)
        }
        InputEvent::FocusGained => {
            let preferred = workbench.probe.preferred();
            tracing::debug!(?preferred, "re-probing color scheme");
            consumed_if(workbench.dispatch_kernel(KernelAction::SystemColorScheme(preferred)))
        }
        InputEvent::FocusLost => EventResult::Ignored,
    }
}

fn consumed_if(changed: bool) -> EventResult {
    if changed {
        EventResult::Consumed
    } else {
        EventResult::Ignored
    }
}

fn is_count_char(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '-' || ch == '+'
}

impl Workbench {
    fn keybinding_context(&self) -> KeybindingContext {
        let state = self.store.state();
        match state.ui.route {
            Route::Dashboard => KeybindingContext::Dashboard,
            Route::Checkov if state.checkov.focus == CheckovFocus::CountInput => {
                KeybindingContext::CountInput
            }
            Route::Checkov => KeybindingContext::Checkov,
            Route::WindowSize => KeybindingContext::WindowSize,
        }
    }

    fn handle_key_event(&mut self, event: &KeyEvent) -> EventResult {
        if event.kind == KeyEventKind::Release {
            return EventResult::Ignored;
        }

        let key = Key::from(*event);
        let context = self.keybinding_context();

        // The count field takes digits and signs as text before any binding;
        // other printable keys must not reach the checklist bindings.
        if context == KeybindingContext::CountInput {
            if let Some(ch) = key.typed_char() {
                if !is_count_char(ch) {
                    return EventResult::Ignored;
                }
                self.run_command(Command::InsertChar(ch));
                return self.result_after_command();
            }
        }

        let Some(command) = self.keybindings.resolve(context, &key).cloned() else {
            return EventResult::Ignored;
        };
        if let Command::Custom(name) = &command {
            tracing::debug!(command = %name, "no handler for custom command");
            return EventResult::Ignored;
        }
        self.run_command(command);
        self.result_after_command()
    }

    fn run_command(&mut self, command: Command) -> bool {
        self.dispatch_kernel(KernelAction::RunCommand {
            command,
            now: Instant::now(),
        })
    }

    fn result_after_command(&self) -> EventResult {
        if self.should_quit {
            EventResult::Quit
        } else {
            EventResult::Consumed
        }
    }

    fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        self.hit_regions
            .iter()
            .rev()
            .find(|(area, _)| util::rect_contains(*area, column, row))
            .map(|(_, target)| *target)
    }

    fn handle_mouse_event(&mut self, event: &MouseEvent) -> EventResult {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(target) = self.hit_test(event.column, event.row) else {
                    return EventResult::Ignored;
                };
                consumed_if(self.click(target))
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                if self.hit_test(event.column, event.row) != Some(HitTarget::CountInput) {
                    return EventResult::Ignored;
                }
                let command = if event.kind == MouseEventKind::ScrollUp {
                    Command::IncrementCount
                } else {
                    Command::DecrementCount
                };
                consumed_if(self.run_command(command))
            }
            _ => EventResult::Ignored,
        }
    }

    fn click(&mut self, target: HitTarget) -> bool {
        match target {
            HitTarget::DashboardEntry(index) => {
                let selected = self.dispatch_kernel(KernelAction::DashboardSelect { index });
                let navigated = match DASHBOARD_ENTRIES.get(index) {
                    Some(entry) => self.dispatch_kernel(KernelAction::Navigate(entry.route)),
                    None => false,
                };
                selected || navigated
            }
            HitTarget::BackLink => self.dispatch_kernel(KernelAction::Navigate(Route::Dashboard)),
            HitTarget::CountInput => {
                self.dispatch_kernel(KernelAction::CheckovSetFocus(CheckovFocus::CountInput))
            }
            HitTarget::Checkbox(index) => {
                self.dispatch_kernel(KernelAction::CheckovToggle { index })
            }
            HitTarget::ResetButton => {
                let focused =
                    self.dispatch_kernel(KernelAction::CheckovSetFocus(CheckovFocus::ResetButton));
                let reset = self.dispatch_kernel(KernelAction::CheckovReset {
                    now: Instant::now(),
                });
                focused || reset
            }
            HitTarget::ThemeToggle => self.dispatch_kernel(KernelAction::ToggleTheme),
        }
    }

    fn handle_paste(&mut self, text: &str) -> EventResult {
        if self.keybinding_context() != KeybindingContext::CountInput {
            return EventResult::Ignored;
        }
        let mut raw = self.store.state().checkov.count_input.clone();
        raw.extend(text.chars().filter(|ch| is_count_char(*ch)));
        consumed_if(self.dispatch_kernel(KernelAction::CheckovSetCountInput { raw }))
    }
}
