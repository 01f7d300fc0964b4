//! 快捷键：按键 → 命令（支持上下文）

use super::settings::parse_keybinding;
use crate::core::event::Key;
use crate::core::event::KeyCode;
use crate::core::Command;
use crate::kernel::services::ports::KeybindingRule;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    Global,
    Dashboard,
    Checkov,
    /// The count field on the checklist screen; falls back to `Checkov`.
    CountInput,
    WindowSize,
}

impl KeybindingContext {
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_ascii_lowercase();
        match v.as_str() {
            "global" => Some(Self::Global),
            "dashboard" | "home" => Some(Self::Dashboard),
            "checkov" | "checklist" => Some(Self::Checkov),
            "countinput" | "count_input" | "checkov.count" | "count" => Some(Self::CountInput),
            "windowsize" | "window_size" | "window-size" => Some(Self::WindowSize),
            _ => None,
        }
    }
}

pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    dashboard: FxHashMap<Key, Command>,
    checkov: FxHashMap<Key, Command>,
    count_input: FxHashMap<Key, Command>,
    window_size: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            global: default_global_keybindings(),
            dashboard: default_dashboard_keybindings(),
            checkov: default_checkov_keybindings(),
            count_input: default_count_input_keybindings(),
            window_size: default_window_size_keybindings(),
        }
    }

    /// Defaults plus the user's rules. An empty `command` unbinds the key.
    pub fn from_rules(rules: &[KeybindingRule]) -> Self {
        let mut service = Self::with_defaults();
        service.apply_rules(rules);
        service
    }

    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) {
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "ignoring keybinding with unparsable key");
                continue;
            };
            let context = match rule.context.as_deref() {
                None => KeybindingContext::Global,
                Some(name) => match KeybindingContext::parse(name) {
                    Some(context) => context,
                    None => {
                        tracing::warn!(context = %name, "ignoring keybinding with unknown context");
                        continue;
                    }
                },
            };
            if rule.command.trim().is_empty() {
                let _ = self.unbind(context, &key);
            } else {
                self.bind(context, key, Command::from_name(&rule.command));
            }
        }
    }

    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<&Command> {
        match context {
            KeybindingContext::Global => self.global.get(key),
            KeybindingContext::Dashboard => {
                self.dashboard.get(key).or_else(|| self.global.get(key))
            }
            KeybindingContext::Checkov => self.checkov.get(key).or_else(|| self.global.get(key)),
            KeybindingContext::CountInput => self
                .count_input
                .get(key)
                .or_else(|| self.checkov.get(key))
                .or_else(|| self.global.get(key)),
            KeybindingContext::WindowSize => {
                self.window_size.get(key).or_else(|| self.global.get(key))
            }
        }
    }

    /// Lookup in `context` alone, without falling back.
    pub fn resolve_exact(&self, context: KeybindingContext, key: &Key) -> Option<&Command> {
        self.bindings(context).get(key)
    }

    pub fn bindings(&self, context: KeybindingContext) -> &FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &self.global,
            KeybindingContext::Dashboard => &self.dashboard,
            KeybindingContext::Checkov => &self.checkov,
            KeybindingContext::CountInput => &self.count_input,
            KeybindingContext::WindowSize => &self.window_size,
        }
    }

    pub fn bind(&mut self, context: KeybindingContext, key: Key, command: Command) {
        self.map_mut(context).insert(key, command);
    }

    pub fn unbind(&mut self, context: KeybindingContext, key: &Key) -> Option<Command> {
        self.map_mut(context).remove(key)
    }

    fn map_mut(&mut self, context: KeybindingContext) -> &mut FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &mut self.global,
            KeybindingContext::Dashboard => &mut self.dashboard,
            KeybindingContext::Checkov => &mut self.checkov,
            KeybindingContext::CountInput => &mut self.count_input,
            KeybindingContext::WindowSize => &mut self.window_size,
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(16);

    bindings.insert(Key::simple(KeyCode::Esc), Command::Back);
    bindings.insert(Key::simple(KeyCode::Tab), Command::FocusNext);
    bindings.insert(Key::simple(KeyCode::BackTab), Command::FocusPrev);

    bindings.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);
    bindings.insert(Key::ctrl(KeyCode::Char('c')), Command::Quit);
    bindings.insert(Key::ctrl(KeyCode::Char('t')), Command::ToggleTheme);
    bindings.insert(Key::ctrl(KeyCode::Char('r')), Command::ReloadSettings);
    bindings.insert(Key::simple(KeyCode::F(12)), Command::ToggleLogPanel);

    bindings
}

fn default_dashboard_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(16);

    bindings.insert(Key::simple(KeyCode::Up), Command::MoveUp);
    bindings.insert(Key::simple(KeyCode::Down), Command::MoveDown);
    bindings.insert(Key::simple(KeyCode::Left), Command::MoveLeft);
    bindings.insert(Key::simple(KeyCode::Right), Command::MoveRight);
    bindings.insert(Key::simple(KeyCode::Char('k')), Command::MoveUp);
    bindings.insert(Key::simple(KeyCode::Char('j')), Command::MoveDown);
    bindings.insert(Key::simple(KeyCode::Enter), Command::Activate);
    bindings.insert(Key::simple(KeyCode::Char('1')), Command::OpenCheckov);
    bindings.insert(Key::simple(KeyCode::Char('2')), Command::OpenWindowSize);
    bindings.insert(Key::simple(KeyCode::Char('t')), Command::ToggleTheme);
    bindings.insert(Key::simple(KeyCode::Char('q')), Command::Quit);

    bindings
}

fn default_checkov_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(16);

    bindings.insert(Key::simple(KeyCode::Up), Command::MoveUp);
    bindings.insert(Key::simple(KeyCode::Down), Command::MoveDown);
    bindings.insert(Key::simple(KeyCode::Left), Command::MoveLeft);
    bindings.insert(Key::simple(KeyCode::Right), Command::MoveRight);
    bindings.insert(Key::simple(KeyCode::Enter), Command::Activate);
    bindings.insert(Key::simple(KeyCode::Char(' ')), Command::ToggleChecked);
    bindings.insert(Key::simple(KeyCode::Char('r')), Command::ResetAll);
    bindings.insert(Key::simple(KeyCode::Char('+')), Command::IncrementCount);
    bindings.insert(Key::simple(KeyCode::Char('=')), Command::IncrementCount);
    bindings.insert(Key::simple(KeyCode::Char('-')), Command::DecrementCount);
    bindings.insert(Key::simple(KeyCode::Char('b')), Command::Back);
    bindings.insert(Key::simple(KeyCode::Char('t')), Command::ToggleTheme);

    bindings
}

fn default_count_input_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(8);

    bindings.insert(Key::simple(KeyCode::Backspace), Command::DeleteBackward);
    bindings.insert(Key::simple(KeyCode::Up), Command::IncrementCount);
    bindings.insert(Key::simple(KeyCode::Down), Command::DecrementCount);
    bindings.insert(Key::simple(KeyCode::Enter), Command::Activate);

    bindings
}

fn default_window_size_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(4);

    bindings.insert(Key::simple(KeyCode::Char('b')), Command::Back);
    bindings.insert(Key::simple(KeyCode::Enter), Command::Back);
    bindings.insert(Key::simple(KeyCode::Char('t')), Command::ToggleTheme);

    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
