//! 工作台模块：持有 Store，分发输入，渲染当前路由

use super::theme::{TerminalColorSupport, UiTheme};
use crate::core::event::InputEvent;
use crate::kernel::services::adapters::{load_settings_from, KeybindingService};
use crate::kernel::services::ports::{ColorSchemeProbe, KeyValueStore, Settings, ThemeSettings};
use crate::kernel::{
    Action as KernelAction, AppState, CheckboxStateStore, Effect, Route, Store, ThemeManager,
    WindowSize,
};
use crate::tui::view::{EventResult, View};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime};

mod input;
mod render;
mod tick;
mod util;

const STATUS_HEIGHT: u16 = 1;
const LOG_PANEL_MIN_HEIGHT: u16 = 6;
const LOG_BUFFER_CAP: usize = 2000;
const MAX_LOG_DRAIN_PER_TICK: usize = 1024;
const SETTINGS_CHECK_INTERVAL: Duration = Duration::from_millis(500);

/// Clickable regions recorded during the last render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HitTarget {
    DashboardEntry(usize),
    BackLink,
    CountInput,
    Checkbox(usize),
    ResetButton,
    ThemeToggle,
}

pub struct Workbench {
    store: Store,
    keybindings: KeybindingService,
    theme_settings: ThemeSettings,
    color_support: TerminalColorSupport,
    theme: UiTheme,
    probe: Arc<dyn ColorSchemeProbe>,
    log_rx: Option<Receiver<String>>,
    logs: VecDeque<String>,
    settings_path: Option<PathBuf>,
    last_settings_check: Instant,
    last_settings_modified: Option<SystemTime>,
    hit_regions: Vec<(Rect, HitTarget)>,
    cursor: Option<(u16, u16)>,
    should_quit: bool,
}

impl Workbench {
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        probe: Arc<dyn ColorSchemeProbe>,
        window: WindowSize,
        color_support: TerminalColorSupport,
        log_rx: Option<Receiver<String>>,
    ) -> Self {
        let checkboxes = CheckboxStateStore::open(storage.clone());
        let theme_manager = ThemeManager::new(Some(storage), probe.as_ref());
        let mode = theme_manager.current();
        let store = Store::new(AppState::new(checkboxes, theme_manager, window));

        let theme_settings = ThemeSettings::default();
        let theme = UiTheme::build(mode, &theme_settings, color_support);

        Self {
            store,
            keybindings: KeybindingService::new(),
            theme_settings,
            color_support,
            theme,
            probe,
            log_rx,
            logs: VecDeque::with_capacity(LOG_BUFFER_CAP.min(256)),
            settings_path: None,
            last_settings_check: Instant::now(),
            last_settings_modified: None,
            hit_regions: Vec::new(),
            cursor: None,
            should_quit: false,
        }
    }

    /// Replaces keybindings and color overrides.
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.keybindings = KeybindingService::from_rules(&settings.keybindings);
        self.theme_settings = settings.theme.clone();
        self.rebuild_theme();
    }

    /// Reload settings from `path` whenever its mtime changes.
    pub fn watch_settings(&mut self, path: PathBuf) {
        self.last_settings_modified = std::fs::metadata(&path).and_then(|m| m.modified()).ok();
        self.settings_path = Some(path);
    }

    fn reload_settings(&mut self) -> bool {
        let Some(path) = self.settings_path.as_ref() else {
            return false;
        };
        let Some(settings) = load_settings_from(path) else {
            return false;
        };
        tracing::info!(path = %path.display(), "settings reloaded");
        self.apply_settings(&settings);
        true
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn route(&self) -> Route {
        self.store.state().ui.route
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn theme(&self) -> &UiTheme {
        &self.theme
    }

    pub fn logs(&self) -> impl Iterator<Item = &str> {
        self.logs.iter().map(String::as_str)
    }

    fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        let result = self.store.dispatch(action);
        let mut changed = result.state_changed;
        for effect in result.effects {
            changed |= self.apply_effect(effect);
        }
        if self.store.state().theme.current() != self.theme.mode {
            self.rebuild_theme();
        }
        changed
    }

    fn apply_effect(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::Quit => {
                tracing::info!("quit requested");
                self.should_quit = true;
                false
            }
            Effect::ReloadSettings => self.reload_settings(),
        }
    }

    fn rebuild_theme(&mut self) {
        let mode = self.store.state().theme.current();
        self.theme = UiTheme::build(mode, &self.theme_settings, self.color_support);
    }
}

impl View for Workbench {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render::render(self, frame, area);
    }

    fn cursor_position(&self) -> Option<(u16, u16)> {
        self.cursor
    }
}
