use super::super::util;
use super::super::{HitTarget, Workbench};
use crate::kernel::{Route, ThemeMode};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

impl Workbench {
    fn key_hints(&self) -> &'static str {
        match self.store.state().ui.route {
            Route::Dashboard => "↑↓ select  Enter open  Ctrl+Q quit",
            Route::Checkov => "Tab focus  Space toggle  r reset  Esc back",
            Route::WindowSize => "Esc back  Ctrl+Q quit",
        }
    }

    fn storage_label(&self) -> (String, bool) {
        let checkboxes = &self.store.state().checkboxes;
        if checkboxes.is_degraded() {
            return ("memory only".to_string(), true);
        }
        let label = checkboxes
            .backing_description()
            .unwrap_or_else(|| "memory".to_string());
        (label, false)
    }

    pub(super) fn render_status(&mut self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let base = Style::default()
            .bg(self.theme.status_bg)
            .fg(self.theme.status_fg);

        let theme_label = match self.store.state().theme.current() {
            ThemeMode::Light => " Light ",
            ThemeMode::Dark => " Dark ",
        };
        let theme_width = util::text_width(theme_label).min(area.width);
        let theme_area = Rect::new(area.x + area.width - theme_width, area.y, theme_width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(
                theme_label,
                base.add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )),
            theme_area,
        );
        self.hit_regions.push((theme_area, HitTarget::ThemeToggle));

        let (storage, degraded) = self.storage_label();
        let storage_style = if degraded {
            base.fg(self.theme.muted_fg)
        } else {
            base
        };

        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.store.state().ui.route.path()),
                base.add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("| {} ", self.key_hints()), base),
            Span::styled(format!("| {} ", storage), storage_style),
        ];
        if let Some(last) = self.logs.back() {
            spans.push(Span::styled(format!("| {}", last), base.fg(self.theme.muted_fg)));
        }

        let left_area = Rect::new(area.x, area.y, area.width - theme_width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)).style(base), left_area);
    }
}
