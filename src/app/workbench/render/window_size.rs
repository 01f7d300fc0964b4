use super::super::util;
use super::super::Workbench;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const CAPTION: &str = "Terminal size";

impl Workbench {
    pub(super) fn render_window_size(&mut self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }

        self.render_back_link(frame, area, false);

        let text = self.store.state().window.to_string();
        let middle = area.y + area.height / 2;
        if middle > area.y + 2 {
            frame.render_widget(
                Paragraph::new(Span::styled(CAPTION, Style::default().fg(self.theme.muted_fg)))
                    .alignment(Alignment::Center),
                util::centered_row(area, middle - 2, area.width, 1),
            );
        }
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                text,
                Style::default()
                    .fg(self.theme.accent_fg)
                    .add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            util::centered_row(area, middle, area.width, 1),
        );
    }
}
