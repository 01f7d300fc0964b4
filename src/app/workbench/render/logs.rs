use super::super::Workbench;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

impl Workbench {
    pub(super) fn render_logs(&self, frame: &mut Frame, area: Rect) {
        if area.width < 3 || area.height < 3 {
            return;
        }

        let base_style = Style::default().bg(self.theme.card_bg).fg(self.theme.fg);
        let block = Block::default()
            .title(" Logs ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.focus_border))
            .style(base_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.logs.is_empty() {
            let msg = Line::from(Span::styled(
                "No logs yet",
                Style::default().fg(self.theme.muted_fg),
            ));
            frame.render_widget(Paragraph::new(msg), inner);
            return;
        }

        let visible = (inner.height as usize).min(self.logs.len());
        let start = self.logs.len() - visible;
        let lines: Vec<Line> = self
            .logs
            .iter()
            .skip(start)
            .map(|line| Line::from(line.as_str()))
            .collect();

        frame.render_widget(Paragraph::new(lines).style(base_style), inner);
    }
}
