use super::super::util;
use super::super::{HitTarget, Workbench};
use crate::kernel::state::{DASHBOARD_ENTRIES, DASHBOARD_TITLE};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const CARD_HEIGHT: u16 = 6;
const CARD_GAP: u16 = 2;
const MAX_CONTENT_WIDTH: u16 = 84;
/// Below this the cards stack vertically.
const TWO_COLUMN_MIN_WIDTH: u16 = 60;

impl Workbench {
    pub(super) fn render_dashboard(&mut self, frame: &mut Frame, area: Rect) {
        if area.height < 2 {
            return;
        }

        let title_area = Rect::new(area.x, area.y + 1, area.width, 1);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                DASHBOARD_TITLE,
                Style::default()
                    .fg(self.theme.fg)
                    .add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            title_area,
        );

        let content_width = area.width.saturating_sub(4).min(MAX_CONTENT_WIDTH);
        let top = area.y + 3;
        let content = util::centered_row(area, top, content_width, area.height.saturating_sub(3));
        if content.width == 0 || content.height == 0 {
            return;
        }

        let two_columns = content.width >= TWO_COLUMN_MIN_WIDTH;
        let card_width = if two_columns {
            content.width.saturating_sub(CARD_GAP) / 2
        } else {
            content.width
        };

        let selected = self.store.state().dashboard.selected;
        for (index, entry) in DASHBOARD_ENTRIES.iter().enumerate() {
            let offset = index as u16;
            let (x, y) = if two_columns {
                (content.x + offset * (card_width + CARD_GAP), content.y)
            } else {
                (content.x, content.y + offset * (CARD_HEIGHT + 1))
            };
            let bottom = content.y + content.height;
            if y >= bottom {
                break;
            }
            let card = Rect::new(x, y, card_width, CARD_HEIGHT.min(bottom - y));

            let is_selected = index == selected;
            let border = if is_selected {
                self.theme.focus_border
            } else {
                self.theme.inactive_border
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(self.theme.card_bg));
            let inner = block.inner(card);
            frame.render_widget(block, card);

            let mut title_style = Style::default()
                .fg(self.theme.fg)
                .add_modifier(Modifier::BOLD);
            if is_selected {
                title_style = title_style.fg(self.theme.accent_fg);
            }
            let lines = vec![
                Line::from(Span::styled(entry.title, title_style)),
                Line::from(""),
                Line::from(Span::styled(
                    entry.description,
                    Style::default().fg(self.theme.muted_fg),
                )),
            ];
            frame.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: true })
                    .style(Style::default().bg(self.theme.card_bg)),
                inner,
            );

            self.hit_regions.push((card, HitTarget::DashboardEntry(index)));
        }
    }
}
