use super::super::util;
use super::super::{HitTarget, Workbench};
use crate::kernel::state::{CheckovFocus, BACK_LABEL, GRID_COLUMNS};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use std::time::Instant;

const TITLE: &str = "Checkov";
const COUNT_LABEL: &str = "Number of checkboxes:";
const CHECKED_GLYPH: &str = "[x]";
const UNCHECKED_GLYPH: &str = "[ ]";
const CELL_WIDTH: u16 = 8;
const INPUT_WIDTH: u16 = 12;
const BOX_HEIGHT: u16 = 3;
const RESET_WIDTH: u16 = 28;

impl Workbench {
    pub(super) fn render_checkov(&mut self, frame: &mut Frame, area: Rect, now: Instant) {
        if area.height == 0 {
            return;
        }

        let focus = self.store.state().checkov.focus;
        self.render_back_link(frame, area, focus == CheckovFocus::BackLink);

        let count = self.store.state().checkov.count.get();
        let rows = count.div_ceil(GRID_COLUMNS) as u16;

        // Rows used besides the title and grid: back link + blank, label,
        // input, blank, blank, reset button.
        let fixed = 2 + 1 + BOX_HEIGHT + 1 + 1 + BOX_HEIGHT;
        let (title_height, row_pitch) = if area.height >= fixed + 2 + rows * 2 {
            (2, 2)
        } else if area.height >= fixed + 2 + rows {
            (2, 1)
        } else {
            (0, 1)
        };

        let mut y = area.y + 2;
        if title_height > 0 {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    TITLE,
                    Style::default()
                        .fg(self.theme.fg)
                        .add_modifier(Modifier::BOLD),
                )))
                .alignment(Alignment::Center),
                util::centered_row(area, y, area.width, 1),
            );
            y += title_height;
        }

        frame.render_widget(
            Paragraph::new(COUNT_LABEL).alignment(Alignment::Center),
            util::centered_row(area, y, area.width, 1),
        );
        y += 1;

        let input_area = util::centered_row(area, y, INPUT_WIDTH, BOX_HEIGHT);
        self.render_count_input(frame, input_area, focus == CheckovFocus::CountInput);
        y += BOX_HEIGHT + 1;

        let grid_width = CELL_WIDTH * GRID_COLUMNS as u16;
        let grid_area = util::centered_row(area, y, grid_width, rows * row_pitch);
        self.render_checkbox_grid(frame, grid_area, row_pitch, focus == CheckovFocus::Checkboxes);
        y += rows * row_pitch + 1;

        let reset_area = util::centered_row(area, y, RESET_WIDTH, BOX_HEIGHT);
        self.render_reset_button(frame, reset_area, now, focus == CheckovFocus::ResetButton);
    }

    pub(super) fn render_back_link(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let width = util::text_width(BACK_LABEL);
        let link_area = Rect::new(
            area.x.saturating_add(1),
            area.y,
            width.min(area.width.saturating_sub(1)),
            1,
        );
        let mut style = Style::default()
            .fg(self.theme.link_fg)
            .add_modifier(Modifier::UNDERLINED);
        if focused {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        frame.render_widget(Paragraph::new(Span::styled(BACK_LABEL, style)), link_area);
        self.hit_regions.push((link_area, HitTarget::BackLink));
    }

    fn render_count_input(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let border = if focused {
            self.theme.focus_border
        } else {
            self.theme.inactive_border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(self.theme.card_bg).fg(self.theme.fg));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.hit_regions.push((area, HitTarget::CountInput));

        let text = self.store.state().checkov.count_input.as_str();
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);

        if focused && inner.width > 0 && inner.height > 0 {
            let text_width = util::text_width(text).min(inner.width);
            let start = inner.x + (inner.width - text_width) / 2;
            let x = (start + text_width).min(inner.x + inner.width - 1);
            self.cursor = Some((x, inner.y));
        }
    }

    fn render_checkbox_grid(&mut self, frame: &mut Frame, area: Rect, row_pitch: u16, focused: bool) {
        let state = self.store.state();
        let selected = state.checkov.selected;
        let cells: Vec<(usize, bool)> = state
            .checkov
            .count
            .ids()
            .map(|id| state.checkboxes.get(&id))
            .enumerate()
            .collect();

        let bottom = area.y + area.height;
        for (index, checked) in cells {
            let row = (index / GRID_COLUMNS) as u16;
            let col = (index % GRID_COLUMNS) as u16;
            let y = area.y + row * row_pitch;
            let x = area.x + col * CELL_WIDTH;
            if y >= bottom || x >= area.x + area.width {
                continue;
            }
            let cell = Rect::new(x, y, CELL_WIDTH.min(area.x + area.width - x), 1);

            let (glyph, mut style) = if checked {
                (
                    CHECKED_GLYPH,
                    Style::default()
                        .fg(self.theme.checked_fg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (UNCHECKED_GLYPH, Style::default().fg(self.theme.fg))
            };
            if focused && index == selected {
                style = style.bg(self.theme.selected_bg);
            }

            frame.render_widget(
                Paragraph::new(Span::styled(glyph, style)).alignment(Alignment::Center),
                cell,
            );
            self.hit_regions.push((cell, HitTarget::Checkbox(index)));
        }
    }

    fn render_reset_button(&mut self, frame: &mut Frame, area: Rect, now: Instant, focused: bool) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let checkov = &self.store.state().checkov;
        let label = checkov.reset_label(now);
        let bg = if checkov.reset_feedback_active(now) {
            self.theme.reset_done_bg
        } else {
            self.theme.reset_bg
        };
        let border = if focused { self.theme.focus_border } else { bg };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border).bg(bg))
            .style(Style::default().bg(bg));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut style = Style::default()
            .fg(self.theme.button_fg)
            .bg(bg)
            .add_modifier(Modifier::BOLD);
        if focused {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        frame.render_widget(
            Paragraph::new(Span::styled(label, style)).alignment(Alignment::Center),
            inner,
        );
        self.hit_regions.push((area, HitTarget::ResetButton));
    }
}
