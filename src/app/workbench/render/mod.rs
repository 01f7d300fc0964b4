use super::Workbench;
use crate::kernel::Route;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use std::time::Instant;

mod checkov;
mod dashboard;
mod logs;
mod status;
mod window_size;

pub(super) fn render(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    workbench.hit_regions.clear();
    workbench.cursor = None;

    if area.width == 0 || area.height == 0 {
        return;
    }

    let base = Style::default()
        .bg(workbench.theme.bg)
        .fg(workbench.theme.fg);
    frame.render_widget(Block::default().style(base), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(super::STATUS_HEIGHT),
        ])
        .split(area);
    let body_area = chunks[0];
    let status_area = chunks[1];

    let (main_area, log_area) = if workbench.store.state().ui.log_panel_visible {
        let panel_height = super::util::log_panel_height(body_area.height);
        let areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(panel_height)])
            .split(body_area);
        (areas[0], (areas[1].height > 0).then_some(areas[1]))
    } else {
        (body_area, None)
    };

    let now = Instant::now();
    match workbench.store.state().ui.route {
        Route::Dashboard => workbench.render_dashboard(frame, main_area),
        Route::Checkov => workbench.render_checkov(frame, main_area, now),
        Route::WindowSize => workbench.render_window_size(frame, main_area),
    }

    if let Some(log_area) = log_area {
        workbench.render_logs(frame, log_area);
    }
    workbench.render_status(frame, status_area);
}
