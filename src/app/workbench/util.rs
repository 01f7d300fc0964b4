use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

pub(super) fn rect_contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

/// A `width`×`height` rect horizontally centered in `area`, starting at row `y`.
/// Clipped to `area`.
pub(super) fn centered_row(area: Rect, y: u16, width: u16, height: u16) -> Rect {
    let bottom = area.y.saturating_add(area.height);
    if y >= bottom {
        return Rect::new(area.x, bottom, 0, 0);
    }
    let width = width.min(area.width);
    let height = height.min(bottom - y);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, y, width, height)
}

pub(super) fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

pub(super) fn log_panel_height(body_height: u16) -> u16 {
    let max_height = body_height.saturating_sub(1);
    if max_height == 0 {
        return 0;
    }

    let desired = body_height.saturating_div(3);
    desired.max(super::LOG_PANEL_MIN_HEIGHT).min(max_height)
}
