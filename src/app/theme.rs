//! UI 主题：把可配置的颜色集中管理，避免散落在渲染代码里。

use crate::kernel::services::ports::ThemeSettings;
use crate::kernel::ThemeMode;
use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiTheme {
    pub mode: ThemeMode,
    pub bg: Color,
    pub fg: Color,
    pub muted_fg: Color,
    pub accent_fg: Color,
    pub card_bg: Color,
    pub focus_border: Color,
    pub inactive_border: Color,
    pub selected_bg: Color,
    pub checked_fg: Color,
    pub reset_bg: Color,
    pub reset_done_bg: Color,
    pub button_fg: Color,
    pub link_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    if let Ok(value) = std::env::var("CHECKOV_COLOR_SUPPORT") {
        let value = value.trim().to_ascii_lowercase();
        match value.as_str() {
            "truecolor" | "24bit" | "rgb" => return TerminalColorSupport::TrueColor,
            "256" | "ansi256" => return TerminalColorSupport::Ansi256,
            "16" | "ansi16" | "basic" => return TerminalColorSupport::Ansi16,
            _ => {}
        }
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    let term = std::env::var("TERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    if colorterm.contains("truecolor")
        || colorterm.contains("24bit")
        || colorterm.contains("direct")
        || term.contains("truecolor")
        || term.contains("24bit")
        || term.contains("direct")
    {
        return TerminalColorSupport::TrueColor;
    }

    if term.contains("256color") {
        return TerminalColorSupport::Ansi256;
    }

    TerminalColorSupport::Ansi16
}

impl Default for UiTheme {
    fn default() -> Self {
        Self::light()
    }
}

impl UiTheme {
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            bg: Color::Rgb(0xF9, 0xFA, 0xFB),
            fg: Color::Rgb(0x1F, 0x29, 0x37),
            muted_fg: Color::Rgb(0x6B, 0x72, 0x80),
            accent_fg: Color::Rgb(0x25, 0x63, 0xEB),
            card_bg: Color::Rgb(0xFF, 0xFF, 0xFF),
            focus_border: Color::Rgb(0x3B, 0x82, 0xF6),
            inactive_border: Color::Rgb(0xD1, 0xD5, 0xDB),
            selected_bg: Color::Rgb(0xDB, 0xEA, 0xFE),
            checked_fg: Color::Rgb(0x16, 0xA3, 0x4A),
            reset_bg: Color::Rgb(0xEF, 0x44, 0x44),
            reset_done_bg: Color::Rgb(0x22, 0xC5, 0x5E),
            button_fg: Color::Rgb(0xFF, 0xFF, 0xFF),
            link_fg: Color::Rgb(0x25, 0x63, 0xEB),
            status_bg: Color::Rgb(0xE5, 0xE7, 0xEB),
            status_fg: Color::Rgb(0x37, 0x41, 0x51),
        }
    }

    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            bg: Color::Rgb(0x11, 0x18, 0x27),
            fg: Color::Rgb(0xF3, 0xF4, 0xF6),
            muted_fg: Color::Rgb(0x9C, 0xA3, 0xAF),
            accent_fg: Color::Rgb(0x60, 0xA5, 0xFA),
            card_bg: Color::Rgb(0x1F, 0x29, 0x37),
            focus_border: Color::Rgb(0x60, 0xA5, 0xFA),
            inactive_border: Color::Rgb(0x37, 0x41, 0x51),
            selected_bg: Color::Rgb(0x1E, 0x3A, 0x8A),
            checked_fg: Color::Rgb(0x4A, 0xDE, 0x80),
            reset_bg: Color::Rgb(0xDC, 0x26, 0x26),
            reset_done_bg: Color::Rgb(0x16, 0xA3, 0x4A),
            button_fg: Color::Rgb(0xFF, 0xFF, 0xFF),
            link_fg: Color::Rgb(0x60, 0xA5, 0xFA),
            status_bg: Color::Rgb(0x37, 0x41, 0x51),
            status_fg: Color::Rgb(0xE5, 0xE7, 0xEB),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Palette for `mode` with user overrides and terminal downsampling applied.
    pub fn build(
        mode: ThemeMode,
        settings: &ThemeSettings,
        support: TerminalColorSupport,
    ) -> Self {
        let mut theme = Self::for_mode(mode);
        theme.apply_settings(settings);
        theme.apply_color_support(support);
        theme
    }

    fn apply_color_support(&mut self, support: TerminalColorSupport) {
        if support == TerminalColorSupport::TrueColor {
            return;
        }

        for color in [
            &mut self.bg,
            &mut self.fg,
            &mut self.muted_fg,
            &mut self.accent_fg,
            &mut self.card_bg,
            &mut self.focus_border,
            &mut self.inactive_border,
            &mut self.selected_bg,
            &mut self.checked_fg,
            &mut self.reset_bg,
            &mut self.reset_done_bg,
            &mut self.button_fg,
            &mut self.link_fg,
            &mut self.status_bg,
            &mut self.status_fg,
        ] {
            *color = map_color_for_support(*color, support);
        }
    }

    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        let overrides = [
            (&settings.accent_fg, &mut self.accent_fg),
            (&settings.focus_border, &mut self.focus_border),
            (&settings.checked_fg, &mut self.checked_fg),
            (&settings.reset_bg, &mut self.reset_bg),
            (&settings.reset_done_bg, &mut self.reset_done_bg),
            (&settings.muted_fg, &mut self.muted_fg),
        ];
        for (value, slot) in overrides {
            if let Some(v) = value {
                match parse_color(v) {
                    Some(c) => *slot = c,
                    None => tracing::warn!(value = %v, "ignoring unknown theme color"),
                }
            }
        }
    }
}

fn map_color_for_support(color: Color, support: TerminalColorSupport) -> Color {
    match (support, color) {
        (TerminalColorSupport::TrueColor, value) => value,
        (TerminalColorSupport::Ansi256, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi256_index(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) if i > 15 => {
            let (r, g, b) = ansi256_index_to_rgb(i);
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
        (_, value) => value,
    }
}

fn rgb_to_ansi256_index(r: u8, g: u8, b: u8) -> u8 {
    let mut best_index = 0u8;
    let mut best_distance = u32::MAX;

    for index in 0u16..=255u16 {
        let index_u8 = index as u8;
        let (pr, pg, pb) = ansi256_index_to_rgb(index_u8);
        let distance = color_distance_sq(r, g, b, pr, pg, pb);
        if distance < best_distance {
            best_distance = distance;
            best_index = index_u8;
        }
    }

    best_index
}

fn rgb_to_ansi16_index(r: u8, g: u8, b: u8) -> u8 {
    let mut best_index = 0u8;
    let mut best_distance = u32::MAX;

    for (index, (pr, pg, pb)) in ANSI16_RGB.iter().copied().enumerate() {
        let distance = color_distance_sq(r, g, b, pr, pg, pb);
        if distance < best_distance {
            best_distance = distance;
            best_index = index as u8;
        }
    }

    best_index
}

fn ansi256_index_to_rgb(index: u8) -> (u8, u8, u8) {
    if index <= 15 {
        return ANSI16_RGB[index as usize];
    }

    if (16..=231).contains(&index) {
        let level = [0u8, 95, 135, 175, 215, 255];
        let offset = index - 16;
        let r = level[(offset / 36) as usize];
        let g = level[((offset / 6) % 6) as usize];
        let b = level[(offset % 6) as usize];
        return (r, g, b);
    }

    let gray = 8u8.saturating_add((index - 232).saturating_mul(10));
    (gray, gray, gray)
}

fn color_distance_sq(r1: u8, g1: u8, b1: u8, r2: u8, g2: u8, b2: u8) -> u32 {
    let dr = r1 as i32 - r2 as i32;
    let dg = g1 as i32 - g2 as i32;
    let db = b1 as i32 - b2 as i32;
    (dr * dr + dg * dg + db * db) as u32
}

const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (128, 0, 0),
    (0, 128, 0),
    (128, 128, 0),
    (0, 0, 128),
    (128, 0, 128),
    (0, 128, 128),
    (192, 192, 192),
    (128, 128, 128),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (0, 0, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    let v = v.to_ascii_lowercase();
    let c = match v.as_str() {
        "reset" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "darkgrey" => Color::Indexed(8),
        "white" => Color::Indexed(15),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        _ => return None,
    };

    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
