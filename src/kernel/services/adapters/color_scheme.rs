//! Terminal color-scheme preference detection.
//!
//! Order: `CHECKOV_COLOR_SCHEME` override, then `COLORFGBG` (set by rxvt,
//! Konsole, iTerm2 and friends as `fg;bg` or `fg;default;bg`).

use crate::kernel::services::ports::ColorSchemeProbe;
use crate::kernel::theme::ThemeMode;

pub const COLOR_SCHEME_ENV: &str = "CHECKOV_COLOR_SCHEME";

#[derive(Debug, Clone, Copy, Default)]
pub struct EnvColorSchemeProbe;

impl ColorSchemeProbe for EnvColorSchemeProbe {
    fn preferred(&self) -> Option<ThemeMode> {
        let override_value = std::env::var(COLOR_SCHEME_ENV).ok();
        let colorfgbg = std::env::var("COLORFGBG").ok();
        detect(override_value.as_deref(), colorfgbg.as_deref())
    }
}

pub fn detect(override_value: Option<&str>, colorfgbg: Option<&str>) -> Option<ThemeMode> {
    if let Some(value) = override_value {
        if let Some(mode) = ThemeMode::parse(value) {
            return Some(mode);
        }
    }

    colorfgbg.and_then(parse_colorfgbg)
}

fn parse_colorfgbg(value: &str) -> Option<ThemeMode> {
    let bg = value.rsplit(';').next()?.trim();
    let bg: u8 = bg.parse().ok()?;
    // ANSI 7 (light gray) and the bright range 9..=15 are light backgrounds.
    match bg {
        7 | 9..=15 => Some(ThemeMode::Light),
        0..=6 | 8 => Some(ThemeMode::Dark),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/color_scheme.rs"]
mod tests;
