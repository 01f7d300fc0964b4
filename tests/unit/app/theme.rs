use super::*;

#[test]
fn palettes_differ_by_mode() {
    let light = UiTheme::for_mode(ThemeMode::Light);
    let dark = UiTheme::for_mode(ThemeMode::Dark);
    assert_eq!(light.mode, ThemeMode::Light);
    assert_eq!(dark.mode, ThemeMode::Dark);
    assert_ne!(light.bg, dark.bg);
    assert_ne!(light.fg, dark.fg);
}

#[test]
fn parse_color_accepts_hex_and_names() {
    assert_eq!(parse_color("#10a0FF"), Some(Color::Rgb(0x10, 0xA0, 0xFF)));
    assert_eq!(parse_color("Cyan"), Some(Color::Indexed(6)));
    assert_eq!(parse_color("#12345"), None);
    assert_eq!(parse_color("chartreuse"), None);
    assert_eq!(parse_color(""), None);
}

#[test]
fn settings_override_palette() {
    let settings = ThemeSettings {
        checked_fg: Some("#00ff00".to_string()),
        reset_bg: Some("not-a-color".to_string()),
        ..Default::default()
    };
    let theme = UiTheme::build(ThemeMode::Dark, &settings, TerminalColorSupport::TrueColor);
    assert_eq!(theme.checked_fg, Color::Rgb(0, 0xFF, 0));
    assert_eq!(theme.reset_bg, UiTheme::dark().reset_bg);
}

#[test]
fn ansi16_downsamples_rgb() {
    let theme = UiTheme::build(
        ThemeMode::Light,
        &ThemeSettings::default(),
        TerminalColorSupport::Ansi16,
    );
    // #FFFFFF card background maps onto bright white.
    assert_eq!(theme.card_bg, Color::Indexed(15));
    for color in [theme.bg, theme.fg, theme.reset_bg, theme.checked_fg] {
        assert!(matches!(color, Color::Indexed(i) if i <= 15));
    }
}

#[test]
fn ansi256_downsamples_rgb() {
    let theme = UiTheme::build(
        ThemeMode::Dark,
        &ThemeSettings::default(),
        TerminalColorSupport::Ansi256,
    );
    assert_eq!(theme.button_fg, Color::Indexed(15));
    assert!(matches!(theme.bg, Color::Indexed(_)));
}

#[test]
fn named_colors_survive_downsampling() {
    let settings = ThemeSettings {
        accent_fg: Some("yellow".to_string()),
        ..Default::default()
    };
    let theme = UiTheme::build(ThemeMode::Light, &settings, TerminalColorSupport::Ansi16);
    assert_eq!(theme.accent_fg, Color::Indexed(3));
}
