use super::*;

#[test]
fn override_wins_over_colorfgbg() {
    assert_eq!(detect(Some("dark"), Some("0;15")), Some(ThemeMode::Dark));
    assert_eq!(detect(Some(" LIGHT "), Some("15;0")), Some(ThemeMode::Light));
}

#[test]
fn invalid_override_falls_through() {
    assert_eq!(detect(Some("sepia"), Some("15;0")), Some(ThemeMode::Dark));
}

#[test]
fn colorfgbg_background_decides() {
    assert_eq!(detect(None, Some("15;0")), Some(ThemeMode::Dark));
    assert_eq!(detect(None, Some("0;15")), Some(ThemeMode::Light));
    assert_eq!(detect(None, Some("12;default;8")), Some(ThemeMode::Dark));
    assert_eq!(detect(None, Some("0;7")), Some(ThemeMode::Light));
}

#[test]
fn no_signal_means_no_preference() {
    assert_eq!(detect(None, None), None);
    assert_eq!(detect(None, Some("default;default")), None);
    assert_eq!(detect(None, Some("0;200")), None);
}
