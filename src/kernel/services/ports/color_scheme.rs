use crate::kernel::theme::ThemeMode;

/// Source of the platform's preferred color scheme.
pub trait ColorSchemeProbe: Send + Sync {
    /// `None` when the platform expresses no preference.
    fn preferred(&self) -> Option<ThemeMode>;
}

/// Probe with a fixed answer; used when detection is disabled and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedColorScheme(pub Option<ThemeMode>);

impl ColorSchemeProbe for FixedColorScheme {
    fn preferred(&self) -> Option<ThemeMode> {
        self.0
    }
}
