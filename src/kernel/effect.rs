/// Work the kernel asks the frontend to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Quit,
    ReloadSettings,
}
