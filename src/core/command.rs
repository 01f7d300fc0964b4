//! 命令系统：语义命令定义
//!
//! Commands describe intent ("toggle the focused checkbox") without caring
//! which key produced them. Keybindings map keys to commands; the settings
//! file refers to commands by `name()`.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== 导航 ====================
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    FocusNext,
    FocusPrev,
    Activate,
    Back,

    // ==================== Checkov ====================
    ToggleChecked,
    ResetAll,
    IncrementCount,
    DecrementCount,
    DeleteBackward,
    InsertChar(char),

    // ==================== 路由 ====================
    OpenDashboard,
    OpenCheckov,
    OpenWindowSize,

    // ==================== 系统 ====================
    ToggleTheme,
    ToggleLogPanel,
    ReloadSettings,
    Quit,

    // ==================== 扩展点 ====================
    Custom(String),
}

impl Command {
    pub fn name(&self) -> &str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::MoveUp => "moveUp",
            Command::MoveDown => "moveDown",
            Command::FocusNext => "focusNext",
            Command::FocusPrev => "focusPrev",
            Command::Activate => "activate",
            Command::Back => "back",
            Command::ToggleChecked => "toggleChecked",
            Command::ResetAll => "resetAll",
            Command::IncrementCount => "incrementCount",
            Command::DecrementCount => "decrementCount",
            Command::DeleteBackward => "deleteBackward",
            Command::InsertChar(_) => "insertChar",
            Command::OpenDashboard => "openDashboard",
            Command::OpenCheckov => "openCheckov",
            Command::OpenWindowSize => "openWindowSize",
            Command::ToggleTheme => "toggleTheme",
            Command::ToggleLogPanel => "toggleLogPanel",
            Command::ReloadSettings => "reloadSettings",
            Command::Quit => "quit",
            Command::Custom(name) => name,
        }
    }

    /// Inverse of [`Command::name`]. Unknown names become [`Command::Custom`].
    pub fn from_name(name: &str) -> Command {
        match name.trim() {
            "moveLeft" => Command::MoveLeft,
            "moveRight" => Command::MoveRight,
            "moveUp" => Command::MoveUp,
            "moveDown" => Command::MoveDown,
            "focusNext" => Command::FocusNext,
            "focusPrev" => Command::FocusPrev,
            "activate" => Command::Activate,
            "back" => Command::Back,
            "toggleChecked" => Command::ToggleChecked,
            "resetAll" => Command::ResetAll,
            "incrementCount" => Command::IncrementCount,
            "decrementCount" => Command::DecrementCount,
            "deleteBackward" => Command::DeleteBackward,
            "openDashboard" => Command::OpenDashboard,
            "openCheckov" => Command::OpenCheckov,
            "openWindowSize" => Command::OpenWindowSize,
            "toggleTheme" => Command::ToggleTheme,
            "toggleLogPanel" => Command::ToggleLogPanel,
            "reloadSettings" => Command::ReloadSettings,
            "quit" => Command::Quit,
            other => Command::Custom(other.to_string()),
        }
    }

    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Command::MoveLeft
                | Command::MoveRight
                | Command::MoveUp
                | Command::MoveDown
                | Command::FocusNext
                | Command::FocusPrev
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
