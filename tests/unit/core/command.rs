use super::*;

#[test]
fn names_roundtrip_through_from_name() {
    let commands = [
        Command::MoveLeft,
        Command::FocusNext,
        Command::Activate,
        Command::Back,
        Command::ToggleChecked,
        Command::ResetAll,
        Command::IncrementCount,
        Command::OpenCheckov,
        Command::OpenWindowSize,
        Command::ToggleTheme,
        Command::ToggleLogPanel,
        Command::ReloadSettings,
        Command::Quit,
    ];
    for command in commands {
        assert_eq!(Command::from_name(command.name()), command);
    }
}

#[test]
fn unknown_name_is_custom() {
    assert_eq!(
        Command::from_name(" plugin.doThing "),
        Command::Custom("plugin.doThing".to_string())
    );
}

#[test]
fn navigation_commands() {
    assert!(Command::MoveUp.is_navigation());
    assert!(Command::FocusPrev.is_navigation());
    assert!(!Command::ResetAll.is_navigation());
}
