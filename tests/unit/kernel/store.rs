use super::*;
use crate::kernel::checkbox::{CheckboxState, CheckboxStateStore, CHECKBOX_STATE_KEY};
use crate::kernel::services::adapters::MemoryStorage;
use crate::kernel::services::ports::{FixedColorScheme, KeyValueStore};
use crate::kernel::state::{WindowSize, RESET_DONE_LABEL, RESET_LABEL};
use crate::kernel::theme::{ThemeManager, ThemeMode, THEME_STORAGE_KEY};
use std::sync::Arc;
use std::time::Duration;

fn new_store_with(storage: Arc<MemoryStorage>) -> Store {
    let checkboxes = CheckboxStateStore::open(storage.clone());
    let theme = ThemeManager::new(Some(storage), &FixedColorScheme(None));
    Store::new(AppState::new(checkboxes, theme, WindowSize::new(80, 24)))
}

fn new_store() -> (Store, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    (new_store_with(storage.clone()), storage)
}

fn run(store: &mut Store, command: Command) -> DispatchResult {
    store.dispatch(Action::RunCommand {
        command,
        now: Instant::now(),
    })
}

fn open_checkov(store: &mut Store) {
    store.dispatch(Action::Navigate(Route::Checkov));
}

fn type_count(store: &mut Store, raw: &str) {
    store.dispatch(Action::CheckovSetCountInput {
        raw: raw.to_string(),
    });
}

fn rendered(store: &Store) -> Vec<bool> {
    let state = store.state();
    state
        .checkov
        .count
        .ids()
        .map(|id| state.checkboxes.get(&id))
        .collect()
}

fn persisted(storage: &MemoryStorage) -> Option<CheckboxState> {
    storage
        .get_item(CHECKBOX_STATE_KEY)
        .unwrap()
        .map(|raw| CheckboxState::from_json(&raw).unwrap())
}

#[test]
fn starts_on_dashboard_with_five_boxes() {
    let (store, _) = new_store();
    assert_eq!(store.state().ui.route, Route::Dashboard);
    assert_eq!(rendered(&store).len(), 5);
}

#[test]
fn count_input_drives_rendered_ids() {
    let (mut store, _) = new_store();
    open_checkov(&mut store);

    type_count(&mut store, "10");
    assert_eq!(rendered(&store).len(), 10);

    type_count(&mut store, "100");
    assert_eq!(rendered(&store).len(), 50);

    type_count(&mut store, "0");
    type_count(&mut store, "-5");
    assert_eq!(rendered(&store).len(), 1);

    type_count(&mut store, "abc");
    assert_eq!(rendered(&store).len(), 5);

    type_count(&mut store, "");
    assert_eq!(rendered(&store).len(), 5);
}

#[test]
fn typing_into_count_field() {
    let (mut store, _) = new_store();
    open_checkov(&mut store);
    store.dispatch(Action::CheckovSetFocus(CheckovFocus::CountInput));

    run(&mut store, Command::DeleteBackward);
    assert_eq!(store.state().checkov.count_input, "");
    assert_eq!(store.state().checkov.count.get(), 5);

    run(&mut store, Command::InsertChar('1'));
    run(&mut store, Command::InsertChar('x'));
    run(&mut store, Command::InsertChar('2'));
    assert_eq!(store.state().checkov.count_input, "12");
    assert_eq!(store.state().checkov.count.get(), 12);

    run(&mut store, Command::InsertChar('0'));
    assert_eq!(store.state().checkov.count_input, "120");
    assert_eq!(store.state().checkov.count.get(), 50);

    // Leaving the field snaps the text to the effective count.
    run(&mut store, Command::FocusNext);
    assert_eq!(store.state().checkov.focus, CheckovFocus::Checkboxes);
    assert_eq!(store.state().checkov.count_input, "50");
}

#[test]
fn arrow_keys_step_count_in_field() {
    let (mut store, _) = new_store();
    open_checkov(&mut store);
    store.dispatch(Action::CheckovSetFocus(CheckovFocus::CountInput));

    run(&mut store, Command::MoveUp);
    assert_eq!(store.state().checkov.count.get(), 6);
    assert_eq!(store.state().checkov.count_input, "6");

    type_count(&mut store, "1");
    let result = run(&mut store, Command::MoveDown);
    assert!(!result.state_changed);
    assert_eq!(store.state().checkov.count.get(), 1);
}

#[test]
fn toggle_persists_checked_box() {
    let (mut store, storage) = new_store();
    open_checkov(&mut store);

    let result = run(&mut store, Command::ToggleChecked);
    assert!(result.state_changed);

    let saved = persisted(&storage).expect("checkbox state saved");
    assert!(saved.get("checkbox-1"));
    assert_eq!(rendered(&store), vec![true, false, false, false, false]);
}

#[test]
fn click_toggle_selects_and_flips() {
    let (mut store, storage) = new_store();
    open_checkov(&mut store);
    store.dispatch(Action::CheckovSetFocus(CheckovFocus::ResetButton));

    store.dispatch(Action::CheckovToggle { index: 2 });
    assert_eq!(store.state().checkov.focus, CheckovFocus::Checkboxes);
    assert_eq!(store.state().checkov.selected, 2);
    assert!(persisted(&storage).unwrap().get("checkbox-3"));

    store.dispatch(Action::CheckovToggle { index: 2 });
    assert!(!store.state().checkboxes.get("checkbox-3"));

    let result = store.dispatch(Action::CheckovToggle { index: 5 });
    assert!(!result.state_changed);
}

#[test]
fn grid_navigation_moves_by_rows() {
    let (mut store, _) = new_store();
    open_checkov(&mut store);
    type_count(&mut store, "12");

    run(&mut store, Command::MoveRight);
    run(&mut store, Command::MoveRight);
    assert_eq!(store.state().checkov.selected, 2);

    run(&mut store, Command::MoveDown);
    assert_eq!(store.state().checkov.selected, 7);

    // Row three only has two boxes; moving down again leaves the grid.
    run(&mut store, Command::MoveDown);
    assert_eq!(store.state().checkov.focus, CheckovFocus::ResetButton);

    run(&mut store, Command::MoveUp);
    run(&mut store, Command::MoveUp);
    run(&mut store, Command::MoveUp);
    assert_eq!(store.state().checkov.focus, CheckovFocus::CountInput);
}

#[test]
fn shrinking_count_clamps_selection_but_keeps_state() {
    let (mut store, _) = new_store();
    open_checkov(&mut store);

    store.dispatch(Action::CheckovToggle { index: 2 });
    type_count(&mut store, "2");
    assert_eq!(store.state().checkov.selected, 1);
    assert_eq!(rendered(&store), vec![false, false]);

    type_count(&mut store, "5");
    assert_eq!(rendered(&store), vec![false, false, true, false, false]);
}

#[test]
fn reset_clears_storage_and_unchecks_everything() {
    let (mut store, storage) = new_store();
    open_checkov(&mut store);
    store.dispatch(Action::CheckovToggle { index: 0 });
    store.dispatch(Action::CheckovToggle { index: 1 });
    assert_eq!(rendered(&store), vec![true, true, false, false, false]);

    let now = Instant::now();
    store.dispatch(Action::RunCommand {
        command: Command::ResetAll,
        now,
    });

    assert_eq!(storage.get_item(CHECKBOX_STATE_KEY).unwrap(), None);
    assert!(rendered(&store).iter().all(|checked| !checked));
    assert_eq!(store.state().checkov.reset_label(now), RESET_DONE_LABEL);
}

#[test]
fn reset_label_reverts_after_delay() {
    let (mut store, _) = new_store();
    open_checkov(&mut store);
    let now = Instant::now();
    store.dispatch(Action::CheckovReset { now });

    let early = store.dispatch(Action::Tick {
        now: now + Duration::from_millis(500),
    });
    assert!(!early.state_changed);
    assert_eq!(
        store.state().checkov.reset_label(now + Duration::from_millis(500)),
        RESET_DONE_LABEL
    );

    let later = now + Duration::from_millis(1001);
    let result = store.dispatch(Action::Tick { now: later });
    assert!(result.state_changed);
    assert_eq!(store.state().checkov.reset_feedback_until, None);
    assert_eq!(store.state().checkov.reset_label(later), RESET_LABEL);
}

#[test]
fn repeated_reset_rearms_the_label() {
    let (mut store, _) = new_store();
    open_checkov(&mut store);
    let first = Instant::now();
    store.dispatch(Action::CheckovReset { now: first });
    let second = first + Duration::from_millis(800);
    store.dispatch(Action::CheckovReset { now: second });

    store.dispatch(Action::Tick {
        now: first + Duration::from_millis(1200),
    });
    assert_eq!(
        store.state().checkov.reset_label(first + Duration::from_millis(1200)),
        RESET_DONE_LABEL
    );

    store.dispatch(Action::Tick {
        now: second + Duration::from_millis(1000),
    });
    assert_eq!(store.state().checkov.reset_feedback_until, None);
}

#[test]
fn activate_on_reset_button_resets() {
    let (mut store, storage) = new_store();
    open_checkov(&mut store);
    store.dispatch(Action::CheckovToggle { index: 4 });
    store.dispatch(Action::CheckovSetFocus(CheckovFocus::ResetButton));

    run(&mut store, Command::Activate);
    assert_eq!(storage.get_item(CHECKBOX_STATE_KEY).unwrap(), None);
    assert!(store.state().checkov.reset_feedback_until.is_some());
}

#[test]
fn saved_state_is_rendered_on_open() {
    let storage = Arc::new(MemoryStorage::new());
    storage
        .set_item(CHECKBOX_STATE_KEY, r#"{"checkbox-1":true,"checkbox-3":true}"#)
        .unwrap();
    let mut store = new_store_with(storage);
    open_checkov(&mut store);

    assert_eq!(rendered(&store), vec![true, false, true, false, false]);
}

#[test]
fn dashboard_selection_and_activation() {
    let (mut store, _) = new_store();

    run(&mut store, Command::MoveDown);
    assert_eq!(store.state().dashboard.selected, 1);
    run(&mut store, Command::MoveDown);
    assert_eq!(store.state().dashboard.selected, 1);

    run(&mut store, Command::Activate);
    assert_eq!(store.state().ui.route, Route::WindowSize);

    run(&mut store, Command::Back);
    assert_eq!(store.state().ui.route, Route::Dashboard);
    assert_eq!(store.state().dashboard.selected, 1);

    run(&mut store, Command::MoveUp);
    run(&mut store, Command::Activate);
    assert_eq!(store.state().ui.route, Route::Checkov);
}

#[test]
fn back_link_returns_to_dashboard() {
    let (mut store, _) = new_store();
    open_checkov(&mut store);
    store.dispatch(Action::CheckovSetFocus(CheckovFocus::BackLink));

    run(&mut store, Command::Activate);
    assert_eq!(store.state().ui.route, Route::Dashboard);
}

#[test]
fn back_closes_log_panel_first() {
    let (mut store, _) = new_store();
    open_checkov(&mut store);
    run(&mut store, Command::ToggleLogPanel);
    assert!(store.state().ui.log_panel_visible);

    run(&mut store, Command::Back);
    assert!(!store.state().ui.log_panel_visible);
    assert_eq!(store.state().ui.route, Route::Checkov);
}

#[test]
fn quit_and_reload_are_effects() {
    let (mut store, _) = new_store();
    let result = run(&mut store, Command::Quit);
    assert_eq!(result.effects, vec![Effect::Quit]);
    assert!(!result.state_changed);

    let result = run(&mut store, Command::ReloadSettings);
    assert_eq!(result.effects, vec![Effect::ReloadSettings]);
}

#[test]
fn toggle_theme_persists() {
    let (mut store, storage) = new_store();
    assert_eq!(store.state().theme.current(), ThemeMode::Light);

    run(&mut store, Command::ToggleTheme);
    assert_eq!(store.state().theme.current(), ThemeMode::Dark);
    assert_eq!(
        storage.get_item(THEME_STORAGE_KEY).unwrap().as_deref(),
        Some("dark")
    );
}

#[test]
fn system_scheme_follows_until_user_chooses() {
    let (mut store, _) = new_store();
    let result = store.dispatch(Action::SystemColorScheme(Some(ThemeMode::Dark)));
    assert!(result.state_changed);
    assert_eq!(store.state().theme.current(), ThemeMode::Dark);

    let result = store.dispatch(Action::SystemColorScheme(None));
    assert!(!result.state_changed);

    store.dispatch(Action::ToggleTheme);
    let result = store.dispatch(Action::SystemColorScheme(Some(ThemeMode::Dark)));
    assert!(!result.state_changed);
    assert_eq!(store.state().theme.current(), ThemeMode::Light);
}

#[test]
fn window_resize_updates_dimensions() {
    let (mut store, _) = new_store();
    assert_eq!(store.state().window.to_string(), "80 × 24");

    let result = store.dispatch(Action::WindowResized {
        width: 1920,
        height: 1080,
    });
    assert!(result.state_changed);
    assert_eq!(store.state().window.to_string(), "1920 × 1080");

    let result = store.dispatch(Action::WindowResized {
        width: 1920,
        height: 1080,
    });
    assert!(!result.state_changed);
}
