use super::*;
use crate::kernel::services::adapters::MemoryStorage;
use crate::kernel::services::ports::storage::Result as StorageResult;
use std::sync::atomic::{AtomicBool, Ordering};

/// Storage whose writes (and optionally reads) fail on demand.
#[derive(Default)]
struct FlakyStorage {
    inner: MemoryStorage,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl KeyValueStore for FlakyStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("reads disabled".to_string()));
        }
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("writes disabled".to_string()));
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("writes disabled".to_string()));
        }
        self.inner.remove_item(key)
    }

    fn describe(&self) -> String {
        "flaky".to_string()
    }
}

fn memory() -> Arc<MemoryStorage> {
    Arc::new(MemoryStorage::new())
}

fn saved(storage: &dyn KeyValueStore) -> Option<CheckboxState> {
    storage
        .get_item(CHECKBOX_STATE_KEY)
        .unwrap()
        .map(|raw| CheckboxState::from_json(&raw).unwrap())
}

#[test]
fn display_count_accepts_every_value_in_range() {
    for n in 1..=50 {
        let count = DisplayCount::parse(&n.to_string());
        assert_eq!(count.get(), n);
        let ids: Vec<String> = count.ids().collect();
        assert_eq!(ids.len(), n);
        assert_eq!(ids.first().map(String::as_str), Some("checkbox-1"));
        assert_eq!(ids.last(), Some(&format!("checkbox-{}", n)));
    }
}

#[test]
fn display_count_unparseable_input_defaults_to_five() {
    for raw in ["", "   ", "abc", "-", "+", "x12"] {
        assert_eq!(DisplayCount::parse(raw).get(), 5, "input {:?}", raw);
    }
}

#[test]
fn display_count_clamps_out_of_range() {
    assert_eq!(DisplayCount::parse("100").get(), 50);
    assert_eq!(DisplayCount::parse("51").get(), 50);
    assert_eq!(DisplayCount::parse("99999999999999999999999").get(), 50);
    assert_eq!(DisplayCount::parse("-5").get(), 1);
    assert_eq!(DisplayCount::parse("0").get(), 1);
}

#[test]
fn display_count_reads_leading_integer() {
    assert_eq!(DisplayCount::parse(" 12abc").get(), 12);
    assert_eq!(DisplayCount::parse("3.7").get(), 3);
    assert_eq!(DisplayCount::parse("+8").get(), 8);
}

#[test]
fn display_count_step_stays_in_range() {
    assert_eq!(DisplayCount::new(50).step(1).get(), 50);
    assert_eq!(DisplayCount::new(1).step(-1).get(), 1);
    assert_eq!(DisplayCount::default().step(2).get(), 7);
}

#[test]
fn checkbox_state_json_shape() {
    let mut state = CheckboxState::new();
    state.set("checkbox-3", true);
    state.set("checkbox-1", true);
    assert_eq!(
        state.to_json().unwrap(),
        r#"{"checkbox-1":true,"checkbox-3":true}"#
    );
}

#[test]
fn get_on_empty_store_is_false() {
    let store = CheckboxStateStore::open(memory());
    assert!(!store.get("checkbox-1"));
    assert!(!store.get("not-a-checkbox"));
}

#[test]
fn set_persists_whole_map() {
    let storage = memory();
    let mut store = CheckboxStateStore::open(storage.clone());

    store.set("checkbox-1", true);

    let persisted = saved(storage.as_ref()).expect("state persisted");
    assert!(persisted.get("checkbox-1"));
    assert_eq!(persisted.len(), 1);

    store.set("checkbox-2", true);
    store.set("checkbox-1", false);
    let persisted = saved(storage.as_ref()).expect("state persisted");
    assert!(!persisted.get("checkbox-1"));
    assert!(persisted.get("checkbox-2"));
}

#[test]
fn reset_removes_persisted_entry() {
    let storage = memory();
    let mut store = CheckboxStateStore::open(storage.clone());
    store.set("checkbox-1", true);
    store.set("checkbox-4", true);

    store.reset();

    assert_eq!(storage.get_item(CHECKBOX_STATE_KEY).unwrap(), None);
    for id in DisplayCount::new(50).ids() {
        assert!(!store.get(&id));
    }
    assert!(store.state().is_empty());
}

#[test]
fn open_hydrates_saved_state() {
    let storage = memory();
    storage
        .set_item(CHECKBOX_STATE_KEY, r#"{"checkbox-1":true,"checkbox-3":true}"#)
        .unwrap();

    let store = CheckboxStateStore::open(storage);
    let rendered: Vec<bool> = DisplayCount::new(5).ids().map(|id| store.get(&id)).collect();
    assert_eq!(rendered, vec![true, false, true, false, false]);
}

#[test]
fn malformed_saved_state_loads_empty() {
    for raw in ["{not json", "[1,2,3]", r#"{"checkbox-1":"yes"}"#, "null"] {
        let storage = memory();
        storage.set_item(CHECKBOX_STATE_KEY, raw).unwrap();

        let store = CheckboxStateStore::open(storage);
        assert!(store.state().is_empty(), "input {:?}", raw);
        assert!(!store.is_degraded());
    }
}

#[test]
fn toggle_flips_and_reports_new_value() {
    let storage = memory();
    let mut store = CheckboxStateStore::open(storage.clone());
    assert!(store.toggle("checkbox-2"));
    assert!(store.get("checkbox-2"));
    assert!(!store.toggle("checkbox-2"));
    assert!(!saved(storage.as_ref()).unwrap().get("checkbox-2"));
}

#[test]
fn shrinking_count_keeps_entries_for_hidden_ids() {
    let storage = memory();
    let mut store = CheckboxStateStore::open(storage.clone());

    let five = DisplayCount::parse("5");
    assert_eq!(five.ids().count(), 5);
    store.set("checkbox-3", true);

    let two = DisplayCount::parse("2");
    assert!(two.ids().all(|id| !store.get(&id)));

    let five_again = DisplayCount::parse("5");
    let rendered: Vec<bool> = five_again.ids().map(|id| store.get(&id)).collect();
    assert_eq!(rendered, vec![false, false, true, false, false]);
    assert!(saved(storage.as_ref()).unwrap().get("checkbox-3"));
}

#[test]
fn write_failure_degrades_to_memory() {
    let storage = Arc::new(FlakyStorage::default());
    let mut store = CheckboxStateStore::open(storage.clone());
    assert!(!store.is_degraded());

    storage.fail_writes.store(true, Ordering::SeqCst);
    store.set("checkbox-1", true);

    assert!(store.is_degraded());
    assert!(store.get("checkbox-1"));
    assert_eq!(store.backing_description(), None);

    storage.fail_writes.store(false, Ordering::SeqCst);
    store.set("checkbox-2", true);
    assert_eq!(storage.get_item(CHECKBOX_STATE_KEY).unwrap(), None);
    assert!(store.get("checkbox-2"));
}

#[test]
fn read_failure_on_open_starts_empty_in_memory() {
    let storage = Arc::new(FlakyStorage::default());
    storage
        .inner
        .set_item(CHECKBOX_STATE_KEY, r#"{"checkbox-1":true}"#)
        .unwrap();
    storage.fail_reads.store(true, Ordering::SeqCst);

    let mut store = CheckboxStateStore::open(storage);
    assert!(store.is_degraded());
    assert!(!store.get("checkbox-1"));

    store.set("checkbox-5", true);
    assert!(store.get("checkbox-5"));
}

#[test]
fn load_rereads_backing() {
    let storage = memory();
    let mut store = CheckboxStateStore::open(storage.clone());
    assert!(store.state().is_empty());

    storage
        .set_item(CHECKBOX_STATE_KEY, r#"{"checkbox-7":true}"#)
        .unwrap();
    assert!(store.load().get("checkbox-7"));
}

#[test]
fn detached_store_never_persists() {
    let mut store = CheckboxStateStore::detached();
    store.set("checkbox-1", true);
    assert!(store.get("checkbox-1"));
    assert!(!store.is_degraded());
    assert_eq!(store.backing_description(), None);
}
