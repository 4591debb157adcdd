//! Application state: the aggregate signal and its persistence lifecycle.
//!
//! All mutation flows through `commit`, which feeds the debounce core and
//! (re)arms the save timer -- the narrow read/update interface around what
//! used to be ambient global state.  Reads go straight through the signal.

use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::debug;

use store::{
    StoreData, backup,
    autosave::{AutoSave, SaveAction},
};

use crate::common::storage::{get_local_storage_raw, set_local_storage_raw};

pub const STORE_DATA_KEY: &str = "store_data";

const AUTOSAVE_DELAY_MS: u32 = 2_000;

// the aggregate, loaded once at startup
pub static STORE: GlobalSignal<StoreData> = Signal::global(load_store_data);

// debounce core; seeded separately so the first committed change arms cleanly
static AUTOSAVE: GlobalSignal<AutoSave> = Signal::global(|| match get_local_storage_raw(STORE_DATA_KEY) {
    Some(raw) => AutoSave::seeded(raw),
    None => AutoSave::new(),
});

// the single armed timer; replacing the slot drops (cancels) the old one
static TIMER: GlobalSignal<Option<Timeout>> = Signal::global(|| None);

// bumped on every save so the nav indicator re-renders
pub static LAST_SAVED_AT: GlobalSignal<Option<i64>> = Signal::global(|| None);

fn load_store_data() -> StoreData {
    match get_local_storage_raw(STORE_DATA_KEY) {
        Some(raw) => match backup::import_json(&raw) {
            Ok(data) => data,
            Err(err) => {
                gloo_console::error!(format!("stored data unreadable, starting fresh: {err}"));
                StoreData::default()
            }
        },
        None => StoreData::default(),
    }
}

fn snapshot() -> String {
    backup::export_json(&STORE.read())
}

fn persist(raw: &str) {
    set_local_storage_raw(STORE_DATA_KEY, raw);
    LAST_SAVED_AT.with_mut(|t| *t = Some(store::ids::now_millis()));
    debug!("aggregate persisted to local storage");
}

/// Apply a mutation to the aggregate and schedule the debounced save.
pub fn commit(mutator: impl FnOnce(&mut StoreData)) {
    STORE.with_mut(mutator);

    match AUTOSAVE.write().observe(snapshot()) {
        SaveAction::Unchanged => {}
        SaveAction::Arm => {
            let timeout = Timeout::new(AUTOSAVE_DELAY_MS, || {
                if let Some(payload) = AUTOSAVE.write().expire() {
                    persist(&payload);
                }
            });
            // dropping the previous timeout cancels it: the debounce restarts
            TIMER.with_mut(|slot| *slot = Some(timeout));
        }
    }
}

/// The explicit Save button: cancel any pending timer, write immediately.
pub fn save_now() {
    TIMER.with_mut(|slot| *slot = None);
    if let Some(payload) = AUTOSAVE.write().save_now(snapshot()) {
        persist(&payload);
    }
}

/// Wholesale replacement after a backup import; saves immediately rather
/// than waiting out the debounce.
pub fn replace_all(data: StoreData) {
    STORE.with_mut(|current| *current = data);
    save_now();
}
