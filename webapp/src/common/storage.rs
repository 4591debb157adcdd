use anyhow;

use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use serde::{Deserialize, Serialize};

fn prefixed(key: &str) -> String {
    format!("shopsmith_{}", key)
}

pub fn set_local_storage<T>(key: &str, value: T) -> ()
where
    T: Serialize,
{
    let key = prefixed(key);

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

pub fn get_local_storage<T>(key: &str) -> anyhow::Result<T>
where
    T: for<'a> Deserialize<'a>,
{
    let key = prefixed(key);

    LocalStorage::get(key.clone()).map_err(|err| {
        console_error!(format!("Failed to fetch local storage {key}: {err}"));
        anyhow::Error::msg("Local storage failure, see console log")
    })
}

/// Fetch a stored value, defaulting quietly when the key is absent.
pub fn try_local_storage<T>(key: &str) -> T
where
    T: Default + for<'a> Deserialize<'a>,
{
    LocalStorage::get(prefixed(key)).unwrap_or_default()
}

/// Store an exact string, bypassing serde.
///
/// The auto-save path persists the snapshot the debounce core diffed, byte
/// for byte, so the diff baseline and the stored value never drift.
pub fn set_local_storage_raw(key: &str, value: &str) {
    let key = prefixed(key);

    LocalStorage::raw()
        .set_item(&key, value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err:?}")))
}

pub fn get_local_storage_raw(key: &str) -> Option<String> {
    LocalStorage::raw().get_item(&prefixed(key)).ok().flatten()
}
