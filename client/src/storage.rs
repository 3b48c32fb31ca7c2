use gloo_storage::{LocalStorage, Storage};

use doodlepad_shared::{KeyValueStore, StoreError};

use crate::util::js_error_text;

/// `window.localStorage`, read and written as raw strings.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> Option<String> {
        match LocalStorage::raw().get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage read of {key:?} failed: {}", js_error_text(&err));
                None
            }
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| StoreError::Write(js_error_text(&err)))
    }
}
