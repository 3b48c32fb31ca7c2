use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub title: String,
    #[serde(rename = "dataURL")]
    pub data_url: String,
}

/// Synchronous string key-value storage, the shape of `window.localStorage`.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The flat list of named snapshots kept as one JSON array under one key.
pub struct SnapshotStore<K> {
    backend: K,
    key: String,
}

impl<K: KeyValueStore> SnapshotStore<K> {
    pub fn new(backend: K, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Reads every snapshot. Missing or unreadable data counts as empty.
    pub fn read(&self) -> Vec<Snapshot> {
        let Some(text) = self.backend.get_item(&self.key) else {
            return Vec::new();
        };
        match serde_json::from_str::<Option<Vec<Snapshot>>>(&text) {
            Ok(snapshots) => snapshots.unwrap_or_default(),
            Err(error) => {
                log::warn!("ignoring unreadable {:?} contents: {error}", self.key);
                Vec::new()
            }
        }
    }

    pub fn write(&mut self, snapshots: &[Snapshot]) -> Result<(), StoreError> {
        let text =
            serde_json::to_string(snapshots).map_err(|error| StoreError::Write(error.to_string()))?;
        self.backend.set_item(&self.key, &text)
    }

    pub fn list_titles(&self) -> Vec<String> {
        self.read()
            .into_iter()
            .map(|snapshot| snapshot.title)
            .collect()
    }

    /// `word_{n}` where `n` is one past the number of titles starting with `word`.
    pub fn next_title(&self, word: &str) -> String {
        title_for(&self.read(), word)
    }

    pub fn append(&mut self, word: &str, data_url: String) -> Result<String, StoreError> {
        let mut snapshots = self.read();
        let title = title_for(&snapshots, word);
        snapshots.push(Snapshot {
            title: title.clone(),
            data_url,
        });
        self.write(&snapshots)?;
        log::info!("saved drawing {title} ({} stored)", snapshots.len());
        Ok(title)
    }

    pub fn find(&self, title: &str) -> Option<Snapshot> {
        self.read()
            .into_iter()
            .find(|snapshot| snapshot.title == title)
    }

    /// Removes the first snapshot titled exactly `title`. Returns whether one
    /// was removed; the stored data is untouched otherwise.
    pub fn delete(&mut self, title: &str) -> Result<bool, StoreError> {
        let mut snapshots = self.read();
        let Some(index) = snapshots
            .iter()
            .position(|snapshot| snapshot.title == title)
        else {
            return Ok(false);
        };
        snapshots.remove(index);
        self.write(&snapshots)?;
        log::info!("deleted drawing {title} ({} stored)", snapshots.len());
        Ok(true)
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut K {
        &mut self.backend
    }
}

fn title_for(snapshots: &[Snapshot], word: &str) -> String {
    let count = snapshots
        .iter()
        .filter(|snapshot| snapshot.title.starts_with(word))
        .count();
    format!("{word}_{}", count + 1)
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
