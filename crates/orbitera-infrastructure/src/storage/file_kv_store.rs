//! File-backed key-value store.
//!
//! The whole store is one JSON object of string keys to string values,
//! mirroring what a browser keeps in local storage. Reads are served from an
//! in-memory copy; every write goes through [`AtomicJsonFile::update`] before
//! the copy is refreshed.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use orbitera_core::error::Result;
use orbitera_core::storage::KeyValueStore;

use super::atomic_json::AtomicJsonFile;

type Items = BTreeMap<String, String>;

pub struct FileKeyValueStore {
    file: AtomicJsonFile<Items>,
    cache: Mutex<Items>,
}

impl FileKeyValueStore {
    /// Opens (or lazily creates) the store at `path`.
    ///
    /// A file that exists but is not a JSON object of strings is an error;
    /// it is never silently replaced.
    pub fn open(path: PathBuf) -> Result<Self> {
        let file = AtomicJsonFile::<Items>::new(path);
        let items = file.load()?.unwrap_or_default();

        tracing::debug!(
            "[FileKeyValueStore] Opened {:?} ({} keys)",
            file.path(),
            items.len()
        );

        Ok(Self {
            file,
            cache: Mutex::new(items),
        })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    fn write<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Items),
    {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        let saved = self.file.update(Items::new(), |items| {
            f(items);
            Ok(())
        })?;
        *cache = saved;
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        Ok(cache.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.write(|items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.write(|items| {
            items.remove(key);
        })
    }
}
