//! Persisted key-value storage seam.
//!
//! The admin area keeps its durable state in a flat string-to-string store,
//! the same shape as a browser's local storage. Structured values are stored
//! as JSON strings.

use crate::error::Result;

/// Key holding `"true"` while a user is signed in.
pub const AUTH_FLAG_KEY: &str = "auth-flag";

/// Key holding the signed-in user as JSON `{email, name}`.
pub const AUTH_USER_KEY: &str = "auth-user";

/// Key holding the contact messages as a JSON array, oldest first.
pub const MESSAGES_KEY: &str = "messages-list";

/// Durable string key-value storage.
///
/// All calls are synchronous; a successful `set_item`/`remove_item` has been
/// persisted by the time it returns.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value for `key`, or `None` if it was never set or was removed.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Deletes `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Non-durable store backed by a map. Contents vanish with the process.
///
/// Useful for tests and for running the shell without touching disk.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    items: std::sync::RwLock<std::collections::BTreeMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.read().unwrap_or_else(|e| e.into_inner());
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.write().unwrap_or_else(|e| e.into_inner());
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.items.write().unwrap_or_else(|e| e.into_inner());
        items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryKeyValueStore::new();
        assert_eq!(store.get_item(AUTH_FLAG_KEY).unwrap(), None);

        store.set_item(AUTH_FLAG_KEY, "true").unwrap();
        assert_eq!(store.get_item(AUTH_FLAG_KEY).unwrap().as_deref(), Some("true"));

        store.remove_item(AUTH_FLAG_KEY).unwrap();
        store.remove_item(AUTH_FLAG_KEY).unwrap();
        assert_eq!(store.get_item(AUTH_FLAG_KEY).unwrap(), None);
    }
}
