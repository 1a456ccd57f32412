//! Contact message store persisted in key-value storage.
//!
//! Messages live under `messages-list` as one JSON array, oldest first. The
//! inbox shows them newest first by reversing on read.

use std::sync::{Arc, Mutex};

use orbitera_core::error::Result;
use orbitera_core::record::{Clock, IdSequence, Message, Record, RecordId, RecordStore};
use orbitera_core::storage::{KeyValueStore, MESSAGES_KEY};

pub struct PersistedMessageStore {
    storage: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    ids: IdSequence,
    /// Serializes read-modify-write cycles on the list.
    write_lock: Mutex<()>,
}

impl PersistedMessageStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            storage,
            clock,
            ids: IdSequence::new(),
            write_lock: Mutex::new(()),
        }
    }

    /// Messages newest first, as the admin inbox lists them.
    pub fn list_recent_first(&self) -> Result<Vec<Message>> {
        let mut messages = self.read_all()?;
        messages.reverse();
        Ok(messages)
    }

    /// Reads the stored list. An unreadable list counts as empty.
    fn read_all(&self) -> Result<Vec<Message>> {
        let Some(raw) = self.storage.get_item(MESSAGES_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Message>>(&raw) {
            Ok(messages) => Ok(messages),
            Err(e) => {
                tracing::warn!(
                    "[PersistedMessageStore] Ignoring unreadable {}: {}",
                    MESSAGES_KEY,
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    fn write_all(&self, messages: &[Message]) -> Result<()> {
        let json = serde_json::to_string(messages)?;
        self.storage.set_item(MESSAGES_KEY, &json)
    }
}

impl RecordStore<Message> for PersistedMessageStore {
    fn add(&self, draft: <Message as Record>::Draft) -> Result<Message> {
        Message::validate(&draft)?;

        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut messages = self.read_all()?;
        if let Some(max) = messages.iter().map(Message::id).max() {
            self.ids.observe(max);
        }

        let now = self.clock.now();
        let message = Message::from_draft(draft, self.ids.next(now), now);
        messages.push(message.clone());
        self.write_all(&messages)?;

        tracing::info!(
            "[PersistedMessageStore] Stored message {} from {}",
            message.id,
            message.email
        );
        Ok(message)
    }

    fn remove(&self, id: RecordId) -> Result<bool> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut messages = self.read_all()?;
        let before = messages.len();
        messages.retain(|m| m.id != id);

        if messages.len() == before {
            return Ok(false);
        }

        self.write_all(&messages)?;
        tracing::info!("[PersistedMessageStore] Deleted message {}", id);
        Ok(true)
    }

    fn list(&self) -> Result<Vec<Message>> {
        self.read_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use orbitera_core::record::ContactSubmission;
    use orbitera_core::storage::MemoryKeyValueStore;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn store_with(storage: Arc<MemoryKeyValueStore>) -> PersistedMessageStore {
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap());
        PersistedMessageStore::new(storage, Arc::new(clock))
    }

    fn submission(name: &str) -> ContactSubmission {
        ContactSubmission::new(name, "a@b.com", "S", "M")
    }

    #[test]
    fn test_add_appends_and_persists() {
        let storage = Arc::new(MemoryKeyValueStore::new());
        let store = store_with(storage.clone());

        let first = store.add(submission("A")).unwrap();
        let second = store.add(submission("B")).unwrap();
        assert_ne!(first.id, second.id);

        let raw = storage.get_item(MESSAGES_KEY).unwrap().unwrap();
        let on_disk: Vec<Message> = serde_json::from_str(&raw).unwrap();
        assert_eq!(on_disk, vec![first.clone(), second.clone()]);

        assert_eq!(store.list_recent_first().unwrap(), vec![second, first]);
    }

    #[test]
    fn test_ids_continue_after_reload() {
        let storage = Arc::new(MemoryKeyValueStore::new());
        let first = store_with(storage.clone()).add(submission("A")).unwrap();

        // Same frozen clock, fresh sequence: must not reuse the stored id.
        let second = store_with(storage).add(submission("B")).unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn test_add_then_remove_restores_collection() {
        let store = store_with(Arc::new(MemoryKeyValueStore::new()));
        store.add(submission("A")).unwrap();
        let before = store.list().unwrap();

        let added = store.add(submission("B")).unwrap();
        assert!(store.remove(added.id).unwrap());
        assert_eq!(store.list().unwrap(), before);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let store = store_with(Arc::new(MemoryKeyValueStore::new()));
        store.add(submission("A")).unwrap();
        assert!(!store.remove(RecordId(42)).unwrap());
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_invalid_submission_stores_nothing() {
        let storage = Arc::new(MemoryKeyValueStore::new());
        let store = store_with(storage.clone());

        let err = store.add(ContactSubmission::new("", "a@b.com", "S", "M")).unwrap_err();
        assert!(err.form_errors().unwrap().contains("name"));
        assert_eq!(storage.get_item(MESSAGES_KEY).unwrap(), None);
    }

    #[test]
    fn test_corrupt_list_reads_as_empty_and_is_replaced() {
        let storage = Arc::new(MemoryKeyValueStore::new());
        storage.set_item(MESSAGES_KEY, "not json").unwrap();
        let store = store_with(storage);

        assert!(store.list().unwrap().is_empty());
        store.add(submission("A")).unwrap();
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_get_by_id() {
        let store = store_with(Arc::new(MemoryKeyValueStore::new()));
        let added = store.add(submission("A")).unwrap();
        assert_eq!(store.get(added.id).unwrap(), Some(added));
        assert_eq!(store.get(RecordId(1)).unwrap(), None);
    }
}
