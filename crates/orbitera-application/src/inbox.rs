//! Admin messages inbox.
//!
//! Holds the loaded list and the current selection. The list is newest first;
//! deleting the selected message also clears the selection.

use std::sync::Arc;

use orbitera_core::error::{OrbiteraError, Result};
use orbitera_core::record::{Message, RecordId, RecordStore};
use orbitera_infrastructure::PersistedMessageStore;

/// `"1 message"` or `"N messages"`.
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 message".to_string()
    } else {
        format!("{} messages", count)
    }
}

pub struct MessageInbox {
    store: Arc<PersistedMessageStore>,
    messages: Vec<Message>,
    selected: Option<RecordId>,
}

impl MessageInbox {
    /// Loads the inbox with nothing selected.
    pub fn load(store: Arc<PersistedMessageStore>) -> Result<Self> {
        let messages = store.list_recent_first()?;
        Ok(Self {
            store,
            messages,
            selected: None,
        })
    }

    /// Re-reads storage. A selection that no longer exists is dropped.
    pub fn refresh(&mut self) -> Result<()> {
        self.messages = self.store.list_recent_first()?;
        if let Some(id) = self.selected
            && !self.messages.iter().any(|m| m.id == id)
        {
            self.selected = None;
        }
        Ok(())
    }

    /// Messages, newest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn count_label(&self) -> String {
        count_label(self.messages.len())
    }

    pub fn select(&mut self, id: RecordId) -> Result<&Message> {
        let message = self
            .messages
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| OrbiteraError::not_found("message", id.to_string()))?;
        self.selected = Some(id);
        Ok(message)
    }

    pub fn selected(&self) -> Option<&Message> {
        let id = self.selected?;
        self.messages.iter().find(|m| m.id == id)
    }

    /// Deletes from storage and from the list. Returns `false` for an unknown id.
    pub fn delete(&mut self, id: RecordId) -> Result<bool> {
        let removed = self.store.remove(id)?;
        self.messages.retain(|m| m.id != id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        Ok(removed)
    }
}
