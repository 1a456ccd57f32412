//! Record store trait.

use chrono::{DateTime, Utc};

use super::id::RecordId;
use super::validation::FormErrors;
use crate::error::Result;

/// An entity held in a record store.
///
/// Records are created from a draft (the submitted form) and are never
/// updated afterwards: an item is either present or absent.
pub trait Record: Clone + Send + Sync {
    /// Form input a record is built from.
    type Draft: Send;

    /// Entity name used in logs and `NotFound` errors.
    const ENTITY: &'static str;

    fn id(&self) -> RecordId;

    /// Checks required fields; an empty error map means the draft is accepted.
    fn validate(draft: &Self::Draft) -> std::result::Result<(), FormErrors>;

    /// Builds the record once an id and creation time have been assigned.
    fn from_draft(draft: Self::Draft, id: RecordId, created_at: DateTime<Utc>) -> Self;
}

/// Append/delete collection of one record type.
///
/// Implementations decide placement (appended or prepended) and whether the
/// collection survives a restart.
pub trait RecordStore<R: Record>: Send + Sync {
    /// Validates the draft, assigns an id and inserts the new record.
    ///
    /// A rejected draft returns `OrbiteraError::Validation` and creates nothing.
    fn add(&self, draft: R::Draft) -> Result<R>;

    /// Removes the record with `id`. Returns `false` when nothing matched.
    fn remove(&self, id: RecordId) -> Result<bool>;

    /// Returns the collection in storage order.
    fn list(&self) -> Result<Vec<R>>;

    fn get(&self, id: RecordId) -> Result<Option<R>> {
        Ok(self.list()?.into_iter().find(|r| r.id() == id))
    }

    fn len(&self) -> Result<usize> {
        Ok(self.list()?.len())
    }
}
