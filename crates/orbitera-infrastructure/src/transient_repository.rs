//! In-memory record store for projects and services.
//!
//! Contents last only as long as the process. Every start begins again from
//! the seed list.

use std::sync::{Arc, RwLock};

use orbitera_core::error::Result;
use orbitera_core::record::{Clock, IdSequence, Project, Record, RecordId, RecordStore, Service};

pub struct TransientRecordStore<R: Record> {
    records: RwLock<Vec<R>>,
    clock: Arc<dyn Clock>,
    ids: IdSequence,
}

impl<R: Record> TransientRecordStore<R> {
    pub fn new(seed: Vec<R>, clock: Arc<dyn Clock>) -> Self {
        let ids = seed
            .iter()
            .map(Record::id)
            .max()
            .map(IdSequence::starting_after)
            .unwrap_or_default();
        Self {
            records: RwLock::new(seed),
            clock,
            ids,
        }
    }
}

impl TransientRecordStore<Project> {
    /// Project store starting from the default portfolio entries.
    pub fn projects(clock: Arc<dyn Clock>) -> Self {
        Self::new(Project::seed(), clock)
    }
}

impl TransientRecordStore<Service> {
    /// Service store starting from the default offerings.
    pub fn services(clock: Arc<dyn Clock>) -> Self {
        Self::new(Service::seed(), clock)
    }
}

impl<R: Record> RecordStore<R> for TransientRecordStore<R> {
    /// New records go to the front of the list.
    fn add(&self, draft: R::Draft) -> Result<R> {
        R::validate(&draft)?;

        let now = self.clock.now();
        let record = R::from_draft(draft, self.ids.next(now), now);

        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        records.insert(0, record.clone());

        tracing::info!("[TransientRecordStore] Added {} {}", R::ENTITY, record.id());
        Ok(record)
    }

    fn remove(&self, id: RecordId) -> Result<bool> {
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        let before = records.len();
        records.retain(|r| r.id() != id);

        let removed = records.len() != before;
        if removed {
            tracing::info!("[TransientRecordStore] Deleted {} {}", R::ENTITY, id);
        }
        Ok(removed)
    }

    fn list(&self) -> Result<Vec<R>> {
        Ok(self
            .records
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbitera_core::record::{ProjectDraft, ServiceDraft, SystemClock};

    fn projects() -> TransientRecordStore<Project> {
        TransientRecordStore::projects(Arc::new(SystemClock))
    }

    #[test]
    fn test_starts_from_seed() {
        let titles: Vec<String> = projects().list().unwrap().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["Nexus Labs", "AuraFit"]);
    }

    #[test]
    fn test_add_prepends() {
        let store = projects();
        let added = store.add(ProjectDraft::new("Orbit", "Landing page")).unwrap();

        let list = store.list().unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list[0], added);
    }

    #[test]
    fn test_add_then_remove_restores_collection() {
        let store = TransientRecordStore::services(Arc::new(SystemClock));
        let before = store.list().unwrap();

        let added = store.add(ServiceDraft::new("SEO", "Rank higher")).unwrap();
        assert!(store.remove(added.id).unwrap());
        assert_eq!(store.list().unwrap(), before);
    }

    #[test]
    fn test_empty_description_rejected() {
        let store = projects();
        let err = store.add(ProjectDraft::new("Orbit", "")).unwrap_err();

        let errors = err.form_errors().unwrap();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["description"]);
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_rapid_adds_get_distinct_ids() {
        let store = projects();
        let a = store.add(ProjectDraft::new("A", "a")).unwrap();
        let b = store.add(ProjectDraft::new("B", "b")).unwrap();
        assert_ne!(a.id, b.id);

        assert!(store.remove(a.id).unwrap());
        assert_eq!(store.get(b.id).unwrap(), Some(b));
    }

    struct EpochClock;

    impl Clock for EpochClock {
        fn now(&self) -> chrono::DateTime<chrono::Utc> {
            chrono::DateTime::UNIX_EPOCH
        }
    }

    #[test]
    fn test_ids_start_above_seed() {
        let store = TransientRecordStore::services(Arc::new(EpochClock));
        let added = store.add(ServiceDraft::new("SEO", "Rank higher")).unwrap();
        assert_eq!(added.id, RecordId(4));
        assert_eq!(store.len().unwrap(), 4);
    }

    #[test]
    fn test_remove_seed_entry() {
        let store = projects();
        assert!(store.remove(RecordId(1)).unwrap());
        assert!(!store.remove(RecordId(1)).unwrap());
        assert_eq!(store.len().unwrap(), 1);
    }
}
