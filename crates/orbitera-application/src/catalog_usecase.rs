//! Manage Projects and Manage Services screens.

use std::sync::Arc;

use orbitera_core::error::Result;
use orbitera_core::record::{Project, Record, RecordId, RecordStore, Service};

/// Add/delete flow over one record store.
pub struct CatalogUseCase<R: Record> {
    store: Arc<dyn RecordStore<R>>,
}

pub type ProjectCatalog = CatalogUseCase<Project>;
pub type ServiceCatalog = CatalogUseCase<Service>;

impl<R: Record> CatalogUseCase<R> {
    pub fn new(store: Arc<dyn RecordStore<R>>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Vec<R>> {
        self.store.list()
    }

    pub fn count(&self) -> Result<usize> {
        self.store.len()
    }

    /// Submits the add form. Field errors come back as `OrbiteraError::Validation`.
    pub fn submit(&self, draft: R::Draft) -> Result<R> {
        match self.store.add(draft) {
            Ok(record) => Ok(record),
            Err(e) => {
                if let Some(errors) = e.form_errors() {
                    tracing::debug!("[CatalogUseCase] {} form rejected: {}", R::ENTITY, errors);
                }
                Err(e)
            }
        }
    }

    /// Deletes immediately. Returns `false` for an id that is not listed.
    pub fn delete(&self, id: RecordId) -> Result<bool> {
        self.store.remove(id)
    }
}
