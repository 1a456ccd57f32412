//! Composition root: wires storage, session, guard and use cases together.

use std::sync::Arc;

use orbitera_core::auth::{CredentialVerifier, StaticCredentialVerifier};
use orbitera_core::config::AppConfig;
use orbitera_core::error::Result;
use orbitera_core::record::{Clock, RecordStore, SystemClock};
use orbitera_core::routing::{Navigation, RouteGuard};
use orbitera_core::session::SessionStore;
use orbitera_core::storage::KeyValueStore;
use orbitera_infrastructure::{PersistedMessageStore, TransientRecordStore};

use crate::auth_usecase::AuthUseCase;
use crate::catalog_usecase::{CatalogUseCase, ProjectCatalog, ServiceCatalog};
use crate::contact_usecase::ContactUseCase;
use crate::dashboard::DashboardSummary;
use crate::inbox::MessageInbox;

/// Everything a front end needs, shared behind `Arc`s.
pub struct OrbiteraApp {
    pub session: Arc<SessionStore>,
    pub guard: RouteGuard,
    pub auth: AuthUseCase,
    pub contact: ContactUseCase,
    pub projects: ProjectCatalog,
    pub services: ServiceCatalog,
    pub messages: Arc<PersistedMessageStore>,
}

impl OrbiteraApp {
    /// Builds the app over `storage` with the built-in admin account.
    pub fn bootstrap(config: &AppConfig, storage: Arc<dyn KeyValueStore>) -> Result<Self> {
        Self::bootstrap_with(
            config,
            storage,
            Arc::new(StaticCredentialVerifier::default()),
            Arc::new(SystemClock),
        )
    }

    pub fn bootstrap_with(
        config: &AppConfig,
        storage: Arc<dyn KeyValueStore>,
        verifier: Arc<dyn CredentialVerifier>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let session = Arc::new(SessionStore::initialize(storage.clone(), verifier)?);
        let messages = Arc::new(PersistedMessageStore::new(storage, clock.clone()));

        tracing::info!(
            "[Bootstrap] Session restored (authenticated: {})",
            session.is_authenticated()
        );

        Ok(Self {
            guard: RouteGuard::new(session.clone()),
            auth: AuthUseCase::new(session.clone(), config.auth.login_delay()),
            contact: ContactUseCase::new(messages.clone(), config.contact.submit_delay()),
            projects: CatalogUseCase::new(Arc::new(TransientRecordStore::projects(clock.clone()))),
            services: CatalogUseCase::new(Arc::new(TransientRecordStore::services(clock))),
            messages,
            session,
        })
    }

    pub fn navigate(&self, path: &str) -> Result<Navigation> {
        self.guard.navigate(path)
    }

    pub fn dashboard(&self) -> Result<DashboardSummary> {
        Ok(DashboardSummary::new(
            &self.session.snapshot(),
            self.projects.count()?,
            self.services.count()?,
            self.messages.len()?,
        ))
    }

    pub fn inbox(&self) -> Result<MessageInbox> {
        MessageInbox::load(self.messages.clone())
    }
}
