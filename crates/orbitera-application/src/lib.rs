//! Application layer for Orbitera.
//!
//! Use cases behind each screen of the site and its admin area. They
//! coordinate the session, the route guard and the record stores, and apply
//! the simulated network latency the forms show before completing.

pub mod agency;
pub mod app;
pub mod auth_usecase;
pub mod catalog_usecase;
pub mod contact_usecase;
pub mod dashboard;
pub mod inbox;

pub use agency::{AGENCY_INFO, AgencyInfo};
pub use app::OrbiteraApp;
pub use auth_usecase::AuthUseCase;
pub use catalog_usecase::{CatalogUseCase, ProjectCatalog, ServiceCatalog};
pub use contact_usecase::ContactUseCase;
pub use dashboard::DashboardSummary;
pub use inbox::{MessageInbox, count_label};
