//! Record domain module.
//!
//! Messages, projects and services share one contract: created from a
//! validated draft, identified by creation time, deleted by id, never edited.
//!
//! # Module Structure
//!
//! - `id`: `RecordId`, clocks and the id sequence
//! - `validation`: per-field form errors
//! - `repository`: `Record` and `RecordStore` traits
//! - `message`, `project`, `service`: the three record types

mod id;
mod message;
mod project;
mod repository;
mod service;
mod validation;

pub use id::{Clock, IdSequence, RecordId, SystemClock, iso_timestamp};
pub use message::{ContactSubmission, Message};
pub use project::{Project, ProjectDraft};
pub use repository::{Record, RecordStore};
pub use service::{DEFAULT_SERVICE_ICON, Service, ServiceDraft};
pub use validation::{FormErrors, looks_like_email};
