pub mod config_service;
pub mod message_repository;
pub mod paths;
pub mod storage;
pub mod transient_repository;

pub use crate::config_service::ConfigService;
pub use crate::message_repository::PersistedMessageStore;
pub use crate::paths::OrbiteraPaths;
pub use crate::storage::FileKeyValueStore;
pub use crate::transient_repository::TransientRecordStore;
