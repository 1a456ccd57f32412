//! Domain layer for the Orbitera agency site.
//!
//! Holds the session store, the route guard and the record types with their
//! store traits. Storage is reached only through [`storage::KeyValueStore`],
//! so nothing here touches the file system.

pub mod auth;
pub mod config;
pub mod error;
pub mod record;
pub mod routing;
pub mod session;
pub mod storage;

// Re-export common error type
pub use error::OrbiteraError;
