//! Authentication domain module.
//!
//! - `model`: `AuthenticatedUser` and `Credentials`
//! - `verifier`: `CredentialVerifier` trait and the built-in single account

mod model;
mod verifier;

pub use model::{AuthenticatedUser, Credentials};
pub use verifier::{
    ADMIN_DISPLAY_NAME, ADMIN_EMAIL, ADMIN_PASSWORD, CredentialVerifier, StaticCredentialVerifier,
};
