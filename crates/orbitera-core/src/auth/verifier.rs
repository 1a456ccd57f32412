//! Credential verification.
//!
//! Call sites only see [`CredentialVerifier`]; the single built-in account
//! lives in [`StaticCredentialVerifier`] and can be replaced by a real
//! backend without touching the session store.

use async_trait::async_trait;

use super::model::{AuthenticatedUser, Credentials};
use crate::error::{OrbiteraError, Result};

/// Email of the built-in admin account.
pub const ADMIN_EMAIL: &str = "thoyyibcherur@gmail.com";
/// Password of the built-in admin account.
pub const ADMIN_PASSWORD: &str = "123";
/// Display name given to the built-in admin account.
pub const ADMIN_DISPLAY_NAME: &str = "Thoyyib";

/// Checks a credential pair and resolves it to a user.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Returns the matching user, or `OrbiteraError::InvalidCredentials`.
    async fn verify(&self, credentials: &Credentials) -> Result<AuthenticatedUser>;
}

/// Accepts exactly one email/password pair. No hashing, no rate limiting.
#[derive(Debug, Clone)]
pub struct StaticCredentialVerifier {
    email: String,
    password: String,
    display_name: String,
}

impl StaticCredentialVerifier {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            display_name: display_name.into(),
        }
    }
}

impl Default for StaticCredentialVerifier {
    fn default() -> Self {
        Self::new(ADMIN_EMAIL, ADMIN_PASSWORD, ADMIN_DISPLAY_NAME)
    }
}

#[async_trait]
impl CredentialVerifier for StaticCredentialVerifier {
    async fn verify(&self, credentials: &Credentials) -> Result<AuthenticatedUser> {
        // Exact, case-sensitive match on both fields.
        if credentials.email == self.email && credentials.password == self.password {
            Ok(AuthenticatedUser {
                email: credentials.email.clone(),
                name: self.display_name.clone(),
            })
        } else {
            Err(OrbiteraError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_accepts_builtin_pair() {
        let verifier = StaticCredentialVerifier::default();
        let user = verifier
            .verify(&Credentials::new(ADMIN_EMAIL, ADMIN_PASSWORD))
            .await
            .unwrap();
        assert_eq!(user.email, ADMIN_EMAIL);
        assert_eq!(user.name, "Thoyyib");
    }

    #[tokio::test]
    async fn test_rejects_near_misses() {
        let verifier = StaticCredentialVerifier::default();
        let attempts = [
            (ADMIN_EMAIL, "1234"),
            (ADMIN_EMAIL, ""),
            ("THOYYIBCHERUR@gmail.com", ADMIN_PASSWORD),
            (" thoyyibcherur@gmail.com", ADMIN_PASSWORD),
            ("", ""),
        ];
        for (email, password) in attempts {
            let err = verifier
                .verify(&Credentials::new(email, password))
                .await
                .unwrap_err();
            assert!(err.is_invalid_credentials(), "{email:?}/{password:?}");
        }
    }
}
