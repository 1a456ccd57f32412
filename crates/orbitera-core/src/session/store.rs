//! Session store: the single source of truth for "is someone signed in".
//!
//! The store is an explicit object handed to whatever needs it (route guard,
//! login form, sidebar). Every mutation is written through to the key-value
//! storage before the in-memory state changes, so a failed write leaves the
//! session exactly as it was.

use std::sync::{Arc, RwLock};

use super::model::Session;
use crate::auth::{AuthenticatedUser, CredentialVerifier, Credentials};
use crate::error::Result;
use crate::storage::{AUTH_FLAG_KEY, AUTH_USER_KEY, KeyValueStore};

/// Value stored under [`AUTH_FLAG_KEY`] while signed in.
const AUTH_FLAG_TRUE: &str = "true";

pub struct SessionStore {
    state: RwLock<Session>,
    storage: Arc<dyn KeyValueStore>,
    verifier: Arc<dyn CredentialVerifier>,
}

impl SessionStore {
    /// Restores the session from storage.
    ///
    /// Missing keys mean signed out. An `auth-user` value that is not valid
    /// JSON is treated as absent.
    pub fn initialize(
        storage: Arc<dyn KeyValueStore>,
        verifier: Arc<dyn CredentialVerifier>,
    ) -> Result<Self> {
        let authenticated = storage.get_item(AUTH_FLAG_KEY)?.as_deref() == Some(AUTH_FLAG_TRUE);

        let user = match storage.get_item(AUTH_USER_KEY)? {
            Some(raw) => match serde_json::from_str::<AuthenticatedUser>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!("[SessionStore] Ignoring unreadable {}: {}", AUTH_USER_KEY, e);
                    None
                }
            },
            None => None,
        };

        tracing::debug!(
            "[SessionStore] Initialized (authenticated: {}, user: {:?})",
            authenticated,
            user.as_ref().map(|u| &u.email)
        );

        Ok(Self {
            state: RwLock::new(Session {
                authenticated,
                user,
            }),
            storage,
            verifier,
        })
    }

    /// Signs in with an email/password pair.
    ///
    /// On a mismatch returns `OrbiteraError::InvalidCredentials` and the
    /// session is untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthenticatedUser> {
        let credentials = Credentials::new(email, password);
        let user = match self.verifier.verify(&credentials).await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("[SessionStore] Login rejected for {}", email);
                return Err(e);
            }
        };

        // User record first: an interrupted login then reads back as signed out.
        let user_json = serde_json::to_string(&user)?;
        let previous_user = self.storage.get_item(AUTH_USER_KEY)?;
        self.storage.set_item(AUTH_USER_KEY, &user_json)?;
        if let Err(e) = self.storage.set_item(AUTH_FLAG_KEY, AUTH_FLAG_TRUE) {
            // Put back whatever user record matched the unchanged session.
            let rollback = match previous_user {
                Some(previous) => self.storage.set_item(AUTH_USER_KEY, &previous),
                None => self.storage.remove_item(AUTH_USER_KEY),
            };
            if let Err(cleanup) = rollback {
                tracing::warn!("[SessionStore] Failed to roll back {}: {}", AUTH_USER_KEY, cleanup);
            }
            return Err(e);
        }

        *self.state.write().unwrap_or_else(|e| e.into_inner()) = Session::signed_in(user.clone());

        tracing::info!("[SessionStore] Signed in as {}", user.email);
        Ok(user)
    }

    /// Signs out and removes both persisted entries.
    pub fn logout(&self) -> Result<()> {
        self.storage.remove_item(AUTH_FLAG_KEY)?;
        self.storage.remove_item(AUTH_USER_KEY)?;

        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        if let Some(user) = state.user.take() {
            tracing::info!("[SessionStore] Signed out {}", user.email);
        }
        *state = Session::anonymous();
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .authenticated
    }

    pub fn user(&self) -> Option<AuthenticatedUser> {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .user
            .clone()
    }

    /// Copy of the current session.
    pub fn snapshot(&self) -> Session {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}
