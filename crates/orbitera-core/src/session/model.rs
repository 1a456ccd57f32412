//! Session domain model.

use serde::{Deserialize, Serialize};

use crate::auth::AuthenticatedUser;

/// Whether someone is signed in to the admin area, and who.
///
/// `authenticated` and `user` are persisted under separate keys and loaded
/// independently, so a session may be authenticated without a user record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub authenticated: bool,
    pub user: Option<AuthenticatedUser>,
}

impl Session {
    /// A signed-out session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user: AuthenticatedUser) -> Self {
        Self {
            authenticated: true,
            user: Some(user),
        }
    }

    /// Name to greet the user with, if known.
    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }
}
