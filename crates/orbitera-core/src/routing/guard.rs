//! Route guard for the admin area.

use std::sync::Arc;

use super::route::Route;
use crate::error::Result;
use crate::session::{Session, SessionStore};

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Show the requested screen.
    Render(Route),
    /// Show `to` instead of the requested `from`.
    Redirect { from: Route, to: Route },
}

impl Navigation {
    /// The screen that ends up on display.
    pub fn destination(self) -> Route {
        match self {
            Navigation::Render(route) => route,
            Navigation::Redirect { to, .. } => to,
        }
    }

    pub fn is_redirect(self) -> bool {
        matches!(self, Navigation::Redirect { .. })
    }
}

/// Evaluated on every navigation. No caching: the session is read each time.
pub struct RouteGuard {
    session: Arc<SessionStore>,
}

impl RouteGuard {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }

    /// Pure decision: protected routes need `authenticated == true`.
    pub fn evaluate(session: &Session, route: Route) -> Navigation {
        if route.is_protected() && !session.authenticated {
            Navigation::Redirect {
                from: route,
                to: Route::Login,
            }
        } else {
            Navigation::Render(route)
        }
    }

    /// Checks `route` against the live session.
    pub fn check(&self, route: Route) -> Navigation {
        let navigation = Self::evaluate(&self.session.snapshot(), route);
        if navigation.is_redirect() {
            tracing::debug!("[RouteGuard] {} requires login, redirecting", route);
        }
        navigation
    }

    /// Resolves `path` and checks it. Unknown paths are `NotFound`.
    pub fn navigate(&self, path: &str) -> Result<Navigation> {
        Ok(self.check(Route::from_path(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{ADMIN_EMAIL, ADMIN_PASSWORD, AuthenticatedUser, StaticCredentialVerifier};
    use crate::storage::MemoryKeyValueStore;
    use strum::IntoEnumIterator;

    fn guard() -> (RouteGuard, Arc<SessionStore>) {
        let session = Arc::new(
            SessionStore::initialize(
                Arc::new(MemoryKeyValueStore::new()),
                Arc::new(StaticCredentialVerifier::default()),
            )
            .unwrap(),
        );
        (RouteGuard::new(session.clone()), session)
    }

    #[test]
    fn test_public_routes_always_render() {
        let anonymous = Session::anonymous();
        for route in Route::iter().filter(|r| !r.is_protected()) {
            assert_eq!(RouteGuard::evaluate(&anonymous, route), Navigation::Render(route));
        }
    }

    #[test]
    fn test_protected_routes_redirect_when_signed_out() {
        let anonymous = Session::anonymous();
        for route in Route::admin_nav() {
            let nav = RouteGuard::evaluate(&anonymous, route);
            assert_eq!(nav, Navigation::Redirect { from: route, to: Route::Login });
            assert_eq!(nav.destination(), Route::Login);
        }
    }

    #[test]
    fn test_flag_alone_grants_access() {
        let session = Session {
            authenticated: true,
            user: None,
        };
        assert_eq!(
            RouteGuard::evaluate(&session, Route::AdminMessages),
            Navigation::Render(Route::AdminMessages)
        );

        let signed_in = Session::signed_in(AuthenticatedUser {
            email: ADMIN_EMAIL.to_string(),
            name: "Thoyyib".to_string(),
        });
        assert!(!RouteGuard::evaluate(&signed_in, Route::AdminDashboard).is_redirect());
    }

    #[tokio::test]
    async fn test_logout_revokes_access() {
        let (guard, session) = guard();
        assert!(guard.navigate("/admin/projects").unwrap().is_redirect());

        session.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();
        assert_eq!(
            guard.navigate("/admin/projects").unwrap(),
            Navigation::Render(Route::AdminProjects)
        );

        session.logout().unwrap();
        for route in Route::admin_nav() {
            assert_eq!(guard.check(route).destination(), Route::Login);
        }
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let (guard, _) = guard();
        assert!(guard.navigate("/nowhere").unwrap_err().is_not_found());
    }
}
