//! Login form and sign-out flow.

use std::sync::Arc;
use std::time::Duration;

use orbitera_core::error::Result;
use orbitera_core::routing::{Navigation, Route};
use orbitera_core::session::SessionStore;

pub struct AuthUseCase {
    session: Arc<SessionStore>,
    login_delay: Duration,
}

impl AuthUseCase {
    pub fn new(session: Arc<SessionStore>, login_delay: Duration) -> Self {
        Self {
            session,
            login_delay,
        }
    }

    /// Submits the login form.
    ///
    /// Waits the configured latency, then signs in. Success navigates to the
    /// dashboard. A rejected pair returns `OrbiteraError::InvalidCredentials`,
    /// whose message is shown inline under the form.
    pub async fn submit_login(&self, email: &str, password: &str) -> Result<Navigation> {
        if !self.login_delay.is_zero() {
            tokio::time::sleep(self.login_delay).await;
        }

        self.session.login(email, password).await?;
        Ok(Navigation::Redirect {
            from: Route::Login,
            to: Route::AdminDashboard,
        })
    }

    /// Signs out and lands on the login screen.
    pub fn logout(&self) -> Result<Navigation> {
        self.session.logout()?;
        Ok(Navigation::Render(Route::Login))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbitera_core::auth::{ADMIN_EMAIL, ADMIN_PASSWORD, StaticCredentialVerifier};
    use orbitera_core::storage::MemoryKeyValueStore;

    fn usecase(delay: Duration) -> (AuthUseCase, Arc<SessionStore>) {
        let session = Arc::new(
            SessionStore::initialize(
                Arc::new(MemoryKeyValueStore::new()),
                Arc::new(StaticCredentialVerifier::default()),
            )
            .unwrap(),
        );
        (AuthUseCase::new(session.clone(), delay), session)
    }

    #[tokio::test]
    async fn test_successful_login_goes_to_dashboard() {
        let (auth, session) = usecase(Duration::ZERO);
        let nav = auth.submit_login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();

        assert_eq!(nav.destination(), Route::AdminDashboard);
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn test_rejected_login_shows_inline_message() {
        let (auth, session) = usecase(Duration::ZERO);
        let err = auth.submit_login(ADMIN_EMAIL, "124").await.unwrap_err();

        assert_eq!(err.to_string(), "Invalid email or password.");
        assert!(!session.is_authenticated());
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_waits_configured_delay() {
        let (auth, _session) = usecase(Duration::from_millis(600));
        let started = tokio::time::Instant::now();

        auth.submit_login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(600));
    }

    #[tokio::test]
    async fn test_logout_lands_on_login() {
        let (auth, session) = usecase(Duration::ZERO);
        auth.submit_login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();

        let nav = auth.logout().unwrap();
        assert_eq!(nav, Navigation::Render(Route::Login));
        assert!(!session.is_authenticated());
    }
}
