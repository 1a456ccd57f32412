//! Admin dashboard figures.

use orbitera_core::auth::ADMIN_DISPLAY_NAME;
use orbitera_core::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub welcome_name: String,
    pub project_count: usize,
    pub service_count: usize,
    pub message_count: usize,
}

impl DashboardSummary {
    /// The welcome line falls back to the account display name when the
    /// session carries no user record.
    pub fn new(session: &Session, project_count: usize, service_count: usize, message_count: usize) -> Self {
        let welcome_name = session
            .display_name()
            .map(str::to_string)
            .unwrap_or_else(|| ADMIN_DISPLAY_NAME.to_string());
        Self {
            welcome_name,
            project_count,
            service_count,
            message_count,
        }
    }

    pub fn greeting(&self) -> String {
        format!("Welcome, {} 👋", self.welcome_name)
    }
}
