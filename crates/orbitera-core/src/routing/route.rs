//! Site routes.

use std::str::FromStr;

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{OrbiteraError, Result};

/// Every navigable destination of the site.
///
/// `Display`/`FromStr` use the URL path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Route {
    #[strum(to_string = "/")]
    Home,
    #[strum(to_string = "/about")]
    About,
    #[strum(to_string = "/services")]
    Services,
    #[strum(to_string = "/portfolio")]
    Portfolio,
    #[strum(to_string = "/contact")]
    Contact,
    #[strum(to_string = "/login")]
    Login,
    #[strum(to_string = "/admin")]
    AdminDashboard,
    #[strum(to_string = "/admin/projects")]
    AdminProjects,
    #[strum(to_string = "/admin/services")]
    AdminServices,
    #[strum(to_string = "/admin/messages")]
    AdminMessages,
}

impl Route {
    /// Resolves a requested path. Query strings, fragments and a trailing
    /// slash are ignored.
    pub fn from_path(path: &str) -> Result<Route> {
        let normalized = normalize_path(path);
        Route::from_str(&normalized).map_err(|_| OrbiteraError::not_found("route", path))
    }

    pub fn path(self) -> String {
        self.to_string()
    }

    /// Admin screens require a signed-in session.
    pub fn is_protected(self) -> bool {
        matches!(
            self,
            Route::AdminDashboard
                | Route::AdminProjects
                | Route::AdminServices
                | Route::AdminMessages
        )
    }

    /// Link text in the navbar or sidebar.
    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Services => "Services",
            Route::Portfolio => "Portfolio",
            Route::Contact => "Contact",
            Route::Login => "Login",
            Route::AdminDashboard => "Dashboard",
            Route::AdminProjects => "Projects",
            Route::AdminServices => "Services",
            Route::AdminMessages => "Messages",
        }
    }

    /// Public navbar links, in display order.
    pub fn public_nav() -> Vec<Route> {
        Route::iter()
            .filter(|r| !r.is_protected() && *r != Route::Login)
            .collect()
    }

    /// Admin sidebar links, in display order.
    pub fn admin_nav() -> Vec<Route> {
        Route::iter().filter(|r| r.is_protected()).collect()
    }

    /// Sidebar highlight rule: the dashboard link matches only its own path,
    /// the other admin links match any path below them.
    pub fn is_active_for(self, current_path: &str) -> bool {
        let current = normalize_path(current_path);
        if self == Route::AdminDashboard {
            return current == Route::AdminDashboard.path();
        }
        current.starts_with(&self.path())
    }
}

fn normalize_path(path: &str) -> String {
    let path = path.trim();
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
