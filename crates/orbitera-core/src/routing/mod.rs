//! Routing domain module.
//!
//! - `route`: the `Route` table and path parsing
//! - `guard`: `RouteGuard` and the `Navigation` outcome

mod guard;
mod route;

pub use guard::{Navigation, RouteGuard};
pub use route::Route;
