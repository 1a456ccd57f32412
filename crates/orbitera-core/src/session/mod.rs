//! Session domain module.
//!
//! - `model`: the `Session` value
//! - `store`: `SessionStore`, which owns initialize/login/logout

mod model;
mod store;

pub use model::Session;
pub use store::SessionStore;
