//! Route table constants and navigation guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Paths live here so guards, the interceptor, and the views agree on where
//! "home" is for each role.


pub mod guards;

use crate::state::session::Role;

/// Anonymous landing page.
pub const LANDING: &str = "/";
pub const ADMIN_HOME: &str = "/admin";
pub const RANCHER_HOME: &str = "/user";
pub const PUBLICATIONS: &str = "/publicaciones";

/// Detail route of one article.
pub fn publication_path(id: i64) -> String {
    format!("{PUBLICATIONS}/{id}")
}

/// Home route for an authenticated role.
pub fn home_for(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_HOME,
        Role::Rancher => RANCHER_HOME,
    }
}

/// Navigation requested by code that has no router handle.
pub trait Redirect: Send + Sync {
    fn redirect(&self, path: &str);
}
