//! Route guards: pure predicates over the current session.
//!
//! Each guard either allows the navigation or names the route to send the
//! user to instead. A route declares its guards in order; the first redirect
//! wins and the rest are not consulted.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use super::{ADMIN_HOME, LANDING, RANCHER_HOME, home_for};
use crate::state::session::{Role, Session};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    /// Only anonymous visitors; signed-in users go to their home.
    PublicOnly,
    /// Any signed-in user.
    Authenticated,
    /// Signed-in admins.
    Admin,
    /// Signed-in ranchers.
    Rancher,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Redirect(&'static str),
}

impl GuardOutcome {
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

impl Guard {
    pub fn check(self, session: Option<&Session>) -> GuardOutcome {
        match (self, session) {
            (Self::PublicOnly, Some(s)) => GuardOutcome::Redirect(home_for(s.role)),
            (Self::PublicOnly, None) => GuardOutcome::Allow,
            (Self::Authenticated | Self::Admin | Self::Rancher, None) => GuardOutcome::Redirect(LANDING),
            (Self::Authenticated, Some(_)) => GuardOutcome::Allow,
            (Self::Admin, Some(s)) if s.role != Role::Admin => GuardOutcome::Redirect(RANCHER_HOME),
            (Self::Rancher, Some(s)) if s.role != Role::Rancher => GuardOutcome::Redirect(ADMIN_HOME),
            (Self::Admin | Self::Rancher, Some(_)) => GuardOutcome::Allow,
        }
    }
}

/// Evaluate `guards` in declared order, stopping at the first redirect.
pub fn run_guards(guards: &[Guard], session: Option<&Session>) -> GuardOutcome {
    guards
        .iter()
        .map(|guard| guard.check(session))
        .find(|outcome| !outcome.is_allowed())
        .unwrap_or(GuardOutcome::Allow)
}

/// Guard chains used by the route table.
pub const PUBLIC_ROUTE: &[Guard] = &[Guard::PublicOnly];
pub const ADMIN_ROUTE: &[Guard] = &[Guard::Authenticated, Guard::Admin];
pub const RANCHER_ROUTE: &[Guard] = &[Guard::Authenticated, Guard::Rancher];
