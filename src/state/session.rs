//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards, the HTTP auth interceptor, and the login/logout views all read
//! or mutate this one store. It is provided to the component tree as an
//! `RwSignal<SessionStore>` so every consumer observes changes synchronously.
//!
//! DESIGN
//! ======
//! A session is either complete (token + role) or absent, so the in-memory
//! form is `Option<Session>`. Durable storage is a mirror written on every
//! mutation and read once at startup. The storage key names, including the
//! legacy aliases older builds wrote, never leave this module.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::util::storage::KeyValueStore;

/// Token aliases, canonical first. All are written; the first populated wins on read.
const TOKEN_KEYS: [&str; 2] = ["sniugb_auth_token", "access_token"];
/// Role aliases, canonical first.
const ROLE_KEYS: [&str; 2] = ["sniugb_user_role", "role"];

/// Account role as issued by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "ganadero")]
    Rancher,
}

impl Role {
    /// Wire/storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Rancher => "ganadero",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "admin" => Some(Self::Admin),
            "ganadero" => Some(Self::Rancher),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An authenticated identity: opaque bearer token plus role.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: Role,
}

impl Session {
    pub fn new(token: impl Into<String>, role: Role) -> Self {
        Self { token: token.into(), role }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// The single authoritative session holder.
#[derive(Clone)]
pub struct SessionStore {
    current: Option<Session>,
    storage: Arc<dyn KeyValueStore>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").field("current", &self.current).finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Restore whatever session durable storage holds.
    ///
    /// A token without a readable role (or the reverse) is not a session:
    /// the leftovers are purged and the store starts anonymous.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let token = read_first(storage.as_ref(), &TOKEN_KEYS);
        let role = read_first(storage.as_ref(), &ROLE_KEYS).as_deref().and_then(Role::parse);

        let mut store = Self { current: None, storage };
        match (token, role) {
            (Some(token), Some(role)) => {
                log::debug!("session restored from storage (role={role})");
                store.current = Some(Session { token, role });
            }
            (None, None) => {}
            _ => {
                log::warn!("discarding partial session found in storage");
                store.clear();
            }
        }
        store
    }

    pub fn session(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    pub fn role(&self) -> Option<Role> {
        self.current.as_ref().map(|s| s.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Replace the session and mirror it under every alias key.
    pub fn set_session(&mut self, session: Session) {
        for key in TOKEN_KEYS {
            self.storage.set(key, &session.token);
        }
        for key in ROLE_KEYS {
            self.storage.set(key, session.role.as_str());
        }
        log::info!("session started (role={})", session.role);
        self.current = Some(session);
    }

    /// Drop the session and every alias key.
    pub fn clear(&mut self) {
        for key in TOKEN_KEYS.iter().chain(ROLE_KEYS.iter()) {
            self.storage.remove(key);
        }
        if self.current.take().is_some() {
            log::info!("session cleared");
        }
    }
}

fn read_first(storage: &dyn KeyValueStore, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| storage.get(key).filter(|v| !v.is_empty()))
}

/// Session reads and mutations as seen by guards, the interceptor and the
/// login/logout flows.
///
/// Reads are untracked: callers that need reactivity subscribe to the signal
/// directly.
pub trait SessionAccess: Send + Sync {
    fn token(&self) -> Option<String>;
    fn role(&self) -> Option<Role>;
    fn set_session(&self, session: Session);
    fn clear(&self);

    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

impl SessionAccess for RwSignal<SessionStore> {
    fn token(&self) -> Option<String> {
        self.with_untracked(|s| s.token().map(str::to_owned))
    }

    fn role(&self) -> Option<Role> {
        self.with_untracked(SessionStore::role)
    }

    fn set_session(&self, session: Session) {
        self.update(|s| s.set_session(session));
    }

    fn clear(&self) {
        self.update(SessionStore::clear);
    }
}
