use super::*;
use crate::util::storage::MemoryStorage;

fn fresh() -> (MemoryStorage, SessionStore) {
    let storage = MemoryStorage::new();
    let store = SessionStore::load(Arc::new(storage.clone()));
    (storage, store)
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_parses_wire_values() {
    assert_eq!(Role::parse("admin"), Some(Role::Admin));
    assert_eq!(Role::parse("ganadero"), Some(Role::Rancher));
    assert_eq!(Role::parse("root"), None);
}

#[test]
fn role_serde_uses_wire_names() {
    assert_eq!(serde_json::to_string(&Role::Rancher).unwrap(), "\"ganadero\"");
    let role: Role = serde_json::from_str("\"admin\"").unwrap();
    assert_eq!(role, Role::Admin);
}

#[test]
fn session_debug_hides_token() {
    let rendered = format!("{:?}", Session::new("secret-token", Role::Admin));
    assert!(!rendered.contains("secret-token"));
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn empty_storage_loads_anonymous() {
    let (_, store) = fresh();
    assert!(!store.is_authenticated());
    assert_eq!(store.token(), None);
    assert_eq!(store.role(), None);
}

#[test]
fn set_session_exposes_token_and_role() {
    let (_, mut store) = fresh();
    store.set_session(Session::new("abc", Role::Admin));
    assert_eq!(store.token(), Some("abc"));
    assert_eq!(store.role(), Some(Role::Admin));
    assert!(store.is_authenticated());
}

#[test]
fn set_session_writes_every_alias() {
    let (storage, mut store) = fresh();
    store.set_session(Session::new("abc", Role::Rancher));
    assert_eq!(storage.get("access_token").as_deref(), Some("abc"));
    assert_eq!(storage.get("sniugb_auth_token").as_deref(), Some("abc"));
    assert_eq!(storage.get("role").as_deref(), Some("ganadero"));
    assert_eq!(storage.get("sniugb_user_role").as_deref(), Some("ganadero"));
}

#[test]
fn reload_reconstructs_same_session() {
    let (storage, mut store) = fresh();
    store.set_session(Session::new("abc", Role::Admin));

    let reloaded = SessionStore::load(Arc::new(storage));
    assert_eq!(reloaded.session(), store.session());
}

#[test]
fn clear_removes_session_and_all_keys() {
    let (storage, mut store) = fresh();
    store.set_session(Session::new("abc", Role::Admin));
    store.clear();
    assert!(!store.is_authenticated());
    assert_eq!(store.role(), None);
    assert!(storage.is_empty());
}

#[test]
fn legacy_alias_keys_restore_session() {
    let storage = MemoryStorage::new();
    storage.set("access_token", "legacy");
    storage.set("role", "ganadero");
    let store = SessionStore::load(Arc::new(storage));
    assert_eq!(store.session(), Some(&Session::new("legacy", Role::Rancher)));
}

#[test]
fn canonical_key_wins_over_alias() {
    let storage = MemoryStorage::new();
    storage.set("sniugb_auth_token", "new");
    storage.set("access_token", "old");
    storage.set("sniugb_user_role", "admin");
    let store = SessionStore::load(Arc::new(storage));
    assert_eq!(store.token(), Some("new"));
}

#[test]
fn empty_values_are_treated_as_missing() {
    let storage = MemoryStorage::new();
    storage.set("sniugb_auth_token", "");
    storage.set("access_token", "fallback");
    storage.set("role", "admin");
    let store = SessionStore::load(Arc::new(storage));
    assert_eq!(store.token(), Some("fallback"));
}

#[test]
fn orphan_token_loads_anonymous_and_is_purged() {
    let storage = MemoryStorage::new();
    storage.set("access_token", "abc");
    let store = SessionStore::load(Arc::new(storage.clone()));
    assert!(!store.is_authenticated());
    assert!(storage.is_empty());
}

#[test]
fn unknown_role_loads_anonymous() {
    let storage = MemoryStorage::new();
    storage.set("access_token", "abc");
    storage.set("role", "superuser");
    let store = SessionStore::load(Arc::new(storage.clone()));
    assert_eq!(store.session(), None);
    assert!(storage.is_empty());
}

#[test]
fn role_present_iff_token_present() {
    let (_, mut store) = fresh();
    let check = |s: &SessionStore| assert_eq!(s.token().is_some(), s.role().is_some());
    check(&store);
    store.set_session(Session::new("t", Role::Rancher));
    check(&store);
    store.clear();
    check(&store);
}

#[test]
fn session_signal_writes_through_to_storage() {
    use leptos::prelude::*;

    let owner = Owner::new();
    owner.set();
    let (storage, store) = fresh();
    let signal = RwSignal::new(store);

    SessionAccess::set_session(&signal, Session::new("abc", Role::Admin));
    assert_eq!(SessionAccess::token(&signal).as_deref(), Some("abc"));
    assert_eq!(SessionAccess::role(&signal), Some(Role::Admin));
    assert_eq!(storage.get("access_token").as_deref(), Some("abc"));

    SessionAccess::clear(&signal);
    assert!(!signal.with_untracked(SessionStore::is_authenticated));
    assert!(storage.is_empty());
}
