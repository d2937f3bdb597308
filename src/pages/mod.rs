//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages own route-scoped data loading and delegate the auth dialogs to
//! `components::modal_host`. Guards are applied around them in `app` through
//! `components::route_gate`, so a page body only runs for an allowed session.

pub mod admin_home;
pub mod home;
pub mod publication;
pub mod publications;
pub mod user_home;
