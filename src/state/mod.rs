//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is the single owner of the persisted credentials, `ui` holds
//! modal visibility and dashboard toggles, and `password_reset` drives the
//! forgot-password wizard. Views keep these in `RwSignal`s provided through
//! Leptos context.

pub mod password_reset;
pub mod session;
pub mod ui;
