//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session, UI state and API client from Leptos context.
//! The three auth dialogs are mounted by `modal_host`, which shows at most one
//! of them according to `UiState::modal`. `route_gate` wraps every guarded
//! route in `app`.

pub mod forgot_password_modal;
pub mod header;
pub mod login_modal;
pub mod modal_host;
pub mod predio_modal;
pub mod register_modal;
pub mod route_gate;
