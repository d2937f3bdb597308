//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the rules they encode stay testable without a DOM.

pub mod auth;
pub mod lifetime;
pub mod password;
pub mod storage;
