//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` exposes typed endpoints, `interceptor` applies session credentials and
//! 401 handling to every call, `transport` is the fetch seam, `error` and
//! `types` define the failure taxonomy and wire schema.

pub mod api;
pub mod error;
pub mod interceptor;
pub mod transport;
pub mod types;
