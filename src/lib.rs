//! # sniugb-web
//!
//! Leptos + WASM client for the SNIUGB livestock registry.
//!
//! This crate owns the browser session (token + role), the route guards that
//! gate navigation on it, the auth interceptor wrapped around every REST call,
//! the modal coordinator, and the forgot-password wizard. Pages and components
//! are thin views that drive those pieces.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

#[cfg(test)]
mod testing;

/// Browser entry point: install logging and mount the root component.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("sniugb-web starting");
    leptos::mount::mount_to_body(app::App);
}
