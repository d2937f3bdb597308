//! Liveness flag for page-scoped async work.
//!
//! Requests are not cancelled when the user navigates away. A page instead
//! holds an [`AliveFlag`] that is cleared on cleanup, and continuations check
//! it before writing into signals that may already be disposed.

#[cfg(test)]
#[path = "lifetime_test.rs"]
mod lifetime_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

#[derive(Clone, Debug)]
pub struct AliveFlag(Arc<AtomicBool>);

impl Default for AliveFlag {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl AliveFlag {
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn kill(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// Flag cleared when the current reactive owner is cleaned up.
pub fn page_alive_flag() -> AliveFlag {
    let flag = AliveFlag::default();
    let on_drop = flag.clone();
    on_cleanup(move || on_drop.kill());
    flag
}
