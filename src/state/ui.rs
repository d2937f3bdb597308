//! Local UI chrome state: which overlay is open, dashboard toggles, and the
//! pending navigation slot.
//!
//! DESIGN
//! ======
//! The login, register, and forgot-password modals are mutually exclusive, so
//! visibility is one tagged value rather than three booleans. Code outside the
//! component tree (the auth interceptor) requests navigation by filling
//! `pending_redirect`; an effect in `App` consumes it with the router.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use leptos::prelude::*;

use crate::routing::Redirect;

/// The overlay currently shown on top of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    None,
    Login,
    Register,
    ForgotPassword,
}

/// Tabs of the rancher dashboard activity panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActivityTab {
    #[default]
    Notifications,
    Reminders,
}

/// Time window for the dashboard KPIs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KpiPeriod {
    #[default]
    Today,
    Week,
    Month,
}

impl KpiPeriod {
    pub const ALL: [Self; 3] = [Self::Today, Self::Week, Self::Month];

    /// Query value understood by `/dashboard/{predio}/kpis`.
    pub fn as_query(self) -> &'static str {
        match self {
            Self::Today => "hoy",
            Self::Week => "semana",
            Self::Month => "mes",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Today => "Hoy",
            Self::Week => "Semana Actual",
            Self::Month => "Mes Actual",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub modal: ModalState,
    pub activity_tab: ActivityTab,
    pub kpi_period: KpiPeriod,
    /// Route requested from outside the component tree, not yet navigated to.
    pub pending_redirect: Option<String>,
}

impl UiState {
    pub fn open_login(&mut self) {
        self.modal = ModalState::Login;
    }

    pub fn open_register(&mut self) {
        self.modal = ModalState::Register;
    }

    pub fn open_forgot_password(&mut self) {
        self.modal = ModalState::ForgotPassword;
    }

    pub fn close_all(&mut self) {
        self.modal = ModalState::None;
    }

    pub fn is_login_open(&self) -> bool {
        self.modal == ModalState::Login
    }

    pub fn is_register_open(&self) -> bool {
        self.modal == ModalState::Register
    }

    pub fn is_forgot_password_open(&self) -> bool {
        self.modal == ModalState::ForgotPassword
    }

    /// Take the pending redirect, leaving the slot empty.
    pub fn take_redirect(&mut self) -> Option<String> {
        self.pending_redirect.take()
    }
}

impl Redirect for RwSignal<UiState> {
    fn redirect(&self, path: &str) {
        let path = path.to_owned();
        self.update(|ui| ui.pending_redirect = Some(path));
    }
}
