use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn ui_state_default_has_no_modal() {
    let state = UiState::default();
    assert_eq!(state.modal, ModalState::None);
    assert!(!state.is_login_open());
    assert!(!state.is_register_open());
    assert!(!state.is_forgot_password_open());
    assert_eq!(state.pending_redirect, None);
}

#[test]
fn ui_state_default_dashboard_toggles() {
    let state = UiState::default();
    assert_eq!(state.activity_tab, ActivityTab::Notifications);
    assert_eq!(state.kpi_period, KpiPeriod::Today);
}

// =============================================================
// Modal coordination
// =============================================================

#[test]
fn opening_a_modal_closes_the_others() {
    let mut state = UiState::default();
    state.open_login();
    assert!(state.is_login_open());

    state.open_register();
    assert!(state.is_register_open());
    assert!(!state.is_login_open());

    state.open_forgot_password();
    assert!(state.is_forgot_password_open());
    assert!(!state.is_register_open());
    assert!(!state.is_login_open());
}

#[test]
fn latest_open_call_wins() {
    let mut state = UiState::default();
    state.open_register();
    state.open_login();
    assert_eq!(state.modal, ModalState::Login);
}

#[test]
fn close_all_hides_every_modal() {
    let mut state = UiState::default();
    state.open_forgot_password();
    state.close_all();
    assert_eq!(state.modal, ModalState::None);
}

#[test]
fn at_most_one_modal_open_after_any_sequence() {
    let mut state = UiState::default();
    let ops: [fn(&mut UiState); 4] = [
        UiState::open_login,
        UiState::open_register,
        UiState::open_forgot_password,
        UiState::close_all,
    ];
    for (i, op) in ops.iter().cycle().take(13).enumerate() {
        op(&mut state);
        let open = [state.is_login_open(), state.is_register_open(), state.is_forgot_password_open()]
            .iter()
            .filter(|b| **b)
            .count();
        assert!(open <= 1, "step {i} left {open} modals open");
    }
}

// =============================================================
// KpiPeriod / redirect slot
// =============================================================

#[test]
fn kpi_period_query_values_and_labels() {
    let pairs: Vec<_> = KpiPeriod::ALL.iter().map(|p| (p.as_query(), p.label())).collect();
    assert_eq!(pairs, vec![("hoy", "Hoy"), ("semana", "Semana Actual"), ("mes", "Mes Actual")]);
}

#[test]
fn take_redirect_empties_slot() {
    let mut state = UiState { pending_redirect: Some("/".to_owned()), ..UiState::default() };
    assert_eq!(state.take_redirect().as_deref(), Some("/"));
    assert_eq!(state.take_redirect(), None);
}

#[test]
fn redirect_through_the_signal_fills_the_slot_only() {
    use leptos::prelude::*;

    use crate::routing::Redirect;

    let owner = Owner::new();
    owner.set();
    let ui = RwSignal::new(UiState::default());
    ui.update(UiState::open_register);

    ui.redirect("/user");

    assert_eq!(ui.with_untracked(|u| u.pending_redirect.clone()), Some("/user".to_owned()));
    assert!(ui.with_untracked(UiState::is_register_open));
}
