//! Mounts whichever auth dialog `UiState::modal` names.

use leptos::prelude::*;

use super::forgot_password_modal::ForgotPasswordModal;
use super::login_modal::LoginModal;
use super::register_modal::RegisterModal;
use crate::state::ui::{ModalState, UiState};

#[component]
pub fn ModalHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let modal = Memo::new(move |_| ui.with(|state| state.modal));

    move || match modal.get() {
        ModalState::None => ().into_any(),
        ModalState::Login => view! { <LoginModal /> }.into_any(),
        ModalState::Register => view! { <RegisterModal /> }.into_any(),
        ModalState::ForgotPassword => view! { <ForgotPasswordModal /> }.into_any(),
    }
}
