use std::sync::Arc;

use leptos::prelude::*;

use super::service::use_confirm;
use crate::shared::modal::Modal;

/// Renders whatever confirmation is pending. Mounted once at the application root.
#[component]
pub fn ConfirmDialog() -> impl IntoView {
    let service = use_confirm();
    let on_cancel = Callback::new(move |_| service.cancel());

    move || {
        service.pending().map(|pending| {
            view! {
                <Modal
                    title=pending.title
                    on_close=on_cancel
                    class="modal--narrow"
                    footer=Arc::new(move || view! {
                        <button class="button button--secondary" on:click=move |_| service.cancel()>
                            "Cancel"
                        </button>
                        <button class="button button--danger" on:click=move |_| service.confirm()>
                            "Confirm"
                        </button>
                    }.into_any())
                >
                    <p class="confirm-message">{pending.message}</p>
                </Modal>
            }
        })
    }
}
