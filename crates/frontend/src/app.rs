use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::confirm::{ConfirmDialog, ConfirmService};
use crate::system::auth::context::AuthContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Session first: API helpers report 401 through it.
    AuthContext::install();

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Single confirmation mediator shared by every list/detail view
    provide_context(ConfirmService::new());

    view! {
        <AppRoutes />
        <ConfirmDialog />
    }
}
