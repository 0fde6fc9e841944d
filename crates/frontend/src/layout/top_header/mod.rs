//! Top bar: sidebar toggle, application title and logout.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let auth = use_auth();

    let logout = move |_| {
        log::info!("signed out");
        auth.sign_out();
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("items")}
                </button>
                <span class="top-header__title">"Inventory"</span>
            </div>

            <div class="top-header__actions">
                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("logout")}
                </button>
            </div>
        </header>
    }
}
