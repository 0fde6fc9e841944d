use crate::domain::a001_unit::ui::list::UnitList;
use crate::domain::a002_tag::ui::list::TagList;
use crate::domain::a003_status::ui::list::StatusList;
use crate::domain::a004_consumable::ui::details::ConsumableDetails;
use crate::domain::a004_consumable::ui::list::ConsumableList;
use crate::domain::a005_patrimony::ui::details::PatrimonyDetails;
use crate::domain::a005_patrimony::ui::list::PatrimonyList;
use crate::domain::a007_qrcode::ui::details::QrCodeDetails;
use crate::domain::a007_qrcode::ui::list::QrCodeList;
use crate::domain::a008_item::ui::list::ItemList;
use crate::layout::global_context::{use_global_context, Route};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

fn content(route: Route) -> AnyView {
    match route {
        Route::Items => view! { <ItemList /> }.into_any(),
        Route::Consumables => view! { <ConsumableList /> }.into_any(),
        Route::Consumable(id) => view! { <ConsumableDetails id=id /> }.into_any(),
        Route::Patrimonies => view! { <PatrimonyList /> }.into_any(),
        Route::Patrimony(id) => view! { <PatrimonyDetails id=id /> }.into_any(),
        Route::Tags => view! { <TagList /> }.into_any(),
        Route::Statuses => view! { <StatusList /> }.into_any(),
        Route::Units => view! { <UnitList /> }.into_any(),
        Route::QrCodes => view! { <QrCodeList /> }.into_any(),
        Route::QrCode(id) => view! { <QrCodeDetails id=id /> }.into_any(),
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_global_context();

    // Runs once when the layout is created
    ctx.init_url_sync();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! { <div class="app-content">{move || content(ctx.route.get())}</div> }.into_any()
            }
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
