//! Navigation menu grouped into inventory screens and reference data

use crate::layout::global_context::{use_global_context, Route};
use crate::shared::icons::icon;
use leptos::prelude::*;

struct MenuGroup {
    label: &'static str,
    items: Vec<(Route, &'static str)>, // (route, icon)
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Inventory",
            items: vec![
                (Route::Items, "items"),
                (Route::Consumables, "box"),
                (Route::Patrimonies, "archive"),
                (Route::QrCodes, "qr"),
            ],
        },
        MenuGroup {
            label: "References",
            items: vec![
                (Route::Tags, "tag"),
                (Route::Statuses, "status"),
                (Route::Units, "ruler"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <nav class="app-sidebar__content">
            {menu_groups().into_iter().map(|group| view! {
                <div class="app-sidebar__group">
                    <div class="app-sidebar__group-label">{group.label}</div>
                    {group.items.into_iter().map(|(route, icon_name)| view! {
                        <div
                            class="app-sidebar__item"
                            // detail screens highlight their list entry
                            class:app-sidebar__item--active=move || ctx.route.get().list() == route
                            on:click=move |_| ctx.navigate(route)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(icon_name)}
                                <span>{route.title()}</span>
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            }).collect_view()}
        </nav>
    }
}
