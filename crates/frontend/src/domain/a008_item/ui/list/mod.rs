use contracts::domain::a008_item::aggregate::Item;
use contracts::domain::common::ResourceKind;
use leptos::prelude::*;

use crate::domain::a008_item::api;
use crate::layout::global_context::{use_global_context, Route};
use crate::shared::components::{PageHeader, PaginationControls};
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::paged_list::PagedList;

fn detail_route(item: &Item) -> Option<Route> {
    match item.kind {
        ResourceKind::Consumable => Some(Route::Consumable(item.id)),
        ResourceKind::Patrimony => Some(Route::Patrimony(item.id)),
        _ => None,
    }
}

/// Every consumable and patrimony on one page
#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_global_context();
    let list = PagedList::new(config().pagination.default_page_size, api::fetch_page)
        .with_error_message("Failed to load items.");
    let search = RwSignal::new(String::new());

    list.load();

    // search filters the loaded page only
    let visible = move || {
        let term = search.get();
        list.items()
            .into_iter()
            .filter(|i| i.matches(&term))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page">
            <PageHeader title="Items" subtitle="Consumables and patrimonies">
                <div class="search-box">
                    {icon("search")}
                    <input
                        type="search"
                        placeholder="Search by name"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                </div>
                <button class="button button--secondary" on:click=move |_| list.reload()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            {move || list.error().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Kind"</th>
                        <th>"Status / quantity"</th>
                        <th>"Tags"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || visible().into_iter().map(|item| {
                        let route = detail_route(&item);
                        let (kind_icon, kind_label) = match item.kind {
                            ResourceKind::Patrimony => ("archive", "Patrimony"),
                            _ => ("box", "Consumable"),
                        };
                        let detail = item.status.clone().or(item.quantity.clone()).unwrap_or_default();
                        view! {
                            <tr class="table__row--clickable" on:click=move |_| {
                                if let Some(route) = route {
                                    ctx.navigate(route);
                                }
                            }>
                                <td>{item.name.clone()}</td>
                                <td>{icon(kind_icon)} {kind_label}</td>
                                <td>{detail}</td>
                                <td>
                                    {item.tags.iter().map(|t| view! {
                                        <span class="badge">{t.clone()}</span>
                                    }).collect_view()}
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>

            <Show when=move || list.is_loading()>
                <div class="loading">"Loading..."</div>
            </Show>
            <Show when=move || !list.is_loading() && list.error().is_none() && visible().is_empty()>
                <p class="empty-state">"No items found."</p>
            </Show>

            <PaginationControls
                current_page=Signal::derive(move || list.current_page())
                total_pages=Signal::derive(move || list.total_pages())
                total_count=Signal::derive(move || list.total_count())
                window=Signal::derive(move || list.window())
                on_page_change=Callback::new(move |page| list.go_to_page(page))
                on_page_size_change=Callback::new(move |size| list.set_page_size(size))
                page_size=Signal::derive(move || list.page_size())
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(kind: ResourceKind) -> Item {
        Item {
            kind,
            id: 7,
            name: "Desk".into(),
            tags: Vec::new(),
            status: None,
            quantity: None,
        }
    }

    #[test]
    fn test_detail_route_follows_kind() {
        assert_eq!(detail_route(&item(ResourceKind::Consumable)), Some(Route::Consumable(7)));
        assert_eq!(detail_route(&item(ResourceKind::Patrimony)), Some(Route::Patrimony(7)));
        assert_eq!(detail_route(&item(ResourceKind::Tag)), None);
    }
}
