use contracts::domain::a001_unit::aggregate::Unit;
use contracts::domain::common::ResourceKind;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::form::ConsumableForm;
use crate::domain::a001_unit::api as unit_api;
use crate::domain::a004_consumable::api;
use crate::layout::global_context::{use_global_context, Route};
use crate::shared::components::{FlashBanner, PageHeader, PaginationControls};
use crate::shared::config::config;
use crate::shared::confirm::{use_confirm, use_confirmed};
use crate::shared::flash::Flash;
use crate::shared::icons::icon;
use crate::shared::paged_list::PagedList;

#[component]
pub fn ConsumableList() -> impl IntoView {
    let ctx = use_global_context();
    let confirm = use_confirm();
    let flash = Flash::new();
    let list = PagedList::new(config().pagination.default_page_size, api::fetch_page)
        .with_error_message("Failed to load consumables.");

    let units = RwSignal::new(Vec::<Unit>::new());
    let form_visible = RwSignal::new(false);
    let form = RwSignal::new(ConsumableForm::default());
    let form_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let toggle_form = move || {
        form_visible.update(|v| *v = !*v);
        form.set(ConsumableForm::default());
        form_error.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = match form.with_untracked(|f| f.to_create_dto()) {
            Ok(dto) => dto,
            Err(e) => {
                form_error.set(Some(e));
                return;
            }
        };
        form_error.set(None);
        saving.set(true);
        spawn_local(async move {
            match api::create(&dto).await {
                Ok(()) => {
                    flash.success("Consumable created.");
                    toggle_form();
                    list.reload();
                }
                Err(e) => {
                    log::warn!("creating consumable failed: {e}");
                    flash.error(e.user_message("Failed to create consumable."));
                }
            }
            saving.set(false);
        });
    };

    use_confirmed(&[ResourceKind::Consumable], move |request| {
        spawn_local(async move {
            match api::delete(request.id).await {
                Ok(()) => {
                    flash.success("Consumable deleted.");
                    list.reload();
                }
                Err(e) => {
                    log::warn!("deleting consumable {} failed: {e}", request.id);
                    flash.error(e.user_message("Failed to delete consumable."));
                }
            }
        });
    });

    spawn_local(async move {
        match unit_api::fetch_options().await {
            Ok(items) => units.set(items),
            Err(e) => {
                log::warn!("loading units failed: {e}");
                flash.error("Failed to load units.");
            }
        }
    });
    list.load();

    view! {
        <div class="page">
            <PageHeader title="Consumables">
                <button class="button button--primary" on:click=move |_| toggle_form()>
                    {icon("plus")}
                    {move || if form_visible.get() { "Close form" } else { "New consumable" }}
                </button>
                <button class="button button--secondary" on:click=move |_| list.reload()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <FlashBanner flash=flash />

            <Show when=move || form_visible.get()>
                <form class="details-form card" on:submit=on_submit>
                    <div class="form-group">
                        <label for="consumable-name">"Name"</label>
                        <input
                            type="text"
                            id="consumable-name"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="consumable-description">"Description"</label>
                        <textarea
                            id="consumable-description"
                            rows="2"
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="consumable-quantity">"Quantity"</label>
                            <input
                                type="text"
                                inputmode="decimal"
                                id="consumable-quantity"
                                prop:value=move || form.with(|f| f.quantity.clone())
                                on:input=move |ev| form.update(|f| f.quantity = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="consumable-unit">"Unit"</label>
                            <select
                                id="consumable-unit"
                                prop:value=move || form.with(|f| f.unit_id.clone())
                                on:change=move |ev| form.update(|f| f.unit_id = event_target_value(&ev))
                            >
                                <option value="">"Select a unit"</option>
                                {move || units.get().into_iter().map(|u| view! {
                                    <option value=u.id.to_string()>{format!("{} ({})", u.name, u.abbreviation)}</option>
                                }).collect_view()}
                            </select>
                        </div>
                    </div>
                    <div class="form-group">
                        <label for="consumable-tags">"Tag ids"</label>
                        <input
                            type="text"
                            id="consumable-tags"
                            placeholder="1, 2, 3"
                            prop:value=move || form.with(|f| f.tag_ids.clone())
                            on:input=move |ev| form.update(|f| f.tag_ids = event_target_value(&ev))
                        />
                    </div>
                    {move || form_error.get().map(|e| view! { <div class="form-error">{e}</div> })}
                    <div class="details-actions">
                        <button type="submit" class="button button--primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Create" }}
                        </button>
                    </div>
                </form>
            </Show>

            {move || list.error().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Quantity"</th>
                            <th class="table__header-cell">"Tags"</th>
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || list.items().into_iter().map(|c| {
                            let id = c.id;
                            let quantity = c.quantity_label();
                            let tags = c.tags.iter().map(|t| t.name.clone()).collect::<Vec<_>>().join(", ");
                            let name = c.name.clone();
                            view! {
                                <tr class="table__row table__row--link" on:click=move |_| ctx.navigate(Route::Consumable(id))>
                                    <td class="table__cell">{c.name}</td>
                                    <td class="table__cell">{quantity}</td>
                                    <td class="table__cell">{tags}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--icon"
                                            title="Delete"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                confirm.request_delete(ResourceKind::Consumable, id, name.clone());
                                            }
                                        >
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <Show when=move || list.is_loading()>
                <div class="loading">"Loading..."</div>
            </Show>
            <Show when=move || !list.is_loading() && list.is_empty() && list.error().is_none()>
                <p class="empty-state">"No consumables yet."</p>
            </Show>

            <PaginationControls
                current_page=Signal::derive(move || list.current_page())
                total_pages=Signal::derive(move || list.total_pages())
                total_count=Signal::derive(move || list.total_count())
                window=Signal::derive(move || list.window())
                on_page_change=Callback::new(move |page| list.go_to_page(page))
                page_size=Signal::derive(move || list.page_size())
                on_page_size_change=Callback::new(move |size| list.set_page_size(size))
                page_size_options=config().pagination.page_size_options.clone()
            />
        </div>
    }
}
