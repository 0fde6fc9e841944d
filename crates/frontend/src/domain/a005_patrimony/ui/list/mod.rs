use contracts::domain::a003_status::aggregate::Status;
use contracts::domain::common::ResourceKind;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::form::PatrimonyForm;
use crate::domain::a003_status::api as status_api;
use crate::domain::a005_patrimony::api;
use crate::layout::global_context::{use_global_context, Route};
use crate::shared::components::{FlashBanner, PageHeader, PaginationControls};
use crate::shared::config::config;
use crate::shared::confirm::{use_confirm, use_confirmed};
use crate::shared::flash::Flash;
use crate::shared::icons::icon;
use crate::shared::paged_list::PagedList;

#[component]
pub fn PatrimonyList() -> impl IntoView {
    let ctx = use_global_context();
    let confirm = use_confirm();
    let flash = Flash::new();
    let list = PagedList::new(config().pagination.default_page_size, api::fetch_page)
        .with_error_message("Failed to load patrimonies.");

    let statuses = RwSignal::new(Vec::<Status>::new());
    let form_visible = RwSignal::new(false);
    let form = RwSignal::new(PatrimonyForm::default());
    let form_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let toggle_form = move || {
        form_visible.update(|v| *v = !*v);
        form.set(PatrimonyForm::default());
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
                    flash.success("Patrimony created.");
                    toggle_form();
                    list.reload();
                }
                Err(e) => {
                    log::warn!("creating patrimony failed: {e}");
                    flash.error(e.user_message("Failed to create patrimony."));
                }
            }
            saving.set(false);
        });
    };

    use_confirmed(&[ResourceKind::Patrimony], move |request| {
        spawn_local(async move {
            match api::delete(request.id).await {
                Ok(()) => {
                    flash.success("Patrimony deleted.");
                    list.reload();
                }
                Err(e) => {
                    log::warn!("deleting patrimony {} failed: {e}", request.id);
                    flash.error(e.user_message("Failed to delete patrimony."));
                }
            }
        });
    });

    spawn_local(async move {
        match status_api::fetch_options().await {
            Ok(items) => statuses.set(items),
            Err(e) => {
                log::warn!("loading statuses failed: {e}");
                flash.error("Failed to load statuses.");
            }
        }
    });
    list.load();

    view! {
        <div class="page">
            <PageHeader title="Patrimonies">
                <button class="button button--primary" on:click=move |_| toggle_form()>
                    {icon("plus")}
                    {move || if form_visible.get() { "Close form" } else { "New patrimony" }}
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
                        <label for="patrimony-name">"Name"</label>
                        <input
                            type="text"
                            id="patrimony-name"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="patrimony-description">"Description"</label>
                        <textarea
                            id="patrimony-description"
                            rows="2"
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="patrimony-status">"Status"</label>
                        <select
                            id="patrimony-status"
                            prop:value=move || form.with(|f| f.status_id.clone())
                            on:change=move |ev| form.update(|f| f.status_id = event_target_value(&ev))
                        >
                            <option value="">"Select a status"</option>
                            {move || statuses.get().into_iter().map(|s| view! {
                                <option value=s.id.to_string()>{s.name}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="patrimony-tags">"Tag ids"</label>
                        <input
                            type="text"
                            id="patrimony-tags"
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
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Tags"</th>
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || list.items().into_iter().map(|p| {
                            let id = p.id;
                            let status = p.status.name.clone();
                            let tags = p.tags.iter().map(|t| t.name.clone()).collect::<Vec<_>>().join(", ");
                            let name = p.name.clone();
                            view! {
                                <tr class="table__row table__row--link" on:click=move |_| ctx.navigate(Route::Patrimony(id))>
                                    <td class="table__cell">{p.name}</td>
                                    <td class="table__cell">{status}</td>
                                    <td class="table__cell">{tags}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--icon"
                                            title="Delete"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                confirm.request_delete(ResourceKind::Patrimony, id, name.clone());
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
                <p class="empty-state">"No patrimonies yet."</p>
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
