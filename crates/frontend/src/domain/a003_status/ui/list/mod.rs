use contracts::domain::a003_status::aggregate::{Status, StatusDto};
use contracts::domain::common::{EntityId, ResourceKind};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_status::api;
use crate::shared::components::{FlashBanner, PageHeader, PaginationControls};
use crate::shared::config::config;
use crate::shared::confirm::{use_confirm, use_confirmed};
use crate::shared::flash::Flash;
use crate::shared::icons::icon;
use crate::shared::paged_list::PagedList;

#[component]
pub fn StatusList() -> impl IntoView {
    let list = PagedList::new(config().pagination.reference_page_size, api::fetch_page)
        .with_error_message("Failed to load statuses.");
    let flash = Flash::new();
    let confirm = use_confirm();

    let form = RwSignal::new(StatusDto::default());
    let editing = RwSignal::new(None::<EntityId>);
    let form_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let reset_form = move || {
        form.set(StatusDto::default());
        editing.set(None);
        form_error.set(None);
    };

    let start_edit = move |status: &Status| {
        form.set(StatusDto::from(status));
        editing.set(Some(status.id));
        form_error.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = form.get_untracked();
        if let Err(e) = dto.validate() {
            form_error.set(Some(e));
            return;
        }
        let id = editing.get_untracked();
        saving.set(true);
        spawn_local(async move {
            match api::save(id, &dto).await {
                Ok(()) => {
                    flash.success(if id.is_some() { "Status updated." } else { "Status created." });
                    reset_form();
                    list.reload();
                }
                Err(e) => {
                    log::warn!("saving status failed: {e}");
                    flash.error(e.user_message("Failed to save status."));
                }
            }
            saving.set(false);
        });
    };

    // Statuses still assigned to patrimonies cannot be deleted; ask the server before confirming
    let request_delete = move |status: Status| {
        spawn_local(async move {
            match api::is_in_use(status.id).await {
                Ok(true) => flash.error(format!(
                    "Status \"{}\" is in use and cannot be deleted.",
                    status.name
                )),
                Ok(false) => confirm.request_delete(ResourceKind::Status, status.id, status.name),
                Err(e) => flash.error(e.user_message("Failed to check status usage.")),
            }
        });
    };

    use_confirmed(&[ResourceKind::Status], move |request| {
        spawn_local(async move {
            match api::delete(request.id).await {
                Ok(()) => {
                    flash.success("Status deleted.");
                    if editing.try_get_untracked() == Some(Some(request.id)) {
                        reset_form();
                    }
                    list.reload();
                }
                Err(e) => {
                    log::warn!("deleting status {} failed: {e}", request.id);
                    flash.error(e.user_message("Failed to delete status."));
                }
            }
        });
    });

    list.load();

    view! {
        <div class="page">
            <PageHeader title="Statuses" subtitle="Lifecycle states of patrimonies">
                <button class="button button--secondary" on:click=move |_| list.reload()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <FlashBanner flash=flash />

            <form class="inline-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Description (optional)"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                />
                <button type="submit" class="button button--primary" disabled=move || saving.get()>
                    {move || if editing.get().is_some() { icon("edit") } else { icon("plus") }}
                    {move || if editing.get().is_some() { "Save" } else { "Add status" }}
                </button>
                <Show when=move || editing.get().is_some()>
                    <button type="button" class="button button--secondary" on:click=move |_| reset_form()>
                        "Cancel"
                    </button>
                </Show>
            </form>
            {move || form_error.get().map(|e| view! { <div class="form-error">{e}</div> })}

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
                            <th class="table__header-cell">"Description"</th>
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || list.items().into_iter().map(|status| {
                            let id = status.id;
                            let for_edit = status.clone();
                            let for_delete = status.clone();
                            view! {
                                <tr class="table__row" class:table__row--selected=move || editing.get() == Some(id)>
                                    <td class="table__cell">{status.name}</td>
                                    <td class="table__cell">{status.description.unwrap_or_default()}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button class="button button--icon" title="Edit" on:click=move |_| start_edit(&for_edit)>
                                            {icon("edit")}
                                        </button>
                                        <button class="button button--icon" title="Delete" on:click=move |_| request_delete(for_delete.clone())>
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
                <p class="empty-state">"No statuses yet."</p>
            </Show>

            <PaginationControls
                current_page=Signal::derive(move || list.current_page())
                total_pages=Signal::derive(move || list.total_pages())
                total_count=Signal::derive(move || list.total_count())
                window=Signal::derive(move || list.window())
                on_page_change=Callback::new(move |page| list.go_to_page(page))
            />
        </div>
    }
}
