use contracts::domain::common::{EntityId, ResourceKind};
use leptos::prelude::*;

use super::view_model::QrCodeDetailsViewModel;
use crate::layout::global_context::use_global_context;
use crate::shared::components::{FlashBanner, PageHeader};
use crate::shared::confirm::{use_confirm, use_confirmed};
use crate::shared::icons::icon;

#[component]
pub fn QrCodeDetails(id: EntityId) -> impl IntoView {
    let ctx = use_global_context();
    let vm = QrCodeDetailsViewModel::new(id, ctx, use_confirm());
    vm.load();
    vm.load_intents();
    use_confirmed(&[ResourceKind::QrCode], move |request| vm.on_confirmed(request));
    on_cleanup(move || vm.release_image());

    let title = move || {
        vm.item
            .with(|i| i.as_ref().map(|q| q.display_name()))
            .unwrap_or_else(|| format!("QR #{id}"))
    };

    view! {
        <div class="page details-page">
            <PageHeader title="QR code" subtitle=Signal::derive(title)>
                <button class="button button--secondary" on:click=move |_| ctx.back_to_list()>
                    {icon("arrow-left")}
                    "Back"
                </button>
                <Show when=move || vm.item.with(|i| i.is_some())>
                    <button
                        class="button button--secondary"
                        disabled=move || vm.exporting.get()
                        on:click=move |_| vm.export()
                    >
                        {icon("qr")}
                        "Export"
                    </button>
                    <button class="button button--secondary" on:click=move |_| vm.toggle_edit()>
                        {icon("edit")}
                        {move || if vm.edit_mode.get() { "Cancel edit" } else { "Edit" }}
                    </button>
                    <button class="button button--danger" on:click=move |_| vm.request_delete()>
                        {icon("delete")}
                        "Delete"
                    </button>
                </Show>
            </PageHeader>

            <FlashBanner flash=vm.flash />

            <Show when=move || vm.loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            {move || vm.item.get().map(|item| {
                view! {
                    <Show
                        when=move || vm.edit_mode.get()
                        fallback=move || {
                            let url = item.url.clone();
                            let arguments = item
                                .arguments
                                .as_ref()
                                .map(|args| {
                                    args.iter()
                                        .map(|(k, v)| format!("{k} = {v}"))
                                        .collect::<Vec<_>>()
                                        .join(", ")
                                })
                                .filter(|s| !s.is_empty())
                                .unwrap_or_else(|| "-".to_string());
                            view! {
                                <dl class="details-grid">
                                    <dt>"Link"</dt>
                                    <dd><a href=url.clone() target="_blank">{url.clone()}</a></dd>
                                    <dt>"Intent"</dt>
                                    <dd>{format!("{} ({})", item.intent.name, item.intent.intent_type.label())}</dd>
                                    <dt>"Arguments"</dt>
                                    <dd>{arguments}</dd>
                                    <dt>"Usage"</dt>
                                    <dd>{item.usage_label()}</dd>
                                    <dt>"Expires"</dt>
                                    <dd>{item.expiration_label().unwrap_or_else(|| "Never".to_string())}</dd>
                                    <dt>"Password"</dt>
                                    <dd>{if item.password.is_some() { "Protected" } else { "None" }}</dd>
                                    <dt>"State"</dt>
                                    <dd>
                                        {if item.is_active() {
                                            view! { <span class="badge">"Active"</span> }.into_any()
                                        } else {
                                            view! { <span class="badge badge--muted">"Inactive"</span> }.into_any()
                                        }}
                                    </dd>
                                    <dt>"Description"</dt>
                                    <dd>{item.description.clone().unwrap_or_else(|| "-".to_string())}</dd>
                                </dl>
                            }
                        }
                    >
                        <EditForm vm=vm />
                    </Show>
                }
            })}

            {move || vm.image.get().map(|src| view! {
                <div class="qr-panel card">
                    <img class="qr-panel__image" src=src alt="QR code" />
                    <div class="details-actions">
                        <button class="button button--secondary" on:click=move |_| vm.download()>
                            {icon("download")}
                            "Download"
                        </button>
                        <button class="button button--secondary" on:click=move |_| vm.close_image()>
                            {icon("x")}
                            "Close"
                        </button>
                    </div>
                </div>
            })}
        </div>
    }
}

#[component]
fn EditForm(vm: QrCodeDetailsViewModel) -> impl IntoView {
    let form = vm.form;

    view! {
        <form class="details-form card" on:submit=move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            vm.save();
        }>
            <div class="form-group">
                <label for="intent">"Intent"</label>
                <select
                    id="intent"
                    prop:value=move || form.with(|f| f.intent_id.clone())
                    on:change=move |ev| form.update(|f| f.intent_id = event_target_value(&ev))
                >
                    <option value="">"Select an intent"</option>
                    {move || vm.intents.get().into_iter().map(|i| {
                        let value = i.id.to_string();
                        let selected = form.with_untracked(|f| f.intent_id == value);
                        view! { <option value=value selected=selected>{i.name}</option> }
                    }).collect_view()}
                </select>
            </div>
            <div class="form-group">
                <label for="name">"Name"</label>
                <input
                    type="text"
                    id="name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="description">"Description"</label>
                <textarea
                    id="description"
                    rows="2"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                />
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="usage-limit">"Usage limit"</label>
                    <input
                        type="number"
                        min="1"
                        id="usage-limit"
                        prop:value=move || form.with(|f| f.usage_limit.clone())
                        on:input=move |ev| form.update(|f| f.usage_limit = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="password">"Password"</label>
                    <input
                        type="password"
                        id="password"
                        autocomplete="new-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="form-group">
                <label for="arguments">"Intent arguments (JSON)"</label>
                <textarea
                    id="arguments"
                    rows="3"
                    prop:value=move || form.with(|f| f.intent_arguments.clone())
                    on:input=move |ev| form.update(|f| f.intent_arguments = event_target_value(&ev))
                />
            </div>
            {move || vm.form_error.get().map(|e| view! { <div class="form-error">{e}</div> })}
            <div class="details-actions">
                <button type="submit" class="button button--primary" disabled=move || vm.saving.get()>
                    {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </form>
    }
}
