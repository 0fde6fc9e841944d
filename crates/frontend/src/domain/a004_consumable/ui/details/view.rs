use contracts::domain::common::{EntityId, ResourceKind};
use leptos::prelude::*;

use super::view_model::ConsumableDetailsViewModel;
use crate::layout::global_context::use_global_context;
use crate::shared::components::{FlashBanner, PageHeader};
use crate::shared::confirm::{use_confirm, use_confirmed};
use crate::shared::icons::icon;

#[component]
pub fn ConsumableDetails(id: EntityId) -> impl IntoView {
    let ctx = use_global_context();
    let vm = ConsumableDetailsViewModel::new(id, ctx, use_confirm());
    vm.load();
    vm.load_options();
    use_confirmed(&[ResourceKind::Consumable, ResourceKind::Tag], move |request| {
        vm.on_confirmed(request)
    });

    let title = move || {
        vm.item
            .with(|i| i.as_ref().map(|c| c.name.clone()))
            .unwrap_or_else(|| format!("Consumable #{id}"))
    };

    view! {
        <div class="page details-page">
            <PageHeader title="Consumable" subtitle=Signal::derive(title)>
                <button class="button button--secondary" on:click=move |_| ctx.back_to_list()>
                    {icon("arrow-left")}
                    "Back"
                </button>
                <Show when=move || vm.item.with(|i| i.is_some())>
                    <button class="button button--secondary" on:click=move |_| vm.generate_qr()>
                        {icon("qr")}
                        "QR code"
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
                let quantity = item.quantity_label();
                let unit = item.unit.name.clone();
                view! {
                    <Show
                        when=move || vm.edit_mode.get()
                        fallback=move || view! {
                            <dl class="details-grid">
                                <dt>"Quantity"</dt>
                                <dd>{quantity.clone()}</dd>
                                <dt>"Unit"</dt>
                                <dd>{unit.clone()}</dd>
                                <dt>"Description"</dt>
                                <dd>{item.description.clone().unwrap_or_else(|| "-".to_string())}</dd>
                                <dt>"Tags"</dt>
                                <dd>
                                    {item.tags.iter().map(|t| view! {
                                        <span class="badge">{t.name.clone()}</span>
                                    }).collect_view()}
                                </dd>
                            </dl>
                        }
                    >
                        <EditForm vm=vm />
                    </Show>
                }
            })}

            {move || vm.qr_image.get().map(|src| view! {
                <div class="qr-panel card">
                    <img class="qr-panel__image" src=src alt="QR code" />
                    <div class="details-actions">
                        <button class="button button--secondary" on:click=move |_| vm.download_qr()>
                            {icon("download")}
                            "Download"
                        </button>
                        <button class="button button--secondary" on:click=move |_| vm.close_qr()>
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
fn EditForm(vm: ConsumableDetailsViewModel) -> impl IntoView {
    let form = vm.form;

    view! {
        <form class="details-form card" on:submit=move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            vm.save();
        }>
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
                    rows="3"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                />
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="quantity">"Quantity"</label>
                    <input
                        type="text"
                        inputmode="decimal"
                        id="quantity"
                        prop:value=move || form.with(|f| f.quantity.clone())
                        on:input=move |ev| form.update(|f| f.quantity = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="unit">"Unit"</label>
                    <select
                        id="unit"
                        prop:value=move || form.with(|f| f.unit_id.clone())
                        on:change=move |ev| form.update(|f| f.unit_id = event_target_value(&ev))
                    >
                        <option value="">"Select a unit"</option>
                        {move || vm.units.get().into_iter().map(|u| {
                            let value = u.id.to_string();
                            let selected = form.with_untracked(|f| f.unit_id == value);
                            view! { <option value=value selected=selected>{u.name}</option> }
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <div class="form-group">
                <label>"Tags"</label>
                <div class="tag-toggles">
                    {move || vm.tags.get().into_iter().map(|tag| {
                        let tag_id = tag.id;
                        let for_delete = tag.clone();
                        view! {
                            <span class="tag-toggle" class:tag-toggle--on=move || vm.is_assigned(tag_id)>
                                <button type="button" class="tag-toggle__label" on:click=move |_| vm.toggle_tag(tag_id)>
                                    {tag.name}
                                </button>
                                <button
                                    type="button"
                                    class="tag-toggle__delete"
                                    title="Delete tag"
                                    on:click=move |_| vm.request_delete_tag(&for_delete)
                                >
                                    {icon("x")}
                                </button>
                            </span>
                        }
                    }).collect_view()}
                    <button type="button" class="button button--small" on:click=move |_| vm.toggle_add_tag()>
                        {icon("plus")}
                        "New tag"
                    </button>
                </div>
                <Show when=move || vm.show_add_tag.get()>
                    <div class="inline-form">
                        <input
                            type="text"
                            placeholder="Tag name"
                            prop:value=move || vm.new_tag.with(|t| t.name.clone())
                            on:input=move |ev| vm.new_tag.update(|t| t.name = event_target_value(&ev))
                        />
                        <input
                            type="text"
                            placeholder="Description (optional)"
                            prop:value=move || vm.new_tag.with(|t| t.description.clone())
                            on:input=move |ev| vm.new_tag.update(|t| t.description = event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="button button--primary"
                            disabled=move || vm.adding_tag.get()
                            on:click=move |_| vm.add_tag()
                        >
                            "Add"
                        </button>
                    </div>
                </Show>
            </div>

            {move || vm.form_error.get().map(|e| view! { <div class="form-error">{e}</div> })}

            <div class="details-actions">
                <button type="submit" class="button button--primary" disabled=move || vm.saving.get()>
                    {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                </button>
                <button type="button" class="button button--secondary" on:click=move |_| vm.toggle_edit()>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
