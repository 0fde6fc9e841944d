use contracts::domain::a006_intent::aggregate::Intent;
use contracts::domain::common::ResourceKind;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::form::QrCodeForm;
use crate::domain::a006_intent::api as intent_api;
use crate::domain::a007_qrcode::api;
use crate::layout::global_context::{use_global_context, Route};
use crate::shared::components::{FlashBanner, PageHeader, PaginationControls};
use crate::shared::config::config;
use crate::shared::confirm::{use_confirm, use_confirmed};
use crate::shared::flash::Flash;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::paged_list::PagedList;

#[component]
pub fn QrCodeList() -> impl IntoView {
    let ctx = use_global_context();
    let confirm = use_confirm();
    let flash = Flash::new();
    let list = PagedList::new(config().pagination.qrcode_page_size, api::fetch_page)
        .with_error_message("Failed to load QR codes.");

    let intents = RwSignal::new(Vec::<Intent>::new());
    let form_visible = RwSignal::new(false);

    use_confirmed(&[ResourceKind::QrCode], move |request| {
        spawn_local(async move {
            match api::delete(request.id).await {
                Ok(()) => {
                    flash.success("QR code deleted.");
                    list.reload();
                }
                Err(e) => {
                    log::warn!("deleting QR code {} failed: {e}", request.id);
                    flash.error(e.user_message("Failed to delete QR code."));
                }
            }
        });
    });

    spawn_local(async move {
        match intent_api::fetch_all().await {
            Ok(items) => intents.set(items),
            Err(e) => {
                log::warn!("loading intents failed: {e}");
                flash.error("Failed to load intents.");
            }
        }
    });
    list.load();

    let on_created = Callback::new(move |_| {
        form_visible.set(false);
        flash.success("QR code created.");
        list.reload();
    });

    view! {
        <div class="page">
            <PageHeader title="QR codes">
                <button class="button button--primary" on:click=move |_| form_visible.set(true)>
                    {icon("plus")}
                    "New QR code"
                </button>
                <button class="button button--secondary" on:click=move |_| list.reload()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <FlashBanner flash=flash />

            {move || list.error().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="card-grid">
                {move || list.items().into_iter().map(|q| {
                    let id = q.id;
                    let name = q.display_name();
                    let for_delete = name.clone();
                    let active = q.is_active();
                    view! {
                        <div
                            class=if active { "card qr-card" } else { "card qr-card qr-card--inactive" }
                            on:click=move |_| ctx.navigate(Route::QrCode(id))>
                            <div class="qr-card__header">
                                {icon("qr")}
                                <span class="qr-card__title">{name}</span>
                                <button
                                    class="button button--icon"
                                    title="Delete"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        confirm.request_delete(ResourceKind::QrCode, id, for_delete.clone());
                                    }
                                >
                                    {icon("delete")}
                                </button>
                            </div>
                            <div class="qr-card__meta">
                                <span class="badge">{q.intent.name.clone()}</span>
                                <span>{format!("Used {}", q.usage_label())}</span>
                                {q.expiration_label().map(|e| view! { <span>{format!("Expires {e}")}</span> })}
                                {(!active).then(|| view! { <span class="badge badge--muted">"Inactive"</span> })}
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>

            <Show when=move || list.is_loading()>
                <div class="loading">"Loading..."</div>
            </Show>
            <Show when=move || !list.is_loading() && list.is_empty() && list.error().is_none()>
                <p class="empty-state">"No QR codes yet."</p>
            </Show>

            <PaginationControls
                current_page=Signal::derive(move || list.current_page())
                total_pages=Signal::derive(move || list.total_pages())
                total_count=Signal::derive(move || list.total_count())
                window=Signal::derive(move || list.window())
                on_page_change=Callback::new(move |page| list.go_to_page(page))
            />

            <Show when=move || form_visible.get()>
                <CreateQrCode
                    intents=intents
                    on_created=on_created
                    on_close=Callback::new(move |_| form_visible.set(false))
                />
            </Show>
        </div>
    }
}

#[component]
fn CreateQrCode(
    intents: RwSignal<Vec<Intent>>,
    on_created: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(QrCodeForm::default());
    let form_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let submit = move || {
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
                Ok(created) => {
                    log::info!("QR code {} created", created.id);
                    on_created.run(());
                }
                Err(e) => {
                    log::warn!("creating QR code failed: {e}");
                    let _ = form_error.try_set(Some(e.user_message("Failed to create QR code.")));
                }
            }
            let _ = saving.try_set(false);
        });
    };

    // Parameters the selected intent expects, shown as a hint for the arguments field
    let parameter_hint = move || {
        let selected = form.with(|f| f.intent_id.clone());
        intents.with(|all| {
            all.iter()
                .find(|i| i.id.to_string() == selected)
                .map(|i| i.parameter_names().join(", "))
                .filter(|p| !p.is_empty())
        })
    };

    view! {
        <Modal title="New QR code".to_string() on_close=on_close>
            <form class="details-form" on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                submit();
            }>
                <div class="form-group">
                    <label for="qr-intent">"Intent"</label>
                    <select
                        id="qr-intent"
                        prop:value=move || form.with(|f| f.intent_id.clone())
                        on:change=move |ev| form.update(|f| f.intent_id = event_target_value(&ev))
                    >
                        <option value="">"Select an intent"</option>
                        {move || intents.get().into_iter().map(|i| view! {
                            <option value=i.id.to_string()>{format!("{} ({})", i.name, i.intent_type.label())}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label for="qr-name">"Name"</label>
                    <input
                        type="text"
                        id="qr-name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="qr-description">"Description"</label>
                    <textarea
                        id="qr-description"
                        rows="2"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="qr-expiration">"Expiration"</label>
                        <input
                            type="datetime-local"
                            id="qr-expiration"
                            prop:value=move || form.with(|f| f.expiration.clone())
                            on:input=move |ev| form.update(|f| f.expiration = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="qr-usage-limit">"Usage limit"</label>
                        <input
                            type="number"
                            min="1"
                            id="qr-usage-limit"
                            prop:value=move || form.with(|f| f.usage_limit.clone())
                            on:input=move |ev| form.update(|f| f.usage_limit = event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="form-group">
                    <label for="qr-password">"Password"</label>
                    <input
                        type="password"
                        id="qr-password"
                        autocomplete="new-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="qr-arguments">"Intent arguments (JSON)"</label>
                    <textarea
                        id="qr-arguments"
                        rows="3"
                        placeholder=r#"{"key": "value"}"#
                        prop:value=move || form.with(|f| f.intent_arguments.clone())
                        on:input=move |ev| form.update(|f| f.intent_arguments = event_target_value(&ev))
                    />
                    {move || parameter_hint().map(|p| view! {
                        <small class="form-hint">{format!("Expected parameters: {p}")}</small>
                    })}
                </div>
                {move || form_error.get().map(|e| view! { <div class="form-error">{e}</div> })}
                <div class="details-actions">
                    <button type="submit" class="button button--primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Creating..." } else { "Create" }}
                    </button>
                    <button type="button" class="button button--secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                </div>
            </form>
        </Modal>
    }
}
