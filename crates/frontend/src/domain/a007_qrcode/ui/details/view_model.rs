use contracts::domain::a006_intent::aggregate::Intent;
use contracts::domain::a007_qrcode::aggregate::QrCode;
use contracts::domain::common::{EntityId, ResourceKind};
use contracts::shared::confirmation::ConfirmationRequest;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::form::QrCodeForm;
use crate::domain::a006_intent::api as intent_api;
use crate::domain::a007_qrcode::api;
use crate::layout::global_context::{AppGlobalContext, Route};
use crate::shared::config::config;
use crate::shared::confirm::{details_action, ConfirmService, DetailsAction};
use crate::shared::flash::Flash;
use crate::shared::qr;

/// State and commands of the QR code details page
#[derive(Clone, Copy)]
pub struct QrCodeDetailsViewModel {
    pub id: EntityId,
    pub item: RwSignal<Option<QrCode>>,
    pub loading: RwSignal<bool>,
    pub edit_mode: RwSignal<bool>,
    pub form: RwSignal<QrCodeForm>,
    pub form_error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub intents: RwSignal<Vec<Intent>>,
    /// Object URL of the image exported by the server
    pub image: RwSignal<Option<String>>,
    pub exporting: RwSignal<bool>,
    pub flash: Flash,
    ctx: AppGlobalContext,
    confirm: ConfirmService,
}

impl QrCodeDetailsViewModel {
    pub fn new(id: EntityId, ctx: AppGlobalContext, confirm: ConfirmService) -> Self {
        Self {
            id,
            item: RwSignal::new(None),
            loading: RwSignal::new(true),
            edit_mode: RwSignal::new(false),
            form: RwSignal::new(QrCodeForm::default()),
            form_error: RwSignal::new(None),
            saving: RwSignal::new(false),
            intents: RwSignal::new(Vec::new()),
            image: RwSignal::new(None),
            exporting: RwSignal::new(false),
            flash: Flash::new(),
            ctx,
            confirm,
        }
    }

    fn apply(&self, item: QrCode) {
        self.form.set(QrCodeForm::from_qr_code(&item));
        self.item.set(Some(item));
    }

    fn finish_load(&self, item: Option<QrCode>) {
        self.loading.set(false);
        if let Some(item) = item {
            self.apply(item);
        }
    }

    pub fn load(&self) {
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match api::fetch_by_id(this.id).await {
                Ok(item) => this.finish_load(Some(item)),
                Err(e) => {
                    log::warn!("loading QR code {} failed: {e}", this.id);
                    this.finish_load(None);
                    this.flash.error(e.user_message("Failed to load QR code."));
                    TimeoutFuture::new(config().messages.redirect_ms).await;
                    if this.ctx.route.try_get_untracked() == Some(Route::QrCode(this.id)) {
                        this.ctx.navigate(Route::QrCodes);
                    }
                }
            }
        });
    }

    pub fn load_intents(&self) {
        let this = *self;
        spawn_local(async move {
            match intent_api::fetch_all().await {
                Ok(intents) => {
                    let _ = this.intents.try_set(intents);
                }
                Err(e) => log::warn!("loading intents failed: {e}"),
            }
        });
    }

    pub fn toggle_edit(&self) {
        self.edit_mode.update(|v| *v = !*v);
        self.form_error.set(None);
        if let Some(item) = self.item.get_untracked() {
            self.form.set(QrCodeForm::from_qr_code(&item));
        }
    }

    pub fn save(&self) {
        let dto = match self.form.with_untracked(|f| f.to_update_dto()) {
            Ok(dto) => dto,
            Err(e) => {
                self.form_error.set(Some(e));
                return;
            }
        };
        let this = *self;
        this.form_error.set(None);
        this.saving.set(true);
        spawn_local(async move {
            match api::update(this.id, &dto).await {
                Ok(updated) => {
                    this.apply(updated);
                    this.edit_mode.set(false);
                    this.flash.success("QR code updated.");
                }
                Err(e) => {
                    log::warn!("updating QR code {} failed: {e}", this.id);
                    this.flash.error(e.user_message("Failed to update QR code."));
                }
            }
            this.saving.set(false);
        });
    }

    pub fn request_delete(&self) {
        if let Some(item) = self.item.get_untracked() {
            self.confirm
                .request_delete(ResourceKind::QrCode, item.id, item.display_name());
        }
    }

    pub fn on_confirmed(&self, request: ConfirmationRequest) {
        if details_action(ResourceKind::QrCode, self.id, &request)
            == Some(DetailsAction::DeleteShown)
        {
            self.delete();
        }
    }

    fn delete(&self) {
        let this = *self;
        spawn_local(async move {
            match api::delete(this.id).await {
                Ok(()) => {
                    log::info!("QR code {} deleted", this.id);
                    this.release_image();
                    this.ctx.navigate(Route::QrCodes);
                }
                Err(e) => this.flash.error(e.user_message("Failed to delete QR code.")),
            }
        });
    }

    /// Asks the server for the printable image and keeps it as an object URL
    pub fn export(&self) {
        let this = *self;
        this.exporting.set(true);
        spawn_local(async move {
            let result = api::export_image(this.id, &api::default_export()).await;
            match result {
                Ok(bytes) => match qr::object_url(&bytes, "image/png") {
                    Ok(url) => {
                        this.release_image();
                        let _ = this.image.try_set(Some(url));
                    }
                    Err(e) => {
                        log::warn!("QR image blob failed: {e}");
                        this.flash.error("Failed to export QR code.");
                    }
                },
                Err(e) => {
                    log::warn!("exporting QR code {} failed: {e}", this.id);
                    this.flash.error(e.user_message("Failed to export QR code."));
                }
            }
            let _ = this.exporting.try_set(false);
        });
    }

    pub fn download(&self) {
        let Some(url) = self.image.get_untracked() else {
            return;
        };
        let name = self
            .item
            .with_untracked(|i| i.as_ref().map(QrCode::display_name))
            .unwrap_or_else(|| format!("qrcode-{}", self.id));
        if let Err(e) = qr::download(&url, &format!("{name}.png")) {
            log::warn!("QR download failed: {e}");
            self.flash.error("Failed to download QR code.");
        }
    }

    pub fn close_image(&self) {
        self.release_image();
    }

    /// Revokes the current object URL; safe to call after the page is gone
    pub fn release_image(&self) {
        if let Some(Some(url)) = self.image.try_update(|i| i.take()) {
            qr::revoke_object_url(&url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_load_stops_loading() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = QrCodeDetailsViewModel::new(5, AppGlobalContext::new(), ConfirmService::new());
            assert!(vm.loading.get_untracked());
            vm.finish_load(None);
            assert!(!vm.loading.get_untracked());
            assert!(vm.item.get_untracked().is_none());
        });
    }
}
