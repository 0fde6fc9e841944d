use contracts::domain::a001_unit::aggregate::Unit;
use contracts::domain::a002_tag::aggregate::{name_taken, Tag, TagDto};
use contracts::domain::a004_consumable::aggregate::Consumable;
use contracts::domain::common::{EntityId, ResourceKind};
use contracts::shared::confirmation::ConfirmationRequest;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::form::ConsumableForm;
use crate::domain::a001_unit::api as unit_api;
use crate::domain::a002_tag::api as tag_api;
use crate::domain::a004_consumable::api;
use crate::layout::global_context::{AppGlobalContext, Route};
use crate::shared::api_utils::app_origin;
use crate::shared::config::config;
use crate::shared::confirm::{details_action, ConfirmService, DetailsAction};
use crate::shared::flash::Flash;
use crate::shared::qr;

/// State and commands of the consumable details page
#[derive(Clone, Copy)]
pub struct ConsumableDetailsViewModel {
    pub id: EntityId,
    pub item: RwSignal<Option<Consumable>>,
    pub loading: RwSignal<bool>,
    pub edit_mode: RwSignal<bool>,
    pub form: RwSignal<ConsumableForm>,
    pub form_error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub units: RwSignal<Vec<Unit>>,
    pub tags: RwSignal<Vec<Tag>>,
    pub selected_tags: RwSignal<Vec<EntityId>>,
    pub show_add_tag: RwSignal<bool>,
    pub new_tag: RwSignal<TagDto>,
    pub adding_tag: RwSignal<bool>,
    pub qr_image: RwSignal<Option<String>>,
    pub flash: Flash,
    ctx: AppGlobalContext,
    confirm: ConfirmService,
}

impl ConsumableDetailsViewModel {
    pub fn new(id: EntityId, ctx: AppGlobalContext, confirm: ConfirmService) -> Self {
        Self {
            id,
            item: RwSignal::new(None),
            loading: RwSignal::new(true),
            edit_mode: RwSignal::new(false),
            form: RwSignal::new(ConsumableForm::default()),
            form_error: RwSignal::new(None),
            saving: RwSignal::new(false),
            units: RwSignal::new(Vec::new()),
            tags: RwSignal::new(Vec::new()),
            selected_tags: RwSignal::new(Vec::new()),
            show_add_tag: RwSignal::new(false),
            new_tag: RwSignal::new(TagDto::default()),
            adding_tag: RwSignal::new(false),
            qr_image: RwSignal::new(None),
            flash: Flash::new(),
            ctx,
            confirm,
        }
    }

    fn apply(&self, item: Consumable) {
        self.selected_tags.set(item.tag_ids());
        self.form.set(ConsumableForm::from_consumable(&item));
        self.item.set(Some(item));
    }

    /// End of a fetch: the spinner goes away whether or not there is something to show
    fn finish_load(&self, item: Option<Consumable>) {
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
                    log::warn!("loading consumable {} failed: {e}", this.id);
                    this.finish_load(None);
                    this.flash.error(e.user_message("Failed to load consumable."));
                    this.redirect_to_list().await;
                }
            }
        });
    }

    /// Leave for the list after the error had time to be read, unless the user moved on
    async fn redirect_to_list(&self) {
        TimeoutFuture::new(config().messages.redirect_ms).await;
        let still_here = self.ctx.route.try_get_untracked() == Some(Route::Consumable(self.id));
        if still_here {
            self.ctx.navigate(Route::Consumables);
        }
    }

    pub fn load_options(&self) {
        let this = *self;
        spawn_local(async move {
            match unit_api::fetch_options().await {
                Ok(units) => this.units.set(units),
                Err(e) => log::warn!("loading units failed: {e}"),
            }
        });
        self.load_tags();
    }

    fn load_tags(&self) {
        let this = *self;
        spawn_local(async move {
            match tag_api::fetch_options().await {
                Ok(tags) => this.tags.set(tags),
                Err(e) => {
                    log::warn!("loading tags failed: {e}");
                    this.tags.set(Vec::new());
                    this.flash.error("Failed to load tags.");
                }
            }
        });
    }

    pub fn toggle_edit(&self) {
        let editing = !self.edit_mode.get_untracked();
        self.edit_mode.set(editing);
        self.form_error.set(None);
        // leaving edit mode discards unsaved changes
        if let Some(item) = self.item.get_untracked() {
            self.form.set(ConsumableForm::from_consumable(&item));
            self.selected_tags.set(item.tag_ids());
        }
        if !editing {
            self.show_add_tag.set(false);
        }
    }

    pub fn is_assigned(&self, tag_id: EntityId) -> bool {
        self.selected_tags.with(|ids| ids.contains(&tag_id))
    }

    pub fn toggle_tag(&self, tag_id: EntityId) {
        self.selected_tags.update(|ids| {
            if let Some(pos) = ids.iter().position(|id| *id == tag_id) {
                ids.remove(pos);
            } else {
                ids.push(tag_id);
            }
        });
    }

    pub fn save(&self) {
        let tag_ids = self.selected_tags.get_untracked();
        let dto = match self.form.with_untracked(|f| f.to_update_dto(tag_ids)) {
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
                    this.show_add_tag.set(false);
                    this.flash.success("Consumable updated.");
                }
                Err(e) => {
                    log::warn!("updating consumable {} failed: {e}", this.id);
                    this.flash.error(e.user_message("Failed to update consumable."));
                }
            }
            this.saving.set(false);
        });
    }

    pub fn toggle_add_tag(&self) {
        self.show_add_tag.update(|v| *v = !*v);
        self.new_tag.set(TagDto::default());
    }

    pub fn add_tag(&self) {
        let dto = self.new_tag.get_untracked();
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            self.flash.error("Tag name is required.");
            return;
        }
        if self.tags.with_untracked(|tags| name_taken(tags, &name)) {
            self.flash.error("Tag already exists.");
            return;
        }
        let dto = TagDto {
            name,
            description: dto.description.trim().to_string(),
        };
        let this = *self;
        this.adding_tag.set(true);
        spawn_local(async move {
            match tag_api::create(&dto).await {
                Ok(tag) => {
                    log::debug!("tag {} created from consumable {}", tag.id, this.id);
                    this.flash.success("Tag added.");
                    this.show_add_tag.set(false);
                    this.new_tag.set(TagDto::default());
                    this.load_tags();
                }
                Err(e) => this.flash.error(e.user_message("Failed to add tag.")),
            }
            this.adding_tag.set(false);
        });
    }

    pub fn request_delete_tag(&self, tag: &Tag) {
        self.confirm
            .request_delete(ResourceKind::Tag, tag.id, tag.name.clone());
    }

    pub fn request_delete(&self) {
        if let Some(item) = self.item.get_untracked() {
            self.confirm
                .request_delete(ResourceKind::Consumable, item.id, item.name);
        }
    }

    pub fn confirmed_action(&self, request: &ConfirmationRequest) -> Option<DetailsAction> {
        details_action(ResourceKind::Consumable, self.id, request)
    }

    /// Confirmed requests routed here by the view
    pub fn on_confirmed(&self, request: ConfirmationRequest) {
        match self.confirmed_action(&request) {
            Some(DetailsAction::DeleteShown) => self.delete(),
            Some(DetailsAction::DeleteTag(tag_id)) => self.delete_tag(tag_id),
            None => {}
        }
    }

    fn delete_tag(&self, tag_id: EntityId) {
        let this = *self;
        spawn_local(async move {
            match tag_api::delete(tag_id).await {
                Ok(()) => {
                    this.flash.success("Tag deleted.");
                    this.selected_tags.update(|ids| ids.retain(|id| *id != tag_id));
                    this.load_tags();
                }
                Err(e) => this.flash.error(e.user_message("Failed to delete tag.")),
            }
        });
    }

    fn delete(&self) {
        let this = *self;
        spawn_local(async move {
            match api::delete(this.id).await {
                Ok(()) => {
                    log::info!("consumable {} deleted", this.id);
                    this.ctx.navigate(Route::Consumables);
                }
                Err(e) => this.flash.error(e.user_message("Failed to delete consumable.")),
            }
        });
    }

    pub fn generate_qr(&self) {
        let this = *self;
        let link = qr::entity_link(&app_origin(), ResourceKind::Consumable, self.id);
        spawn_local(async move {
            match qr::render_data_url(&link).await {
                Ok(url) => this.qr_image.set(Some(url)),
                Err(e) => {
                    log::warn!("QR rendering failed: {e}");
                    this.flash.error("Failed to generate QR code.");
                }
            }
        });
    }

    pub fn close_qr(&self) {
        self.qr_image.set(None);
    }

    pub fn download_qr(&self) {
        let Some(url) = self.qr_image.get_untracked() else {
            return;
        };
        let name = self
            .item
            .with_untracked(|i| i.as_ref().map(|c| c.name.clone()))
            .unwrap_or_else(|| format!("consumable-{}", self.id));
        if let Err(e) = qr::download(&url, &format!("{name}.png")) {
            log::warn!("QR download failed: {e}");
            self.flash.error("Failed to download QR code.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_view_model(id: EntityId, f: impl FnOnce(ConsumableDetailsViewModel)) {
        let owner = Owner::new();
        owner.with(|| {
            f(ConsumableDetailsViewModel::new(
                id,
                AppGlobalContext::new(),
                ConfirmService::new(),
            ))
        });
    }

    #[test]
    fn test_only_own_delete_request_is_acted_on() {
        with_view_model(7, |vm| {
            let other = ConfirmationRequest::new(ResourceKind::Consumable, 8, "Toner");
            assert_eq!(vm.confirmed_action(&other), None);
            let own = ConfirmationRequest::new(ResourceKind::Consumable, 7, "Paper");
            assert_eq!(vm.confirmed_action(&own), Some(DetailsAction::DeleteShown));
            let tag = ConfirmationRequest::new(ResourceKind::Tag, 2, "Office");
            assert_eq!(vm.confirmed_action(&tag), Some(DetailsAction::DeleteTag(2)));
        });
    }

    #[test]
    fn test_failed_load_stops_loading() {
        with_view_model(7, |vm| {
            assert!(vm.loading.get_untracked());
            vm.finish_load(None);
            assert!(!vm.loading.get_untracked());
            assert!(vm.item.get_untracked().is_none());
        });
    }

    #[test]
    fn test_successful_load_fills_form_and_tags() {
        with_view_model(7, |vm| {
            let item: Consumable = serde_json::from_str(
                r#"{"id": 7, "name": "Paper", "quantity": 3,
                    "unit": {"id": 2, "name": "Box", "abbreviation": "bx"},
                    "tags": [{"id": 1, "name": "Office"}]}"#,
            )
            .unwrap();
            vm.finish_load(Some(item));
            assert!(!vm.loading.get_untracked());
            assert_eq!(vm.form.get_untracked().unit_id, "2");
            assert!(vm.is_assigned(1));
        });
    }
}
