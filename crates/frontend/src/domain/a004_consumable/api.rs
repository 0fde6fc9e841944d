use contracts::domain::a004_consumable::aggregate::{Consumable, ConsumableDto};
use contracts::domain::common::EntityId;
use contracts::shared::pagination::{Page, PageQuery};

use crate::shared::api::{ApiError, ResourceApi};

const CONSUMABLES: ResourceApi = ResourceApi::new("/consumables");

pub async fn fetch_page(query: PageQuery) -> Result<Page<Consumable>, ApiError> {
    CONSUMABLES.list(query).await
}

pub async fn fetch_by_id(id: EntityId) -> Result<Consumable, ApiError> {
    CONSUMABLES.get(id).await
}

pub async fn create(dto: &ConsumableDto) -> Result<(), ApiError> {
    CONSUMABLES.save(None, dto).await
}

/// The server answers with the updated consumable
pub async fn update(id: EntityId, dto: &ConsumableDto) -> Result<Consumable, ApiError> {
    CONSUMABLES.update(id, dto).await
}

pub async fn delete(id: EntityId) -> Result<(), ApiError> {
    CONSUMABLES.delete(id).await
}
