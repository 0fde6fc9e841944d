use contracts::domain::a001_unit::aggregate::{Unit, UnitDto};
use contracts::domain::common::EntityId;
use contracts::shared::pagination::{Page, PageQuery};

use crate::shared::api::{ApiError, ResourceApi};
use crate::shared::config::config;

const UNITS: ResourceApi = ResourceApi::new("/units");

pub async fn fetch_page(query: PageQuery) -> Result<Page<Unit>, ApiError> {
    UNITS.list(query).await
}

/// Units offered by the consumable form
pub async fn fetch_options() -> Result<Vec<Unit>, ApiError> {
    let query = PageQuery::new(0, config().pagination.reference_page_size);
    Ok(UNITS.list::<Unit>(query).await?.items)
}

pub async fn save(id: Option<EntityId>, dto: &UnitDto) -> Result<(), ApiError> {
    UNITS.save(id, dto).await
}

pub async fn delete(id: EntityId) -> Result<(), ApiError> {
    UNITS.delete(id).await
}

pub async fn is_in_use(id: EntityId) -> Result<bool, ApiError> {
    UNITS.is_in_use(id).await
}
