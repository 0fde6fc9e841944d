use contracts::domain::a005_patrimony::aggregate::{Patrimony, PatrimonyDto};
use contracts::domain::common::EntityId;
use contracts::shared::pagination::{Page, PageQuery};

use crate::shared::api::{ApiError, ResourceApi};

const PATRIMONIES: ResourceApi = ResourceApi::new("/patrimonies");

pub async fn fetch_page(query: PageQuery) -> Result<Page<Patrimony>, ApiError> {
    PATRIMONIES.list(query).await
}

pub async fn fetch_by_id(id: EntityId) -> Result<Patrimony, ApiError> {
    PATRIMONIES.get(id).await
}

pub async fn create(dto: &PatrimonyDto) -> Result<(), ApiError> {
    PATRIMONIES.save(None, dto).await
}

/// The server answers with the updated patrimony
pub async fn update(id: EntityId, dto: &PatrimonyDto) -> Result<Patrimony, ApiError> {
    PATRIMONIES.update(id, dto).await
}

pub async fn delete(id: EntityId) -> Result<(), ApiError> {
    PATRIMONIES.delete(id).await
}
