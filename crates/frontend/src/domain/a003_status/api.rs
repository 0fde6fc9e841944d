use contracts::domain::a003_status::aggregate::{Status, StatusDto};
use contracts::domain::common::EntityId;
use contracts::shared::pagination::{Page, PageQuery};

use crate::shared::api::{ApiError, ResourceApi};
use crate::shared::config::config;

const STATUSES: ResourceApi = ResourceApi::new("/statuses");

pub async fn fetch_page(query: PageQuery) -> Result<Page<Status>, ApiError> {
    STATUSES.list(query).await
}

/// Statuses offered by the patrimony form
pub async fn fetch_options() -> Result<Vec<Status>, ApiError> {
    let query = PageQuery::new(0, config().pagination.reference_page_size);
    Ok(STATUSES.list::<Status>(query).await?.items)
}

pub async fn save(id: Option<EntityId>, dto: &StatusDto) -> Result<(), ApiError> {
    STATUSES.save(id, dto).await
}

pub async fn delete(id: EntityId) -> Result<(), ApiError> {
    STATUSES.delete(id).await
}

pub async fn is_in_use(id: EntityId) -> Result<bool, ApiError> {
    STATUSES.is_in_use(id).await
}
