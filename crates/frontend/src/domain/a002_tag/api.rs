use contracts::domain::a002_tag::aggregate::{Tag, TagDto};
use contracts::domain::common::EntityId;
use contracts::shared::pagination::{Page, PageQuery};

use crate::shared::api::{ApiError, ResourceApi};
use crate::shared::config::config;

const TAGS: ResourceApi = ResourceApi::new("/tags");

pub async fn fetch_page(query: PageQuery) -> Result<Page<Tag>, ApiError> {
    TAGS.list(query).await
}

/// Tags offered by selectors and tag toggles
pub async fn fetch_options() -> Result<Vec<Tag>, ApiError> {
    let query = PageQuery::new(0, config().pagination.reference_page_size);
    Ok(TAGS.list::<Tag>(query).await?.items)
}

pub async fn create(dto: &TagDto) -> Result<Tag, ApiError> {
    TAGS.create(dto).await
}

pub async fn save(id: Option<EntityId>, dto: &TagDto) -> Result<(), ApiError> {
    TAGS.save(id, dto).await
}

pub async fn delete(id: EntityId) -> Result<(), ApiError> {
    TAGS.delete(id).await
}

pub async fn is_in_use(id: EntityId) -> Result<bool, ApiError> {
    TAGS.is_in_use(id).await
}
