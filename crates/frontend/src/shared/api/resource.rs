use super::http::{self, Method};
use super::ApiError;
use contracts::domain::common::EntityId;
use contracts::shared::pagination::{Page, PageQuery};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

/// CRUD endpoints of one collection (`/consumables`, `/tags`, ...).
///
/// Every per-resource `api.rs` is a typed facade over this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceApi {
    endpoint: &'static str,
}

impl ResourceApi {
    pub const fn new(endpoint: &'static str) -> Self {
        Self { endpoint }
    }

    pub fn endpoint(&self) -> &'static str {
        self.endpoint
    }

    pub fn item_path(&self, id: EntityId) -> String {
        format!("{}/{}", self.endpoint, id)
    }

    /// `GET /{resource}?pageIndex&pageSize`
    pub async fn list<T: DeserializeOwned>(&self, query: PageQuery) -> Result<Page<T>, ApiError> {
        http::get_json(self.endpoint, &query.to_params()).await
    }

    /// `GET /{resource}` for endpoints answering with a plain array
    pub async fn list_all<T: DeserializeOwned>(&self) -> Result<Vec<T>, ApiError> {
        http::get_json(self.endpoint, &[]).await
    }

    pub async fn get<T: DeserializeOwned>(&self, id: EntityId) -> Result<T, ApiError> {
        http::get_json(&self.item_path(id), &[]).await
    }

    pub async fn create<B: Serialize, T: DeserializeOwned>(&self, body: &B) -> Result<T, ApiError> {
        http::send_json(Method::Post, self.endpoint, body).await
    }

    pub async fn update<B: Serialize, T: DeserializeOwned>(
        &self,
        id: EntityId,
        body: &B,
    ) -> Result<T, ApiError> {
        http::send_json(Method::Put, &self.item_path(id), body).await
    }

    /// Create or update without caring about the response body
    pub async fn save<B: Serialize>(&self, id: Option<EntityId>, body: &B) -> Result<(), ApiError> {
        match id {
            Some(id) => self.update::<B, IgnoredAny>(id, body).await.map(|_| ()),
            None => self.create::<B, IgnoredAny>(body).await.map(|_| ()),
        }
    }

    pub async fn delete(&self, id: EntityId) -> Result<(), ApiError> {
        http::delete(&self.item_path(id)).await
    }

    /// `GET /{resource}/{id}/usage` probing a single row: true when anything references the entity
    pub async fn is_in_use(&self, id: EntityId) -> Result<bool, ApiError> {
        let path = format!("{}/usage", self.item_path(id));
        let page: Page<IgnoredAny> = http::get_json(&path, &PageQuery::probe().to_params()).await?;
        Ok(!page.items.is_empty() || page.total_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let api = ResourceApi::new("/tags");
        assert_eq!(api.endpoint(), "/tags");
        assert_eq!(api.item_path(7), "/tags/7");
    }
}
