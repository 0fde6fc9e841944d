use contracts::domain::a006_intent::aggregate::Intent;

use crate::shared::api::{ApiError, ResourceApi};

const INTENTS: ResourceApi = ResourceApi::new("/intents");

/// `GET /intents` answers with a plain array
pub async fn fetch_all() -> Result<Vec<Intent>, ApiError> {
    INTENTS.list_all().await
}
