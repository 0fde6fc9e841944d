use crate::domain::common::{require_min_len, EntityId};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a patrimony ("in use", "under repair", ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of `POST /statuses` and `PUT /statuses/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDto {
    pub name: String,
    pub description: String,
}

impl StatusDto {
    pub fn validate(&self) -> Result<(), String> {
        require_min_len(&self.name, 1, "Name")
    }
}

impl From<&Status> for StatusDto {
    fn from(v: &Status) -> Self {
        Self {
            name: v.name.clone(),
            description: v.description.clone().unwrap_or_default(),
        }
    }
}
