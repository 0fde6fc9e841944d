use crate::domain::common::{require_min_len, EntityId};
use serde::{Deserialize, Serialize};

/// Unit of measure of consumables ("kg", "box", ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of `POST /units` and `PUT /units/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitDto {
    pub name: String,
    pub abbreviation: String,
    pub description: String,
}

impl UnitDto {
    pub fn validate(&self) -> Result<(), String> {
        require_min_len(&self.name, 1, "Name")?;
        require_min_len(&self.abbreviation, 1, "Abbreviation")
    }
}

impl From<&Unit> for UnitDto {
    fn from(u: &Unit) -> Self {
        Self {
            name: u.name.clone(),
            abbreviation: u.abbreviation.clone(),
            description: u.description.clone().unwrap_or_default(),
        }
    }
}
