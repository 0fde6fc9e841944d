use crate::domain::a002_tag::aggregate::Tag;
use crate::domain::a003_status::aggregate::Status;
use crate::domain::common::{require_min_len, require_selected, EntityId};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Fixed asset tracked individually (furniture, equipment)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patrimony {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: Status,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Patrimony {
    pub fn tag_ids(&self) -> Vec<EntityId> {
        self.tags.iter().map(|t| t.id).collect()
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Body of `POST /patrimonies` and `PUT /patrimonies/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatrimonyDto {
    pub name: String,
    pub description: String,
    pub status_id: Option<EntityId>,
    pub tag_ids: Vec<EntityId>,
}

impl PatrimonyDto {
    pub fn validate_create(&self) -> Result<(), String> {
        require_min_len(&self.name, 1, "Name")?;
        require_selected(self.status_id, "Status")
    }

    /// Rules of the details edit form
    pub fn validate(&self) -> Result<(), String> {
        require_min_len(&self.name, 2, "Name")?;
        require_selected(self.status_id, "Status")
    }
}

impl From<&Patrimony> for PatrimonyDto {
    fn from(p: &Patrimony) -> Self {
        Self {
            name: p.name.clone(),
            description: p.description.clone().unwrap_or_default(),
            status_id: Some(p.status.id),
            tag_ids: p.tag_ids(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_into_dto() {
        let p: Patrimony = serde_json::from_str(
            r#"{"id":3,"name":"Desk","status":{"id":9,"name":"In use"},"tags":[]}"#,
        )
        .unwrap();
        let dto = PatrimonyDto::from(&p);
        assert_eq!(dto.status_id, Some(9));
        assert!(dto.validate().is_ok());
        assert_eq!(serde_json::to_value(&dto).unwrap()["statusId"], 9);
    }

    #[test]
    fn test_status_is_required() {
        let dto = PatrimonyDto {
            name: "Desk".into(),
            ..Default::default()
        };
        assert_eq!(dto.validate().unwrap_err(), "Status must be selected");
    }

    #[test]
    fn test_create_accepts_single_character_name() {
        let dto = PatrimonyDto {
            name: "D".into(),
            status_id: Some(1),
            ..Default::default()
        };
        assert!(dto.validate_create().is_ok());
        assert!(dto.validate().is_err());
        assert_eq!(
            PatrimonyDto { status_id: Some(1), ..Default::default() }
                .validate_create()
                .unwrap_err(),
            "Name is required"
        );
    }
}
