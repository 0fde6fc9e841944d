use crate::domain::a001_unit::aggregate::Unit;
use crate::domain::a002_tag::aggregate::Tag;
use crate::domain::common::{
    require_min_len, require_non_negative, require_positive, require_selected, EntityId,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Stock item consumed by quantity (paper, cables, reagents)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consumable {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub quantity: f64,
    pub unit: Unit,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Consumable {
    pub fn tag_ids(&self) -> Vec<EntityId> {
        self.tags.iter().map(|t| t.id).collect()
    }

    /// "12.5 kg"
    pub fn quantity_label(&self) -> String {
        let unit = if self.unit.abbreviation.is_empty() {
            &self.unit.name
        } else {
            &self.unit.abbreviation
        };
        format!("{} {}", self.quantity, unit)
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Body of `POST /consumables` and `PUT /consumables/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumableDto {
    pub name: String,
    pub description: String,
    pub quantity: f64,
    pub unit_id: Option<EntityId>,
    pub tag_ids: Vec<EntityId>,
}

impl ConsumableDto {
    /// Rules of the create form: a name, a quantity of zero or more and a unit
    pub fn validate_create(&self) -> Result<(), String> {
        require_min_len(&self.name, 1, "Name")?;
        require_non_negative(self.quantity, "Quantity")?;
        require_selected(self.unit_id, "Unit")
    }

    /// Rules of the details edit form
    pub fn validate(&self) -> Result<(), String> {
        require_min_len(&self.name, 2, "Name")?;
        require_positive(self.quantity, "Quantity")?;
        require_selected(self.unit_id, "Unit")
    }
}

impl From<&Consumable> for ConsumableDto {
    fn from(c: &Consumable) -> Self {
        Self {
            name: c.name.clone(),
            description: c.description.clone().unwrap_or_default(),
            quantity: c.quantity,
            unit_id: Some(c.unit.id),
            tag_ids: c.tag_ids(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": 7,
        "name": "A4 paper",
        "quantity": 12.5,
        "unit": {"id": 2, "name": "Box", "abbreviation": "bx"},
        "tags": [{"id": 1, "name": "Office"}]
    }"#;

    #[test]
    fn test_deserialize_and_convert() {
        let c: Consumable = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(c.quantity_label(), "12.5 bx");
        let dto = ConsumableDto::from(&c);
        assert_eq!(dto.unit_id, Some(2));
        assert_eq!(dto.tag_ids, vec![1]);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_dto_serializes_camel_case() {
        let dto = ConsumableDto {
            name: "Toner".into(),
            quantity: 1.0,
            unit_id: Some(3),
            ..Default::default()
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["unitId"], 3);
        assert!(json["tagIds"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_validate_rules() {
        let mut dto = ConsumableDto {
            name: "T".into(),
            quantity: 1.0,
            unit_id: Some(1),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
        dto.name = "Toner".into();
        dto.quantity = 0.0;
        assert!(dto.validate().is_err());
        dto.quantity = 0.01;
        dto.unit_id = None;
        assert_eq!(dto.validate().unwrap_err(), "Unit must be selected");
    }

    #[test]
    fn test_create_rules_are_looser_than_edit() {
        let mut dto = ConsumableDto {
            name: "T".into(),
            quantity: 0.0,
            unit_id: Some(1),
            ..Default::default()
        };
        assert!(dto.validate_create().is_ok());
        assert!(dto.validate().is_err());
        dto.quantity = -1.0;
        assert_eq!(dto.validate_create().unwrap_err(), "Quantity must not be negative");
        dto.quantity = 2.0;
        dto.name = "  ".into();
        assert_eq!(dto.validate_create().unwrap_err(), "Name is required");
    }
}
