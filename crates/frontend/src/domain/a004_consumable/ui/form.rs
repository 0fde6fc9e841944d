use contracts::domain::a004_consumable::aggregate::{Consumable, ConsumableDto};
use contracts::domain::common::EntityId;

use crate::shared::form_utils::{format_id_list, parse_decimal, parse_id_list, parse_selected_id};

/// Raw text of the consumable create/edit inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsumableForm {
    pub name: String,
    pub description: String,
    pub quantity: String,
    pub unit_id: String,
    /// Comma separated ids, only used by the create form
    pub tag_ids: String,
}

impl ConsumableForm {
    pub fn from_consumable(c: &Consumable) -> Self {
        Self {
            name: c.name.clone(),
            description: c.description.clone().unwrap_or_default(),
            quantity: c.quantity.to_string(),
            unit_id: c.unit.id.to_string(),
            tag_ids: format_id_list(&c.tag_ids()),
        }
    }

    fn dto(&self, tag_ids: Vec<EntityId>) -> Result<ConsumableDto, String> {
        Ok(ConsumableDto {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            quantity: parse_decimal(&self.quantity, "Quantity")?,
            unit_id: parse_selected_id(&self.unit_id),
            tag_ids,
        })
    }

    /// Body of the list page's create form, tags taken from the text field
    pub fn to_create_dto(&self) -> Result<ConsumableDto, String> {
        let dto = self.dto(parse_id_list(&self.tag_ids)?)?;
        dto.validate_create()?;
        Ok(dto)
    }

    /// Body of the details edit form with the toggled tags
    pub fn to_update_dto(&self, tag_ids: Vec<EntityId>) -> Result<ConsumableDto, String> {
        let dto = self.dto(tag_ids)?;
        dto.validate()?;
        Ok(dto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ConsumableForm {
        ConsumableForm {
            name: " Printer paper ".into(),
            description: "A4".into(),
            quantity: "12,5".into(),
            unit_id: "3".into(),
            tag_ids: "1, 2".into(),
        }
    }

    #[test]
    fn test_create_dto_parses_text_fields() {
        let dto = filled().to_create_dto().unwrap();
        assert_eq!(dto.name, "Printer paper");
        assert_eq!(dto.quantity, 12.5);
        assert_eq!(dto.unit_id, Some(3));
        assert_eq!(dto.tag_ids, vec![1, 2]);
    }

    #[test]
    fn test_explicit_tag_ids_win() {
        let dto = filled().to_update_dto(vec![9]).unwrap();
        assert_eq!(dto.tag_ids, vec![9]);
    }

    #[test]
    fn test_create_dto_reports_first_problem() {
        let mut form = filled();
        form.unit_id.clear();
        assert_eq!(form.to_create_dto(), Err("Unit must be selected".to_string()));

        let mut form = filled();
        form.quantity = "-1".into();
        assert!(form.to_create_dto().is_err());

        let mut form = filled();
        form.tag_ids = "1,a".into();
        assert!(form.to_create_dto().is_err());
    }

    #[test]
    fn test_create_accepts_what_edit_refuses() {
        let form = ConsumableForm {
            name: "X".into(),
            quantity: "0".into(),
            unit_id: "3".into(),
            ..Default::default()
        };
        assert!(form.to_create_dto().is_ok());
        assert!(form.to_update_dto(vec![]).is_err());
    }
}
