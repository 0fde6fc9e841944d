use contracts::domain::a005_patrimony::aggregate::{Patrimony, PatrimonyDto};
use contracts::domain::common::EntityId;

use crate::shared::form_utils::{format_id_list, parse_id_list, parse_selected_id};

/// Raw text of the patrimony create/edit inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatrimonyForm {
    pub name: String,
    pub description: String,
    pub status_id: String,
    /// Comma separated ids, only used by the create form
    pub tag_ids: String,
}

impl PatrimonyForm {
    pub fn from_patrimony(p: &Patrimony) -> Self {
        Self {
            name: p.name.clone(),
            description: p.description.clone().unwrap_or_default(),
            status_id: p.status.id.to_string(),
            tag_ids: format_id_list(&p.tag_ids()),
        }
    }

    fn dto(&self, tag_ids: Vec<EntityId>) -> PatrimonyDto {
        PatrimonyDto {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            status_id: parse_selected_id(&self.status_id),
            tag_ids,
        }
    }

    pub fn to_create_dto(&self) -> Result<PatrimonyDto, String> {
        let dto = self.dto(parse_id_list(&self.tag_ids)?);
        dto.validate_create()?;
        Ok(dto)
    }

    pub fn to_update_dto(&self, tag_ids: Vec<EntityId>) -> Result<PatrimonyDto, String> {
        let dto = self.dto(tag_ids);
        dto.validate()?;
        Ok(dto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_dto() {
        let form = PatrimonyForm {
            name: "Office chair".into(),
            description: String::new(),
            status_id: "2".into(),
            tag_ids: "5".into(),
        };
        let dto = form.to_create_dto().unwrap();
        assert_eq!(dto.status_id, Some(2));
        assert_eq!(dto.tag_ids, vec![5]);
    }

    #[test]
    fn test_missing_status_is_rejected() {
        let form = PatrimonyForm {
            name: "Desk".into(),
            ..Default::default()
        };
        assert_eq!(form.to_update_dto(vec![]), Err("Status must be selected".to_string()));
    }

    #[test]
    fn test_short_name_is_refused_on_edit_only() {
        let form = PatrimonyForm {
            name: "D".into(),
            status_id: "1".into(),
            ..Default::default()
        };
        assert!(form.to_create_dto().is_ok());
        assert!(form.to_update_dto(vec![]).is_err());
    }
}
