use crate::domain::common::{require_min_len, EntityId};
use serde::{Deserialize, Serialize};

/// Label attached to consumables and patrimonies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of `POST /tags` and `PUT /tags/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDto {
    pub name: String,
    pub description: String,
}

impl TagDto {
    pub fn validate(&self) -> Result<(), String> {
        require_min_len(&self.name, 1, "Name")
    }
}

impl From<&Tag> for TagDto {
    fn from(v: &Tag) -> Self {
        Self {
            name: v.name.clone(),
            description: v.description.clone().unwrap_or_default(),
        }
    }
}

/// Case-insensitive lookup used before creating a tag inline
pub fn name_taken(tags: &[Tag], name: &str) -> bool {
    let name = name.trim().to_lowercase();
    tags.iter().any(|t| t.name.trim().to_lowercase() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(id: i64, name: &str) -> Tag {
        Tag {
            id,
            name: name.to_string(),
            description: None,
        }
    }

    #[test]
    fn test_name_taken_ignores_case_and_padding() {
        let tags = vec![tag(1, "Fragile"), tag(2, "Outdoor")];
        assert!(name_taken(&tags, " fragile "));
        assert!(!name_taken(&tags, "Indoor"));
    }

    #[test]
    fn test_missing_description_defaults_to_none() {
        let t: Tag = serde_json::from_str(r#"{"id":4,"name":"Lab"}"#).unwrap();
        assert_eq!(t, tag(4, "Lab"));
        assert_eq!(TagDto::from(&t).description, "");
    }

    #[test]
    fn test_validate_requires_name() {
        assert!(TagDto::default().validate().is_err());
        let dto = TagDto {
            name: "Lab".into(),
            description: String::new(),
        };
        assert!(dto.validate().is_ok());
    }
}
