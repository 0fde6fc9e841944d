use contracts::domain::a007_qrcode::aggregate::{
    format_intent_arguments, parse_intent_arguments, QrCode, QrCodeCreateDto, QrCodeUpdateDto,
};

use crate::shared::form_utils::{non_empty, parse_optional_u32, parse_selected_id};

/// Raw text of the QR code create/edit inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QrCodeForm {
    pub intent_id: String,
    pub name: String,
    pub description: String,
    /// `datetime-local` value, create form only
    pub expiration: String,
    pub password: String,
    pub usage_limit: String,
    /// JSON object of string values
    pub intent_arguments: String,
}

impl QrCodeForm {
    pub fn from_qr_code(q: &QrCode) -> Self {
        Self {
            intent_id: q.intent.id.to_string(),
            name: q.name.clone().unwrap_or_default(),
            description: q.description.clone().unwrap_or_default(),
            expiration: String::new(),
            password: q.password.clone().unwrap_or_default(),
            usage_limit: q.usage_limit.map(|l| l.to_string()).unwrap_or_default(),
            intent_arguments: format_intent_arguments(q.arguments.as_ref()),
        }
    }

    pub fn to_create_dto(&self) -> Result<QrCodeCreateDto, String> {
        let dto = QrCodeCreateDto {
            intent_id: parse_selected_id(&self.intent_id),
            name: non_empty(&self.name),
            description: non_empty(&self.description),
            expiration: non_empty(&self.expiration),
            password: non_empty(&self.password),
            usage_limit: parse_optional_u32(&self.usage_limit, "Usage limit")?,
            intent_arguments: parse_intent_arguments(&self.intent_arguments)?,
        };
        dto.validate()?;
        Ok(dto)
    }

    pub fn to_update_dto(&self) -> Result<QrCodeUpdateDto, String> {
        let dto = QrCodeUpdateDto {
            intent_id: parse_selected_id(&self.intent_id),
            name: non_empty(&self.name),
            description: non_empty(&self.description),
            password: non_empty(&self.password),
            usage_limit: parse_optional_u32(&self.usage_limit, "Usage limit")?,
            intent_arguments: parse_intent_arguments(&self.intent_arguments)?,
        };
        dto.validate()?;
        Ok(dto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> QrCodeForm {
        QrCodeForm {
            intent_id: "1".into(),
            name: "Room 12 door".into(),
            usage_limit: "10".into(),
            intent_arguments: r#"{"room": "12"}"#.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_dto_omits_blank_fields() {
        let dto = form().to_create_dto().unwrap();
        assert_eq!(dto.intent_id, Some(1));
        assert_eq!(dto.usage_limit, Some(10));
        assert_eq!(dto.password, None);
        assert_eq!(dto.expiration, None);
        assert_eq!(
            dto.intent_arguments.unwrap().get("room").map(String::as_str),
            Some("12")
        );
    }

    #[test]
    fn test_invalid_arguments_are_reported() {
        let mut f = form();
        f.intent_arguments = "{room".into();
        assert_eq!(
            f.to_update_dto(),
            Err("Invalid intent arguments (JSON)".to_string())
        );
    }

    #[test]
    fn test_intent_is_required() {
        let mut f = form();
        f.intent_id.clear();
        assert_eq!(f.to_create_dto(), Err("Intent must be selected".to_string()));
    }
}
