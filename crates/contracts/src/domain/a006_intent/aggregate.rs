use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// What scanning a QR code does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum IntentType {
    Redirect,
    Action,
}

impl TryFrom<u8> for IntentType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(IntentType::Redirect),
            2 => Ok(IntentType::Action),
            other => Err(format!("Unknown intent type: {}", other)),
        }
    }
}

impl From<IntentType> for u8 {
    fn from(value: IntentType) -> Self {
        match value {
            IntentType::Redirect => 1,
            IntentType::Action => 2,
        }
    }
}

impl IntentType {
    pub fn label(&self) -> &'static str {
        match self {
            IntentType::Redirect => "Redirect",
            IntentType::Action => "Action",
        }
    }
}

/// Server-defined behaviour a QR code is bound to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub id: EntityId,
    #[serde(rename = "type")]
    pub intent_type: IntentType,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: Option<Vec<String>>,
}

impl Intent {
    pub fn parameter_names(&self) -> &[String] {
        self.parameters.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_type() {
        let i: Intent = serde_json::from_str(
            r#"{"id":1,"type":2,"name":"Check-in","parameters":["room"]}"#,
        )
        .unwrap();
        assert_eq!(i.intent_type, IntentType::Action);
        assert_eq!(i.parameter_names(), ["room".to_string()]);
        assert_eq!(serde_json::to_value(&i).unwrap()["type"], 2);
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        assert!(serde_json::from_str::<Intent>(r#"{"id":1,"type":7,"name":"x"}"#).is_err());
    }
}
