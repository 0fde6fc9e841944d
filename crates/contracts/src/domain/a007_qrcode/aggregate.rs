use crate::domain::a006_intent::aggregate::Intent;
use crate::domain::common::{require_min_len, require_selected, EntityId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Aggregate
// ============================================================================

/// QR code issued by the server; scanning `url` triggers `intent`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCode {
    pub id: EntityId,
    pub url: String,
    pub intent: Intent,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub expiration: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub usage_limit: Option<u32>,
    #[serde(default)]
    pub times_used: u32,
    #[serde(default)]
    pub arguments: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub has_expired: bool,
    #[serde(default)]
    pub has_reached_usage_limit: bool,
}

impl QrCode {
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| format!("QR #{}", self.id))
    }

    /// Expired or exhausted codes can no longer be scanned
    pub fn is_active(&self) -> bool {
        !self.has_expired && !self.has_reached_usage_limit
    }

    /// "3 / 10" or "3 / ∞"
    pub fn usage_label(&self) -> String {
        match self.usage_limit {
            Some(limit) => format!("{} / {}", self.times_used, limit),
            None => format!("{} / ∞", self.times_used),
        }
    }

    /// Expiration as "DD.MM.YYYY HH:MM", or the raw value when it is not RFC 3339 / ISO local
    pub fn expiration_label(&self) -> Option<String> {
        let raw = self.expiration.as_deref()?;
        if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
            return Some(dt.format("%d.%m.%Y %H:%M").to_string());
        }
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(dt.format("%d.%m.%Y %H:%M").to_string());
        }
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
            return Some(dt.format("%d.%m.%Y %H:%M").to_string());
        }
        Some(raw.to_string())
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// Body of `POST /qrcodes`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeCreateDto {
    pub intent_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent_arguments: Option<BTreeMap<String, String>>,
}

impl QrCodeCreateDto {
    pub fn validate(&self) -> Result<(), String> {
        require_selected(self.intent_id, "Intent")?;
        require_min_len(self.name.as_deref().unwrap_or(""), 2, "Name")?;
        validate_usage_limit(self.usage_limit)
    }
}

/// Body of `PUT /qrcodes/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeUpdateDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent_arguments: Option<BTreeMap<String, String>>,
}

impl QrCodeUpdateDto {
    pub fn validate(&self) -> Result<(), String> {
        require_selected(self.intent_id, "Intent")?;
        require_min_len(self.name.as_deref().unwrap_or(""), 2, "Name")?;
        validate_usage_limit(self.usage_limit)
    }
}

impl From<&QrCode> for QrCodeUpdateDto {
    fn from(q: &QrCode) -> Self {
        Self {
            intent_id: Some(q.intent.id),
            name: q.name.clone(),
            description: q.description.clone(),
            password: q.password.clone(),
            usage_limit: q.usage_limit,
            intent_arguments: q.arguments.clone(),
        }
    }
}

/// Body of `POST /qrcodes/{id}/export`; the server answers with an image
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeExportDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<u32>,
}

fn validate_usage_limit(limit: Option<u32>) -> Result<(), String> {
    match limit {
        Some(0) => Err("Usage limit must be at least 1".into()),
        _ => Ok(()),
    }
}

/// Parses the free-text "intent arguments" field: empty text means no arguments,
/// otherwise a JSON object of string values is expected.
pub fn parse_intent_arguments(text: &str) -> Result<Option<BTreeMap<String, String>>, String> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    let args: BTreeMap<String, String> =
        serde_json::from_str(text).map_err(|_| "Invalid intent arguments (JSON)".to_string())?;
    Ok(if args.is_empty() { None } else { Some(args) })
}

/// Pretty JSON shown in the edit form
pub fn format_intent_arguments(args: Option<&BTreeMap<String, String>>) -> String {
    match args {
        Some(map) if !map.is_empty() => serde_json::to_string_pretty(map).unwrap_or_default(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": 5,
        "url": "https://inv.example/q/abc",
        "intent": {"id": 1, "type": 1, "name": "Open page"},
        "usageLimit": 10,
        "timesUsed": 3,
        "expiration": "2025-01-31T18:30:00Z",
        "hasExpired": false,
        "hasReachedUsageLimit": false
    }"#;

    #[test]
    fn test_labels() {
        let q: QrCode = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(q.display_name(), "QR #5");
        assert_eq!(q.usage_label(), "3 / 10");
        assert_eq!(q.expiration_label().as_deref(), Some("31.01.2025 18:30"));
        assert!(q.is_active());
    }

    #[test]
    fn test_parse_intent_arguments() {
        assert_eq!(parse_intent_arguments("  ").unwrap(), None);
        assert_eq!(parse_intent_arguments("{}").unwrap(), None);
        let args = parse_intent_arguments(r#"{"room":"12"}"#).unwrap().unwrap();
        assert_eq!(args.get("room").map(String::as_str), Some("12"));
        assert!(parse_intent_arguments("{room").is_err());
        assert!(parse_intent_arguments(r#"{"n": 1}"#).is_err());
    }

    #[test]
    fn test_create_dto_omits_empty_fields() {
        let dto = QrCodeCreateDto {
            intent_id: Some(1),
            name: Some("Door".into()),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["intentId"], 1);
        assert!(json.get("usageLimit").is_none());
    }

    #[test]
    fn test_usage_limit_must_be_positive() {
        let dto = QrCodeUpdateDto {
            intent_id: Some(1),
            name: Some("Door".into()),
            usage_limit: Some(0),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }
}
