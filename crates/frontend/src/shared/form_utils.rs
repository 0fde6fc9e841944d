//! Parsing helpers for free-text form inputs.

use contracts::domain::common::EntityId;

/// Parse a comma separated id list such as `"1, 2,3"`.
/// Blank entries are skipped, anything non-numeric is an error.
pub fn parse_id_list(text: &str) -> Result<Vec<EntityId>, String> {
    let mut ids = Vec::new();
    for part in text.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let id = part
            .parse::<EntityId>()
            .map_err(|_| format!("\"{part}\" is not a valid id"))?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

pub fn format_id_list(ids: &[EntityId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a decimal, accepting a comma as separator
pub fn parse_decimal(text: &str, field: &str) -> Result<f64, String> {
    let normalized = text.trim().replace(',', ".");
    if normalized.is_empty() {
        return Err(format!("{field} is required"));
    }
    normalized
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("{field} must be a number"))
}

/// Empty input means "not set"
pub fn parse_optional_u32(text: &str, field: &str) -> Result<Option<u32>, String> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<u32>()
        .map(Some)
        .map_err(|_| format!("{field} must be a whole number"))
}

/// Value of a `<select>` holding an id, empty meaning nothing selected
pub fn parse_selected_id(value: &str) -> Option<EntityId> {
    value.trim().parse().ok()
}

pub fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_list() {
        assert_eq!(parse_id_list("1, 2,3").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_id_list(" , ").unwrap(), Vec::<i64>::new());
        assert_eq!(parse_id_list("4,4").unwrap(), vec![4]);
        assert!(parse_id_list("1,x").is_err());
        assert_eq!(format_id_list(&[1, 2]), "1, 2");
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("12,5", "Quantity"), Ok(12.5));
        assert_eq!(parse_decimal(" 3 ", "Quantity"), Ok(3.0));
        assert_eq!(
            parse_decimal("", "Quantity"),
            Err("Quantity is required".to_string())
        );
        assert!(parse_decimal("abc", "Quantity").is_err());
    }

    #[test]
    fn test_optional_fields() {
        assert_eq!(parse_optional_u32("", "Usage limit"), Ok(None));
        assert_eq!(parse_optional_u32("10", "Usage limit"), Ok(Some(10)));
        assert!(parse_optional_u32("-1", "Usage limit").is_err());
        assert_eq!(parse_selected_id(""), None);
        assert_eq!(parse_selected_id("7"), Some(7));
        assert_eq!(non_empty("  "), None);
        assert_eq!(non_empty(" a "), Some("a".to_string()));
    }
}
