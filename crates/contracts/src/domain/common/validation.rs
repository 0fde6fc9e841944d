//! Client-side form rules. Anything beyond these checks is enforced by the server.

/// Value must contain at least `min` non-whitespace-trimmed characters
pub fn require_min_len(value: &str, min: usize, field: &str) -> Result<(), String> {
    let len = value.trim().chars().count();
    if len == 0 {
        return Err(format!("{} is required", field));
    }
    if len < min {
        return Err(format!("{} must have at least {} characters", field, min));
    }
    Ok(())
}

/// Reference to another entity must be chosen
pub fn require_selected(value: Option<i64>, field: &str) -> Result<(), String> {
    match value {
        Some(id) if id > 0 => Ok(()),
        _ => Err(format!("{} must be selected", field)),
    }
}

pub fn require_positive(value: f64, field: &str) -> Result<(), String> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(format!("{} must be greater than zero", field))
    }
}

pub fn require_non_negative(value: f64, field: &str) -> Result<(), String> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(format!("{} must not be negative", field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_len() {
        assert!(require_min_len("ab", 2, "Name").is_ok());
        assert_eq!(
            require_min_len("  ", 2, "Name").unwrap_err(),
            "Name is required"
        );
        assert_eq!(
            require_min_len(" a ", 2, "Name").unwrap_err(),
            "Name must have at least 2 characters"
        );
    }

    #[test]
    fn test_selected_and_positive() {
        assert!(require_selected(Some(3), "Unit").is_ok());
        assert!(require_selected(Some(0), "Unit").is_err());
        assert!(require_selected(None, "Unit").is_err());
        assert!(require_positive(0.5, "Quantity").is_ok());
        assert!(require_positive(0.0, "Quantity").is_err());
        assert!(require_positive(f64::NAN, "Quantity").is_err());
        assert!(require_non_negative(0.0, "Quantity").is_ok());
        assert!(require_non_negative(-0.5, "Quantity").is_err());
    }
}
