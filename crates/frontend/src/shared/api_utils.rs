//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use crate::shared::config::config;

/// Get the base URL for API requests
///
/// Uses the configured base URL when set, otherwise the current window origin
/// with the `/api` prefix.
///
/// # Returns
/// - API base URL like "https://inventory.example.com/api"
/// - "/api" if window is not available
pub fn api_base() -> String {
    let origin = web_sys::window().and_then(|w| w.location().origin().ok());
    resolve_api_base(&config().api.base_url, origin.as_deref())
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path relative to the base (should start with "/")
///
/// # Example
/// ```ignore
/// let url = api_url("/consumables/12");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Origin of the running application, used to build links encoded into QR codes
pub fn app_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

fn resolve_api_base(configured: &str, origin: Option<&str>) -> String {
    let configured = configured.trim().trim_end_matches('/');
    if !configured.is_empty() {
        return configured.to_string();
    }
    format!("{}/api", origin.unwrap_or("").trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_base_wins() {
        assert_eq!(
            resolve_api_base("http://10.0.0.5/Backend/api/", Some("http://localhost:8080")),
            "http://10.0.0.5/Backend/api"
        );
    }

    #[test]
    fn test_falls_back_to_origin() {
        assert_eq!(
            resolve_api_base("", Some("https://inv.example")),
            "https://inv.example/api"
        );
        assert_eq!(resolve_api_base("  ", None), "/api");
    }
}
