//! Application configuration
//!
//! Parsed once from an embedded TOML document. The API base URL may be baked in at
//! compile time through the `INVENTORY_API_BASE` environment variable.

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub pagination: PaginationConfig,
    pub messages: MessagesConfig,
    pub qr: QrConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Empty means "same origin, `/api` prefix"
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaginationConfig {
    pub default_page_size: usize,
    pub qrcode_page_size: usize,
    /// Tags, statuses and units are small tables loaded in one go
    pub reference_page_size: usize,
    pub page_size_options: Vec<usize>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MessagesConfig {
    pub success_ms: u32,
    pub error_ms: u32,
    /// Delay before a failed detail page returns to its list
    pub redirect_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct QrConfig {
    pub width: u32,
    pub margin: u32,
    pub error_correction: String,
    pub export_width: u32,
    pub export_height: u32,
    pub export_margin: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[pagination]
default_page_size = 10
qrcode_page_size = 12
reference_page_size = 100
page_size_options = [10, 20, 50, 100]

[messages]
success_ms = 3000
error_ms = 5000
redirect_ms = 2000

[qr]
width = 300
margin = 1
error_correction = "H"
export_width = 500
export_height = 500
export_margin = 2
"#;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::new(),
            },
            pagination: PaginationConfig {
                default_page_size: 10,
                qrcode_page_size: 12,
                reference_page_size: 100,
                page_size_options: vec![10, 20, 50, 100],
            },
            messages: MessagesConfig {
                success_ms: 3000,
                error_ms: 5000,
                redirect_ms: 2000,
            },
            qr: QrConfig {
                width: 300,
                margin: 1,
                error_correction: "H".to_string(),
                export_width: 500,
                export_height: 500,
                export_margin: 2,
            },
        }
    }
}

/// Parse the embedded configuration and apply the compile-time API override
pub fn load_config() -> Result<AppConfig, toml::de::Error> {
    let mut config: AppConfig = toml::from_str(DEFAULT_CONFIG)?;
    if let Some(base) = option_env!("INVENTORY_API_BASE") {
        if !base.trim().is_empty() {
            config.api.base_url = base.trim().to_string();
        }
    }
    Ok(config)
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        log::error!("invalid embedded configuration, using defaults: {}", e);
        AppConfig::default()
    }
});

/// Process-wide configuration
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<AppConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
    }

    #[test]
    fn test_embedded_matches_fallback() {
        let parsed: AppConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn test_page_sizes() {
        let c = AppConfig::default();
        assert_eq!(c.pagination.default_page_size, 10);
        assert_eq!(c.pagination.qrcode_page_size, 12);
        assert!(c
            .pagination
            .page_size_options
            .contains(&c.pagination.default_page_size));
    }
}
