//! QR images: client-side rendering of entity links and server-side exports.

use contracts::domain::common::{EntityId, ResourceKind};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::shared::config::config;

#[wasm_bindgen]
extern "C" {
    /// `QRCode.toDataURL` of the `qrcode` script loaded by index.html
    #[wasm_bindgen(js_namespace = QRCode, js_name = toDataURL, catch)]
    fn qrcode_to_data_url(text: &str, options: &JsValue) -> Result<js_sys::Promise, JsValue>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrRenderConfig {
    pub width: u32,
    pub margin: u32,
    pub error_correction_level: String,
}

impl QrRenderConfig {
    pub fn from_config() -> Self {
        let qr = &config().qr;
        Self {
            width: qr.width,
            margin: qr.margin,
            error_correction_level: qr.error_correction.clone(),
        }
    }
}

/// Link encoded into an entity's QR code, e.g. `https://host/consumables/12`
pub fn entity_link(origin: &str, kind: ResourceKind, id: EntityId) -> String {
    format!("{}{}/{}", origin.trim_end_matches('/'), kind.endpoint(), id)
}

/// Render `text` to a PNG data URL
pub async fn render_data_url(text: &str) -> Result<String, String> {
    let options = serde_wasm_bindgen::to_value(&QrRenderConfig::from_config())
        .map_err(|e| format!("Failed to encode QR options: {e}"))?;
    let promise = qrcode_to_data_url(text, &options).map_err(js_error)?;
    let value = JsFuture::from(promise).await.map_err(js_error)?;
    value
        .as_string()
        .ok_or_else(|| "QR library returned no image".to_string())
}

/// Wrap exported image bytes into an object URL usable as `<img src>`.
/// Release it with [`revoke_object_url`].
pub fn object_url(bytes: &[u8], mime: &str) -> Result<String, String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array);

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &properties).map_err(js_error)?;
    Url::create_object_url_with_blob(&blob).map_err(js_error)
}

pub fn revoke_object_url(url: &str) {
    let _ = Url::revoke_object_url(url);
}

/// Start a browser download of `href` (data or object URL)
pub fn download(href: &str, filename: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document object")?;
    let anchor = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "Failed to create download link".to_string())?;
    anchor.set_href(href);
    anchor.set_download(filename);
    anchor.click();
    Ok(())
}

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_link() {
        assert_eq!(
            entity_link("https://stock.local/", ResourceKind::Consumable, 12),
            "https://stock.local/consumables/12"
        );
        assert_eq!(
            entity_link("http://localhost:8080", ResourceKind::Patrimony, 3),
            "http://localhost:8080/patrimonies/3"
        );
    }

    #[test]
    fn test_render_config_serializes_like_qrcode_options() {
        let cfg = QrRenderConfig {
            width: 300,
            margin: 1,
            error_correction_level: "H".into(),
        };
        let json = serde_json::to_value(&cfg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"width": 300, "margin": 1, "errorCorrectionLevel": "H"})
        );
    }
}
