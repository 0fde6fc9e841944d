use contracts::domain::a007_qrcode::aggregate::{
    QrCode, QrCodeCreateDto, QrCodeExportDto, QrCodeUpdateDto,
};
use contracts::domain::common::EntityId;
use contracts::shared::pagination::{Page, PageQuery};

use crate::shared::api::http;
use crate::shared::api::{ApiError, ResourceApi};
use crate::shared::config::config;

const QR_CODES: ResourceApi = ResourceApi::new("/qrcodes");

pub async fn fetch_page(query: PageQuery) -> Result<Page<QrCode>, ApiError> {
    QR_CODES.list(query).await
}

pub async fn fetch_by_id(id: EntityId) -> Result<QrCode, ApiError> {
    QR_CODES.get(id).await
}

pub async fn create(dto: &QrCodeCreateDto) -> Result<QrCode, ApiError> {
    QR_CODES.create(dto).await
}

pub async fn update(id: EntityId, dto: &QrCodeUpdateDto) -> Result<QrCode, ApiError> {
    QR_CODES.update(id, dto).await
}

pub async fn delete(id: EntityId) -> Result<(), ApiError> {
    QR_CODES.delete(id).await
}

/// Export settings used by the details page
pub fn default_export() -> QrCodeExportDto {
    let qr = &config().qr;
    QrCodeExportDto {
        width: Some(qr.export_width),
        height: Some(qr.export_height),
        margin: Some(qr.export_margin),
        quality: None,
    }
}

/// `POST /qrcodes/{id}/export`: image bytes rendered by the server
pub async fn export_image(id: EntityId, dto: &QrCodeExportDto) -> Result<Vec<u8>, ApiError> {
    let path = format!("{}/export", QR_CODES.item_path(id));
    http::post_for_bytes(&path, dto).await
}
