use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::items::models::Item;
use crate::shared::constants::DEFAULT_PAGE_SIZE;

/// Query params for the item listing
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListItemsQuery {
    /// Category slug to filter by; absent or "all" means every category
    pub category: Option<String>,

    /// Case-insensitive substring match on the item title
    pub search: Option<String>,

    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: i64,

    /// Number of items per page
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for ListItemsQuery {
    fn default() -> Self {
        Self {
            category: None,
            search: None,
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Response DTO for a catalog item
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemResponseDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    /// Durable URLs of the item's hosted images
    pub images: Vec<String>,
}

impl ItemResponseDto {
    pub fn from_item(item: Item, images: Vec<String>) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            price: item.price,
            category: item.category,
            images,
        }
    }
}

/// Fields of a new item, parsed from the admin's multipart form
#[derive(Debug, Clone)]
pub struct NewItem {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
}

/// Raw image payload awaiting upload to the image host
#[derive(Debug, Clone)]
pub struct NewItemImage {
    pub data: Vec<u8>,
    pub content_type: String,
}

/// Create item request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct CreateItemDto {
    pub title: String,
    pub description: String,
    #[schema(example = 25.0)]
    pub price: f64,
    /// Category slug
    #[schema(example = "doll")]
    pub category: String,
    /// Image files to upload
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub files: String,
}

/// Response body for a created item
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemCreatedDto {
    pub status: String,
    pub id: i64,
}

impl ItemCreatedDto {
    pub fn ok(id: i64) -> Self {
        Self {
            status: "ok".to_string(),
            id,
        }
    }
}

/// Response body for a deleted item
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemDeletedDto {
    pub ok: bool,
}

impl ItemDeletedDto {
    pub fn deleted() -> Self {
        Self { ok: true }
    }
}

/// Allowed MIME types for item images
pub const ALLOWED_IMAGE_MIME_TYPES: &[&str] =
    &["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Maximum image size in bytes (10MB)
pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;

/// Check if a MIME type is an allowed image type
pub fn is_image_mime_allowed(content_type: &str) -> bool {
    ALLOWED_IMAGE_MIME_TYPES.contains(&content_type)
}

/// Get file extension from image content type
pub fn image_extension(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_mime_allowlist() {
        assert!(is_image_mime_allowed("image/jpeg"));
        assert!(is_image_mime_allowed("image/webp"));
        assert!(!is_image_mime_allowed("application/pdf"));
        assert!(!is_image_mime_allowed("text/html"));
    }

    #[test]
    fn extension_follows_content_type() {
        assert_eq!(image_extension("image/jpeg"), Some("jpg"));
        assert_eq!(image_extension("image/png"), Some("png"));
        assert_eq!(image_extension("application/pdf"), None);
    }
}
