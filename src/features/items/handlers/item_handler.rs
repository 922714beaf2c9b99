use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::features::items::dtos::{
    is_image_mime_allowed, CreateItemDto, ItemCreatedDto, ItemDeletedDto, ItemResponseDto,
    ListItemsQuery, NewItem, NewItemImage, ALLOWED_IMAGE_MIME_TYPES, MAX_IMAGE_SIZE,
};
use crate::features::items::services::ItemService;

/// List catalog items
///
/// Unfiltered requests come back grouped by category in registry order; a
/// category filter or search keeps creation order. Pagination is applied
/// after filtering.
#[utoipa::path(
    get,
    path = "/api/items",
    params(ListItemsQuery),
    responses(
        (status = 200, description = "Page of items", body = Vec<ItemResponseDto>),
    ),
    tag = "items"
)]
pub async fn list_items(
    State(service): State<Arc<ItemService>>,
    Query(query): Query<ListItemsQuery>,
) -> Result<Json<Vec<ItemResponseDto>>> {
    let items = service.list(&query).await?;
    Ok(Json(items))
}

/// Create an item
///
/// Accepts multipart/form-data with `title`, `description`, `price`,
/// `category`, and zero or more `files` image fields. Images are uploaded to
/// the image host before anything is persisted.
#[utoipa::path(
    post,
    path = "/api/items",
    request_body(
        content = CreateItemDto,
        content_type = "multipart/form-data",
        description = "Item fields plus image files",
    ),
    responses(
        (status = 201, description = "Item created", body = ItemCreatedDto),
        (status = 400, description = "Missing or invalid form field"),
        (status = 401, description = "Authentication required"),
        (status = 502, description = "Image host rejected an upload")
    ),
    security(("basic_auth" = [])),
    tag = "items"
)]
pub async fn create_item(
    State(service): State<Arc<ItemService>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ItemCreatedDto>)> {
    let mut title: Option<String> = None;
    let mut description: Option<String> = None;
    let mut price: Option<f64> = None;
    let mut category: Option<String> = None;
    let mut images: Vec<NewItemImage> = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "title" => {
                title = Some(read_text(field, "title").await?);
            }
            "description" => {
                description = Some(read_text(field, "description").await?);
            }
            "price" => {
                let text = read_text(field, "price").await?;
                let parsed = text
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| AppError::BadRequest(format!("Invalid price: '{}'", text)))?;
                price = Some(parsed);
            }
            "category" => {
                category = Some(read_text(field, "category").await?);
            }
            "files" => {
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read image bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read image data: {}", e))
                })?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(AppError::BadRequest(format!(
                        "Image too large. Maximum size is {} bytes ({} MB)",
                        MAX_IMAGE_SIZE,
                        MAX_IMAGE_SIZE / 1024 / 1024
                    )));
                }

                if !is_image_mime_allowed(&content_type) {
                    return Err(AppError::BadRequest(format!(
                        "File type '{}' is not allowed. Allowed types: {}",
                        content_type,
                        ALLOWED_IMAGE_MIME_TYPES.join(", ")
                    )));
                }

                images.push(NewItemImage {
                    data: data.to_vec(),
                    content_type,
                });
            }
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    let new_item = NewItem {
        title: title.ok_or_else(|| AppError::BadRequest("Title is required".to_string()))?,
        description: description
            .ok_or_else(|| AppError::BadRequest("Description is required".to_string()))?,
        price: price.ok_or_else(|| AppError::BadRequest("Price is required".to_string()))?,
        category: category
            .ok_or_else(|| AppError::BadRequest("Category is required".to_string()))?,
    };

    let id = service.create(new_item, images).await?;

    Ok((StatusCode::CREATED, Json(ItemCreatedDto::ok(id))))
}

/// Delete an item
///
/// Image references cascade; the hosted blobs stay on the image host.
#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item deleted", body = ItemDeletedDto),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Item not found")
    ),
    security(("basic_auth" = [])),
    tag = "items"
)]
pub async fn delete_item(
    State(service): State<Arc<ItemService>>,
    Path(id): Path<i64>,
) -> Result<Json<ItemDeletedDto>> {
    service.delete(id).await?;
    Ok(Json(ItemDeletedDto::deleted()))
}

async fn read_text(field: axum::extract::multipart::Field<'_>, name: &str) -> Result<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read {} field: {}", name, e)))
}
