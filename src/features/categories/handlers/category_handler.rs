use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::categories::dtos::{
    CategoryCreatedDto, CategoryDeletedDto, CategoryResponseDto, CreateCategoryDto,
};
use crate::features::categories::services::CategoryService;

/// List all categories
///
/// Returned in insertion order, which is the storefront display order.
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List of categories", body = Vec<CategoryResponseDto>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<Vec<CategoryResponseDto>>> {
    let categories = service.list().await?;
    Ok(Json(categories))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = CategoryCreatedDto),
        (status = 400, description = "Invalid slug or duplicate category"),
        (status = 401, description = "Authentication required")
    ),
    security(("basic_auth" = [])),
    tag = "categories"
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CreateCategoryDto>,
) -> Result<(StatusCode, Json<CategoryCreatedDto>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.create(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(CategoryCreatedDto::ok(category.id)),
    ))
}

/// Delete a category
///
/// Items referencing the slug are kept; they sort last on the browse-all view.
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category deleted", body = CategoryDeletedDto),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Category not found")
    ),
    security(("basic_auth" = [])),
    tag = "categories"
)]
pub async fn delete_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i64>,
) -> Result<Json<CategoryDeletedDto>> {
    service.delete(id).await?;
    Ok(Json(CategoryDeletedDto::deleted()))
}
