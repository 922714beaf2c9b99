use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::core::error::ErrorBody;
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::items::{dtos as items_dtos, handlers as items_handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Items
        items_handlers::item_handler::list_items,
        items_handlers::item_handler::create_item,
        items_handlers::item_handler::delete_item,
        // Categories
        categories_handlers::category_handler::list_categories,
        categories_handlers::category_handler::create_category,
        categories_handlers::category_handler::delete_category,
    ),
    components(
        schemas(
            // Shared
            ErrorBody,
            // Items
            items_dtos::ItemResponseDto,
            items_dtos::CreateItemDto,
            items_dtos::ItemCreatedDto,
            items_dtos::ItemDeletedDto,
            // Categories
            categories_dtos::CategoryResponseDto,
            categories_dtos::CreateCategoryDto,
            categories_dtos::CategoryCreatedDto,
            categories_dtos::CategoryDeletedDto,
        )
    ),
    tags(
        (name = "items", description = "Catalog items (public listing, admin writes)"),
        (name = "categories", description = "Category registry (public listing, admin writes)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Craftshop API",
        version = "0.1.0",
        description = "Catalog service for the handicrafts storefront",
    )
)]
pub struct ApiDoc;

/// Adds the HTTP Basic security scheme to the OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            );
        }
    }
}
