use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::features::items::handlers;
use crate::features::items::services::ItemService;

/// Public item routes (no authentication)
pub fn public_routes(service: Arc<ItemService>) -> Router {
    Router::new()
        .route("/api/items", get(handlers::list_items))
        .with_state(service)
}

/// Admin item routes, gated behind the admin auth middleware by the caller
pub fn admin_routes(service: Arc<ItemService>) -> Router {
    Router::new()
        .route("/api/items", post(handlers::create_item))
        .route("/api/items/{id}", delete(handlers::delete_item))
        .with_state(service)
}
