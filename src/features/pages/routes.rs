use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::pages::handlers;
use crate::features::pages::services::PageTemplates;

/// Public page routes (no authentication)
pub fn public_routes(templates: Arc<PageTemplates>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/logout", get(handlers::logout))
        .with_state(templates)
}

/// Admin page route, gated behind the admin auth middleware by the caller
pub fn admin_routes(templates: Arc<PageTemplates>) -> Router {
    Router::new()
        .route("/admin", get(handlers::admin_panel))
        .with_state(templates)
}
