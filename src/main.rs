mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::Config;
use crate::core::openapi::ApiDoc;
use crate::core::{database, middleware};
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::items::{routes as items_routes, ItemService};
use crate::features::pages::{routes as pages_routes, PageTemplates};
use axum::extract::DefaultBodyLimit;
use axum::{middleware::from_fn, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Simple health check endpoint (no auth required; axum answers HEAD for GET routes)
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({"status": "alive"}))
}

fn health_routes() -> Router {
    Router::new().route("/health", axum::routing::get(health_check))
}

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations automatically
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    // Initialize the image host client and make sure the bucket is usable
    let image_host = Arc::new(
        modules::storage::ImageHostClient::new(config.image_store.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize image host client: {}", e))?,
    );
    image_host
        .bootstrap()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bootstrap image host bucket: {}", e))?;
    tracing::info!(
        "Image host client initialized for bucket: {}",
        image_host.bucket_name()
    );

    // Initialize Category Service
    let category_service = Arc::new(CategoryService::new(pool.clone()));
    tracing::info!("Category service initialized");

    // Initialize Item Service
    let item_service = Arc::new(ItemService::new(pool.clone(), Arc::clone(&image_host)));
    tracing::info!("Item service initialized");

    // Load page templates
    let page_templates = Arc::new(
        PageTemplates::load(Path::new("templates"))
            .map_err(|e| anyhow::anyhow!("Failed to load page templates: {}", e))?,
    );
    tracing::info!("Page templates loaded");

    // Build swagger router
    let swagger = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // Admin routes (require HTTP Basic authentication)
    let admin = Arc::new(config.admin.clone());
    let admin_routes = Router::new()
        .merge(items_routes::admin_routes(Arc::clone(&item_service)))
        .merge(categories_routes::admin_routes(Arc::clone(&category_service)))
        .merge(pages_routes::admin_routes(Arc::clone(&page_templates)))
        .route_layer(from_fn(middleware::admin_auth_middleware(admin)));

    // Public routes (no auth required)
    let public_routes = Router::new()
        .merge(items_routes::public_routes(item_service))
        .merge(categories_routes::public_routes(category_service))
        .merge(pages_routes::public_routes(page_templates));

    let app = Router::new()
        .merge(swagger)
        .merge(admin_routes)
        .merge(public_routes)
        .merge(health_routes())
        .nest_service("/static", ServeDir::new("static"))
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;
    socket.set_tcp_keepalive(
        &socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60)),
    )?;
    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Method;
    use axum_test::TestServer;

    #[tokio::test]
    async fn health_answers_get() {
        let server = TestServer::new(health_routes()).unwrap();

        let response = server.get("/health").await;

        response.assert_status_ok();
        response.assert_json(&serde_json::json!({"status": "alive"}));
    }

    #[tokio::test]
    async fn health_answers_head() {
        let server = TestServer::new(health_routes()).unwrap();

        let response = server.method(Method::HEAD, "/health").await;

        response.assert_status_ok();
    }
}
