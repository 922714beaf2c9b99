use crate::core::config::AdminConfig;
use crate::core::error::AppError;
use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::prelude::*;
use constant_time_eq::constant_time_eq;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        Some(RequestId::new(HeaderValue::from_str(&id).unwrap()))
    }
}

/// Custom MakeSpan that includes request_id in the tracing span
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

pub fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    // If origins list contains "*", allow any origin
    if allowed_origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        // Parse origins into HeaderValue
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

/// HTTP Basic gate for the single administrator.
///
/// Wraps every mutating endpoint and the admin page. Failures answer 401 with
/// a Basic challenge so browsers raise their native credential prompt.
pub fn admin_auth_middleware(
    admin: Arc<AdminConfig>,
) -> impl Fn(
    Request,
    Next,
)
    -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, Response>> + Send>>
       + Clone {
    move |req: Request, next: Next| {
        let admin = admin.clone();
        Box::pin(async move {
            let auth_header = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|header| header.to_str().ok());

            if let Some(auth_header) = auth_header {
                if let Some(encoded) = auth_header.strip_prefix("Basic ") {
                    if let Ok(decoded) = BASE64_STANDARD.decode(encoded) {
                        if let Ok(creds) = String::from_utf8(decoded) {
                            if let Some((username, password)) = creds.split_once(':') {
                                if credentials_match(username, password, &admin) {
                                    return Ok(next.run(req).await);
                                }
                            }
                        }
                    }
                }
            }

            Err(AppError::Unauthorized("Invalid credentials".to_string()).into_response())
        })
    }
}

/// Both halves are always compared so response timing does not reveal which
/// one mismatched.
fn credentials_match(username: &str, password: &str, admin: &AdminConfig) -> bool {
    let username_ok = constant_time_eq(username.as_bytes(), admin.username.as_bytes());
    let password_ok = constant_time_eq(password.as_bytes(), admin.password.as_bytes());
    username_ok & password_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{basic_auth_value, test_admin_config};
    use axum::{middleware::from_fn, routing::get, Router};
    use axum_test::TestServer;

    fn protected_router() -> Router {
        let admin = Arc::new(test_admin_config());
        Router::new()
            .route("/guarded", get(|| async { "ok" }))
            .layer(from_fn(admin_auth_middleware(admin)))
    }

    #[tokio::test]
    async fn missing_header_is_challenged() {
        let server = TestServer::new(protected_router()).unwrap();

        let response = server.get("/guarded").await;

        response.assert_status_unauthorized();
        let challenge = response.header("www-authenticate");
        assert!(challenge.to_str().unwrap().starts_with("Basic"));
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let server = TestServer::new(protected_router()).unwrap();

        let response = server
            .get("/guarded")
            .add_header("authorization", basic_auth_value("admin", "wrong"))
            .await;

        response.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn valid_credentials_pass_through() {
        let server = TestServer::new(protected_router()).unwrap();

        let response = server
            .get("/guarded")
            .add_header("authorization", basic_auth_value("admin", "art123"))
            .await;

        response.assert_status_ok();
        response.assert_text("ok");
    }

    #[test]
    fn credentials_match_requires_both_halves() {
        let admin = test_admin_config();

        assert!(credentials_match("admin", "art123", &admin));
        assert!(!credentials_match("admin", "nope", &admin));
        assert!(!credentials_match("root", "art123", &admin));
        assert!(!credentials_match("", "", &admin));
    }
}
