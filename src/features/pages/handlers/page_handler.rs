use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use minijinja::context;

use crate::core::error::Result;
use crate::features::pages::services::PageTemplates;

/// Public storefront page
pub async fn home(State(templates): State<Arc<PageTemplates>>) -> Result<Html<String>> {
    let html = templates.render("index.html", context! {})?;
    Ok(Html(html))
}

/// Admin panel page, gated behind the admin auth middleware
pub async fn admin_panel(State(templates): State<Arc<PageTemplates>>) -> Result<Html<String>> {
    let html = templates.render("admin.html", context! {})?;
    Ok(Html(html))
}

/// Drop cached Basic credentials.
///
/// Browsers forget Basic auth when they receive a fresh 401 challenge under
/// a different realm.
pub async fn logout() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Basic realm=\"Logout\"")],
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Router};
    use axum_test::TestServer;

    #[tokio::test]
    async fn logout_sends_a_fresh_basic_challenge() {
        let server = TestServer::new(Router::new().route("/logout", get(logout))).unwrap();

        let response = server.get("/logout").await;

        response.assert_status_unauthorized();
        let challenge = response.header("www-authenticate");
        assert_eq!(challenge.to_str().unwrap(), "Basic realm=\"Logout\"");
    }
}
