use super::*;
use crate::state::test_helpers::*;
use axum::Router;
use axum::body::Body;
use axum::http::header::{COOKIE, LOCATION};
use axum::routing::get;
use std::sync::Arc;
use tower::ServiceExt;

fn ctx(state: AppState, path: &str, token: Option<&str>) -> RequestContext {
    RequestContext::new(state, path, token.map(str::to_owned))
}

fn gated_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "home" }))
        .route("/admin", get(|| async { "admin page" }))
        .route("/admin/offers", get(|| async { "admin offers" }))
        .route("/dashboard", get(|| async { "dashboard" }))
        .route("/administrivia", get(|| async { "public" }))
        .layer(axum::middleware::from_fn_with_state(state.clone(), admin_gate))
        .layer(axum::middleware::from_fn_with_state(state, session_gate))
}

async fn get_with(app: Router, uri: &str, token: Option<&str>) -> Response {
    let mut req = axum::http::Request::builder().uri(uri);
    if let Some(token) = token {
        req = req.header(COOKIE, format!("sb-access-token={token}"));
    }
    app.oneshot(req.body(Body::empty()).unwrap()).await.unwrap()
}

fn location(resp: &Response) -> &str {
    resp.headers().get(LOCATION).unwrap().to_str().unwrap()
}

// =============================================================================
// protection_for
// =============================================================================

#[test]
fn protection_matches_path_segments() {
    assert_eq!(protection_for("/admin"), Protection::Admin);
    assert_eq!(protection_for("/admin/"), Protection::Admin);
    assert_eq!(protection_for("/admin/offers"), Protection::Admin);
    assert_eq!(protection_for("/dashboard"), Protection::Session);
    assert_eq!(protection_for("/dashboard/todos"), Protection::Session);
    assert_eq!(protection_for("/administrivia"), Protection::Public);
    assert_eq!(protection_for("/"), Protection::Public);
    assert_eq!(protection_for("/services"), Protection::Public);
}

// =============================================================================
// GuardRejection
// =============================================================================

#[test]
fn login_location_encodes_next() {
    let rejection = GuardRejection::Login { next: "/admin?tab=offers".into() };
    assert_eq!(rejection.location(), "/login?next=%2Fadmin%3Ftab%3Doffers");
    assert_eq!(rejection.api_status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn root_rejection_is_forbidden_for_apis() {
    assert_eq!(GuardRejection::Root.location(), "/");
    assert_eq!(GuardRejection::Root.api_status(), StatusCode::FORBIDDEN);
}

#[test]
fn rejection_response_is_temporary_redirect() {
    let resp = GuardRejection::Root.into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/");
}

// =============================================================================
// require_session / require_admin
// =============================================================================

#[tokio::test]
async fn require_session_without_token_asks_for_login() {
    let err = require_session(&ctx(test_app_state(), "/dashboard", None)).await.unwrap_err();
    assert_eq!(err, GuardRejection::Login { next: "/dashboard".into() });
}

#[tokio::test]
async fn require_admin_accepts_registered_admin() {
    let admin = require_admin(&ctx(test_app_state(), "/admin", Some(ADMIN_TOKEN))).await.unwrap();
    assert_eq!(admin.user_id, ADMIN_ID);
    assert_eq!(admin.role, "owner");
}

#[tokio::test]
async fn require_admin_rejects_plain_user_to_root() {
    let err = require_admin(&ctx(test_app_state(), "/admin", Some(USER_TOKEN))).await.unwrap_err();
    assert_eq!(err, GuardRejection::Root);
}

#[tokio::test]
async fn require_admin_fails_closed_on_lookup_error() {
    let state = with_store(test_app_state(), MockStore::failing());
    let err = require_admin(&ctx(state, "/admin", Some(ADMIN_TOKEN))).await.unwrap_err();
    assert_eq!(err, GuardRejection::Root);
}

#[tokio::test]
async fn require_admin_fails_closed_when_auth_provider_down() {
    let state = with_auth(test_app_state(), Arc::new(MockAuth::failing()));
    let err = require_admin(&ctx(state, "/admin", Some(ADMIN_TOKEN))).await.unwrap_err();
    assert_eq!(err, GuardRejection::Login { next: "/admin".into() });
}

// =============================================================================
// admin_gate / session_gate
// =============================================================================

#[tokio::test]
async fn public_pages_pass_through() {
    let resp = get_with(gated_app(test_app_state()), "/administrivia", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn admin_page_without_session_redirects_to_login() {
    let resp = get_with(gated_app(test_app_state()), "/admin/offers?page=2", None).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/login?next=%2Fadmin%2Foffers%3Fpage%3D2");
}

#[tokio::test]
async fn admin_page_for_non_admin_redirects_to_root() {
    let resp = get_with(gated_app(test_app_state()), "/admin", Some(USER_TOKEN)).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/");
}

#[tokio::test]
async fn admin_page_renders_for_admin() {
    let resp = get_with(gated_app(test_app_state()), "/admin", Some(ADMIN_TOKEN)).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn dashboard_needs_only_a_session() {
    let app = gated_app(test_app_state());
    let resp = get_with(app.clone(), "/dashboard", Some(USER_TOKEN)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = get_with(app, "/dashboard", Some("bogus")).await;
    assert_eq!(location(&resp), "/login?next=%2Fdashboard");
}

// =============================================================================
// AdminUser extractor
// =============================================================================

async fn extract_admin(state: AppState, token: Option<&str>) -> Result<AdminUser, StatusCode> {
    let mut req = axum::http::Request::builder().uri("/api/admin/overview");
    if let Some(token) = token {
        req = req.header(COOKIE, format!("sb-access-token={token}"));
    }
    let (mut parts, ()) = req.body(()).unwrap().into_parts();
    AdminUser::from_request_parts(&mut parts, &state).await
}

#[tokio::test]
async fn admin_extractor_statuses() {
    assert_eq!(extract_admin(test_app_state(), None).await.err(), Some(StatusCode::UNAUTHORIZED));
    assert_eq!(extract_admin(test_app_state(), Some(USER_TOKEN)).await.err(), Some(StatusCode::FORBIDDEN));
    let admin = extract_admin(test_app_state(), Some(ADMIN_TOKEN)).await.ok().unwrap();
    assert_eq!(admin.0.user_id, ADMIN_ID);
}
