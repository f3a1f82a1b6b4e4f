use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::{Extension, Json, Router, middleware};
use http_body_util::BodyExt;
use sokoni_access::Role;
use sokoni_access::claims::Claims;
use sokoni_access::middleware::auth::{AuthUser, RequireProductsManage, RequireSystemManage};
use sokoni_access::middleware::role::{RequireAdminPanel, RequireRoleManager, require_admin_panel};
use tower::ServiceExt;
use uuid::Uuid;

fn test_claims(role: Role) -> Claims {
    Claims {
        sub: Uuid::new_v4(),
        email: "test@sokoni.example".to_string(),
        role,
    }
}

async fn whoami(auth_user: AuthUser) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "email": auth_user.email(),
        "role": auth_user.role(),
    }))
}

async fn update_catalog(
    RequireProductsManage(auth_user): RequireProductsManage,
) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "updated_by": auth_user.email() }))
}

async fn assign_roles(_guard: RequireRoleManager) -> &'static str {
    "ok"
}

async fn platform_settings(RequireSystemManage(auth_user): RequireSystemManage) -> String {
    format!("settings for {}", auth_user.email())
}

async fn panel_status(_panel: RequireAdminPanel) -> &'static str {
    "panel open"
}

async fn dashboard() -> &'static str {
    "dashboard"
}

/// The guard surface a Sokoni service mounts, with the gateway's claims
/// injection simulated by an `Extension` layer.
fn app(claims: Claims) -> Router {
    Router::new()
        .route("/whoami", get(whoami))
        .route("/catalog", get(update_catalog))
        .route("/roles/assign", get(assign_roles))
        .route("/system/settings", get(platform_settings))
        .route("/panel-status", get(panel_status))
        .nest(
            "/panel",
            Router::new()
                .route("/dashboard", get(dashboard))
                .layer(middleware::from_fn(require_admin_panel)),
        )
        .layer(Extension(claims))
}

/// Same routes with no claims attached, as if the gateway were bypassed.
fn app_without_gateway() -> Router {
    Router::new()
        .route("/whoami", get(whoami))
        .nest(
            "/panel",
            Router::new()
                .route("/dashboard", get(dashboard))
                .layer(middleware::from_fn(require_admin_panel)),
        )
}

async fn send(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&body)
        .unwrap_or_else(|_| serde_json::json!(String::from_utf8_lossy(&body)));

    (status, body)
}

// ============ AuthUser Tests ============

#[tokio::test]
async fn test_verified_caller_passes_through() {
    let (status, body) = send(app(test_claims(Role::Supplier)), "/whoami").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "test@sokoni.example");
    assert_eq!(body["role"], "supplier");
}

#[tokio::test]
async fn test_missing_claims_is_unauthorized() {
    let (status, body) = send(app_without_gateway(), "/whoami").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].as_str().unwrap().contains("session claims"));
}

// ============ Permission Extractor Tests ============

#[tokio::test]
async fn test_permission_extractor_admits_admin() {
    let (status, body) = send(app(test_claims(Role::Admin)), "/catalog").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updated_by"], "test@sokoni.example");
}

#[tokio::test]
async fn test_permission_extractor_admits_god_via_sentinel() {
    let (status, _) = send(app(test_claims(Role::God)), "/catalog").await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_permission_extractor_rejects_own_scope_roles() {
    let (status, body) = send(app(test_claims(Role::Supplier)), "/catalog").await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["error"].as_str().unwrap().contains("products.manage"));
}

#[tokio::test]
async fn test_sentinel_gate_admits_only_god() {
    let (status, _) = send(app(test_claims(Role::God)), "/system/settings").await;
    assert_eq!(status, StatusCode::OK);

    // No other role holds the sentinel, not even admin.
    let (status, body) = send(app(test_claims(Role::Admin)), "/system/settings").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["error"].as_str().unwrap().contains("system.manage"));
}

// ============ Admin Panel Tests ============

#[tokio::test]
async fn test_admin_panel_admits_staff_and_partner_roles() {
    for role in [
        Role::God,
        Role::Admin,
        Role::Exporter,
        Role::Supplier,
        Role::Moderator,
    ] {
        let (status, _) = send(app(test_claims(role)), "/panel/dashboard").await;
        assert_eq!(status, StatusCode::OK, "{role} should reach the panel");
    }
}

#[tokio::test]
async fn test_admin_panel_rejects_customers() {
    let (status, body) = send(app(test_claims(Role::User)), "/panel/dashboard").await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["error"].as_str().unwrap().contains("Admin panel"));
}

#[tokio::test]
async fn test_admin_panel_extractor_matches_the_layer() {
    let (status, _) = send(app(test_claims(Role::Exporter)), "/panel-status").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(app(test_claims(Role::User)), "/panel-status").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_panel_requires_claims() {
    let (status, _) = send(app_without_gateway(), "/panel/dashboard").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_panel_rejects_unknown_roles_as_customers() {
    let json = r#"{"sub":"7e0a1c8e-24cb-41d2-9d70-000000000010","email":"legacy@sokoni.example","role":"warehouse"}"#;
    let claims: Claims = serde_json::from_str(json).unwrap();

    let (status, _) = send(app(claims), "/panel/dashboard").await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

// ============ Role Management Tests ============

#[tokio::test]
async fn test_role_management_admits_god_and_admin() {
    for role in [Role::God, Role::Admin] {
        let (status, _) = send(app(test_claims(role)), "/roles/assign").await;
        assert_eq!(status, StatusCode::OK, "{role} should manage roles");
    }
}

#[tokio::test]
async fn test_role_management_rejects_everyone_else() {
    for role in [Role::Exporter, Role::Supplier, Role::Moderator, Role::User] {
        let (status, body) = send(app(test_claims(role)), "/roles/assign").await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{role} must not manage roles");
        assert!(body["error"].as_str().unwrap().contains("Role management"));
    }
}
