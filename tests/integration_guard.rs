mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use common::{
    ADMIN_EMAIL, bearer, loading_state, setup_test_app, token_with_role, token_with_user_type,
};
use servly::router::init_router;

async fn get(path: &str, token: Option<&str>) -> axum::response::Response {
    let app = setup_test_app();

    let mut request = Request::builder().method("GET").uri(path);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, bearer(token));
    }

    app.oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_signed_out_request_redirects_to_login() {
    let response = get("/dashboard/cliente", None).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_invalid_token_is_treated_as_signed_out() {
    let response = get("/dashboard/prestador", Some("not-a-jwt")).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_client_renders_client_dashboard() {
    let token = token_with_role("ana@servly.com", "client");
    let response = get("/dashboard/cliente", Some(&token)).await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["role"], "client");
    assert_eq!(body["email"], "ana@servly.com");
}

#[tokio::test]
async fn test_provider_is_denied_client_dashboard() {
    let token = token_with_role("joao@servly.com", "provider");
    let response = get("/dashboard/cliente", Some(&token)).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_legacy_user_type_reaches_provider_dashboard() {
    let token = token_with_user_type("joao@servly.com", "prestador");
    let response = get("/dashboard/prestador", Some(&token)).await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["role"], "provider");
}

#[tokio::test]
async fn test_admin_is_denied_employee_dashboard() {
    let token = token_with_role("root@servly.com", "admin");
    let response = get("/dashboard/funcionario", Some(&token)).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_employee_renders_employee_dashboard() {
    let token = token_with_role("maria@servly.com", "funcionario");
    let response = get("/dashboard/funcionario", Some(&token)).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_allow_listed_admin_manages_users() {
    let token = token_with_user_type(ADMIN_EMAIL, "cliente");
    let response = get("/usuarios", Some(&token)).await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["role"], "admin");
    let permissions = body["permissions"].as_array().unwrap();
    assert!(permissions.iter().any(|p| p == "canManageUsers"));
}

#[tokio::test]
async fn test_client_is_denied_user_management() {
    let token = token_with_role("ana@servly.com", "client");
    let response = get("/usuarios", Some(&token)).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_unrecognized_role_is_denied() {
    let token = token_with_role("eve@servly.com", "superuser");
    let response = get("/dashboard/cliente", Some(&token)).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_admin_dashboard_for_stored_admin() {
    let token = token_with_role("root@servly.com", "administrador");
    let response = get("/dashboard/admin", Some(&token)).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_guard_defers_while_identity_is_loading() {
    let state = loading_state();
    let token = token_with_role("ana@servly.com", "client");

    let request = Request::builder()
        .method("GET")
        .uri("/dashboard/cliente")
        .header(header::AUTHORIZATION, bearer(&token))
        .body(Body::empty())
        .unwrap();
    let response = init_router(state.clone()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(response.headers().get(header::LOCATION).is_none());
    let body = json_body(response).await;
    assert_eq!(body["error"], "Session is still loading");

    state.mark_identity_ready();

    let request = Request::builder()
        .method("GET")
        .uri("/dashboard/cliente")
        .header(header::AUTHORIZATION, bearer(&token))
        .body(Body::empty())
        .unwrap();
    let response = init_router(state).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_signed_out_request_defers_while_identity_is_loading() {
    let request = Request::builder()
        .method("GET")
        .uri("/usuarios")
        .body(Body::empty())
        .unwrap();
    let response = init_router(loading_state()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
