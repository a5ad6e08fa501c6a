use axum::{Json, extract::Query};
use servly_access::accessible_routes;
use servly_core::AppError;
use tracing::instrument;

use super::model::{
    AccessCheckQuery, AccessCheckResponse, ErrorResponse, HomeResponse, NavigationResponse,
    SessionResponse,
};
use super::service::NavigationService;
use crate::middleware::auth::CurrentSession;

/// Public landing page
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner and public routes", body = HomeResponse)
    ),
    tag = "Navigation"
)]
#[instrument]
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        routes: accessible_routes(None)
            .iter()
            .map(|route| route.to_string())
            .collect(),
    })
}

/// Describe the current session (role, permissions, routes)
#[utoipa::path(
    get,
    path = "/api/session",
    responses(
        (status = 200, description = "Current session; visitor when unauthenticated", body = SessionResponse)
    ),
    security(
        (),
        ("bearer_auth" = [])
    ),
    tag = "Navigation"
)]
#[instrument]
pub async fn get_session(current: CurrentSession) -> Json<SessionResponse> {
    Json(NavigationService::describe_session(current.session()))
}

/// Routes the current session may navigate to
#[utoipa::path(
    get,
    path = "/api/navigation",
    responses(
        (status = 200, description = "Ordered navigation routes", body = NavigationResponse)
    ),
    security(
        (),
        ("bearer_auth" = [])
    ),
    tag = "Navigation"
)]
#[instrument]
pub async fn get_navigation(current: CurrentSession) -> Json<NavigationResponse> {
    Json(NavigationService::navigation(current.session()))
}

/// Check a role (and optional permission) against the current session
#[utoipa::path(
    get,
    path = "/api/access/check",
    params(AccessCheckQuery),
    responses(
        (status = 200, description = "Access decision", body = AccessCheckResponse),
        (status = 400, description = "Unknown role", body = ErrorResponse)
    ),
    security(
        (),
        ("bearer_auth" = [])
    ),
    tag = "Navigation"
)]
#[instrument]
pub async fn check_access(
    current: CurrentSession,
    Query(query): Query<AccessCheckQuery>,
) -> Result<Json<AccessCheckResponse>, AppError> {
    let response = NavigationService::check_access(current.session(), &query)?;
    Ok(Json(response))
}
