//! Role dashboards. Each handler runs only after its page guard rendered,
//! so the session is always present in the request extensions.

use axum::{Extension, Json};
use servly_access::Session;
use tracing::instrument;

use super::model::DashboardResponse;

/// Client dashboard (requires client)
#[utoipa::path(
    get,
    path = "/dashboard/cliente",
    responses(
        (status = 200, description = "Client dashboard", body = DashboardResponse),
        (status = 303, description = "Redirect to login or the public landing page")
    ),
    security(("bearer_auth" = [])),
    tag = "Dashboards"
)]
#[instrument(skip_all)]
pub async fn client_dashboard(Extension(session): Extension<Session>) -> Json<DashboardResponse> {
    Json(DashboardResponse::for_session("client", &session))
}

/// Provider dashboard (requires provider)
#[utoipa::path(
    get,
    path = "/dashboard/prestador",
    responses(
        (status = 200, description = "Provider dashboard", body = DashboardResponse),
        (status = 303, description = "Redirect to login or the public landing page")
    ),
    security(("bearer_auth" = [])),
    tag = "Dashboards"
)]
#[instrument(skip_all)]
pub async fn provider_dashboard(
    Extension(session): Extension<Session>,
) -> Json<DashboardResponse> {
    Json(DashboardResponse::for_session("provider", &session))
}

/// Employee dashboard (requires exactly employee)
#[utoipa::path(
    get,
    path = "/dashboard/funcionario",
    responses(
        (status = 200, description = "Employee dashboard", body = DashboardResponse),
        (status = 303, description = "Redirect to login or the public landing page")
    ),
    security(("bearer_auth" = [])),
    tag = "Dashboards"
)]
#[instrument(skip_all)]
pub async fn employee_dashboard(
    Extension(session): Extension<Session>,
) -> Json<DashboardResponse> {
    Json(DashboardResponse::for_session("employee", &session))
}

/// Admin dashboard (requires admin with canAccessAdmin)
#[utoipa::path(
    get,
    path = "/dashboard/admin",
    responses(
        (status = 200, description = "Admin dashboard", body = DashboardResponse),
        (status = 303, description = "Redirect to login or the public landing page")
    ),
    security(("bearer_auth" = [])),
    tag = "Dashboards"
)]
#[instrument(skip_all)]
pub async fn admin_dashboard(Extension(session): Extension<Session>) -> Json<DashboardResponse> {
    Json(DashboardResponse::for_session("admin", &session))
}

/// User management (requires admin with canManageUsers)
#[utoipa::path(
    get,
    path = "/usuarios",
    responses(
        (status = 200, description = "User management area", body = DashboardResponse),
        (status = 303, description = "Redirect to login or the public landing page")
    ),
    security(("bearer_auth" = [])),
    tag = "Dashboards"
)]
#[instrument(skip_all)]
pub async fn user_management(Extension(session): Extension<Session>) -> Json<DashboardResponse> {
    Json(DashboardResponse::for_session("users", &session))
}
