use serde::{Deserialize, Serialize};
use servly_access::{Permission, Role, Session, accessible_routes};
use utoipa::ToSchema;

/// Descriptor for a role dashboard. Rendering happens client-side.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardResponse {
    pub dashboard: String,
    pub email: Option<String>,
    pub role: Role,
    pub permissions: Vec<Permission>,
    pub routes: Vec<String>,
}

impl DashboardResponse {
    pub fn for_session(dashboard: &str, session: &Session) -> Self {
        Self {
            dashboard: dashboard.to_string(),
            email: session.email().map(str::to_string),
            role: session.effective_role(),
            permissions: session.effective_permissions().granted(),
            routes: accessible_routes(Some(session))
                .iter()
                .map(|route| route.to_string())
                .collect(),
        }
    }
}
