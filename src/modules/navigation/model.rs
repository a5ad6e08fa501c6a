use serde::{Deserialize, Serialize};
use servly_access::{PermissionSet, Role};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HomeResponse {
    pub service: String,
    pub version: String,
    pub routes: Vec<String>,
}

/// What the UI needs to render chrome for the current session.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub authenticated: bool,
    pub email: Option<String>,
    /// Effective role; unset or unrecognized roles report `visitor`
    pub role: Role,
    pub permissions: PermissionSet,
    pub routes: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NavigationResponse {
    pub role: Role,
    pub routes: Vec<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct AccessCheckQuery {
    /// Required role; legacy spellings are accepted
    pub role: String,
    /// Optional permission key such as `canManageUsers`
    pub permission: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccessCheckResponse {
    pub role: Role,
    pub permission: Option<String>,
    pub granted: bool,
}
