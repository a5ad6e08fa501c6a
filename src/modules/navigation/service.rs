use servly_access::{Session, accessible_routes, can_access, has_permission};
use servly_auth::normalize_role;
use servly_core::AppError;

use super::model::{AccessCheckQuery, AccessCheckResponse, NavigationResponse, SessionResponse};
use crate::metrics::track_access_check;

fn owned_routes(session: Option<&Session>) -> Vec<String> {
    accessible_routes(session)
        .iter()
        .map(|route| route.to_string())
        .collect()
}

pub struct NavigationService;

impl NavigationService {
    pub fn describe_session(session: Option<&Session>) -> SessionResponse {
        SessionResponse {
            authenticated: session.is_some_and(Session::is_authenticated),
            email: session.and_then(Session::email).map(str::to_string),
            role: session.map(Session::effective_role).unwrap_or_default(),
            permissions: session
                .map(Session::effective_permissions)
                .unwrap_or_default(),
            routes: owned_routes(session),
        }
    }

    pub fn navigation(session: Option<&Session>) -> NavigationResponse {
        NavigationResponse {
            role: session.map(Session::effective_role).unwrap_or_default(),
            routes: owned_routes(session),
        }
    }

    /// Evaluate an ad-hoc access check for conditional rendering.
    ///
    /// An unknown role is a client error. An unknown permission key is not;
    /// it simply denies.
    pub fn check_access(
        session: Option<&Session>,
        query: &AccessCheckQuery,
    ) -> Result<AccessCheckResponse, AppError> {
        let role = normalize_role(&query.role).ok_or_else(|| {
            AppError::bad_request(anyhow::anyhow!("Unknown role: {}", query.role))
        })?;

        let granted = can_access(session, role, None)
            && query
                .permission
                .as_deref()
                .is_none_or(|key| has_permission(session, key));

        track_access_check(granted);

        Ok(AccessCheckResponse {
            role,
            permission: query.permission.clone(),
            granted,
        })
    }
}
