//! Page guards for Axum.
//!
//! Every protected page sits behind [`enforce`], which asks a
//! [`SessionProvider`] for the session and applies [`evaluate_guard`]:
//!
//! - granted: the [`Session`](servly_access::Session) is stored in the request
//!   extensions and the page handler runs
//! - signed out: `303` to the login page
//! - denied: `303` to the public landing page
//! - still loading: `503`, the client retries once the session settles
//!
//! The `require_*` layers use a [`RequestSession`]; any other provider, such
//! as a [`SessionStore`](crate::session::SessionStore), can be passed to
//! [`enforce`] directly.
//!
//! # Usage with axum::middleware::from_fn_with_state
//!
//! ```rust,ignore
//! use axum::{Router, middleware};
//! use crate::middleware::guard::require_provider;
//!
//! let provider_pages = Router::new()
//!     .route("/dashboard/prestador", get(provider_dashboard))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_provider));
//! ```

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use servly_access::{
    AccessRequirement, GuardDecision, Permission, Role, SessionState, evaluate_guard,
};
use servly_core::AppError;
use tracing::info;

use crate::metrics::track_access_decision;
use crate::middleware::auth::RequestSession;
use crate::session::SessionProvider;
use crate::state::AppState;

pub const CLIENT_AREA: AccessRequirement = AccessRequirement::role(Role::Client);
pub const PROVIDER_AREA: AccessRequirement = AccessRequirement::role(Role::Provider);
pub const EMPLOYEE_AREA: AccessRequirement = AccessRequirement::role(Role::Employee);
pub const ADMIN_AREA: AccessRequirement =
    AccessRequirement::role(Role::Admin).with_permission(Permission::CanAccessAdmin);
pub const USER_MANAGEMENT: AccessRequirement =
    AccessRequirement::role(Role::Admin).with_permission(Permission::CanManageUsers);

/// Run the guard for `requirement` against `provider` and either continue or
/// short-circuit.
pub async fn enforce(
    provider: &impl SessionProvider,
    mut req: Request,
    next: Next,
    requirement: AccessRequirement,
) -> Response {
    let current = provider.current();

    let decision = evaluate_guard(&current, &requirement);
    track_access_decision(&requirement, &decision);

    match decision {
        GuardDecision::Render => {
            if let SessionState::Ready(Some(session)) = current {
                req.extensions_mut().insert(session);
            }
            next.run(req).await
        }
        GuardDecision::Redirect(to) => {
            info!(
                path = %req.uri().path(),
                required = %requirement,
                role = ?current.session().map(|s| s.effective_role()),
                redirect = to,
                "Guard denied access"
            );
            Redirect::to(to).into_response()
        }
        GuardDecision::Defer => {
            info!(
                path = %req.uri().path(),
                required = %requirement,
                "Guard deferred while the session loads"
            );
            AppError::service_unavailable("Session is still loading".to_string()).into_response()
        }
    }
}

async fn guard_request(
    state: &AppState,
    req: Request,
    next: Next,
    requirement: AccessRequirement,
) -> Response {
    let provider = RequestSession::resolve(req.headers(), state);
    enforce(&provider, req, next, requirement).await
}

pub async fn require_client(State(state): State<AppState>, req: Request, next: Next) -> Response {
    guard_request(&state, req, next, CLIENT_AREA).await
}

pub async fn require_provider(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    guard_request(&state, req, next, PROVIDER_AREA).await
}

pub async fn require_employee(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    guard_request(&state, req, next, EMPLOYEE_AREA).await
}

pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    guard_request(&state, req, next, ADMIN_AREA).await
}

pub async fn require_user_manager(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    guard_request(&state, req, next, USER_MANAGEMENT).await
}
