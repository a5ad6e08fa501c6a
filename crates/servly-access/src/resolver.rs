//! Access decisions over a session.
//!
//! Every function here is total: an absent session, a malformed role or an
//! unknown permission key produces a least-privilege answer, never an error.
//! Nothing is cached between calls.
//!
//! # Example
//!
//! ```ignore
//! use servly_access::{can_access, accessible_routes, Permission, Role};
//!
//! if !can_access(Some(&session), Role::Admin, Some(Permission::CanAccessAdmin)) {
//!     return Redirect::to("/");
//! }
//! let links = accessible_routes(Some(&session));
//! ```

use tracing::warn;

use crate::permissions::Permission;
use crate::role::Role;
use crate::routes::routes_for;
use crate::session::{RoleClaim, Session};

fn effective_role(session: Option<&Session>) -> Role {
    session.map_or(Role::Visitor, Session::effective_role)
}

/// Check whether the session's role meets the required role.
///
/// `admin` and `employee` requirements need an exact match. Any other
/// requirement passes for roles that rank at or above it; `client` and
/// `provider` never satisfy each other. An absent session is a visitor.
pub fn has_role(session: Option<&Session>, required: Role) -> bool {
    let role = effective_role(session);

    if required.is_exact_match_only() {
        role == required
    } else {
        role >= required
    }
}

/// Look up a permission by wire key in the session's effective set.
///
/// Returns `false` for an absent session or an unknown key.
pub fn has_permission(session: Option<&Session>, key: &str) -> bool {
    let Some(session) = session else {
        return false;
    };

    Permission::from_key(key).is_some_and(|p| session.effective_permissions().get(p))
}

/// The single gate used by guarded pages.
///
/// Denies an absent session outright. A session whose role is unset or
/// unrecognized is denied with a warning.
pub fn can_access(
    session: Option<&Session>,
    required: Role,
    permission: Option<Permission>,
) -> bool {
    let Some(current) = session else {
        return false;
    };

    match &current.role {
        RoleClaim::Known(_) => {}
        RoleClaim::Unset => {
            warn!(
                email = current.email().unwrap_or("<anonymous>"),
                required = %required,
                "Access check on a session without a role"
            );
            return false;
        }
        RoleClaim::Unrecognized(raw) => {
            warn!(
                email = current.email().unwrap_or("<anonymous>"),
                role = %raw,
                required = %required,
                "Access check on a session with an unrecognized role"
            );
            return false;
        }
    }

    has_role(session, required) && permission.is_none_or(|p| has_permission(session, p.key()))
}

/// Navigation routes for the session's role. An absent session gets the
/// visitor list.
pub fn accessible_routes(session: Option<&Session>) -> &'static [&'static str] {
    routes_for(effective_role(session))
}
