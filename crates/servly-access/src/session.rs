//! Session descriptor consumed by the resolver.
//!
//! A [`Session`] is built once per authentication event by the identity
//! boundary and handed to the resolver by value or reference. The resolver
//! never builds or mutates one.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::permissions::PermissionSet;
use crate::role::Role;

/// The authenticated user behind a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
}

/// The role value carried by a session, as derived from the identity store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleClaim {
    /// A canonical role.
    Known(Role),
    /// The identity store had no role for this user.
    Unset,
    /// The identity store had a role value outside the enumeration.
    Unrecognized(String),
}

impl RoleClaim {
    pub fn role(&self) -> Option<Role> {
        match self {
            RoleClaim::Known(role) => Some(*role),
            RoleClaim::Unset | RoleClaim::Unrecognized(_) => None,
        }
    }
}

impl From<Role> for RoleClaim {
    fn from(role: Role) -> Self {
        RoleClaim::Known(role)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub identity: Option<Identity>,
    pub role: RoleClaim,
    pub permission_override: Option<PermissionSet>,
}

impl Session {
    /// An unauthenticated session.
    pub fn visitor() -> Self {
        Self {
            identity: None,
            role: RoleClaim::Known(Role::Visitor),
            permission_override: None,
        }
    }

    pub fn authenticated(identity: Identity, role: impl Into<RoleClaim>) -> Self {
        Self {
            identity: Some(identity),
            role: role.into(),
            permission_override: None,
        }
    }

    pub fn with_permission_override(mut self, permissions: PermissionSet) -> Self {
        self.permission_override = Some(permissions);
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn email(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.email.as_str())
    }

    /// The role used for decisions. Anything but a known role is a visitor.
    pub fn effective_role(&self) -> Role {
        self.role.role().unwrap_or(Role::Visitor)
    }

    /// The override applies only on top of a known role; a session with an
    /// unset or unrecognized role always gets the visitor set.
    pub fn effective_permissions(&self) -> PermissionSet {
        match (&self.role, self.permission_override) {
            (RoleClaim::Known(_), Some(overridden)) => overridden,
            _ => PermissionSet::for_role(self.effective_role()),
        }
    }
}
