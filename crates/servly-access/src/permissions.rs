//! Permission flags and the canonical permission set of every role.

use serde::{Deserialize, Serialize};
use servly_core::permissions as keys;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::role::Role;

/// A single named permission flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum Permission {
    CanManageUsers,
    CanViewAnalytics,
    CanModerateContent,
    CanViewAllServices,
    CanViewReports,
    CanAccessAdmin,
}

impl Permission {
    pub const ALL: [Permission; 6] = [
        Permission::CanManageUsers,
        Permission::CanViewAnalytics,
        Permission::CanModerateContent,
        Permission::CanViewAllServices,
        Permission::CanViewReports,
        Permission::CanAccessAdmin,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Permission::CanManageUsers => keys::CAN_MANAGE_USERS,
            Permission::CanViewAnalytics => keys::CAN_VIEW_ANALYTICS,
            Permission::CanModerateContent => keys::CAN_MODERATE_CONTENT,
            Permission::CanViewAllServices => keys::CAN_VIEW_ALL_SERVICES,
            Permission::CanViewReports => keys::CAN_VIEW_REPORTS,
            Permission::CanAccessAdmin => keys::CAN_ACCESS_ADMIN,
        }
    }

    /// Look up a permission by its wire key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Permission::ALL.into_iter().find(|p| p.key() == key)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPermission(pub String);

impl std::error::Error for UnknownPermission {}

impl fmt::Display for UnknownPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown permission: {}", self.0)
    }
}

impl FromStr for Permission {
    type Err = UnknownPermission;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::from_key(s).ok_or_else(|| UnknownPermission(s.to_string()))
    }
}

/// The full set of permission flags held by a session.
///
/// Serialized with the wire keys (`canManageUsers`, ...), so it can be
/// handed to UI code as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PermissionSet {
    pub can_manage_users: bool,
    pub can_view_analytics: bool,
    pub can_moderate_content: bool,
    pub can_view_all_services: bool,
    pub can_view_reports: bool,
    pub can_access_admin: bool,
}

const NO_PERMISSIONS: PermissionSet = PermissionSet {
    can_manage_users: false,
    can_view_analytics: false,
    can_moderate_content: false,
    can_view_all_services: false,
    can_view_reports: false,
    can_access_admin: false,
};

const EMPLOYEE_PERMISSIONS: PermissionSet = PermissionSet {
    can_manage_users: false,
    can_view_analytics: false,
    can_moderate_content: true,
    can_view_all_services: true,
    can_view_reports: true,
    can_access_admin: false,
};

const ADMIN_PERMISSIONS: PermissionSet = PermissionSet {
    can_manage_users: true,
    can_view_analytics: true,
    can_moderate_content: true,
    can_view_all_services: true,
    can_view_reports: true,
    can_access_admin: true,
};

impl PermissionSet {
    /// The canonical permission set of a role.
    ///
    /// Defined per role, not derived from rank: an admin's set is not the
    /// union of the sets below it.
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Visitor | Role::Client | Role::Provider => NO_PERMISSIONS,
            Role::Employee => EMPLOYEE_PERMISSIONS,
            Role::Admin => ADMIN_PERMISSIONS,
        }
    }

    pub fn get(&self, permission: Permission) -> bool {
        match permission {
            Permission::CanManageUsers => self.can_manage_users,
            Permission::CanViewAnalytics => self.can_view_analytics,
            Permission::CanModerateContent => self.can_moderate_content,
            Permission::CanViewAllServices => self.can_view_all_services,
            Permission::CanViewReports => self.can_view_reports,
            Permission::CanAccessAdmin => self.can_access_admin,
        }
    }

    /// Builder-style toggle, used to assemble per-session overrides.
    pub fn with(mut self, permission: Permission, value: bool) -> Self {
        let flag = match permission {
            Permission::CanManageUsers => &mut self.can_manage_users,
            Permission::CanViewAnalytics => &mut self.can_view_analytics,
            Permission::CanModerateContent => &mut self.can_moderate_content,
            Permission::CanViewAllServices => &mut self.can_view_all_services,
            Permission::CanViewReports => &mut self.can_view_reports,
            Permission::CanAccessAdmin => &mut self.can_access_admin,
        };
        *flag = value;
        self
    }

    /// Permissions set to `true`, in declaration order.
    pub fn granted(&self) -> Vec<Permission> {
        Permission::ALL
            .into_iter()
            .filter(|p| self.get(*p))
            .collect()
    }
}
