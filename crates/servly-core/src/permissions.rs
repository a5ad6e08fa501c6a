//! Permission key constants for Servly.
//!
//! These are the wire names of the permission flags carried by every role's
//! permission set. UI code and query strings refer to permissions by these
//! keys, so they are kept in one place.
//!
//! # Example
//!
//! ```ignore
//! use servly_access::{has_permission, Session};
//! use servly_core::permissions;
//!
//! if has_permission(Some(&session), permissions::CAN_MANAGE_USERS) {
//!     // Show the user management link
//! }
//! ```

// =============================================================================
// Administration
// =============================================================================

/// Permission to create, suspend and edit marketplace accounts
pub const CAN_MANAGE_USERS: &str = "canManageUsers";
/// Permission to open the admin area
pub const CAN_ACCESS_ADMIN: &str = "canAccessAdmin";

// =============================================================================
// Operations
// =============================================================================

/// Permission to view platform analytics
pub const CAN_VIEW_ANALYTICS: &str = "canViewAnalytics";
/// Permission to moderate listings, reviews and chat reports
pub const CAN_MODERATE_CONTENT: &str = "canModerateContent";
/// Permission to list every service, including unpublished ones
pub const CAN_VIEW_ALL_SERVICES: &str = "canViewAllServices";
/// Permission to view operational reports
pub const CAN_VIEW_REPORTS: &str = "canViewReports";

/// Every known permission key, in declaration order.
pub const ALL: [&str; 6] = [
    CAN_MANAGE_USERS,
    CAN_VIEW_ANALYTICS,
    CAN_MODERATE_CONTENT,
    CAN_VIEW_ALL_SERVICES,
    CAN_VIEW_REPORTS,
    CAN_ACCESS_ADMIN,
];
