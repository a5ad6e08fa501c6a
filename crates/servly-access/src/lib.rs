//! # Servly Access
//!
//! Role-based access control for the Servly marketplace.
//!
//! - [`role`]: The five marketplace roles and their rank ordering
//! - [`permissions`]: Permission flags and each role's canonical set
//! - [`routes`]: Navigation routes shown to each role
//! - [`session`]: The session descriptor the resolver reads
//! - [`resolver`]: `has_role`, `has_permission`, `can_access`, `accessible_routes`
//! - [`guard`]: Page guard decisions over the session lifecycle
//!
//! The resolver is pure. It performs no I/O and keeps no state, so it can be
//! called from any number of threads without synchronization.
//!
//! # Example
//!
//! ```ignore
//! use servly_access::{Role, Session, can_access, has_role};
//!
//! let session = Session::visitor();
//! assert!(has_role(Some(&session), Role::Visitor));
//! assert!(!can_access(None, Role::Client, None));
//! ```

pub mod guard;
pub mod permissions;
pub mod resolver;
pub mod role;
pub mod routes;
pub mod session;

// Re-export commonly used types at crate root
pub use guard::{AccessRequirement, GuardDecision, SessionState, evaluate_guard};
pub use permissions::{Permission, PermissionSet};
pub use resolver::{accessible_routes, can_access, has_permission, has_role};
pub use role::Role;
pub use session::{Identity, RoleClaim, Session};
