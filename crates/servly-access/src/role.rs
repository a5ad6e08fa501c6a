//! Marketplace roles and their rank ordering.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// The role attached to a session.
///
/// Roles are partially ordered by rank:
///
/// ```text
/// admin
///   ↑
/// employee
///   ↑
/// client   provider   (peers, neither outranks the other)
///   ↑         ↑
///      visitor
/// ```
///
/// `admin` and `employee` are disjoint job functions. When either is the
/// *required* role of a check, only an exact match passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Visitor,
    Client,
    Provider,
    Employee,
    Admin,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Visitor,
        Role::Client,
        Role::Provider,
        Role::Employee,
        Role::Admin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Visitor => "visitor",
            Role::Client => "client",
            Role::Provider => "provider",
            Role::Employee => "employee",
            Role::Admin => "admin",
        }
    }

    /// Hierarchy level (higher number = more privileges)
    pub fn rank(&self) -> u8 {
        match self {
            Role::Visitor => 0,
            Role::Client | Role::Provider => 1,
            Role::Employee => 2,
            Role::Admin => 3,
        }
    }

    /// Whether a check requiring this role accepts only this exact role.
    pub fn is_exact_match_only(&self) -> bool {
        matches!(self, Role::Admin | Role::Employee)
    }
}

// Same rank but different role (client vs provider) is incomparable.
impl PartialOrd for Role {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }

        match self.rank().cmp(&other.rank()) {
            Ordering::Equal => None,
            ordering => Some(ordering),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a canonical role name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl std::error::Error for UnknownRole {}

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown role: {}", self.0)
    }
}

/// Parses canonical role names only. Legacy spellings are mapped at the
/// session-construction boundary, not here.
impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}
