//! Page guard decisions.
//!
//! A guard combines the session lifecycle state with an [`AccessRequirement`]
//! and decides whether the page renders, redirects, or waits for the session
//! to finish loading.

use std::fmt;

use crate::permissions::Permission;
use crate::resolver::can_access;
use crate::role::Role;
use crate::session::Session;

/// Public landing page; denied sessions are sent here.
pub const PUBLIC_ENTRY: &str = "/";
/// Sign-in page; signed-out sessions are sent here.
pub const LOGIN_ENTRY: &str = "/login";

/// What a guarded page demands of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessRequirement {
    pub role: Role,
    pub permission: Option<Permission>,
}

impl AccessRequirement {
    pub const fn role(role: Role) -> Self {
        Self {
            role,
            permission: None,
        }
    }

    pub const fn with_permission(self, permission: Permission) -> Self {
        Self {
            role: self.role,
            permission: Some(permission),
        }
    }

    pub fn is_satisfied_by(&self, session: Option<&Session>) -> bool {
        can_access(session, self.role, self.permission)
    }
}

impl fmt::Display for AccessRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.permission {
            Some(permission) => write!(f, "{}+{}", self.role, permission),
            None => write!(f, "{}", self.role),
        }
    }
}

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// The identity provider has not reported yet.
    Loading,
    /// Resolved; `None` means signed out.
    Ready(Option<Session>),
}

impl SessionState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Loading => None,
            SessionState::Ready(session) => session.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
    /// Neither grant nor deny yet; re-evaluate when the session changes.
    Defer,
}

pub fn evaluate_guard(state: &SessionState, requirement: &AccessRequirement) -> GuardDecision {
    match state {
        SessionState::Loading => GuardDecision::Defer,
        SessionState::Ready(None) => GuardDecision::Redirect(LOGIN_ENTRY),
        SessionState::Ready(Some(session)) => {
            if requirement.is_satisfied_by(Some(session)) {
                GuardDecision::Render
            } else {
                GuardDecision::Redirect(PUBLIC_ENTRY)
            }
        }
    }
}
