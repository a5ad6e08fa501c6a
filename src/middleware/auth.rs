use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use servly_access::{Session, SessionState};
use servly_auth::{IdentityRecord, derive_session, verify_token};
use tracing::debug;

use crate::session::SessionProvider;
use crate::state::AppState;

/// The session behind a request, or `None` when the request carries no
/// valid identity token.
///
/// Never rejects: a missing, malformed or expired token yields an absent
/// session, which every access check treats as least privileged.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Option<Session>);

impl CurrentSession {
    pub fn session(&self) -> Option<&Session> {
        self.0.as_ref()
    }

    pub fn resolve(headers: &HeaderMap, state: &AppState) -> Self {
        let Some(auth_header) = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
        else {
            return Self(None);
        };

        let Some(token) = auth_header.strip_prefix("Bearer ") else {
            debug!("Ignoring non-bearer authorization header");
            return Self(None);
        };

        let record = verify_token(token, &state.jwt_config).and_then(IdentityRecord::try_from);

        match record {
            Ok(record) => Self(Some(derive_session(&record, &state.admin_config))),
            Err(err) => {
                debug!(error = %err.error, "Treating request as signed out");
                Self(None)
            }
        }
    }
}

impl SessionProvider for CurrentSession {
    fn current(&self) -> SessionState {
        SessionState::Ready(self.0.clone())
    }
}

/// Session source for guarded pages.
///
/// Reports [`SessionState::Loading`] while identity verification is not yet
/// available, and the request's [`CurrentSession`] afterwards.
#[derive(Debug, Clone)]
pub struct RequestSession(SessionState);

impl RequestSession {
    pub fn resolve(headers: &HeaderMap, state: &AppState) -> Self {
        if !state.is_identity_ready() {
            return Self(SessionState::Loading);
        }

        Self(CurrentSession::resolve(headers, state).current())
    }
}

impl SessionProvider for RequestSession {
    fn current(&self) -> SessionState {
        self.0.clone()
    }
}

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // A guard upstream already resolved it.
        if let Some(session) = parts.extensions.get::<Session>() {
            return Ok(Self(Some(session.clone())));
        }

        Ok(Self::resolve(&parts.headers, state))
    }
}
