//! Session lifecycle.
//!
//! Guards never read ambient storage for the session. They ask a
//! [`SessionProvider`], which is either the long-lived [`SessionStore`]
//! fed by identity-provider events or the request-scoped
//! [`CurrentSession`](crate::middleware::auth::CurrentSession) extractor.

pub mod store;

pub use servly_access::SessionState;
pub use store::{AuthEvent, SessionStore};

/// Source of the session value that guards evaluate.
pub trait SessionProvider {
    fn current(&self) -> SessionState;
}
