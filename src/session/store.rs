use servly_access::{AccessRequirement, GuardDecision, SessionState, evaluate_guard};
use servly_auth::{IdentityRecord, derive_session};
use servly_config::AdminConfig;
use tokio::sync::watch;
use tracing::{info, warn};

use super::SessionProvider;

/// Events emitted by the identity provider's auth-state listener.
#[derive(Debug, Clone)]
pub enum AuthEvent {
    /// First report after start-up; `None` when nobody is signed in.
    InitialSession(Option<IdentityRecord>),
    SignedIn(IdentityRecord),
    TokenRefreshed(IdentityRecord),
    SignedOut,
}

/// Holds the current session and recomputes it on every auth event.
///
/// Starts in [`SessionState::Loading`] until the provider reports. Guards
/// subscribe and re-evaluate whenever the value changes; they must not keep
/// decisions made against an older value.
#[derive(Debug)]
pub struct SessionStore {
    sender: watch::Sender<SessionState>,
    admin_config: AdminConfig,
}

impl SessionStore {
    pub fn new(admin_config: AdminConfig) -> Self {
        let (sender, _) = watch::channel(SessionState::Loading);
        Self {
            sender,
            admin_config,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.sender.subscribe()
    }

    pub fn apply(&self, event: AuthEvent) {
        let next = match event {
            AuthEvent::InitialSession(Some(record))
            | AuthEvent::SignedIn(record)
            | AuthEvent::TokenRefreshed(record) => {
                SessionState::Ready(Some(derive_session(&record, &self.admin_config)))
            }
            AuthEvent::InitialSession(None) | AuthEvent::SignedOut => SessionState::Ready(None),
        };

        info!(
            role = ?next.session().map(|s| s.effective_role()),
            authenticated = next.session().is_some(),
            "Session state updated"
        );

        self.sender.send_replace(next);
    }

    /// Wait until the session has loaded, then evaluate the guard.
    pub async fn settled_decision(&self, requirement: &AccessRequirement) -> GuardDecision {
        let mut receiver = self.subscribe();

        match receiver
            .wait_for(|state| !matches!(state, SessionState::Loading))
            .await
        {
            Ok(state) => evaluate_guard(&state, requirement),
            Err(_) => {
                warn!("Session store closed while loading");
                GuardDecision::Defer
            }
        }
    }
}

impl SessionProvider for SessionStore {
    fn current(&self) -> SessionState {
        self.sender.borrow().clone()
    }
}
