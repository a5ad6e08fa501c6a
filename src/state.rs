use servly_config::{AdminConfig, CorsConfig, JwtConfig};
use tokio::sync::watch;

#[derive(Clone, Debug)]
pub struct AppState {
    pub jwt_config: JwtConfig,
    pub admin_config: AdminConfig,
    pub cors_config: CorsConfig,
    /// Flips to `true` once identity verification is available. Until then
    /// guarded pages see a loading session.
    pub identity_ready: watch::Sender<bool>,
}

impl AppState {
    /// Starts with identity verification not yet available.
    pub fn new(jwt_config: JwtConfig, admin_config: AdminConfig, cors_config: CorsConfig) -> Self {
        let (identity_ready, _) = watch::channel(false);

        Self {
            jwt_config,
            admin_config,
            cors_config,
            identity_ready,
        }
    }

    pub fn is_identity_ready(&self) -> bool {
        *self.identity_ready.borrow()
    }

    pub fn mark_identity_ready(&self) {
        self.identity_ready.send_replace(true);
    }
}

pub fn init_app_state() -> AppState {
    AppState::new(
        JwtConfig::from_env(),
        AdminConfig::from_env(),
        CorsConfig::from_env(),
    )
}
