use servly::router::init_router;
use servly::state::AppState;
use servly_auth::create_identity_token;
use servly_config::{AdminConfig, CorsConfig, JwtConfig};
use uuid::Uuid;

pub const TEST_SECRET: &str = "test-secret-shared-with-identity-provider";
pub const ADMIN_EMAIL: &str = "ops@servly.com";

/// State whose identity verification has not come up yet.
#[allow(dead_code)]
pub fn loading_state() -> AppState {
    AppState::new(
        JwtConfig::new(TEST_SECRET, 3600),
        AdminConfig::new([ADMIN_EMAIL]),
        CorsConfig::from_list("http://localhost:5173"),
    )
}

pub fn test_state() -> AppState {
    let state = loading_state();
    state.mark_identity_ready();
    state
}

#[allow(dead_code)]
pub fn setup_test_app() -> axum::Router {
    init_router(test_state())
}

/// Token with `app_metadata.role` set, as an administrator would assign it.
#[allow(dead_code)]
pub fn token_with_role(email: &str, role: &str) -> String {
    create_identity_token(
        Uuid::new_v4(),
        email,
        Some(role),
        None,
        &test_state().jwt_config,
    )
    .unwrap()
}

/// Token carrying only the legacy sign-up type.
#[allow(dead_code)]
pub fn token_with_user_type(email: &str, user_type: &str) -> String {
    create_identity_token(
        Uuid::new_v4(),
        email,
        None,
        Some(user_type),
        &test_state().jwt_config,
    )
    .unwrap()
}

#[allow(dead_code)]
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
