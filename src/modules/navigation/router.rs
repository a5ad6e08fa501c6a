use axum::{Router, routing::get};

use super::controller::{check_access, get_navigation, get_session};
use crate::state::AppState;

pub fn init_navigation_router() -> Router<AppState> {
    Router::new()
        .route("/session", get(get_session))
        .route("/navigation", get(get_navigation))
        .route("/access/check", get(check_access))
}
