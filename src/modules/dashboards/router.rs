use axum::{Router, middleware, routing::get};

use super::controller::{
    admin_dashboard, client_dashboard, employee_dashboard, provider_dashboard, user_management,
};
use crate::middleware::guard::{
    require_admin, require_client, require_employee, require_provider, require_user_manager,
};
use crate::state::AppState;

pub fn init_dashboards_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(
            Router::new()
                .route("/dashboard/cliente", get(client_dashboard))
                .route_layer(middleware::from_fn_with_state(state.clone(), require_client)),
        )
        .merge(
            Router::new()
                .route("/dashboard/prestador", get(provider_dashboard))
                .route_layer(middleware::from_fn_with_state(
                    state.clone(),
                    require_provider,
                )),
        )
        .merge(
            Router::new()
                .route("/dashboard/funcionario", get(employee_dashboard))
                .route_layer(middleware::from_fn_with_state(
                    state.clone(),
                    require_employee,
                )),
        )
        .merge(
            Router::new()
                .route("/dashboard/admin", get(admin_dashboard))
                .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
        )
        .merge(
            Router::new()
                .route("/usuarios", get(user_management))
                .route_layer(middleware::from_fn_with_state(
                    state.clone(),
                    require_user_manager,
                )),
        )
}
