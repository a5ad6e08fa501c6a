use servly_access::{Permission, PermissionSet, Role};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::dashboards::model::DashboardResponse;
use crate::modules::navigation::model::{
    AccessCheckResponse, ErrorResponse, HomeResponse, NavigationResponse, SessionResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::navigation::controller::home,
        crate::modules::navigation::controller::get_session,
        crate::modules::navigation::controller::get_navigation,
        crate::modules::navigation::controller::check_access,
        crate::modules::dashboards::controller::client_dashboard,
        crate::modules::dashboards::controller::provider_dashboard,
        crate::modules::dashboards::controller::employee_dashboard,
        crate::modules::dashboards::controller::admin_dashboard,
        crate::modules::dashboards::controller::user_management,
    ),
    components(
        schemas(
            Role,
            Permission,
            PermissionSet,
            HomeResponse,
            SessionResponse,
            NavigationResponse,
            AccessCheckResponse,
            DashboardResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Navigation", description = "Session, navigation and access checks"),
        (name = "Dashboards", description = "Role-guarded pages")
    ),
    info(
        title = "Servly API",
        version = "0.1.0",
        description = "Access control surface of the Servly service marketplace.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
