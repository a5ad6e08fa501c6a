//! Navigation routes shown to each role.
//!
//! These lists drive menus and link rendering. They do not enforce anything;
//! each guarded page runs its own access check.

use crate::role::Role;

pub const VISITOR_ROUTES: &[&str] = &["/", "/servicos", "/como-funciona", "/login", "/cadastro"];

pub const CLIENT_ROUTES: &[&str] = &[
    "/",
    "/servicos",
    "/dashboard/cliente",
    "/perfil",
    "/chat",
    "/pagamentos",
    "/notificacoes",
];

pub const PROVIDER_ROUTES: &[&str] = &[
    "/",
    "/servicos",
    "/dashboard/prestador",
    "/agenda",
    "/perfil",
    "/chat",
    "/pagamentos",
    "/notificacoes",
];

pub const EMPLOYEE_ROUTES: &[&str] = &[
    "/",
    "/servicos",
    "/dashboard/funcionario",
    "/moderacao",
    "/relatorios",
    "/notificacoes",
];

pub const ADMIN_ROUTES: &[&str] = &[
    "/",
    "/servicos",
    "/dashboard/admin",
    "/usuarios",
    "/moderacao",
    "/relatorios",
    "/analytics",
    "/notificacoes",
];

pub fn routes_for(role: Role) -> &'static [&'static str] {
    match role {
        Role::Visitor => VISITOR_ROUTES,
        Role::Client => CLIENT_ROUTES,
        Role::Provider => PROVIDER_ROUTES,
        Role::Employee => EMPLOYEE_ROUTES,
        Role::Admin => ADMIN_ROUTES,
    }
}
