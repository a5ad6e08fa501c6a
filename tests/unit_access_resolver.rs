use servly_access::routes::VISITOR_ROUTES;
use servly_access::{
    Identity, Permission, PermissionSet, Role, RoleClaim, Session, accessible_routes, can_access,
    has_permission, has_role,
};
use servly_auth::{IdentityRecord, derive_session};
use servly_config::AdminConfig;
use uuid::Uuid;

fn session_with(role: impl Into<RoleClaim>) -> Session {
    Session::authenticated(
        Identity {
            id: Uuid::new_v4(),
            email: "user@servly.com".to_string(),
        },
        role,
    )
}

#[test]
fn test_every_role_satisfies_itself() {
    for role in Role::ALL {
        let session = session_with(role);
        assert!(has_role(Some(&session), role), "{} should satisfy itself", role);
    }
}

#[test]
fn test_admin_requirement_is_exact() {
    for role in Role::ALL {
        let session = session_with(role);
        assert_eq!(has_role(Some(&session), Role::Admin), role == Role::Admin);
    }
}

#[test]
fn test_employee_requirement_is_exact() {
    for role in Role::ALL {
        let session = session_with(role);
        assert_eq!(
            has_role(Some(&session), Role::Employee),
            role == Role::Employee,
            "{} against employee",
            role
        );
    }
}

#[test]
fn test_client_and_provider_are_peers() {
    let client = session_with(Role::Client);
    let provider = session_with(Role::Provider);

    assert!(!has_role(Some(&client), Role::Provider));
    assert!(!has_role(Some(&provider), Role::Client));
}

#[test]
fn test_admin_passes_rank_checks_below_it() {
    let admin = session_with(Role::Admin);

    assert!(has_role(Some(&admin), Role::Visitor));
    assert!(has_role(Some(&admin), Role::Client));
    assert!(has_role(Some(&admin), Role::Provider));
}

#[test]
fn test_employee_passes_client_and_provider_checks() {
    let employee = session_with(Role::Employee);

    assert!(has_role(Some(&employee), Role::Client));
    assert!(has_role(Some(&employee), Role::Provider));
}

#[test]
fn test_absent_session_never_gets_access() {
    for role in Role::ALL {
        assert!(!can_access(None, role, None));
        for permission in Permission::ALL {
            assert!(!can_access(None, role, Some(permission)));
        }
    }
}

#[test]
fn test_absent_session_is_treated_as_visitor() {
    assert!(has_role(None, Role::Visitor));
    assert!(!has_role(None, Role::Client));
    assert_eq!(accessible_routes(None), VISITOR_ROUTES);
    assert!(accessible_routes(None).contains(&"/"));
}

#[test]
fn test_unknown_permission_key_is_denied() {
    let admin = session_with(Role::Admin);

    assert!(!has_permission(Some(&admin), "canLaunchRockets"));
    assert!(!has_permission(Some(&admin), ""));
    assert!(!has_permission(Some(&admin), "CANMANAGEUSERS"));
}

#[test]
fn test_resolver_is_idempotent() {
    let session = session_with(Role::Provider);

    let first = (
        has_role(Some(&session), Role::Client),
        has_permission(Some(&session), "canViewReports"),
        can_access(Some(&session), Role::Provider, None),
        accessible_routes(Some(&session)),
    );
    let second = (
        has_role(Some(&session), Role::Client),
        has_permission(Some(&session), "canViewReports"),
        can_access(Some(&session), Role::Provider, None),
        accessible_routes(Some(&session)),
    );

    assert_eq!(first, second);
}

#[test]
fn test_provider_scenario() {
    let provider = session_with(Role::Provider);

    assert!(can_access(Some(&provider), Role::Provider, None));
    assert!(!can_access(Some(&provider), Role::Client, None));
    assert!(!can_access(Some(&provider), Role::Employee, None));
    assert!(!can_access(Some(&provider), Role::Admin, None));
    assert!(accessible_routes(Some(&provider)).contains(&"/dashboard/prestador"));
    assert!(!accessible_routes(Some(&provider)).contains(&"/dashboard/cliente"));
}

#[test]
fn test_user_management_scenario() {
    let admin = session_with(Role::Admin);
    let client = session_with(Role::Client);

    assert!(can_access(
        Some(&admin),
        Role::Admin,
        Some(Permission::CanManageUsers)
    ));
    assert!(!can_access(
        Some(&client),
        Role::Admin,
        Some(Permission::CanManageUsers)
    ));
    assert!(has_permission(Some(&admin), "canManageUsers"));
    assert!(!has_permission(Some(&client), "canManageUsers"));
}

#[test]
fn test_permission_override_revokes_for_known_role() {
    let admin = session_with(Role::Admin)
        .with_permission_override(PermissionSet::for_role(Role::Admin).with(
            Permission::CanManageUsers,
            false,
        ));

    assert!(!can_access(
        Some(&admin),
        Role::Admin,
        Some(Permission::CanManageUsers)
    ));
    assert!(can_access(
        Some(&admin),
        Role::Admin,
        Some(Permission::CanAccessAdmin)
    ));
}

#[test]
fn test_unset_and_unrecognized_roles_fail_closed() {
    let unset = session_with(RoleClaim::Unset);
    let unrecognized = session_with(RoleClaim::Unrecognized("superuser".to_string()));

    for session in [&unset, &unrecognized] {
        assert!(!can_access(Some(session), Role::Visitor, None));
        assert!(!can_access(Some(session), Role::Client, None));
        assert_eq!(accessible_routes(Some(session)), VISITOR_ROUTES);
        assert!(!has_permission(Some(session), "canViewReports"));
    }
}

#[test]
fn test_allow_list_admin_overrides_legacy_user_type() {
    let admin_config = AdminConfig::new(["Ops@Servly.com"]);
    let record = IdentityRecord {
        id: Uuid::new_v4(),
        email: "ops@servly.com".to_string(),
        stored_role: None,
        user_type: Some("cliente".to_string()),
    };

    let session = derive_session(&record, &admin_config);

    assert_eq!(session.role, RoleClaim::Known(Role::Admin));
    assert!(can_access(
        Some(&session),
        Role::Admin,
        Some(Permission::CanManageUsers)
    ));
}

#[test]
fn test_legacy_user_type_resolves_to_canonical_role() {
    let record = IdentityRecord {
        id: Uuid::new_v4(),
        email: "joao@servly.com".to_string(),
        stored_role: None,
        user_type: Some("prestador".to_string()),
    };

    let session = derive_session(&record, &AdminConfig::default());

    assert_eq!(session.effective_role(), Role::Provider);
    assert!(can_access(Some(&session), Role::Provider, None));
}
