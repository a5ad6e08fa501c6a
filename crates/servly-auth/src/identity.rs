//! Session derivation from the identity provider's user record.
//!
//! This is the only place where raw role strings become [`Role`] values.
//! Legacy spellings are folded into the canonical enumeration here so the
//! resolver never sees them.

use servly_access::{Identity, Role, RoleClaim, Session};
use servly_config::AdminConfig;
use servly_core::AppError;
use tracing::info;
use uuid::Uuid;

use crate::claims::IdentityClaims;

/// The user record as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityRecord {
    pub id: Uuid,
    pub email: String,
    /// Role stored by an administrator (`app_metadata.role`)
    pub stored_role: Option<String>,
    /// Legacy sign-up choice (`user_metadata.user_type`)
    pub user_type: Option<String>,
}

impl TryFrom<IdentityClaims> for IdentityRecord {
    type Error = AppError;

    fn try_from(claims: IdentityClaims) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::unauthorized("Invalid user ID in token".to_string()))?;

        Ok(Self {
            id,
            email: claims.email,
            stored_role: claims.app_metadata.role,
            user_type: claims.user_metadata.user_type,
        })
    }
}

/// Map a raw role string, including legacy spellings, onto a [`Role`].
///
/// Matching ignores case and surrounding whitespace. Returns `None` for
/// anything outside the known spellings.
pub fn normalize_role(raw: &str) -> Option<Role> {
    match raw.trim().to_lowercase().as_str() {
        "visitor" | "visitante" => Some(Role::Visitor),
        "client" | "cliente" => Some(Role::Client),
        "provider" | "prestador" => Some(Role::Provider),
        "employee" | "funcionario" | "funcionário" => Some(Role::Employee),
        "admin" | "administrador" => Some(Role::Admin),
        _ => None,
    }
}

/// Decide the role claim for a user record.
///
/// Precedence: admin allow-list, then the stored role, then the legacy
/// `user_type`. The first value present decides; a present value that does
/// not normalize is kept as [`RoleClaim::Unrecognized`].
pub fn derive_role_claim(record: &IdentityRecord, admin_config: &AdminConfig) -> RoleClaim {
    if admin_config.is_admin_email(&record.email) {
        return RoleClaim::Known(Role::Admin);
    }

    let raw = [record.stored_role.as_deref(), record.user_type.as_deref()]
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty());

    match raw {
        Some(value) => match normalize_role(value) {
            Some(role) => RoleClaim::Known(role),
            None => RoleClaim::Unrecognized(value.to_string()),
        },
        None => RoleClaim::Unset,
    }
}

/// Build the session descriptor for an authenticated user.
pub fn derive_session(record: &IdentityRecord, admin_config: &AdminConfig) -> Session {
    let claim = derive_role_claim(record, admin_config);

    info!(
        user_id = %record.id,
        email = %record.email,
        role = ?claim,
        "Derived session role"
    );

    Session::authenticated(
        Identity {
            id: record.id,
            email: record.email.clone(),
        },
        claim,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::{AppMetadata, UserMetadata};

    fn record(email: &str, stored_role: Option<&str>, user_type: Option<&str>) -> IdentityRecord {
        IdentityRecord {
            id: Uuid::new_v4(),
            email: email.to_string(),
            stored_role: stored_role.map(str::to_string),
            user_type: user_type.map(str::to_string),
        }
    }

    #[test]
    fn test_normalize_canonical_and_legacy_spellings() {
        assert_eq!(normalize_role("client"), Some(Role::Client));
        assert_eq!(normalize_role("cliente"), Some(Role::Client));
        assert_eq!(normalize_role("provider"), Some(Role::Provider));
        assert_eq!(normalize_role("prestador"), Some(Role::Provider));
        assert_eq!(normalize_role("Funcionário"), Some(Role::Employee));
        assert_eq!(normalize_role("funcionario"), Some(Role::Employee));
        assert_eq!(normalize_role(" ADMIN "), Some(Role::Admin));
        assert_eq!(normalize_role("administrador"), Some(Role::Admin));
        assert_eq!(normalize_role("visitante"), Some(Role::Visitor));
        assert_eq!(normalize_role("superuser"), None);
        assert_eq!(normalize_role(""), None);
    }

    #[test]
    fn test_allow_list_wins_over_legacy_metadata() {
        let admins = AdminConfig::new(["boss@servly.com"]);
        let rec = record("Boss@Servly.com", None, Some("cliente"));

        assert_eq!(derive_role_claim(&rec, &admins), RoleClaim::Known(Role::Admin));
    }

    #[test]
    fn test_allow_list_wins_over_stored_role() {
        let admins = AdminConfig::new(["boss@servly.com"]);
        let rec = record("boss@servly.com", Some("provider"), None);

        assert_eq!(derive_role_claim(&rec, &admins), RoleClaim::Known(Role::Admin));
    }

    #[test]
    fn test_stored_role_precedes_user_type() {
        let rec = record("ana@servly.com", Some("employee"), Some("cliente"));
        assert_eq!(
            derive_role_claim(&rec, &AdminConfig::default()),
            RoleClaim::Known(Role::Employee)
        );
    }

    #[test]
    fn test_user_type_used_when_no_stored_role() {
        let rec = record("bia@servly.com", None, Some("prestador"));
        assert_eq!(
            derive_role_claim(&rec, &AdminConfig::default()),
            RoleClaim::Known(Role::Provider)
        );
    }

    #[test]
    fn test_blank_stored_role_falls_through() {
        let rec = record("bia@servly.com", Some("  "), Some("cliente"));
        assert_eq!(
            derive_role_claim(&rec, &AdminConfig::default()),
            RoleClaim::Known(Role::Client)
        );
    }

    #[test]
    fn test_unrecognized_and_unset() {
        let rec = record("x@servly.com", Some("superuser"), Some("cliente"));
        assert_eq!(
            derive_role_claim(&rec, &AdminConfig::default()),
            RoleClaim::Unrecognized("superuser".to_string())
        );

        let rec = record("y@servly.com", None, None);
        assert_eq!(
            derive_role_claim(&rec, &AdminConfig::default()),
            RoleClaim::Unset
        );
    }

    #[test]
    fn test_derive_session_carries_identity() {
        let rec = record("ana@servly.com", Some("client"), None);
        let session = derive_session(&rec, &AdminConfig::default());

        assert_eq!(session.email(), Some("ana@servly.com"));
        assert_eq!(session.identity.as_ref().map(|i| i.id), Some(rec.id));
        assert_eq!(session.effective_role(), Role::Client);
        assert!(session.permission_override.is_none());
    }

    #[test]
    fn test_record_from_claims() {
        let id = Uuid::new_v4();
        let claims = IdentityClaims {
            sub: id.to_string(),
            email: "c@servly.com".to_string(),
            role: Some("authenticated".to_string()),
            user_metadata: UserMetadata {
                user_type: Some("cliente".to_string()),
            },
            app_metadata: AppMetadata { role: None },
            exp: 9999999999,
            iat: 1,
        };

        let rec = IdentityRecord::try_from(claims).unwrap();
        assert_eq!(rec.id, id);
        assert_eq!(rec.user_type.as_deref(), Some("cliente"));
        assert_eq!(rec.stored_role, None);
    }

    #[test]
    fn test_record_from_claims_rejects_bad_subject() {
        let claims = IdentityClaims {
            sub: "not-a-uuid".to_string(),
            email: "c@servly.com".to_string(),
            role: None,
            user_metadata: UserMetadata::default(),
            app_metadata: AppMetadata::default(),
            exp: 9999999999,
            iat: 1,
        };

        assert!(IdentityRecord::try_from(claims).is_err());
    }
}
