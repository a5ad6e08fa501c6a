//! Claim structures of identity tokens issued by the hosted auth provider.

use serde::{Deserialize, Serialize};

/// Claims carried by an identity token.
///
/// # Fields
///
/// - `sub`: User ID (subject)
/// - `email`: User's email address
/// - `role`: The provider's audience role (e.g. `authenticated`); not an RBAC role
/// - `user_metadata`: Self-reported profile data, including the legacy `user_type`
/// - `app_metadata`: Server-controlled data, including the stored marketplace role
/// - `exp`: Token expiration timestamp
/// - `iat`: Token issued-at timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// User ID (subject claim)
    pub sub: String,
    /// User's email address
    pub email: String,
    /// Provider audience role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
    #[serde(default)]
    pub app_metadata: AppMetadata,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserMetadata {
    /// Sign-up choice, stored with legacy spellings such as `cliente` or `prestador`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppMetadata {
    /// Marketplace role assigned by an administrator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}
