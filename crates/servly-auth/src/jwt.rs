//! Identity token creation and verification.
//!
//! Tokens are HS256-signed with the secret shared with the hosted identity
//! provider. Verification is the only path by which a request becomes an
//! authenticated session; minting exists for the CLI and tests.
//!
//! # Example
//!
//! ```ignore
//! use servly_auth::{create_identity_token, verify_token};
//! use servly_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_identity_token(user_id, "ana@servly.com", Some("client"), None, &config)?;
//! let claims = verify_token(&token, &config)?;
//! ```

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use servly_config::JwtConfig;
use servly_core::AppError;

use crate::claims::{AppMetadata, IdentityClaims, UserMetadata};

/// Audience role stamped on every token by the provider.
pub const AUTHENTICATED_AUDIENCE_ROLE: &str = "authenticated";

/// Mints an identity token shaped like the ones the provider issues.
///
/// # Arguments
///
/// * `user_id` - The user's UUID
/// * `email` - The user's email address
/// * `stored_role` - Role assigned in `app_metadata`, if any
/// * `user_type` - Legacy `user_metadata.user_type`, if any
/// * `jwt_config` - Secret and expiry settings
///
/// # Errors
///
/// Returns an internal error if token encoding fails.
pub fn create_identity_token(
    user_id: Uuid,
    email: &str,
    stored_role: Option<&str>,
    user_type: Option<&str>,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = (now + jwt_config.token_expiry).max(0) as usize;
    let now = now as usize;

    let claims = IdentityClaims {
        sub: user_id.to_string(),
        email: email.to_string(),
        role: Some(AUTHENTICATED_AUDIENCE_ROLE.to_string()),
        user_metadata: UserMetadata {
            user_type: user_type.map(str::to_string),
        },
        app_metadata: AppMetadata {
            role: stored_role.map(str::to_string),
        },
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies an identity token and returns its claims.
///
/// # Errors
///
/// Returns an unauthorized error if the signature is invalid, the token has
/// expired, or the token is malformed.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<IdentityClaims, AppError> {
    let mut validation = Validation::default();
    // Provider tokens carry an `aud` claim we do not pin.
    validation.validate_aud = false;

    decode::<IdentityClaims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token".to_string()))
}
