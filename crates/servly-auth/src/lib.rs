//! # Servly Auth
//!
//! The boundary between the hosted identity provider and the access
//! resolver.
//!
//! - [`claims`]: Identity token claim structures
//! - [`jwt`]: Token creation and verification
//! - [`identity`]: Role normalization and session derivation
//!
//! # Example
//!
//! ```ignore
//! use servly_auth::{IdentityRecord, derive_session, verify_token};
//! use servly_config::{AdminConfig, JwtConfig};
//!
//! let claims = verify_token(&token, &JwtConfig::from_env())?;
//! let record = IdentityRecord::try_from(claims)?;
//! let session = derive_session(&record, &AdminConfig::from_env());
//! ```

pub mod claims;
pub mod identity;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::IdentityClaims;
pub use identity::{IdentityRecord, derive_role_claim, derive_session, normalize_role};
pub use jwt::{create_identity_token, verify_token};
