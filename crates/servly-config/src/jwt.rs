use std::env;

/// Settings for identity tokens issued by the hosted auth provider.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Lifetime in seconds of tokens minted locally (CLI, tests)
    pub token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            token_expiry: env::var("JWT_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600), // 1 hour
        }
    }

    pub fn new(secret: impl Into<String>, token_expiry: i64) -> Self {
        Self {
            secret: secret.into(),
            token_expiry,
        }
    }
}
