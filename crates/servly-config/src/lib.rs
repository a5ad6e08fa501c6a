//! # Servly Config
//!
//! Configuration types for Servly, loaded from environment variables:
//!
//! - [`admin`]: Administrator e-mail allow-list
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`jwt`]: Identity token configuration
//! - [`server`]: Listen addresses for the API and metrics servers
//!
//! # Example
//!
//! ```ignore
//! use servly_config::{AdminConfig, CorsConfig, JwtConfig, ServerConfig};
//!
//! dotenvy::dotenv().ok();
//! let jwt_config = JwtConfig::from_env();
//! let admin_config = AdminConfig::from_env();
//! ```

pub mod admin;
pub mod cors;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use admin::AdminConfig;
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
