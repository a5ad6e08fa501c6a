//! # Servly Core
//!
//! Core types shared across the Servly workspace.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`permissions`]: Permission key constants
//!
//! # Example
//!
//! ```ignore
//! use servly_core::errors::AppError;
//!
//! let error = AppError::unauthorized("Invalid or expired token".to_string());
//! ```

pub mod errors;
pub mod permissions;

// Re-export commonly used types at crate root
pub use errors::AppError;
