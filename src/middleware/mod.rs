//! Middleware modules for request processing.
//!
//! - [`auth`]: Resolves the request's session from its identity token
//! - [`guard`]: Page guards built on the access resolver
//!
//! # Flow
//!
//! 1. Client sends request with an optional `Authorization: Bearer <token>` header
//! 2. `CurrentSession` verifies the token and derives the session (or none)
//! 3. Guarded pages evaluate their `AccessRequirement` and render or redirect
//! 4. Public handlers read `CurrentSession` directly for navigation data

pub mod auth;
pub mod guard;
