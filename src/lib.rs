//! # Servly
//!
//! Access control service for the Servly marketplace. Clients hire
//! providers, employees moderate, and admins run the platform.
//!
//! ## Overview
//!
//! Servly turns an identity token from the hosted auth provider into a
//! session and decides, page by page, whether that session may proceed:
//!
//! - **Session derivation**: role from the admin allow-list, the stored role
//!   or the legacy sign-up type, with legacy spellings normalized
//! - **Resolver**: `has_role`, `has_permission`, `can_access`, `accessible_routes`
//! - **Page guards**: render, redirect to login or landing page, or defer while loading
//! - **Navigation**: per-role route lists and ad-hoc access checks for the UI
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── servly-core/      # AppError, permission keys
//! ├── servly-config/    # JWT, admin allow-list, CORS, server addresses
//! ├── servly-access/    # Roles, permission sets, routes, resolver, guard decisions
//! └── servly-auth/      # Identity tokens and session derivation
//! src/
//! ├── middleware/       # CurrentSession extractor and page guards
//! ├── modules/          # navigation and dashboards
//! ├── session/          # SessionProvider and the event-driven SessionStore
//! └── bin/cli.rs        # servly-cli
//! ```
//!
//! ## Role Hierarchy
//!
//! | Role | Rank | Checks against it |
//! |------|------|-------------------|
//! | admin | 3 | exact match only |
//! | employee | 2 | exact match only |
//! | client | 1 | rank; provider is a peer, not a superset |
//! | provider | 1 | rank; client is a peer, not a superset |
//! | visitor | 0 | rank |
//!
//! An admin passes `client` and `provider` checks but never an `employee`
//! check.
//!
//! ## Quick Start
//!
//! ```bash
//! JWT_SECRET=shared-with-identity-provider
//! ADMIN_EMAILS=ops@servly.com,root@servly.com
//! SERVER_ADDR=0.0.0.0:3000
//! ```
//!
//! API documentation is served at `/swagger-ui`.
//!
//! ## Modules
//!
//! - [`docs`]: OpenAPI documentation setup
//! - [`logging`]: Tracing initialization and request logging
//! - [`metrics`]: Prometheus metrics and access decision counters
//! - [`middleware`]: Session extraction and page guards
//! - [`modules`]: Feature modules (navigation, dashboards)
//! - [`router`]: Main application router
//! - [`session`]: Session lifecycle
//! - [`state`]: Shared application state

pub mod docs;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod session;
pub mod state;

// Re-export workspace crates for convenience
pub use servly_access;
pub use servly_auth;
pub use servly_config;
pub use servly_core;
