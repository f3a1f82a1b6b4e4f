//! # Sokoni Access
//!
//! Role-based authorization for Sokoni, an online marketplace for African
//! groceries. This crate turns the fixed role catalog in
//! [`sokoni_access_core`] into the pieces a Sokoni service actually mounts:
//! Axum extractors, route guards and a CLI for inspecting what a role grants.
//!
//! ## Overview
//!
//! Sokoni delegates authentication to a hosted identity provider; what
//! remains in-house is deciding what an already-verified caller may do.
//! That decision model is deliberately small:
//!
//! - **Six fixed roles**: `god`, `admin`, `exporter`, `supplier`,
//!   `moderator`, `user`; a closed set with no runtime role editing
//! - **Static permissions**: each role carries a compiled-in permission
//!   list; `system.manage` is a sentinel that grants everything
//! - **Derived gates**: admin panel entry and role management rights are
//!   decided from role identity, not from the permission lists
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! └── sokoni-access-core/   # Pure decisions: roles, catalog, permissions
//! src/
//! ├── bin/cli.rs            # sokoni-access-cli entry point
//! ├── claims.rs             # Identity attributes read from the gateway
//! ├── cli.rs                # Catalog inspection commands
//! ├── errors.rs             # AppError and HTTP error responses
//! └── middleware/           # Extractors and route guards
//!     ├── auth.rs           # AuthUser + permission extractors
//!     └── role.rs           # Admin panel and role management gates
//! ```
//!
//! ## Roles
//!
//! | Role | Level | Description |
//! |------|-------|-------------|
//! | `god` | 100 | Unrestricted, holds the `system.manage` sentinel |
//! | `admin` | 80 | Runs the marketplace day to day |
//! | `exporter` | 60 | Export partner with own-listing scope |
//! | `supplier` | 40 | Vendor with own-listing scope |
//! | `moderator` | 30 | Content and review moderation |
//! | `user` | 10 | Customer; also the fallback for unknown role strings |
//!
//! Authority comparisons never use `level` directly: who may manage whom is
//! an identity rule (`god` manages everyone, `admin` everyone but `god`),
//! and the admin panel admits every role except `user`.
//!
//! ## Usage
//!
//! Handlers take the extractors they need:
//!
//! ```ignore
//! use axum::{Json, Router, routing::get};
//! use sokoni_access::middleware::auth::{AuthUser, RequireProductsManage};
//! use sokoni_access::middleware::role::RequireAdminPanel;
//!
//! async fn catalog_admin(
//!     RequireProductsManage(auth_user): RequireProductsManage,
//! ) -> Json<String> {
//!     Json(format!("hello {}", auth_user.email()))
//! }
//!
//! let app: Router = Router::new().route("/catalog", get(catalog_admin));
//! ```
//!
//! Decisions are also available without Axum:
//!
//! ```
//! use sokoni_access::Role;
//!
//! let actor = Role::from_claim("moderator");
//! assert!(actor.can_access_admin_panel());
//! assert!(actor.assignable_roles().is_empty());
//! ```
//!
//! ### Inspecting the catalog
//!
//! ```bash
//! cargo run --bin sokoni-access-cli -- check supplier products.manage.own
//! cargo run --bin sokoni-access-cli -- --json info admin
//! ```
//!
//! ## Modules
//!
//! - [`claims`]: Identity attributes attached by the gateway
//! - [`cli`]: Command-line catalog inspection
//! - [`errors`]: Application error type and HTTP responses
//! - [`middleware`]: Authorization extractors and route guards
//!
//! ## Security Considerations
//!
//! - Credentials never reach this crate; sessions are verified upstream
//! - Unknown role strings degrade to `user`, the least-privileged role
//! - The admin panel gate is identity-based and cannot be widened by
//!   editing permission lists
//! - `god` management rights extend to other `god` accounts

pub mod claims;
pub mod cli;
pub mod errors;
pub mod middleware;

// Re-export workspace crates for convenience
pub use sokoni_access_core;
pub use sokoni_access_core::{Role, RoleDefinition, permissions};
