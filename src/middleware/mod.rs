//! Middleware modules for request processing.
//!
//! This module contains middleware and extractors for handling the
//! authorization concerns of Sokoni routes: permission checks, the admin
//! panel gate and role management rights.
//!
//! # Modules
//!
//! - [`auth`]: Authenticated-user extractor and permission-based access control
//! - [`role`]: Admin panel and role management guards
//!
//! # Authorization Flow
//!
//! 1. The gateway verifies the session with the identity provider and inserts
//!    [`crate::claims::Claims`] into the request extensions
//! 2. `AuthUser` extracts those claims (401 when the gateway layer is absent)
//! 3. Permission extractors and guards decide from the caller's role alone
//! 4. Handler executes if all checks pass
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::{AuthUser, RequireProductsManage};
//!
//! // Basic authentication (any verified session)
//! async fn get_profile(auth_user: AuthUser) -> impl IntoResponse {
//!     let user_id = auth_user.user_id();
//!     // ...
//! }
//!
//! // Permission-based access control
//! async fn update_catalog(
//!     RequireProductsManage(auth_user): RequireProductsManage,
//! ) -> impl IntoResponse {
//!     // Only executes if the caller's role grants "products.manage"
//! }
//! ```

pub mod auth;
pub mod role;
