//! Role-based authorization middleware for Axum
//!
//! This module provides multiple approaches for the two role-level gates in
//! Sokoni (the admin panel and role management):
//! 1. Layer-based middleware using `require_admin_panel`
//! 2. Extractor-based approach using `RequireAdminPanel` / `RequireRoleManager`
//! 3. Helper functions for manual checks in handler logic

use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use sokoni_access_core::Role;

use crate::errors::AppError;
use crate::middleware::auth::AuthUser;

/// Middleware function that gates a router subtree behind admin panel access.
///
/// # Usage with axum::middleware::from_fn
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use sokoni_access::middleware::role::require_admin_panel;
///
/// let back_office = Router::new()
///     .route("/dashboard", get(dashboard_handler))
///     .layer(middleware::from_fn(require_admin_panel));
/// ```
pub async fn require_admin_panel(req: Request, next: Next) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &()).await?;

    check_admin_panel(&auth_user)?;

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Extractor for admin panel access (every role except `user`)
///
/// # Example
///
/// ```rust,ignore
/// use sokoni_access::middleware::role::RequireAdminPanel;
///
/// pub async fn dashboard_handler(
///     _panel: RequireAdminPanel,
///     auth_user: AuthUser,
/// ) -> Result<Json<Dashboard>, AppError> {
///     // Only staff and partner roles reach this point
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAdminPanel;

impl<S> FromRequestParts<S> for RequireAdminPanel
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;

        check_admin_panel(&auth_user)?;

        Ok(RequireAdminPanel)
    }
}

/// Extractor for role management endpoints (`god` and `admin` only).
///
/// Admission here only means the caller can manage *some* role; which target
/// roles they may actually assign still goes through
/// [`check_role_assignment`] or [`Role::assignable_roles`].
#[derive(Debug, Clone)]
pub struct RequireRoleManager;

impl<S> FromRequestParts<S> for RequireRoleManager
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;

        if !is_role_manager(auth_user.role()) {
            tracing::warn!(
                user_id = %auth_user.user_id(),
                role = %auth_user.role(),
                "denied access to role management"
            );
            return Err(AppError::forbidden(anyhow::anyhow!(
                "Access denied. Role management privileges required."
            )));
        }

        Ok(RequireRoleManager)
    }
}

/// Helper function to check a permission in controller logic
///
/// # Example
///
/// ```rust,ignore
/// use sokoni_access::middleware::role::check_permission;
/// use sokoni_access_core::permissions;
///
/// pub async fn handler(auth_user: AuthUser) -> Result<Json<Response>, AppError> {
///     check_permission(&auth_user, permissions::PRODUCTS_MANAGE)?;
///     // Handler logic
/// }
/// ```
pub fn check_permission(auth_user: &AuthUser, permission: &str) -> Result<(), AppError> {
    if !auth_user.has_permission(permission) {
        tracing::warn!(
            user_id = %auth_user.user_id(),
            role = %auth_user.role(),
            permission,
            "permission denied"
        );
        return Err(AppError::forbidden(anyhow::anyhow!(
            "Access denied. Missing required permission: {}",
            permission
        )));
    }

    Ok(())
}

/// Helper function to check admin panel access in controller logic
pub fn check_admin_panel(auth_user: &AuthUser) -> Result<(), AppError> {
    if !auth_user.role().can_access_admin_panel() {
        tracing::warn!(
            user_id = %auth_user.user_id(),
            role = %auth_user.role(),
            "denied admin panel access"
        );
        return Err(AppError::forbidden(anyhow::anyhow!(
            "Access denied. Admin panel privileges required."
        )));
    }

    Ok(())
}

/// Helper function to check that the caller may assign or revoke a target role
///
/// # Example
///
/// ```rust,ignore
/// use sokoni_access::middleware::role::check_role_assignment;
/// use sokoni_access_core::Role;
///
/// pub async fn assign_role(auth_user: AuthUser, target: Role) -> Result<(), AppError> {
///     check_role_assignment(&auth_user, target)?;
///     // Persist the assignment via the identity provider
/// }
/// ```
pub fn check_role_assignment(auth_user: &AuthUser, target: Role) -> Result<(), AppError> {
    if !auth_user.role().can_manage(target) {
        tracing::warn!(
            user_id = %auth_user.user_id(),
            role = %auth_user.role(),
            target = %target,
            "denied role assignment"
        );
        return Err(AppError::forbidden(anyhow::anyhow!(
            "Access denied. Role {} cannot manage role {}.",
            auth_user.role(),
            target
        )));
    }

    Ok(())
}

/// Whether a role can manage at least one role (i.e. may enter role management at all)
fn is_role_manager(role: Role) -> bool {
    Role::ALL.iter().any(|target| role.can_manage(*target))
}
