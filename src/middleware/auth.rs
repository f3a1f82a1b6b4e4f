use axum::{extract::FromRequestParts, http::request::Parts};
use sokoni_access_core::Role;

use crate::claims::Claims;
use crate::errors::AppError;

/// Extractor that provides the authenticated user's claims.
///
/// Claims are inserted into the request extensions by the gateway after it
/// has verified the session with the identity provider. A request that
/// reaches a handler without claims was routed around the gateway, which is
/// a deployment error and rejected with 401.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// The caller's marketplace role
    pub fn role(&self) -> Role {
        self.0.role
    }

    /// Get the user ID as UUID
    pub fn user_id(&self) -> uuid::Uuid {
        self.0.sub
    }

    /// Get the user's email
    pub fn email(&self) -> &str {
        &self.0.email
    }

    /// Check if the user's role grants a specific permission
    pub fn has_permission(&self, permission: &str) -> bool {
        self.role().has_permission(permission)
    }

    /// Check if the user's role grants any of the specified permissions
    pub fn has_any_permission(&self, permissions: &[&str]) -> bool {
        permissions.iter().any(|p| self.has_permission(p))
    }

    /// Check if the user's role grants all of the specified permissions
    pub fn has_all_permissions(&self, permissions: &[&str]) -> bool {
        permissions.iter().all(|p| self.has_permission(p))
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                AppError::unauthorized(anyhow::anyhow!("Missing verified session claims"))
            })
    }
}

/// Helper macro to create permission check extractors for common permissions.
/// This provides type-safe permission checking at compile time.
#[macro_export]
macro_rules! require_permission {
    ($name:ident, $permission:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::middleware::auth::AuthUser);

        impl<S> axum::extract::FromRequestParts<S> for $name
        where
            S: Send + Sync,
        {
            type Rejection = $crate::errors::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &S,
            ) -> Result<Self, Self::Rejection> {
                let auth_user =
                    $crate::middleware::auth::AuthUser::from_request_parts(parts, state).await?;

                if !auth_user.has_permission($permission) {
                    return Err($crate::errors::AppError::forbidden(anyhow::anyhow!(
                        "Access denied. Missing required permission: {}",
                        $permission
                    )));
                }

                Ok($name(auth_user))
            }
        }
    };
}

// Pre-defined permission extractors for common operations

// Platform permissions
require_permission!(RequireSystemManage, sokoni_access_core::permissions::SYSTEM_MANAGE);

// Users permissions
require_permission!(RequireUsersManage, sokoni_access_core::permissions::USERS_MANAGE);
require_permission!(RequireUsersView, sokoni_access_core::permissions::USERS_VIEW);

// Products permissions
require_permission!(RequireProductsManage, sokoni_access_core::permissions::PRODUCTS_MANAGE);
require_permission!(
    RequireProductsManageOwn,
    sokoni_access_core::permissions::PRODUCTS_MANAGE_OWN
);
require_permission!(RequireProductsView, sokoni_access_core::permissions::PRODUCTS_VIEW);
require_permission!(RequireProductsViewOwn, sokoni_access_core::permissions::PRODUCTS_VIEW_OWN);

// Categories permissions
require_permission!(RequireCategoriesManage, sokoni_access_core::permissions::CATEGORIES_MANAGE);

// Orders permissions
require_permission!(RequireOrdersManage, sokoni_access_core::permissions::ORDERS_MANAGE);
require_permission!(RequireOrdersManageOwn, sokoni_access_core::permissions::ORDERS_MANAGE_OWN);
require_permission!(RequireOrdersView, sokoni_access_core::permissions::ORDERS_VIEW);
require_permission!(RequireOrdersViewOwn, sokoni_access_core::permissions::ORDERS_VIEW_OWN);

// Inventory permissions
require_permission!(RequireInventoryManage, sokoni_access_core::permissions::INVENTORY_MANAGE);
require_permission!(
    RequireInventoryManageOwn,
    sokoni_access_core::permissions::INVENTORY_MANAGE_OWN
);

// Analytics permissions
require_permission!(RequireAnalyticsView, sokoni_access_core::permissions::ANALYTICS_VIEW);
require_permission!(
    RequireAnalyticsViewOwn,
    sokoni_access_core::permissions::ANALYTICS_VIEW_OWN
);

// Moderation permissions
require_permission!(RequireReviewsModerate, sokoni_access_core::permissions::REVIEWS_MODERATE);
require_permission!(RequireContentModerate, sokoni_access_core::permissions::CONTENT_MODERATE);

// Exports permissions
require_permission!(RequireExportsManage, sokoni_access_core::permissions::EXPORTS_MANAGE);

// Settings permissions
require_permission!(RequireSettingsManage, sokoni_access_core::permissions::SETTINGS_MANAGE);

// Account permissions
require_permission!(RequireProfileManage, sokoni_access_core::permissions::PROFILE_MANAGE);
require_permission!(RequireCartManage, sokoni_access_core::permissions::CART_MANAGE);
require_permission!(RequireWishlistManage, sokoni_access_core::permissions::WISHLIST_MANAGE);
