//! Permission constants for the Sokoni platform.
//!
//! This module provides centralized permission string constants for use across
//! the codebase. Using these constants instead of string literals ensures
//! consistency and makes refactoring easier.
//!
//! Permissions are opaque dot-separated identifiers. There is no wildcard or
//! hierarchy syntax: `orders.manage` does not imply `orders.view`, and a
//! `.own` suffix names a separate, ownership-scoped permission rather than a
//! narrowing of the unsuffixed one. The single exception is the
//! [`SYSTEM_MANAGE`] sentinel, which satisfies every permission query for a
//! role that holds it.
//!
//! # Example
//!
//! ```
//! use sokoni_access_core::{Role, permissions};
//!
//! assert!(Role::Admin.has_permission(permissions::ORDERS_MANAGE));
//! assert!(!Role::User.has_permission(permissions::ORDERS_MANAGE));
//! ```

// =============================================================================
// System permissions
// =============================================================================

/// Sentinel permission: holding it satisfies every permission query.
pub const SYSTEM_MANAGE: &str = "system.manage";

// =============================================================================
// Users permissions
// =============================================================================

/// Permission to create, update, suspend and delete user accounts
pub const USERS_MANAGE: &str = "users.manage";
/// Permission to view user accounts
pub const USERS_VIEW: &str = "users.view";

// =============================================================================
// Products permissions
// =============================================================================

/// Permission to manage any product listing
pub const PRODUCTS_MANAGE: &str = "products.manage";
/// Permission to manage the caller's own product listings
pub const PRODUCTS_MANAGE_OWN: &str = "products.manage.own";
/// Permission to view any product listing, including unpublished ones
pub const PRODUCTS_VIEW: &str = "products.view";
/// Permission to view the caller's own product listings
pub const PRODUCTS_VIEW_OWN: &str = "products.view.own";

// =============================================================================
// Categories permissions
// =============================================================================

/// Permission to manage the category tree
pub const CATEGORIES_MANAGE: &str = "categories.manage";

// =============================================================================
// Orders permissions
// =============================================================================

/// Permission to manage any order
pub const ORDERS_MANAGE: &str = "orders.manage";
/// Permission to manage orders placed against the caller's own listings
pub const ORDERS_MANAGE_OWN: &str = "orders.manage.own";
/// Permission to view any order
pub const ORDERS_VIEW: &str = "orders.view";
/// Permission to view the caller's own orders
pub const ORDERS_VIEW_OWN: &str = "orders.view.own";

// =============================================================================
// Inventory permissions
// =============================================================================

/// Permission to manage stock levels across the marketplace
pub const INVENTORY_MANAGE: &str = "inventory.manage";
/// Permission to manage stock levels for the caller's own listings
pub const INVENTORY_MANAGE_OWN: &str = "inventory.manage.own";

// =============================================================================
// Analytics permissions
// =============================================================================

/// Permission to view marketplace-wide analytics
pub const ANALYTICS_VIEW: &str = "analytics.view";
/// Permission to view analytics scoped to the caller's own listings
pub const ANALYTICS_VIEW_OWN: &str = "analytics.view.own";

// =============================================================================
// Moderation permissions
// =============================================================================

/// Permission to moderate product reviews and ratings
pub const REVIEWS_MODERATE: &str = "reviews.moderate";
/// Permission to moderate listings and customer-submitted content
pub const CONTENT_MODERATE: &str = "content.moderate";

// =============================================================================
// Exports permissions
// =============================================================================

/// Permission to manage export consignments and shipping paperwork
pub const EXPORTS_MANAGE: &str = "exports.manage";

// =============================================================================
// Settings permissions
// =============================================================================

/// Permission to change platform settings
pub const SETTINGS_MANAGE: &str = "settings.manage";

// =============================================================================
// Account permissions
// =============================================================================

/// Permission to manage the caller's own profile
pub const PROFILE_MANAGE: &str = "profile.manage";
/// Permission to manage the caller's own cart
pub const CART_MANAGE: &str = "cart.manage";
/// Permission to manage the caller's own wishlist
pub const WISHLIST_MANAGE: &str = "wishlist.manage";

/// Whether `permission` is the [`SYSTEM_MANAGE`] sentinel.
pub fn is_sentinel(permission: &str) -> bool {
    permission == SYSTEM_MANAGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_sentinel() {
        assert!(is_sentinel(SYSTEM_MANAGE));
        assert!(is_sentinel("system.manage"));
        assert!(!is_sentinel("orders.manage"));
        assert!(!is_sentinel(""));
    }

    #[test]
    fn test_constants_are_dot_separated() {
        let all = [
            SYSTEM_MANAGE,
            USERS_MANAGE,
            USERS_VIEW,
            PRODUCTS_MANAGE,
            PRODUCTS_MANAGE_OWN,
            PRODUCTS_VIEW,
            PRODUCTS_VIEW_OWN,
            CATEGORIES_MANAGE,
            ORDERS_MANAGE,
            ORDERS_MANAGE_OWN,
            ORDERS_VIEW,
            ORDERS_VIEW_OWN,
            INVENTORY_MANAGE,
            INVENTORY_MANAGE_OWN,
            ANALYTICS_VIEW,
            ANALYTICS_VIEW_OWN,
            REVIEWS_MODERATE,
            CONTENT_MODERATE,
            EXPORTS_MANAGE,
            SETTINGS_MANAGE,
            PROFILE_MANAGE,
            CART_MANAGE,
            WISHLIST_MANAGE,
        ];
        for permission in all {
            assert!(permission.contains('.'), "malformed constant: {permission}");
            assert_eq!(permission, permission.to_lowercase());
        }
    }
}
