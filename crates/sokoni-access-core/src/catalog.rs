//! The role catalog: one immutable definition per role, plus the
//! authorization decisions made over it.
//!
//! The catalog is fixed business data compiled into the binary. It is never
//! mutated at runtime, so every decision here is a pure function over
//! `'static` records and may be called concurrently without coordination.
//!
//! Permission matching is exact string containment. The only universal
//! override is the [`permissions::SYSTEM_MANAGE`] sentinel, checked
//! explicitly before set membership so the per-role lists stay minimal and
//! the override is auditable in one place.

use serde::Serialize;
use utoipa::ToSchema;

use crate::permissions;
use crate::role::Role;

/// Static definition record for one role.
///
/// `level` is an integer precedence rank, strictly increasing with
/// authority. It exists for display ordering and relative comparison only;
/// no authorization decision in this crate derives from it (see
/// [`Role::can_manage`]). `color` and `icon` are presentation metadata for
/// the admin dashboard and carry no authorization semantics.
#[derive(Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct RoleDefinition {
    /// Human-readable label
    #[schema(value_type = String)]
    pub name: &'static str,
    /// Human-readable summary
    #[schema(value_type = String)]
    pub description: &'static str,
    /// Permission strings held by the role; order irrelevant
    #[schema(value_type = Vec<String>)]
    pub permissions: &'static [&'static str],
    /// Precedence rank, strictly increasing with authority
    pub level: u8,
    /// Badge color (hex) for the admin dashboard
    #[schema(value_type = String)]
    pub color: &'static str,
    /// Icon slug for the admin dashboard
    #[schema(value_type = String)]
    pub icon: &'static str,
}

static GOD: RoleDefinition = RoleDefinition {
    name: "God",
    description: "Unrestricted access to every part of the platform, including other administrators.",
    // The sentinel stands in for every permission; the list is deliberately
    // not an enumeration of everything that exists.
    permissions: &[permissions::SYSTEM_MANAGE],
    level: 100,
    color: "#dc2626",
    icon: "crown",
};

static ADMIN: RoleDefinition = RoleDefinition {
    name: "Administrator",
    description: "Runs the marketplace: catalogue, orders, customers and settings.",
    permissions: &[
        permissions::USERS_MANAGE,
        permissions::USERS_VIEW,
        permissions::PRODUCTS_MANAGE,
        permissions::PRODUCTS_VIEW,
        permissions::CATEGORIES_MANAGE,
        permissions::ORDERS_MANAGE,
        permissions::ORDERS_VIEW,
        permissions::INVENTORY_MANAGE,
        permissions::ANALYTICS_VIEW,
        permissions::REVIEWS_MODERATE,
        permissions::CONTENT_MODERATE,
        permissions::SETTINGS_MANAGE,
    ],
    level: 80,
    color: "#7c3aed",
    icon: "shield",
};

static EXPORTER: RoleDefinition = RoleDefinition {
    name: "Exporter",
    description: "Export partner listing and shipping bulk produce to buyers abroad.",
    permissions: &[
        permissions::PRODUCTS_MANAGE_OWN,
        permissions::PRODUCTS_VIEW_OWN,
        permissions::INVENTORY_MANAGE_OWN,
        permissions::ORDERS_MANAGE_OWN,
        permissions::ORDERS_VIEW_OWN,
        permissions::EXPORTS_MANAGE,
        permissions::ANALYTICS_VIEW_OWN,
        permissions::PROFILE_MANAGE,
    ],
    level: 60,
    color: "#2563eb",
    icon: "globe",
};

static SUPPLIER: RoleDefinition = RoleDefinition {
    name: "Supplier",
    description: "Vendor stocking the marketplace with their own produce.",
    permissions: &[
        permissions::PRODUCTS_MANAGE_OWN,
        permissions::PRODUCTS_VIEW_OWN,
        permissions::INVENTORY_MANAGE_OWN,
        permissions::ORDERS_VIEW_OWN,
        permissions::ANALYTICS_VIEW_OWN,
        permissions::PROFILE_MANAGE,
    ],
    level: 40,
    color: "#0d9488",
    icon: "truck",
};

static MODERATOR: RoleDefinition = RoleDefinition {
    name: "Moderator",
    description: "Reviews listings, ratings and customer content for policy breaches.",
    permissions: &[
        permissions::PRODUCTS_VIEW,
        permissions::ORDERS_VIEW,
        permissions::USERS_VIEW,
        permissions::REVIEWS_MODERATE,
        permissions::CONTENT_MODERATE,
        permissions::PROFILE_MANAGE,
    ],
    level: 30,
    color: "#d97706",
    icon: "gavel",
};

static USER: RoleDefinition = RoleDefinition {
    name: "Customer",
    description: "Shops the marketplace and manages their own orders and lists.",
    permissions: &[
        permissions::ORDERS_VIEW_OWN,
        permissions::PROFILE_MANAGE,
        permissions::CART_MANAGE,
        permissions::WISHLIST_MANAGE,
    ],
    level: 10,
    color: "#6b7280",
    icon: "shopping-basket",
};

impl Role {
    /// The definition record for this role.
    pub fn definition(self) -> &'static RoleDefinition {
        match self {
            Role::God => &GOD,
            Role::Admin => &ADMIN,
            Role::Exporter => &EXPORTER,
            Role::Supplier => &SUPPLIER,
            Role::Moderator => &MODERATOR,
            Role::User => &USER,
        }
    }

    /// The role's precedence rank (higher = more authority).
    pub fn level(self) -> u8 {
        self.definition().level
    }

    /// Whether this role holds `permission`.
    ///
    /// Matching is exact string containment; there is no wildcard or
    /// hierarchy syntax. A role holding the sentinel passes every query,
    /// including strings defined nowhere. Unknown permission strings are
    /// not an error, they are simply absent.
    ///
    /// ```
    /// use sokoni_access_core::{Role, permissions};
    ///
    /// assert!(Role::User.has_permission(permissions::CART_MANAGE));
    /// assert!(!Role::User.has_permission(permissions::ORDERS_MANAGE));
    /// assert!(Role::God.has_permission("totally.unknown.permission"));
    /// ```
    pub fn has_permission(self, permission: &str) -> bool {
        let definition = self.definition();
        // Sentinel first: holding it answers every query before exact
        // membership is consulted.
        if definition.permissions.iter().any(|p| permissions::is_sentinel(p)) {
            return true;
        }
        definition.permissions.iter().any(|p| *p == permission)
    }

    /// Whether this role may enter the admin panel.
    ///
    /// This is fixed set membership over role identity, not a permission
    /// lookup: every role except the customer is admitted.
    pub fn can_access_admin_panel(self) -> bool {
        match self {
            Role::God | Role::Admin | Role::Exporter | Role::Supplier | Role::Moderator => true,
            Role::User => false,
        }
    }

    /// Whether this role may manage (assign, change, revoke) `target`.
    ///
    /// God manages every role, including other gods. Administrators manage
    /// every role except god. No other role manages anyone, whatever its
    /// level; `level` is not consulted here.
    // TODO: confirm with product whether management rights should fall back
    // to a level comparison when new management-capable roles are added;
    // today the rule is identity-based for god/admin and deny for the rest.
    pub fn can_manage(self, target: Role) -> bool {
        match self {
            Role::God => true,
            Role::Admin => target != Role::God,
            _ => false,
        }
    }

    /// The roles this role may assign to others, highest authority first.
    ///
    /// God sees all six roles, administrators see everything except god,
    /// and every other role sees an empty list (role pickers render
    /// nothing for them).
    pub fn assignable_roles(self) -> Vec<Role> {
        match self {
            Role::God => Role::ALL.to_vec(),
            Role::Admin => Role::ALL.iter().copied().filter(|r| *r != Role::God).collect(),
            _ => Vec::new(),
        }
    }
}
