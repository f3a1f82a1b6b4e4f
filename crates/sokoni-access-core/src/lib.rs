//! # Sokoni Access Core
//!
//! The role catalog and authorization decisions for the Sokoni marketplace.
//!
//! This crate is the pure half of the authorization stack: a closed set of
//! six roles, one immutable [`RoleDefinition`] per role, and five total
//! decision functions over them. There is no I/O, no configuration and no
//! shared mutable state; everything here may be called concurrently from any
//! number of callers.
//!
//! - [`permissions`]: permission-string constants grouped by marketplace
//!   domain, including the `system.manage` sentinel
//! - [`role`]: the [`Role`] enum, strict and lenient parsing, wire form
//! - [`catalog`]: the definition table and the decision functions
//! - [`serde`]: deserialization helpers for identity-boundary fields
//!
//! Role assignment itself belongs to the external identity provider; this
//! crate only reads a role value the caller sourced from session state.
//!
//! # Example
//!
//! ```
//! use sokoni_access_core::{Role, permissions};
//!
//! let role = Role::from_claim("supplier");
//! assert!(role.has_permission(permissions::PRODUCTS_MANAGE_OWN));
//! assert!(role.can_access_admin_panel());
//! assert!(role.assignable_roles().is_empty());
//! ```

pub mod catalog;
pub mod permissions;
pub mod role;
pub mod serde;

// Re-export commonly used types at crate root
pub use catalog::RoleDefinition;
pub use role::{Role, RoleParseError};
