//! The closed set of Sokoni roles.
//!
//! A principal's role is assigned and stored by the external identity
//! provider; this crate only ever reads it. [`Role`] is a closed enum so an
//! unrecognized role is unrepresentable past the parsing boundary: strict
//! parsing ([`FromStr`]) rejects unknown identifiers, while the lenient claim
//! decoder ([`Role::from_claim`]) maps them to [`Role::User`], the
//! least-privileged role.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A role on the Sokoni platform.
///
/// The six roles are fixed business data and are not extensible at runtime.
/// Variants are ordered by presentation convention, highest authority first;
/// the numeric precedence lives on the role's
/// [`RoleDefinition`](crate::RoleDefinition) as `level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Unrestricted platform owner.
    God,
    /// Marketplace administrator.
    Admin,
    /// Export partner shipping bulk produce abroad.
    Exporter,
    /// Vendor stocking the marketplace with their own produce.
    Supplier,
    /// Content and listing moderator.
    Moderator,
    /// Customer shopping the marketplace.
    User,
}

/// Error returned by the strict role parser.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized role identifier: {0}")]
pub struct RoleParseError(pub String);

impl Role {
    /// Every role, highest authority first.
    ///
    /// This is the fixed presentation order used by role pickers and the
    /// catalog listing: god, admin, exporter, supplier, moderator, user.
    pub const ALL: [Role; 6] = [
        Role::God,
        Role::Admin,
        Role::Exporter,
        Role::Supplier,
        Role::Moderator,
        Role::User,
    ];

    /// The lowercase identifier used on the wire and in identity claims.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::God => "god",
            Role::Admin => "admin",
            Role::Exporter => "exporter",
            Role::Supplier => "supplier",
            Role::Moderator => "moderator",
            Role::User => "user",
        }
    }

    /// Decode a role claim sourced from an identity token.
    ///
    /// Unrecognized input resolves to [`Role::User`]. Assigning the
    /// least-privileged role to unknown input keeps every downstream lookup
    /// total; the fallback is logged so misconfigured identity data is
    /// visible in the audit trail.
    pub fn from_claim(raw: &str) -> Role {
        match raw.parse() {
            Ok(role) => role,
            Err(RoleParseError(value)) => {
                tracing::warn!(
                    role = %value,
                    "unrecognized role claim, falling back to the customer role"
                );
                Role::User
            }
        }
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "god" => Ok(Role::God),
            "admin" => Ok(Role::Admin),
            "exporter" => Ok(Role::Exporter),
            "supplier" => Ok(Role::Supplier),
            "moderator" => Ok(Role::Moderator),
            "user" => Ok(Role::User),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for Role {
    /// The least-privileged role, matching the claim-decoding fallback.
    fn default() -> Self {
        Role::User
    }
}
