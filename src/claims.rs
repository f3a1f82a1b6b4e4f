//! Identity attributes attached to authenticated requests.
//!
//! Sokoni delegates credential handling to the hosted identity provider, so
//! this service never sees passwords or token signatures. By the time a
//! request reaches the guards in [`crate::middleware`], the gateway has
//! already verified the session and inserted a [`Claims`] value into the
//! request extensions. Everything in this module is about reading those
//! attributes, not producing them.

use serde::{Deserialize, Serialize};
use sokoni_access_core::Role;
use utoipa::ToSchema;
use uuid::Uuid;

/// Verified identity attributes for the current request.
///
/// The role field is deserialized leniently: a missing, null or unrecognized
/// role collapses to [`Role::User`] rather than rejecting the request, so an
/// identity record written before a role was retired still maps to a valid
/// (least-privileged) caller.
///
/// # Fields
///
/// - `sub`: User ID (subject)
/// - `email`: User's email address
/// - `role`: Marketplace role assigned by the identity provider
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: Uuid,
    /// User's email address
    pub email: String,
    /// Assigned marketplace role, defaulting to `user` when absent or unknown
    #[serde(default, deserialize_with = "sokoni_access_core::serde::role_or_default")]
    pub role: Role,
}
