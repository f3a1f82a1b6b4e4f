//! Custom serde helpers for identity-boundary fields.

use serde::{Deserialize, Deserializer};

use crate::role::Role;

/// Deserializes a role claim, falling back to [`Role::User`].
///
/// Identity tokens are produced by an external provider, so the role claim
/// may be missing, `null`, or an identifier this platform does not define.
/// All three decode to the least-privileged role instead of failing the
/// whole claims payload; unknown identifiers are logged by
/// [`Role::from_claim`].
///
/// # Example
///
/// ```ignore
/// #[derive(Deserialize)]
/// struct Claims {
///     #[serde(default, deserialize_with = "sokoni_access_core::serde::role_or_default")]
///     role: Role,
/// }
/// ```
pub fn role_or_default<'de, D>(deserializer: D) -> Result<Role, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().map(Role::from_claim).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "role_or_default")]
        role: Role,
    }

    #[test]
    fn test_known_role_decodes() {
        let payload: Payload = serde_json::from_str(r#"{"role":"exporter"}"#).unwrap();
        assert_eq!(payload.role, Role::Exporter);
    }

    #[test]
    fn test_unknown_role_decodes_to_user() {
        let payload: Payload = serde_json::from_str(r#"{"role":"superhero"}"#).unwrap();
        assert_eq!(payload.role, Role::User);
    }

    #[test]
    fn test_null_role_decodes_to_user() {
        let payload: Payload = serde_json::from_str(r#"{"role":null}"#).unwrap();
        assert_eq!(payload.role, Role::User);
    }

    #[test]
    fn test_missing_role_decodes_to_user() {
        let payload: Payload = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(payload.role, Role::User);
    }
}
