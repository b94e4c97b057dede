//! Decoded payload of a verified access token.
//!
//! Only `permissions` is interpreted by this service. Every other member of the
//! payload is kept as-is in `extra` so handlers can read it (e.g. `sub`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::services::auth::permissions::PermissionSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedPermissions;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    /// Permissions granted by the token.
    ///
    /// - absent / `null` → empty set
    /// - array of strings → each entry
    /// - string → space-delimited list
    ///
    /// Any other shape (or a non-string array entry) is malformed.
    pub fn permission_set(&self) -> Result<PermissionSet, MalformedPermissions> {
        match &self.permissions {
            None | Some(Value::Null) => Ok(PermissionSet::new()),
            Some(Value::String(s)) => Ok(s.split_whitespace().map(str::to_string).collect()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|v| v.as_str().map(str::to_string).ok_or(MalformedPermissions))
                .collect(),
            Some(_) => Err(MalformedPermissions),
        }
    }

    pub fn subject(&self) -> Option<&str> {
        self.extra.get("sub").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn claims(payload: Value) -> Claims {
        serde_json::from_value(payload).unwrap()
    }

    #[test]
    fn absent_permissions_are_empty() {
        let c = claims(json!({"sub": "user-1"}));
        assert!(c.permission_set().unwrap().is_empty());
        assert_eq!(c.subject(), Some("user-1"));
    }

    #[test]
    fn null_permissions_are_empty() {
        let c = claims(json!({"permissions": null}));
        assert!(c.permission_set().unwrap().is_empty());
    }

    #[test]
    fn array_permissions_are_kept_verbatim() {
        let c = claims(json!({"permissions": ["read:data", "read: data"]}));
        let set = c.permission_set().unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("read:data"));
        assert!(set.contains("read: data"));
    }

    #[test]
    fn string_permissions_split_on_whitespace() {
        let c = claims(json!({"permissions": "read:data  write:data"}));
        let set = c.permission_set().unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("write:data"));
    }

    #[test]
    fn non_string_entries_are_malformed() {
        let c = claims(json!({"permissions": ["read:data", 7]}));
        assert_eq!(c.permission_set(), Err(MalformedPermissions));

        let c = claims(json!({"permissions": {"read": true}}));
        assert_eq!(c.permission_set(), Err(MalformedPermissions));
    }

    #[test]
    fn extra_members_survive_decoding() {
        let c = claims(json!({"sub": "u", "exp": 10, "tenant": "acme"}));
        assert_eq!(c.extra.get("tenant"), Some(&json!("acme")));
        assert!(c.permissions.is_none());
    }
}
