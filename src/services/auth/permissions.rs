//! Permission requirements: a disjunction of conjunctions.
//!
//! A [`Requirement`] holds an ordered list of [`PermissionGroup`]s. A caller
//! passes when it holds every permission of at least one group. An empty
//! requirement lets everyone through.
//!
//! Matching is exact: no wildcards, no case folding, no whitespace trimming.

use std::collections::HashSet;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Permissions held by an authenticated caller.
pub type PermissionSet = HashSet<String>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequirementError {
    #[error("permission requirement must be a string or an array, got {0}")]
    UnsupportedShape(&'static str),
    #[error("permission entry at {0} is not a string")]
    NotAString(String),
    #[error("permission requirement mixes strings and groups")]
    MixedShapes,
}

/// Permissions that must all be held together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionGroup(Vec<String>);

impl PermissionGroup {
    pub fn new<I, S>(permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(permissions.into_iter().map(Into::into).collect())
    }

    pub fn is_satisfied_by(&self, held: &PermissionSet) -> bool {
        self.0.iter().all(|p| held.contains(p))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requirement {
    groups: Vec<PermissionGroup>,
}

impl Requirement {
    /// No permissions required.
    pub fn none() -> Self {
        Self::default()
    }

    /// Every listed permission is required.
    pub fn all<I, S>(permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            groups: vec![PermissionGroup::new(permissions)],
        }
    }

    /// At least one of the groups must be held in full.
    pub fn any_of<G, I, S>(groups: G) -> Self
    where
        G: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            groups: groups.into_iter().map(PermissionGroup::new).collect(),
        }
    }

    /// Build a requirement from a loosely-typed JSON value.
    ///
    /// Accepted shapes:
    /// - `"perm"` → one group with one permission
    /// - `["a", "b"]` → one group requiring both
    /// - `[["a"], ["b", "c"]]` → `a` OR (`b` AND `c`)
    /// - `[]` → no requirement
    pub fn from_value(value: &Value) -> Result<Self, RequirementError> {
        match value {
            Value::String(s) => Ok(Self::all([s.as_str()])),
            Value::Array(items) if items.is_empty() => Ok(Self::none()),
            Value::Array(items) if items.iter().all(Value::is_array) => {
                let mut groups = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    // every item is an array per the match guard
                    let Value::Array(entries) = item else {
                        return Err(RequirementError::MixedShapes);
                    };
                    groups.push(PermissionGroup(strings_at(entries, Some(i))?));
                }
                Ok(Self { groups })
            }
            Value::Array(items) if items.iter().any(Value::is_array) => {
                Err(RequirementError::MixedShapes)
            }
            Value::Array(items) => Ok(Self {
                groups: vec![PermissionGroup(strings_at(items, None)?)],
            }),
            other => Err(RequirementError::UnsupportedShape(json_kind(other))),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn is_satisfied_by(&self, held: &PermissionSet) -> bool {
        self.groups.is_empty() || self.groups.iter().any(|g| g.is_satisfied_by(held))
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.groups.is_empty() {
            return f.write_str("(none)");
        }
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                f.write_str(" OR ")?;
            }
            write!(f, "[{}]", group.0.join(" AND "))?;
        }
        Ok(())
    }
}

fn strings_at(entries: &[Value], group: Option<usize>) -> Result<Vec<String>, RequirementError> {
    entries
        .iter()
        .enumerate()
        .map(|(j, v)| match v {
            Value::String(s) => Ok(s.clone()),
            _ => Err(RequirementError::NotAString(match group {
                Some(i) => format!("[{i}][{j}]"),
                None => format!("[{j}]"),
            })),
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn held(perms: &[&str]) -> PermissionSet {
        perms.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn empty_holder_is_denied_a_single_permission() {
        let req = Requirement::any_of([["read:data"]]);
        assert!(!req.is_satisfied_by(&held(&[])));
    }

    #[test]
    fn exact_holder_is_allowed() {
        let req = Requirement::any_of([["read:data"]]);
        assert!(req.is_satisfied_by(&held(&["read:data"])));
    }

    #[test]
    fn either_group_is_enough() {
        let req = Requirement::any_of([["read:data"], ["write:data"]]);
        assert!(req.is_satisfied_by(&held(&["write:data"])));
        assert!(req.is_satisfied_by(&held(&["read:data"])));
        assert!(!req.is_satisfied_by(&held(&["delete:data"])));
    }

    #[test]
    fn group_needs_every_member() {
        let req = Requirement::all(["read:data", "write:data"]);
        assert!(!req.is_satisfied_by(&held(&["read:data"])));
        assert!(req.is_satisfied_by(&held(&["write:data", "read:data", "extra"])));
    }

    #[test]
    fn empty_requirement_allows_everyone() {
        assert!(Requirement::none().is_satisfied_by(&held(&[])));
        assert!(Requirement::none().is_empty());
    }

    #[test]
    fn embedded_whitespace_is_a_literal_mismatch() {
        let req = Requirement::all(["read: data"]);
        assert!(!req.is_satisfied_by(&held(&["read:data"])));
        assert!(req.is_satisfied_by(&held(&["read: data"])));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let req = Requirement::all(["read:data"]);
        assert!(!req.is_satisfied_by(&held(&["READ:DATA"])));
    }

    #[test]
    fn from_value_accepts_string_shapes() {
        assert_eq!(
            Requirement::from_value(&json!("read:data")).unwrap(),
            Requirement::all(["read:data"])
        );
        assert_eq!(
            Requirement::from_value(&json!(["a", "b"])).unwrap(),
            Requirement::all(["a", "b"])
        );
        assert_eq!(
            Requirement::from_value(&json!([["a"], ["b", "c"]])).unwrap(),
            Requirement::any_of(vec![vec!["a"], vec!["b", "c"]])
        );
        assert!(Requirement::from_value(&json!([])).unwrap().is_empty());
    }

    #[test]
    fn from_value_rejects_malformed_entries() {
        assert_eq!(
            Requirement::from_value(&json!(["a", 1])),
            Err(RequirementError::NotAString("[1]".into()))
        );
        assert_eq!(
            Requirement::from_value(&json!([["a"], [true]])),
            Err(RequirementError::NotAString("[1][0]".into()))
        );
        assert_eq!(
            Requirement::from_value(&json!(["a", ["b"]])),
            Err(RequirementError::MixedShapes)
        );
        assert_eq!(
            Requirement::from_value(&json!({"perm": "a"})),
            Err(RequirementError::UnsupportedShape("object"))
        );
    }

    #[test]
    fn display_reads_as_boolean_expression() {
        let req = Requirement::any_of(vec![vec!["a", "b"], vec!["c"]]);
        assert_eq!(req.to_string(), "[a AND b] OR [c]");
        assert_eq!(Requirement::none().to_string(), "(none)");
    }
}
