//! # Subjects
//!
//! Roles and users. A [`Role`] names a bundle of permissions; a [`User`]
//! names a principal that holds roles. Both are plain identifiers with value
//! equality, so a host can rebuild them from a request (an authenticated
//! subject claim, a role name from a token) and get the same key back.

use serde::{Deserialize, Serialize};

use crate::resources::impl_string_id;

/// A named bundle of permissions.
///
/// # Example
///
/// ```
/// use rbac_registry::Role;
///
/// let admin = Role::new("admin");
/// assert_eq!(admin.as_str(), "admin");
/// assert_eq!(admin, "admin".into());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role {
    id: String,
}

impl Role {
    /// Create a role from its identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Get the role identifier.
    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl_string_id!(Role);

/// A principal that can be assigned roles.
///
/// # Example
///
/// ```
/// use rbac_registry::User;
///
/// let alice = User::new("alice");
/// assert_eq!(alice.to_string(), "alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User {
    id: String,
}

impl User {
    /// Create a user from its identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Get the user identifier.
    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl_string_id!(User);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_role_value_equality() {
        assert_eq!(Role::new("admin"), Role::from(String::from("admin")));
        assert_ne!(Role::new("admin"), Role::new("editor"));
    }

    #[test]
    fn test_user_value_equality() {
        assert_eq!(User::new("alice"), User::from("alice"));
        assert_ne!(User::new("alice"), User::new("bob"));
    }

    #[test]
    fn test_subjects_as_json_map_keys() {
        let mut grants: HashMap<User, Vec<Role>> = HashMap::new();
        grants.insert(User::new("alice"), vec![Role::new("admin")]);

        let json = serde_json::to_value(&grants).unwrap();
        assert_eq!(json, serde_json::json!({"alice": ["admin"]}));

        let back: HashMap<User, Vec<Role>> = serde_json::from_value(json).unwrap();
        assert_eq!(back[&User::new("alice")], vec![Role::new("admin")]);
    }
}
