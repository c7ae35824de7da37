//! # Permissions
//!
//! A permission combines an object with an action. Identity is structural:
//! two permissions are the same permission when both halves are equal,
//! regardless of where they were built.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::actions::Action;
use crate::resources::Object;

/// A combination of object and action.
///
/// # Example
///
/// ```
/// use rbac_registry::{Action, Object, Permission};
///
/// let perm = Permission::new(Object::new("doc"), Action::new("read"));
/// assert_eq!(perm.to_string(), "doc:read");
/// assert_eq!(perm, Permission::parse("doc:read").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Permission {
    object: Object,
    action: Action,
}

impl Permission {
    /// Create a permission from its object and action.
    pub fn new(object: impl Into<Object>, action: impl Into<Action>) -> Self {
        Self {
            object: object.into(),
            action: action.into(),
        }
    }

    /// The object this permission applies to.
    pub fn object(&self) -> &Object {
        &self.object
    }

    /// The action this permission allows.
    pub fn action(&self) -> &Action {
        &self.action
    }

    /// Parse from the `object:action` form.
    ///
    /// The split happens on the last `:`, so objects may themselves contain
    /// colons. Both halves must be non-empty.
    ///
    /// # Returns
    ///
    /// `Some(Permission)` if valid, `None` otherwise
    ///
    /// # Example
    ///
    /// ```
    /// use rbac_registry::Permission;
    ///
    /// let perm = Permission::parse("urn:doc:42:read").unwrap();
    /// assert_eq!(perm.object().as_str(), "urn:doc:42");
    /// assert_eq!(perm.action().as_str(), "read");
    ///
    /// assert!(Permission::parse("doc").is_none());
    /// assert!(Permission::parse("doc:").is_none());
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let (object, action) = s.rsplit_once(':')?;
        if object.is_empty() || action.is_empty() {
            return None;
        }
        Some(Self::new(object, action))
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.object, self.action)
    }
}

impl From<(Object, Action)> for Permission {
    fn from((object, action): (Object, Action)) -> Self {
        Self { object, action }
    }
}
