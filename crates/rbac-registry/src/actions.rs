//! # Actions
//!
//! The operation half of a permission. An action is an opaque identifier
//! such as `read`, `GET` or `approve`; the registry never interprets it.

use serde::{Deserialize, Serialize};

/// An operation that can be performed on an [`Object`](crate::Object).
///
/// Equality is by value: two actions built from the same string are the
/// same action. Actions are case-sensitive.
///
/// # Example
///
/// ```
/// use rbac_registry::Action;
///
/// let read = Action::new("read");
/// assert_eq!(read, Action::from("read"));
/// assert_ne!(read, Action::new("READ"));
/// assert_eq!(read.to_string(), "read");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Action(String);

impl Action {
    /// Create an action from its identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier this action was built from.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

crate::resources::impl_string_id!(Action);
