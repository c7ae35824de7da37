//! # Resources
//!
//! Protected resource classes. An [`Object`] is whatever the host application
//! guards: a table name, a URL path prefix, a document kind.

use serde::{Deserialize, Serialize};

/// Implements the conversions shared by every string-keyed identity type:
/// `Display`, `AsRef<str>`, `From<&str>`, `From<String>` and `From<T> for String`.
macro_rules! impl_string_id {
    ($ty:ident) => {
        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl From<&str> for $ty {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $ty {
            fn from(id: String) -> Self {
                Self::new(id)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> String {
                value.as_str().to_owned()
            }
        }
    };
}

pub(crate) use impl_string_id;

/// Identifier of a protected resource class.
///
/// # Example
///
/// ```
/// use rbac_registry::Object;
///
/// let doc = Object::new("doc");
/// assert_eq!(doc.as_str(), "doc");
/// assert_eq!(doc, Object::from(String::from("doc")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Object(String);

impl Object {
    /// Create an object from its identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier this object was built from.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl_string_id!(Object);
