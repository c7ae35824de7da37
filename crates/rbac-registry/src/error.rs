//! Error types for registry operations
//!
//! Every association and decision operation checks that the entities it
//! names are registered. When one is not, the operation returns one of these
//! errors and leaves the registry untouched.

use thiserror::Error;

/// Precondition failures for association and decision operations.
///
/// The variants carry no payload, so they can be compared directly:
///
/// ```
/// use rbac_registry::{Rbac, RbacError, Role, User};
///
/// let rbac = Rbac::new();
/// let err = rbac.user_has_role(&User::new("alice"), &Role::new("admin")).unwrap_err();
/// assert_eq!(err, RbacError::UserNotRegistered);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RbacError {
    /// Operation referenced a role absent from the registered roles
    #[error("role is not registered")]
    RoleNotRegistered,

    /// Operation referenced a permission absent from the registered permissions
    #[error("permission is not registered")]
    PermissionNotRegistered,

    /// Operation referenced a user absent from the registered users
    #[error("user is not registered")]
    UserNotRegistered,
}

/// Result type for registry operations.
pub type RbacResult<T> = Result<T, RbacError>;

impl RbacError {
    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            RbacError::RoleNotRegistered => "ROLE_NOT_REGISTERED",
            RbacError::PermissionNotRegistered => "PERMISSION_NOT_REGISTERED",
            RbacError::UserNotRegistered => "USER_NOT_REGISTERED",
        }
    }
}
