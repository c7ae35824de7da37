//! # RBAC Registry
//!
//! An in-memory role-based access control registry. It is a building block
//! for a host application's authorization layer, not a service.
//!
//! ## Overview
//!
//! The rbac-registry crate handles:
//! - **Entities**: Users, Roles and Permissions, each registered explicitly
//! - **Associations**: Role → Permissions and User → Roles
//! - **Cascades**: Removing an entity purges every association naming it
//! - **Decisions**: Does this user hold this permission?
//!
//! ## Architecture
//!
//! ```text
//! Permission = Object + Action
//!
//! User ──holds──> Role ──grants──> Permission
//!
//! user_has_permission(u, p) == any role r held by u grants p
//! ```
//!
//! There is no role inheritance and no wildcard matching. A user has a
//! permission iff one of its directly assigned roles directly holds exactly
//! that permission.
//!
//! ## Usage
//!
//! ```rust
//! use rbac_registry::{Action, Object, Permission, Rbac, RbacError, Role, User};
//!
//! let rbac = Rbac::new();
//!
//! // Register entities
//! let admin = Role::new("admin");
//! let alice = User::new("alice");
//! let read_doc = Permission::new(Object::new("doc"), Action::new("read"));
//! assert!(rbac.register_role(admin.clone()));
//! assert!(rbac.register_user(alice.clone()));
//! assert!(rbac.register_permission(read_doc.clone()));
//!
//! // Build associations
//! assert_eq!(rbac.assign_permission_to_role(&admin, &read_doc), Ok(true));
//! assert_eq!(rbac.assign_role_to_user(&alice, &admin), Ok(true));
//!
//! // Ask questions
//! assert_eq!(rbac.user_has_permission(&alice, &read_doc), Ok(true));
//! assert_eq!(
//!     rbac.user_has_object_action(&alice, &Object::new("doc"), &Action::new("read")),
//!     Ok(true)
//! );
//!
//! // Removing the role cascades
//! assert!(rbac.remove_role(&admin));
//! assert_eq!(rbac.user_has_role(&alice, &admin), Err(RbacError::RoleNotRegistered));
//! assert_eq!(rbac.user_has_permission(&alice, &read_doc), Ok(false));
//! ```
//!
//! ## Errors
//!
//! Registry operations (`register_*`, `remove_*`, `*_exists`, `list_*`)
//! never fail; they answer with booleans or lists. Association and decision
//! operations return [`RbacError`] when they name an unregistered entity,
//! and make no change in that case. Check the error before trusting the
//! boolean: `Ok(false)` is a real "no", an error means the question named
//! something unknown.
//!
//! ## Concurrency
//!
//! [`Rbac`] is `Send + Sync`. A single reader/writer lock guards the whole
//! registry: mutations (cascades included) are exclusive, queries share.
//! Share it with `Arc<Rbac>`.
//!
//! ## Configuration
//!
//! A registry can be seeded from JSON with [`RbacConfig`] and
//! [`Rbac::from_config`]; see the [`config`] module.

pub mod actions;
pub mod config;
pub mod error;
pub mod permissions;
pub mod registry;
pub mod resources;
pub mod subjects;

// Re-export main types for convenience
pub use actions::Action;
pub use config::{ConfigError, RbacConfig};
pub use error::{RbacError, RbacResult};
pub use permissions::Permission;
pub use registry::{Rbac, RbacStats};
pub use resources::Object;
pub use subjects::{Role, User};
