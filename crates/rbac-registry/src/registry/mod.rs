//! RBAC controller
//!
//! [`Rbac`] owns the registry state behind a single reader/writer lock.
//! Every mutation (including its cascade) runs under the write guard, so
//! readers never see an association map half-pruned. Every query runs under
//! the read guard, so authorization checks proceed in parallel.
//!
//! Operations are grouped by entity kind:
//! - `permissions`: permission registry and bulk removal
//! - `roles`: role registry and the role↔permission relation
//! - `users`: user registry, the user↔role relation and the decision

mod permissions;
mod roles;
mod state;
mod users;

use parking_lot::RwLock;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::{ConfigError, RbacConfig};
use state::RbacState;

/// Point-in-time counts of a registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RbacStats {
    /// Registered permissions
    pub permissions: usize,
    /// Registered roles
    pub roles: usize,
    /// Registered users
    pub users: usize,
    /// Total role -> permission pairs
    pub role_permission_grants: usize,
    /// Total user -> role pairs
    pub user_role_assignments: usize,
}

/// In-memory RBAC registry.
///
/// Construct one explicitly and share it with `Arc<Rbac>`; all methods take
/// `&self`.
///
/// # Example
///
/// ```
/// use rbac_registry::{Permission, Rbac, Role, User};
///
/// let rbac = Rbac::new();
/// let admin = Role::new("admin");
/// let alice = User::new("alice");
/// let read_doc = Permission::new("doc", "read");
///
/// rbac.register_role(admin.clone());
/// rbac.register_user(alice.clone());
/// rbac.register_permission(read_doc.clone());
///
/// assert_eq!(rbac.assign_permission_to_role(&admin, &read_doc), Ok(true));
/// assert_eq!(rbac.assign_role_to_user(&alice, &admin), Ok(true));
/// assert_eq!(rbac.user_has_permission(&alice, &read_doc), Ok(true));
/// ```
#[derive(Default)]
pub struct Rbac {
    state: RwLock<RbacState>,
}

impl std::fmt::Debug for Rbac {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stats = self.stats();
        f.debug_struct("Rbac")
            .field("permissions", &stats.permissions)
            .field("roles", &stats.roles)
            .field("users", &stats.users)
            .finish()
    }
}

impl Rbac {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a declarative config.
    ///
    /// Entities are registered first, then associations are applied. If any
    /// association names an entity the config does not declare, as a key or
    /// as a list member, the whole build fails and no registry is returned.
    /// Association keys with empty lists are kept as empty entries.
    ///
    /// # Arguments
    ///
    /// * `config` - Entities and associations to seed
    ///
    /// # Example
    ///
    /// ```
    /// use rbac_registry::{Permission, Rbac, RbacConfig, User};
    ///
    /// let config = RbacConfig::from_json(r#"{
    ///     "permissions": [{"object": "doc", "action": "read"}],
    ///     "roles": ["reader"],
    ///     "users": ["alice"],
    ///     "role_permissions": {"reader": [{"object": "doc", "action": "read"}]},
    ///     "user_roles": {"alice": ["reader"]}
    /// }"#).unwrap();
    ///
    /// let rbac = Rbac::from_config(&config).unwrap();
    /// assert_eq!(
    ///     rbac.user_has_permission(&User::new("alice"), &Permission::new("doc", "read")),
    ///     Ok(true)
    /// );
    /// ```
    pub fn from_config(config: &RbacConfig) -> Result<Self, ConfigError> {
        let mut state = RbacState::default();

        for permission in &config.permissions {
            state.register_permission(permission.clone());
        }
        for role in &config.roles {
            state.register_role(role.clone());
        }
        for user in &config.users {
            state.register_user(user.clone());
        }

        for (role, permissions) in &config.role_permissions {
            state
                .require_role(role)
                .map_err(|source| ConfigError::InvalidAssociation {
                    left: role.to_string(),
                    right: "permissions".to_string(),
                    source,
                })?;
            // Keep the entry even when the list is empty
            state.role_permissions.entry(role.clone()).or_default();

            for permission in permissions {
                state
                    .assign_permission(role, permission)
                    .map_err(|source| ConfigError::InvalidAssociation {
                        left: role.to_string(),
                        right: permission.to_string(),
                        source,
                    })?;
            }
        }
        for (user, roles) in &config.user_roles {
            state
                .require_user(user)
                .map_err(|source| ConfigError::InvalidAssociation {
                    left: user.to_string(),
                    right: "roles".to_string(),
                    source,
                })?;
            state.user_roles.entry(user.clone()).or_default();

            for role in roles {
                state
                    .assign_role(user, role)
                    .map_err(|source| ConfigError::InvalidAssociation {
                        left: user.to_string(),
                        right: role.to_string(),
                        source,
                    })?;
            }
        }

        tracing::info!(
            permissions = state.permissions.len(),
            roles = state.roles.len(),
            users = state.users.len(),
            "RBAC registry seeded from config"
        );

        Ok(Self {
            state: RwLock::new(state),
        })
    }

    /// Snapshot the current registry in config form.
    ///
    /// Lists are sorted so the output is stable. Empty association entries
    /// are kept, which lets a role with no permissions round-trip as such.
    pub fn export_config(&self) -> RbacConfig {
        let state = self.state.read();

        let mut config = RbacConfig {
            permissions: state.permissions.iter().cloned().collect(),
            roles: state.roles.iter().cloned().collect(),
            users: state.users.iter().cloned().collect(),
            role_permissions: BTreeMap::new(),
            user_roles: BTreeMap::new(),
        };
        config.permissions.sort();
        config.roles.sort();
        config.users.sort();

        for (role, permissions) in &state.role_permissions {
            let mut permissions: Vec<_> = permissions.iter().cloned().collect();
            permissions.sort();
            config.role_permissions.insert(role.clone(), permissions);
        }
        for (user, roles) in &state.user_roles {
            let mut roles: Vec<_> = roles.iter().cloned().collect();
            roles.sort();
            config.user_roles.insert(user.clone(), roles);
        }

        config
    }

    /// Get registry statistics.
    pub fn stats(&self) -> RbacStats {
        let state = self.state.read();
        RbacStats {
            permissions: state.permissions.len(),
            roles: state.roles.len(),
            users: state.users.len(),
            role_permission_grants: state.role_permissions.values().map(|p| p.len()).sum(),
            user_role_assignments: state.user_roles.values().map(|r| r.len()).sum(),
        }
    }
}
