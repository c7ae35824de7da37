//! Permission registry

use super::Rbac;
use crate::actions::Action;
use crate::permissions::Permission;
use crate::resources::Object;

impl Rbac {
    /// Register a permission.
    ///
    /// Returns `false` if the permission is already registered; nothing
    /// changes in that case.
    pub fn register_permission(&self, permission: Permission) -> bool {
        let mut state = self.state.write();
        if state.permissions.contains(&permission) {
            return false;
        }
        tracing::debug!(permission = %permission, "Permission registered");
        state.register_permission(permission)
    }

    /// Remove a permission and prune it from every role that holds it.
    ///
    /// Role entries stay in place, possibly with an empty permission set.
    /// Returns `false` if no such permission was registered.
    pub fn remove_permission(&self, permission: &Permission) -> bool {
        let mut state = self.state.write();
        match state.remove_permission(permission) {
            Some(cascaded) => {
                tracing::debug!(permission = %permission, cascaded, "Permission removed");
                true
            }
            None => false,
        }
    }

    /// Remove every registered permission on `object`.
    ///
    /// All removals and their cascades happen under one write guard.
    /// Returns how many permissions were removed.
    pub fn remove_permissions_with_object(&self, object: &Object) -> usize {
        let mut state = self.state.write();
        let removed = state.remove_permissions_where(|p| p.object() == object);
        if !removed.is_empty() {
            tracing::debug!(object = %object, removed = removed.len(), "Permissions removed by object");
        }
        removed.len()
    }

    /// Remove every registered permission for `action`.
    ///
    /// All removals and their cascades happen under one write guard.
    /// Returns how many permissions were removed.
    pub fn remove_permissions_with_action(&self, action: &Action) -> usize {
        let mut state = self.state.write();
        let removed = state.remove_permissions_where(|p| p.action() == action);
        if !removed.is_empty() {
            tracing::debug!(action = %action, removed = removed.len(), "Permissions removed by action");
        }
        removed.len()
    }

    /// List all registered permissions. Order is not meaningful.
    pub fn list_permissions(&self) -> Vec<Permission> {
        self.state.read().permissions.iter().cloned().collect()
    }

    /// Check if a permission is registered.
    pub fn permission_exists(&self, permission: &Permission) -> bool {
        self.state.read().permissions.contains(permission)
    }
}
