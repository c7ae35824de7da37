//! Registry state
//!
//! The three registered sets and the two association maps, with every
//! operation implemented against `&self`/`&mut self`. Nothing here locks;
//! [`Rbac`](super::Rbac) takes the guard once and calls into this type, so
//! no operation ever re-enters the lock.

use std::collections::{HashMap, HashSet};

use crate::error::{RbacError, RbacResult};
use crate::permissions::Permission;
use crate::subjects::{Role, User};

#[derive(Debug, Default)]
pub(crate) struct RbacState {
    pub(crate) permissions: HashSet<Permission>,
    pub(crate) roles: HashSet<Role>,
    pub(crate) users: HashSet<User>,

    /// Role -> permissions granted to it. Keys are always registered roles.
    pub(crate) role_permissions: HashMap<Role, HashSet<Permission>>,
    /// User -> roles assigned to it. Keys are always registered users.
    pub(crate) user_roles: HashMap<User, HashSet<Role>>,
}

impl RbacState {
    // ------------------------------------------------------------------------
    // Preconditions
    // ------------------------------------------------------------------------

    pub(crate) fn require_permission(&self, permission: &Permission) -> RbacResult<()> {
        if self.permissions.contains(permission) {
            Ok(())
        } else {
            Err(RbacError::PermissionNotRegistered)
        }
    }

    pub(crate) fn require_role(&self, role: &Role) -> RbacResult<()> {
        if self.roles.contains(role) {
            Ok(())
        } else {
            Err(RbacError::RoleNotRegistered)
        }
    }

    pub(crate) fn require_user(&self, user: &User) -> RbacResult<()> {
        if self.users.contains(user) {
            Ok(())
        } else {
            Err(RbacError::UserNotRegistered)
        }
    }

    // ------------------------------------------------------------------------
    // Registration and cascading removal
    // ------------------------------------------------------------------------

    pub(crate) fn register_permission(&mut self, permission: Permission) -> bool {
        self.permissions.insert(permission)
    }

    pub(crate) fn register_role(&mut self, role: Role) -> bool {
        self.roles.insert(role)
    }

    pub(crate) fn register_user(&mut self, user: User) -> bool {
        self.users.insert(user)
    }

    /// Unregister a permission and prune it from every role.
    ///
    /// Role entries are kept even when their set becomes empty.
    /// Returns `None` if the permission was not registered, otherwise the
    /// number of roles it was pruned from.
    pub(crate) fn remove_permission(&mut self, permission: &Permission) -> Option<usize> {
        if !self.permissions.remove(permission) {
            return None;
        }

        let pruned = self
            .role_permissions
            .values_mut()
            .map(|perms| perms.remove(permission))
            .filter(|removed| *removed)
            .count();
        Some(pruned)
    }

    /// Unregister every permission matching `pred`, applying the permission
    /// cascade to each. Returns the removed permissions.
    pub(crate) fn remove_permissions_where<F>(&mut self, pred: F) -> Vec<Permission>
    where
        F: Fn(&Permission) -> bool,
    {
        let doomed: Vec<Permission> = self
            .permissions
            .iter()
            .filter(|p| pred(p))
            .cloned()
            .collect();

        for permission in &doomed {
            self.remove_permission(permission);
        }
        doomed
    }

    /// Unregister a role, drop its permission entry and prune it from every
    /// user. User entries are kept even when their set becomes empty.
    ///
    /// Returns `None` if the role was not registered, otherwise the number of
    /// users it was pruned from.
    pub(crate) fn remove_role(&mut self, role: &Role) -> Option<usize> {
        if !self.roles.remove(role) {
            return None;
        }

        self.role_permissions.remove(role);
        let pruned = self
            .user_roles
            .values_mut()
            .map(|roles| roles.remove(role))
            .filter(|removed| *removed)
            .count();
        Some(pruned)
    }

    /// Unregister a user and drop its role entry entirely.
    ///
    /// Returns `None` if the user was not registered, otherwise the number of
    /// role assignments dropped with it.
    pub(crate) fn remove_user(&mut self, user: &User) -> Option<usize> {
        if !self.users.remove(user) {
            return None;
        }

        let dropped = self.user_roles.remove(user).map_or(0, |roles| roles.len());
        Some(dropped)
    }

    // ------------------------------------------------------------------------
    // Role <-> Permission
    // ------------------------------------------------------------------------

    pub(crate) fn assign_permission(&mut self, role: &Role, permission: &Permission) -> RbacResult<bool> {
        self.require_role(role)?;
        self.require_permission(permission)?;

        let perms = self.role_permissions.entry(role.clone()).or_default();
        if perms.contains(permission) {
            return Ok(false);
        }
        perms.insert(permission.clone());
        Ok(true)
    }

    pub(crate) fn unassign_permission(&mut self, role: &Role, permission: &Permission) -> RbacResult<bool> {
        self.require_role(role)?;
        self.require_permission(permission)?;

        Ok(self
            .role_permissions
            .get_mut(role)
            .is_some_and(|perms| perms.remove(permission)))
    }

    pub(crate) fn permissions_of(&self, role: &Role) -> RbacResult<Vec<Permission>> {
        self.require_role(role)?;

        Ok(self
            .role_permissions
            .get(role)
            .map(|perms| perms.iter().cloned().collect())
            .unwrap_or_default())
    }

    pub(crate) fn role_has_permission(&self, role: &Role, permission: &Permission) -> RbacResult<bool> {
        self.require_role(role)?;
        self.require_permission(permission)?;

        Ok(self.role_grants(role, permission))
    }

    fn role_grants(&self, role: &Role, permission: &Permission) -> bool {
        self.role_permissions
            .get(role)
            .is_some_and(|perms| perms.contains(permission))
    }

    // ------------------------------------------------------------------------
    // User <-> Role
    // ------------------------------------------------------------------------

    pub(crate) fn assign_role(&mut self, user: &User, role: &Role) -> RbacResult<bool> {
        self.require_user(user)?;
        self.require_role(role)?;

        let roles = self.user_roles.entry(user.clone()).or_default();
        if roles.contains(role) {
            return Ok(false);
        }
        roles.insert(role.clone());
        Ok(true)
    }

    pub(crate) fn unassign_role(&mut self, user: &User, role: &Role) -> RbacResult<bool> {
        self.require_user(user)?;
        self.require_role(role)?;

        Ok(self
            .user_roles
            .get_mut(user)
            .is_some_and(|roles| roles.remove(role)))
    }

    pub(crate) fn roles_of(&self, user: &User) -> RbacResult<Vec<Role>> {
        self.require_user(user)?;

        Ok(self
            .user_roles
            .get(user)
            .map(|roles| roles.iter().cloned().collect())
            .unwrap_or_default())
    }

    pub(crate) fn user_has_role(&self, user: &User, role: &Role) -> RbacResult<bool> {
        self.require_user(user)?;
        self.require_role(role)?;

        Ok(self
            .user_roles
            .get(user)
            .is_some_and(|roles| roles.contains(role)))
    }

    // ------------------------------------------------------------------------
    // Decision
    // ------------------------------------------------------------------------

    pub(crate) fn user_has_permission(&self, user: &User, permission: &Permission) -> RbacResult<bool> {
        self.require_user(user)?;
        self.require_permission(permission)?;

        Ok(self.user_grants(user, permission))
    }

    /// One hop: user -> any directly assigned role -> exact permission.
    /// Stops at the first role that grants it.
    fn user_grants(&self, user: &User, permission: &Permission) -> bool {
        self.user_roles
            .get(user)
            .is_some_and(|roles| roles.iter().any(|role| self.role_grants(role, permission)))
    }
}
