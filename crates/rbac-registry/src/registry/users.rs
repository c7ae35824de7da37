//! User registry, the user↔role relation, and authorization decisions

use super::Rbac;
use crate::actions::Action;
use crate::error::RbacResult;
use crate::permissions::Permission;
use crate::resources::Object;
use crate::subjects::{Role, User};

impl Rbac {
    /// Register a user.
    ///
    /// Returns `false` if the user is already registered.
    pub fn register_user(&self, user: User) -> bool {
        let mut state = self.state.write();
        if state.users.contains(&user) {
            return false;
        }
        tracing::debug!(user = %user, "User registered");
        state.register_user(user)
    }

    /// Remove a user together with all of its role assignments.
    ///
    /// Registering the same user again starts from an empty role set.
    /// Returns `false` if no such user was registered.
    pub fn remove_user(&self, user: &User) -> bool {
        let mut state = self.state.write();
        match state.remove_user(user) {
            Some(cascaded) => {
                tracing::debug!(user = %user, cascaded, "User removed");
                true
            }
            None => false,
        }
    }

    /// List all registered users. Order is not meaningful.
    pub fn list_users(&self) -> Vec<User> {
        self.state.read().users.iter().cloned().collect()
    }

    /// Check if a user is registered.
    pub fn user_exists(&self, user: &User) -> bool {
        self.state.read().users.contains(user)
    }

    /// Assign a role to a user.
    ///
    /// Both have to be registered; the user is checked first.
    /// Returns `Ok(false)` if the user already holds the role.
    ///
    /// # Arguments
    ///
    /// * `user` - The user receiving the role
    /// * `role` - The role being assigned
    pub fn assign_role_to_user(&self, user: &User, role: &Role) -> RbacResult<bool> {
        let mut state = self.state.write();
        let added = state.assign_role(user, role)?;
        if added {
            tracing::debug!(user = %user, role = %role, "Role assigned to user");
        }
        Ok(added)
    }

    /// Take a role away from a user.
    ///
    /// Both have to be registered; the user is checked first.
    /// Returns `Ok(false)` if the user did not hold the role.
    ///
    /// # Arguments
    ///
    /// * `user` - The user losing the role
    /// * `role` - The role being revoked
    pub fn remove_role_from_user(&self, user: &User, role: &Role) -> RbacResult<bool> {
        let mut state = self.state.write();
        let removed = state.unassign_role(user, role)?;
        if removed {
            tracing::debug!(user = %user, role = %role, "Role removed from user");
        }
        Ok(removed)
    }

    /// List the roles assigned to a user.
    ///
    /// The user has to be registered.
    pub fn list_user_roles(&self, user: &User) -> RbacResult<Vec<Role>> {
        self.state.read().roles_of(user)
    }

    /// Check if a user directly holds a role.
    ///
    /// Both have to be registered; the user is checked first.
    ///
    /// # Arguments
    ///
    /// * `user` - The user to inspect
    /// * `role` - The role to look for
    pub fn user_has_role(&self, user: &User, role: &Role) -> RbacResult<bool> {
        self.state.read().user_has_role(user, role)
    }

    /// Check if any role assigned to the user holds the permission.
    ///
    /// Both have to be registered; the user is checked first. There is no
    /// inheritance or wildcard matching: the answer is `true` iff one of the
    /// user's roles holds exactly this permission.
    ///
    /// # Arguments
    ///
    /// * `user` - The user asking for access
    /// * `permission` - The permission being checked
    pub fn user_has_permission(&self, user: &User, permission: &Permission) -> RbacResult<bool> {
        self.state.read().user_has_permission(user, permission)
    }

    /// Check if the user may perform `action` on `object`.
    ///
    /// The permission is built by value and must be registered; that check
    /// runs before the user check. The whole decision is made under a single
    /// read guard.
    ///
    /// # Arguments
    ///
    /// * `user` - The user asking for access
    /// * `object` - Object half of the permission
    /// * `action` - Action half of the permission
    ///
    /// # Example
    ///
    /// ```
    /// use rbac_registry::{Action, Object, Rbac, RbacError, User};
    ///
    /// let rbac = Rbac::new();
    /// let alice = User::new("alice");
    /// rbac.register_user(alice.clone());
    ///
    /// let result = rbac.user_has_object_action(&alice, &Object::new("doc"), &Action::new("read"));
    /// assert_eq!(result, Err(RbacError::PermissionNotRegistered));
    /// ```
    pub fn user_has_object_action(&self, user: &User, object: &Object, action: &Action) -> RbacResult<bool> {
        let permission = Permission::new(object.clone(), action.clone());
        let state = self.state.read();
        state.require_permission(&permission)?;
        state.user_has_permission(user, &permission)
    }
}
