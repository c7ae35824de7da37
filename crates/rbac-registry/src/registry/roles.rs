//! Role registry and the role↔permission relation

use super::Rbac;
use crate::actions::Action;
use crate::error::RbacResult;
use crate::permissions::Permission;
use crate::resources::Object;
use crate::subjects::Role;

impl Rbac {
    /// Register a role.
    ///
    /// Returns `false` if the role is already registered.
    pub fn register_role(&self, role: Role) -> bool {
        let mut state = self.state.write();
        if state.roles.contains(&role) {
            return false;
        }
        tracing::debug!(role = %role, "Role registered");
        state.register_role(role)
    }

    /// Remove a role.
    ///
    /// Its permission entry is dropped wholesale and the role is taken away
    /// from every user holding it. Returns `false` if no such role was
    /// registered.
    pub fn remove_role(&self, role: &Role) -> bool {
        let mut state = self.state.write();
        match state.remove_role(role) {
            Some(cascaded) => {
                tracing::debug!(role = %role, cascaded, "Role removed");
                true
            }
            None => false,
        }
    }

    /// List all registered roles. Order is not meaningful.
    pub fn list_roles(&self) -> Vec<Role> {
        self.state.read().roles.iter().cloned().collect()
    }

    /// Check if a role is registered.
    pub fn role_exists(&self, role: &Role) -> bool {
        self.state.read().roles.contains(role)
    }

    /// Grant a permission to a role.
    ///
    /// Both have to be registered; the role is checked first.
    /// Returns `Ok(false)` if the role already holds the permission.
    ///
    /// # Arguments
    ///
    /// * `role` - The role receiving the grant
    /// * `permission` - The permission being granted
    pub fn assign_permission_to_role(&self, role: &Role, permission: &Permission) -> RbacResult<bool> {
        let mut state = self.state.write();
        let added = state.assign_permission(role, permission)?;
        if added {
            tracing::debug!(role = %role, permission = %permission, "Permission assigned to role");
        }
        Ok(added)
    }

    /// Take a permission away from a role.
    ///
    /// Both have to be registered; the role is checked first.
    /// Returns `Ok(false)` if the role did not hold the permission.
    ///
    /// # Arguments
    ///
    /// * `role` - The role losing the grant
    /// * `permission` - The permission being revoked
    pub fn remove_permission_from_role(&self, role: &Role, permission: &Permission) -> RbacResult<bool> {
        let mut state = self.state.write();
        let removed = state.unassign_permission(role, permission)?;
        if removed {
            tracing::debug!(role = %role, permission = %permission, "Permission removed from role");
        }
        Ok(removed)
    }

    /// List the permissions granted to a role.
    ///
    /// The role has to be registered. An empty list means the role holds
    /// nothing; an unknown role is an error, not an empty list.
    pub fn list_role_permissions(&self, role: &Role) -> RbacResult<Vec<Permission>> {
        self.state.read().permissions_of(role)
    }

    /// Check if a role directly holds a permission.
    ///
    /// Both have to be registered; the role is checked first.
    ///
    /// # Arguments
    ///
    /// * `role` - The role to inspect
    /// * `permission` - The permission to look for
    pub fn role_has_permission(&self, role: &Role, permission: &Permission) -> RbacResult<bool> {
        self.state.read().role_has_permission(role, permission)
    }

    /// Check if a role holds the permission for `object` and `action`.
    ///
    /// Same as [`role_has_permission`](Self::role_has_permission) with the
    /// permission built by value.
    ///
    /// # Arguments
    ///
    /// * `role` - The role to inspect
    /// * `object` - Object half of the permission
    /// * `action` - Action half of the permission
    pub fn role_has_object_action(&self, role: &Role, object: &Object, action: &Action) -> RbacResult<bool> {
        let permission = Permission::new(object.clone(), action.clone());
        self.state.read().role_has_permission(role, &permission)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Action, Object, Permission, Rbac, RbacError, Role, User};

    fn rbac_with(role: &Role, permission: &Permission) -> Rbac {
        let rbac = Rbac::new();
        rbac.register_role(role.clone());
        rbac.register_permission(permission.clone());
        rbac
    }

    #[test]
    fn test_register_role() {
        let rbac = Rbac::new();
        let admin = Role::new("admin");

        assert!(rbac.register_role(admin.clone()));
        assert!(rbac.role_exists(&admin));
        assert!(!rbac.register_role(admin.clone()));
        assert_eq!(rbac.list_roles().len(), 1);
    }

    #[test]
    fn test_remove_role() {
        let rbac = Rbac::new();
        let admin = Role::new("admin");
        let alice = User::new("alice");

        // case 1: role is not registered
        assert!(!rbac.remove_role(&admin));

        // case 2: role is registered, not assigned to anyone
        rbac.register_role(admin.clone());
        assert!(rbac.remove_role(&admin));
        assert!(!rbac.role_exists(&admin));

        // case 3: role is registered and assigned to a user
        rbac.register_role(admin.clone());
        rbac.register_user(alice.clone());
        rbac.assign_role_to_user(&alice, &admin).unwrap();

        assert!(rbac.remove_role(&admin));
        assert!(!rbac.role_exists(&admin));
        assert_eq!(rbac.list_user_roles(&alice), Ok(vec![]));
    }

    #[test]
    fn test_remove_role_drops_its_permissions() {
        let admin = Role::new("admin");
        let read = Permission::new("doc", "read");
        let rbac = rbac_with(&admin, &read);
        rbac.assign_permission_to_role(&admin, &read).unwrap();

        rbac.remove_role(&admin);
        rbac.register_role(admin.clone());
        assert_eq!(rbac.list_role_permissions(&admin), Ok(vec![]));
        assert!(rbac.permission_exists(&read));
    }

    #[test]
    fn test_assign_permission_to_role() {
        let admin = Role::new("admin");
        let read = Permission::new("doc", "read");
        let rbac = Rbac::new();

        // case 1: neither registered, role error wins
        assert_eq!(
            rbac.assign_permission_to_role(&admin, &read),
            Err(RbacError::RoleNotRegistered)
        );

        // case 2: role registered, permission not
        rbac.register_role(admin.clone());
        assert_eq!(
            rbac.assign_permission_to_role(&admin, &read),
            Err(RbacError::PermissionNotRegistered)
        );

        // case 3: both registered
        rbac.register_permission(read.clone());
        assert_eq!(rbac.assign_permission_to_role(&admin, &read), Ok(true));

        // case 4: already assigned
        assert_eq!(rbac.assign_permission_to_role(&admin, &read), Ok(false));
        assert_eq!(rbac.list_role_permissions(&admin), Ok(vec![read]));
    }

    #[test]
    fn test_assign_to_unregistered_role_changes_nothing() {
        let rbac = Rbac::new();
        let read = Permission::new("doc", "read");
        let ghost = Role::new("ghost-role");
        rbac.register_permission(read.clone());

        assert_eq!(
            rbac.assign_permission_to_role(&ghost, &read),
            Err(RbacError::RoleNotRegistered)
        );
        assert_eq!(rbac.stats().role_permission_grants, 0);
        assert!(!rbac.role_exists(&ghost));
        assert_eq!(
            rbac.list_role_permissions(&ghost),
            Err(RbacError::RoleNotRegistered)
        );
    }

    #[test]
    fn test_remove_permission_from_role() {
        let admin = Role::new("admin");
        let read = Permission::new("doc", "read");
        let rbac = Rbac::new();

        assert_eq!(
            rbac.remove_permission_from_role(&admin, &read),
            Err(RbacError::RoleNotRegistered)
        );

        rbac.register_role(admin.clone());
        assert_eq!(
            rbac.remove_permission_from_role(&admin, &read),
            Err(RbacError::PermissionNotRegistered)
        );

        rbac.register_permission(read.clone());
        assert_eq!(rbac.remove_permission_from_role(&admin, &read), Ok(false));

        rbac.assign_permission_to_role(&admin, &read).unwrap();
        assert_eq!(rbac.remove_permission_from_role(&admin, &read), Ok(true));
        assert_eq!(rbac.role_has_permission(&admin, &read), Ok(false));
    }

    #[test]
    fn test_list_role_permissions() {
        let admin = Role::new("admin");
        let rbac = Rbac::new();

        assert_eq!(
            rbac.list_role_permissions(&admin),
            Err(RbacError::RoleNotRegistered)
        );

        rbac.register_role(admin.clone());
        assert_eq!(rbac.list_role_permissions(&admin), Ok(vec![]));

        for i in 0..50 {
            let perm = Permission::new(format!("object-{}", i), "read");
            rbac.register_permission(perm.clone());
            rbac.assign_permission_to_role(&admin, &perm).unwrap();
        }
        assert_eq!(rbac.list_role_permissions(&admin).unwrap().len(), 50);
    }

    #[test]
    fn test_role_has_permission() {
        let admin = Role::new("admin");
        let read = Permission::new("doc", "read");
        let rbac = Rbac::new();

        assert_eq!(
            rbac.role_has_permission(&admin, &read),
            Err(RbacError::RoleNotRegistered)
        );

        rbac.register_role(admin.clone());
        assert_eq!(
            rbac.role_has_permission(&admin, &read),
            Err(RbacError::PermissionNotRegistered)
        );

        rbac.register_permission(read.clone());
        assert_eq!(rbac.role_has_permission(&admin, &read), Ok(false));

        rbac.assign_permission_to_role(&admin, &read).unwrap();
        assert_eq!(rbac.role_has_permission(&admin, &read), Ok(true));
    }

    #[test]
    fn test_role_has_object_action() {
        let admin = Role::new("admin");
        let read = Permission::new("doc", "read");
        let rbac = rbac_with(&admin, &read);
        rbac.assign_permission_to_role(&admin, &read).unwrap();

        let doc = Object::new("doc");
        assert_eq!(rbac.role_has_object_action(&admin, &doc, &Action::new("read")), Ok(true));
        assert_eq!(
            rbac.role_has_object_action(&admin, &doc, &Action::new("write")),
            Err(RbacError::PermissionNotRegistered)
        );
        assert_eq!(
            rbac.role_has_object_action(&Role::new("ghost"), &doc, &Action::new("write")),
            Err(RbacError::RoleNotRegistered)
        );
    }
}
