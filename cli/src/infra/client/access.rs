//! Teams, users, roles and permissions.

use shipa_types::{Email, Permission, Role, RolePermissions, Team, UpdateTeamRequest, User};

use super::{API_ROLES, API_TEAMS, API_USERS, ShipaClient, find_by};
use crate::application::ports::{PermissionApi, RoleApi, TeamApi, Transport, UserApi};
use crate::domain::ApiResult;

impl<T: Transport> TeamApi for ShipaClient<T> {
    fn get_team(&self, name: &str) -> ApiResult<Team> {
        self.lookup("team", name, &[API_TEAMS, name])
    }

    fn create_team(&self, team: &Team) -> ApiResult<()> {
        self.post(team, &[API_TEAMS])
    }

    fn update_team(&self, name: &str, request: &UpdateTeamRequest) -> ApiResult<()> {
        self.put(request, &[API_TEAMS, name])
    }

    fn delete_team(&self, name: &str) -> ApiResult<()> {
        self.delete(&[API_TEAMS, name])
    }
}

impl<T: Transport> UserApi for ShipaClient<T> {
    fn list_users(&self) -> ApiResult<Vec<User>> {
        self.get(&[API_USERS])
    }

    fn get_user(&self, email: &str) -> ApiResult<User> {
        find_by(self.list_users()?, "user", email, |u| u.email.as_str())
    }

    fn create_user(&self, user: &User) -> ApiResult<()> {
        self.post(user, &[API_USERS])
    }

    /// The platform's user delete endpoint does not work; users are left in
    /// place and this reports success.
    fn delete_user(&self, email: &str) -> ApiResult<()> {
        tracing::debug!(%email, "user delete is not supported by the platform; skipping");
        Ok(())
    }
}

impl<T: Transport> RoleApi for ShipaClient<T> {
    fn get_role(&self, name: &str) -> ApiResult<Role> {
        self.lookup("role", name, &[API_ROLES, name])
    }

    fn create_role(&self, role: &Role) -> ApiResult<()> {
        self.post(role, &[API_ROLES])
    }

    fn delete_role(&self, name: &str) -> ApiResult<()> {
        self.delete(&[API_ROLES, name])
    }

    fn associate_user(&self, role: &str, email: &str) -> ApiResult<()> {
        let body = Email {
            email: email.to_string(),
        };
        self.post(&body, &[API_ROLES, role, "user"])
    }

    fn disassociate_user(&self, role: &str, email: &str) -> ApiResult<()> {
        let body = Email {
            email: email.to_string(),
        };
        self.delete_with_payload(&body, &[API_ROLES, role, "user", email])
    }
}

impl<T: Transport> PermissionApi for ShipaClient<T> {
    fn get_permission(&self, role: &str) -> ApiResult<Permission> {
        let resp: RolePermissions = self.lookup("role", role, &[API_ROLES, role])?;
        Ok(resp.into())
    }

    fn create_permission(&self, permission: &Permission) -> ApiResult<()> {
        self.post(
            permission,
            &[API_ROLES, permission.role.as_str(), "permissions"],
        )
    }

    fn delete_permission(&self, role: &str, permission: &str) -> ApiResult<()> {
        self.delete(&[API_ROLES, role, "permissions", permission])
    }
}
