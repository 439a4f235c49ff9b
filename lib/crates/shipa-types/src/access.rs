//! Teams, users, roles and permissions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Body of `PUT teams/{name}`; `name` renames the team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateTeamRequest {
    #[serde(default, deserialize_with = "crate::null_as_default", rename = "newname", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub context: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub email: String,
}

/// Permissions granted to a role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Permission {
    #[serde(default, deserialize_with = "crate::null_as_default", rename = "name")]
    pub role: String,
    #[serde(default, deserialize_with = "crate::null_as_default", rename = "permission")]
    pub permissions: Vec<String>,
}

/// `GET roles/{role}` response; its scheme names are the role's permissions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RolePermissions {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub context: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub scheme_names: Vec<String>,
}

impl From<RolePermissions> for Permission {
    fn from(resp: RolePermissions) -> Self {
        Self {
            role: resp.name,
            permissions: resp.scheme_names,
        }
    }
}
