use serde::{Deserialize, Serialize};

/// Framework (pool) summary as listed by `GET pools`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pool {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub name: String,
    pub default: bool,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub provisioner: String,
    pub public: bool,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Allowed>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Allowed {
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub driver: Vec<String>,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub plan: Vec<String>,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub team: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePoolRequest {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub name: String,
    pub default: bool,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub provisioner: String,
    pub public: bool,
    pub force: bool,
}

/// Body of `PUT pools/{name}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePoolRequest {
    #[serde(skip)]
    pub name: String,
    pub default: bool,
    pub public: bool,
    pub force: bool,
}
