use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A Shipa application.
///
/// The manifest names the owning pool `framework`; the API calls it `pool`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct App {
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "crate::null_as_default", rename = "pool", alias = "framework", skip_serializing_if = "String::is_empty")]
    pub pool: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub teamowner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub units: Vec<Unit>,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub cname: Vec<String>,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub ip: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub org: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub entrypoints: Vec<Entrypoint>,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub routers: Vec<Router>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock: Option<Lock>,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub platform: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub status: String,
    /// Populated by some API responses only.
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub error: String,
}

/// Resource plan attached to an app.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Plan {
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub memory: i64,
    pub swap: i64,
    pub cpushare: i64,
    pub default: bool,
    pub public: bool,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub org: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<String>,
}

/// Plan creation payload. Memory and swap travel in the shortened
/// human form (`512M`, `1G`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePlanRequest {
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub memory: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub swap: String,
    pub cpushare: i64,
    pub default: bool,
    pub public: bool,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub org: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<String>,
}

impl From<&Plan> for CreatePlanRequest {
    fn from(plan: &Plan) -> Self {
        Self {
            name: plan.name.clone(),
            memory: bytes_to_human(plan.memory),
            swap: bytes_to_human(plan.swap),
            cpushare: plan.cpushare,
            default: plan.default,
            public: plan.public,
            org: plan.org.clone(),
            teams: plan.teams.clone(),
        }
    }
}

/// Shorten a byte count to the `K`/`M`/`G` notation the plans endpoint
/// expects. Values below 1024 are printed as-is; the largest suffix is `G`.
#[must_use]
pub fn bytes_to_human(input: i64) -> String {
    const STEP: i64 = 1024;
    const SUFFIXES: [&str; 3] = ["K", "M", "G"];

    if input < STEP {
        return input.to_string();
    }

    let mut value = input;
    for suffix in SUFFIXES {
        value /= STEP;
        if value < STEP {
            return format!("{value}{suffix}");
        }
    }
    format!("{value}G")
}

/// Running unit of an app, as reported by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Unit {
    #[serde(default, deserialize_with = "crate::null_as_default", rename = "ID", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub app_name: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub process_name: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub r#type: String,
    #[serde(default, deserialize_with = "crate::null_as_default", rename = "IP", skip_serializing_if = "String::is_empty")]
    pub ip: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub org: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub host_addr: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub host_port: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// URL of a unit, split into its components.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Address {
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub scheme: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub host: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub opaque: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub user: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub path: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub raw_path: String,
    pub force_query: bool,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub raw_query: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub fragment: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub raw_fragment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entrypoint {
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub cname: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub scheme: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Router {
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "BTreeMap::is_empty")]
    pub opts: BTreeMap<String, serde_json::Value>,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub r#type: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub address: String,
    pub default: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Lock {
    pub locked: bool,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub reason: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub owner: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub acquire_date: String,
}

/// Partial app update accepted by `PUT apps/{name}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateAppRequest {
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub pool: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub teamowner: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub plan: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub platform: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl From<&App> for UpdateAppRequest {
    fn from(app: &App) -> Self {
        Self {
            pool: app.pool.clone(),
            teamowner: app.teamowner.clone(),
            description: app.description.clone(),
            plan: app.plan.as_ref().map(|p| p.name.clone()).unwrap_or_default(),
            platform: app.platform.clone(),
            tags: app.tags.clone(),
        }
    }
}

/// Custom domain for an app.
///
/// `scheme` is never read from the manifest: it is derived from
/// `encrypted` by [`AppCname::with_scheme`] right before the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppCname {
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing)]
    pub app: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub cname: String,
    #[serde(skip_deserializing)]
    pub scheme: String,
    #[serde(skip_serializing)]
    pub encrypted: bool,
}

impl AppCname {
    /// `https` for encrypted cnames, `http` otherwise.
    #[must_use]
    pub fn derived_scheme(&self) -> &'static str {
        if self.encrypted { "https" } else { "http" }
    }

    /// Copy of this cname with `scheme` filled in from `encrypted`.
    #[must_use]
    pub fn with_scheme(&self) -> Self {
        Self {
            scheme: self.derived_scheme().to_string(),
            ..self.clone()
        }
    }
}

/// Body of `DELETE apps/{app}/cname`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteCnameRequest {
    #[serde(skip)]
    pub app: String,
    #[serde(default, deserialize_with = "crate::null_as_default", rename = "cnames")]
    pub cnames: Vec<String>,
}
