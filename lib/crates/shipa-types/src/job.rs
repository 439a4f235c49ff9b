use serde::{Deserialize, Serialize};

/// A job as returned by `GET jobs` and `POST jobs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Job {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub framework: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub containers: Vec<JobContainer>,
    pub policy: Option<JobPolicy>,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub cluster: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub org: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub owner: String,
    pub backoff_limit: i64,
    pub completions: i64,
    pub parallelism: i64,
    pub suspend: bool,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub team: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<String>,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub r#type: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub created_at: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub deleted_at: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub updated_at: String,
}

/// Job creation payload; also the manifest's `job` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobCreateRequest {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub framework: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub containers: Vec<JobContainer>,
    pub policy: Option<JobPolicy>,

    pub backoff_limit: i64,
    pub completions: i64,
    pub parallelism: i64,
    pub suspend: bool,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub team: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub r#type: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobPolicy {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub restart_policy: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobContainer {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub command: Vec<String>,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub name: String,
}
