use serde::{Deserialize, Serialize};

use crate::{is_false, is_zero};

/// Deploy request as written in a manifest.
///
/// The deploy endpoint takes a URL-encoded form, not this struct's JSON;
/// the CLI builds the form from these fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AppDeploy {
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing)]
    pub app: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub image: String,
    #[serde(skip_serializing_if = "is_false")]
    pub private_image: bool,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub registry_user: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub registry_secret: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub steps: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub step_weight: i64,
    /// Duration string such as `5m` or `1h30m`.
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub step_interval: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub port: i64,
    pub detach: bool,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// Path to a local `shipa.yaml`; its content is sent base64-encoded.
    #[serde(default, deserialize_with = "crate::null_as_default", rename = "shipayaml", skip_serializing_if = "String::is_empty")]
    pub shipa_yaml: String,
}

/// One entry of `GET apps/{app}/deployments`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AppDeployment {
    #[serde(default, deserialize_with = "crate::null_as_default", rename = "ID")]
    pub id: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub app: String,
    pub active: bool,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub version: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub origin: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub commit: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub user: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub error: String,
    pub can_rollback: bool,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub org: String,
}
