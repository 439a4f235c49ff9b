use serde::{Deserialize, Serialize};

/// A single environment variable of an app.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppEnv {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub value: String,
}

/// Body of `POST apps/{app}/env`. `app` only selects the path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateAppEnv {
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing)]
    pub app: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub envs: Vec<AppEnv>,
    pub norestart: bool,
    pub private: bool,
}
