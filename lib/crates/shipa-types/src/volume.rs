//! Volumes and volume plans.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Volume {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub capacity: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub team_owner: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub pool: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub access_modes: String,
    pub plan: VolumePlanName,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct VolumePlanName {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub name: String,
}

/// Body of `POST volumes/{volume}/bind`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct VolumeBinding {
    #[serde(skip)]
    pub volume: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub app: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub mount_point: String,
    pub no_restart: bool,
}

/// Volume plan as callers see it: a single owning team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumePlan {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub team: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub storage_class: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateVolumePlanRequest {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub teams: Vec<String>,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub storage_class: String,
}

impl From<&VolumePlan> for CreateVolumePlanRequest {
    fn from(plan: &VolumePlan) -> Self {
        Self {
            name: plan.name.clone(),
            teams: vec![plan.team.clone()],
            storage_class: plan.storage_class.clone(),
        }
    }
}

/// `GET volume-plans/{name}` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct VolumePlanResponse {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub teams: Vec<String>,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub storage_class: String,
}

impl From<VolumePlanResponse> for VolumePlan {
    fn from(resp: VolumePlanResponse) -> Self {
        Self {
            name: resp.name,
            team: resp.teams.into_iter().next().unwrap_or_default(),
            storage_class: resp.storage_class,
        }
    }
}
