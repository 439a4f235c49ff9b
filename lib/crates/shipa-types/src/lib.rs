//! Wire and manifest types shared by the Shipa action CLI.
//!
//! Field names follow the platform API's JSON. Where the manifest YAML uses a
//! different key (`framework` vs `pool`, `name` vs `shipaFramework`), the YAML
//! key is accepted as a serde alias so the same struct decodes both.

pub mod access;
pub mod app;
pub mod cluster;
pub mod deploy;
pub mod env;
pub mod framework;
pub mod job;
pub mod manifest;
pub mod network;
pub mod pool;
pub mod volume;

pub use access::{Email, Permission, Role, RolePermissions, Team, UpdateTeamRequest, User};
pub use app::{
    Address, App, AppCname, CreatePlanRequest, DeleteCnameRequest, Entrypoint, Lock, Plan, Router,
    Unit, UpdateAppRequest, bytes_to_human,
};
pub use cluster::{
    Cluster, ClusterEndpoint, ClusterManifest, ClusterResources, ClusterResourcesManifest,
    Framework, FrameworkNames, IngressController,
};
pub use deploy::{AppDeploy, AppDeployment};
pub use env::{AppEnv, CreateAppEnv};
pub use framework::{
    AppAutoDiscovery, AppSelectorLabels, DomainPolicy, NodeSelectors, NodeSelectorsTerms,
    PodAutoScaler, PoolAutoScale, PoolConfig, PoolContainerPolicy, PoolGeneral, PoolNetworkPolicy,
    PoolNode, PoolPlan, PoolResources, PoolSecurity, PoolServiceAccess, PoolSetup,
};
pub use job::{Job, JobContainer, JobCreateRequest, JobPolicy};
pub use manifest::{Manifest, Section};
pub use network::{
    NetworkPeer, NetworkPeerSelector, NetworkPolicy, NetworkPolicyConfig, NetworkPolicyRule,
    NetworkPort, SelectorExpression,
};
pub use pool::{Allowed, CreatePoolRequest, Pool, UpdatePoolRequest};
pub use volume::{
    CreateVolumePlanRequest, Volume, VolumeBinding, VolumePlan, VolumePlanName,
    VolumePlanResponse,
};

/// Decode JSON `null` as the type's default. The API writes empty Go
/// slices, maps and strings as `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// `skip_serializing_if` helpers mirroring the API's `omitempty` fields.

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn is_zero(value: &i64) -> bool {
    *value == 0
}

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}
