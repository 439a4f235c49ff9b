//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and `shipa_types`, never from
//! `crate::infra`, `crate::commands`, or `crate::output`.

use std::path::Path;

use shipa_types::{
    App, AppCname, AppDeployment, AppEnv, Cluster, CreateAppEnv, CreatePlanRequest,
    CreatePoolRequest, DeleteCnameRequest, Job, JobCreateRequest, NetworkPolicy, Permission, Plan,
    Pool, PoolConfig, Role, Team, UpdateAppRequest, UpdatePoolRequest, UpdateTeamRequest, User,
    Volume, VolumeBinding, VolumePlan,
};

use crate::domain::{ApiRequest, ApiResult, DeployForm, RawResponse};

// ── Transport Port ────────────────────────────────────────────────────────────

/// Sends one request and returns the raw status and body.
///
/// Implementations attach authentication and map a dropped-after-response
/// connection to `200` with an empty body. They never interpret the status.
pub trait Transport {
    /// # Errors
    ///
    /// Returns [`crate::domain::PlatformError::Transport`] when no response
    /// was received.
    fn send(&self, request: &ApiRequest) -> ApiResult<RawResponse>;
}

// ── Resource Port Traits ──────────────────────────────────────────────────────
//
// Lookups by key return `PlatformError::NotFound` when the resource is
// absent. Every other failure is reported as-is.

/// Framework (pool configuration) operations.
pub trait FrameworkApi {
    fn get_framework(&self, name: &str) -> ApiResult<PoolConfig>;
    fn create_framework(&self, config: &PoolConfig) -> ApiResult<()>;
    fn update_framework(&self, config: &PoolConfig) -> ApiResult<()>;
}

/// Cluster operations. Updates replace the whole object.
pub trait ClusterApi {
    fn get_cluster(&self, name: &str) -> ApiResult<Cluster>;
    fn create_cluster(&self, cluster: &Cluster) -> ApiResult<()>;
    fn update_cluster(&self, cluster: &Cluster) -> ApiResult<()>;
    fn delete_cluster(&self, name: &str) -> ApiResult<()>;
}

/// Application operations.
pub trait AppApi {
    fn list_apps(&self) -> ApiResult<Vec<App>>;
    fn get_app(&self, name: &str) -> ApiResult<App>;
    fn create_app(&self, app: &App) -> ApiResult<()>;
    fn update_app(&self, name: &str, request: &UpdateAppRequest) -> ApiResult<()>;
    fn delete_app(&self, name: &str) -> ApiResult<()>;
}

/// Application environment variables.
pub trait AppEnvApi {
    fn create_app_envs(&self, request: &CreateAppEnv) -> ApiResult<()>;
    fn get_app_envs(&self, app: &str) -> ApiResult<Vec<AppEnv>>;
    /// Removes the named variables. Sends nothing when `request.envs` is empty.
    fn delete_app_envs(&self, request: &CreateAppEnv) -> ApiResult<()>;
}

/// Application custom domains.
pub trait AppCnameApi {
    fn create_app_cname(&self, cname: &AppCname) -> ApiResult<()>;
    fn update_app_cname(&self, cname: &AppCname) -> ApiResult<()>;
    fn delete_app_cname(&self, request: &DeleteCnameRequest) -> ApiResult<()>;
}

/// Per-application network policy.
pub trait NetworkPolicyApi {
    /// Creates or replaces the policy.
    fn put_network_policy(&self, policy: &NetworkPolicy) -> ApiResult<()>;
    fn get_network_policy(&self, app: &str) -> ApiResult<NetworkPolicy>;
    fn delete_network_policy(&self, app: &str) -> ApiResult<()>;
}

/// Image deploys.
pub trait DeployApi {
    fn deploy_app(&self, app: &str, form: &DeployForm) -> ApiResult<()>;
    fn list_deployments(&self, app: &str) -> ApiResult<Vec<AppDeployment>>;
}

/// Jobs, keyed by server-assigned id.
pub trait JobApi {
    fn list_jobs(&self) -> ApiResult<Vec<Job>>;
    fn get_job(&self, id: &str) -> ApiResult<Job>;
    fn create_job(&self, request: &JobCreateRequest) -> ApiResult<Job>;
    fn delete_job(&self, id: &str) -> ApiResult<()>;
}

/// Resource plans.
pub trait PlanApi {
    fn list_plans(&self) -> ApiResult<Vec<Plan>>;
    fn get_plan(&self, name: &str) -> ApiResult<Plan>;
    fn create_plan(&self, request: &CreatePlanRequest) -> ApiResult<()>;
    fn delete_plan(&self, name: &str) -> ApiResult<()>;
}

/// Pools (legacy framework objects).
pub trait PoolApi {
    fn list_pools(&self) -> ApiResult<Vec<Pool>>;
    fn get_pool(&self, name: &str) -> ApiResult<Pool>;
    fn create_pool(&self, request: &CreatePoolRequest) -> ApiResult<()>;
    fn update_pool(&self, request: &UpdatePoolRequest) -> ApiResult<()>;
    fn delete_pool(&self, name: &str) -> ApiResult<()>;
}

pub trait TeamApi {
    fn get_team(&self, name: &str) -> ApiResult<Team>;
    fn create_team(&self, team: &Team) -> ApiResult<()>;
    fn update_team(&self, name: &str, request: &UpdateTeamRequest) -> ApiResult<()>;
    fn delete_team(&self, name: &str) -> ApiResult<()>;
}

pub trait UserApi {
    fn list_users(&self) -> ApiResult<Vec<User>>;
    fn get_user(&self, email: &str) -> ApiResult<User>;
    fn create_user(&self, user: &User) -> ApiResult<()>;
    fn delete_user(&self, email: &str) -> ApiResult<()>;
}

pub trait RoleApi {
    fn get_role(&self, name: &str) -> ApiResult<Role>;
    fn create_role(&self, role: &Role) -> ApiResult<()>;
    fn delete_role(&self, name: &str) -> ApiResult<()>;
    fn associate_user(&self, role: &str, email: &str) -> ApiResult<()>;
    fn disassociate_user(&self, role: &str, email: &str) -> ApiResult<()>;
}

pub trait PermissionApi {
    fn get_permission(&self, role: &str) -> ApiResult<Permission>;
    fn create_permission(&self, permission: &Permission) -> ApiResult<()>;
    fn delete_permission(&self, role: &str, permission: &str) -> ApiResult<()>;
}

pub trait VolumeApi {
    fn get_volume(&self, name: &str) -> ApiResult<Volume>;
    fn create_volume(&self, volume: &Volume) -> ApiResult<()>;
    fn update_volume(&self, volume: &Volume) -> ApiResult<()>;
    fn delete_volume(&self, name: &str) -> ApiResult<()>;
    fn bind_volume(&self, binding: &VolumeBinding) -> ApiResult<()>;
    fn unbind_volume(&self, binding: &VolumeBinding) -> ApiResult<()>;
}

pub trait VolumePlanApi {
    fn get_volume_plan(&self, name: &str) -> ApiResult<VolumePlan>;
    fn create_volume_plan(&self, plan: &VolumePlan) -> ApiResult<()>;
    fn update_volume_plan(&self, plan: &VolumePlan) -> ApiResult<()>;
    fn delete_volume_plan(&self, name: &str) -> ApiResult<()>;
}

/// Composite trait: everything the manifest reconciler touches.
pub trait ManifestTarget:
    FrameworkApi
    + ClusterApi
    + AppApi
    + AppEnvApi
    + AppCnameApi
    + NetworkPolicyApi
    + DeployApi
    + JobApi
{
}

/// Blanket implementation: any type implementing all eight sub-traits is a
/// `ManifestTarget`.
impl<T> ManifestTarget for T where
    T: FrameworkApi
        + ClusterApi
        + AppApi
        + AppEnvApi
        + AppCnameApi
        + NetworkPolicyApi
        + DeployApi
        + JobApi
{
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Read-only access to local files (manifests, credentials, `shipa.yaml`).
pub trait LocalFs {
    /// # Errors
    ///
    /// Returns the underlying I/O error when the file cannot be read.
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Reports progress of multi-step operations to the user without
/// depending on the Presentation layer. Synchronous.
pub trait ProgressReporter {
    /// A step has started.
    fn step(&self, message: &str);
    /// The current step completed.
    fn success(&self, message: &str);
    /// The current step completed without changes, or needs attention.
    fn warn(&self, message: &str);
}
