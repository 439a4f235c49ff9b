//! Shared mock infrastructure for unit tests.
//!
//! Provides an in-memory platform implementing every port the reconciler
//! touches, an in-memory filesystem, and a recording progress reporter so
//! each test file doesn't have to re-define the same boilerplate.

#![allow(clippy::expect_used)]

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use shipa_action::application::ports::{
    AppApi, AppCnameApi, AppEnvApi, ClusterApi, DeployApi, FrameworkApi, JobApi, LocalFs,
    NetworkPolicyApi, ProgressReporter,
};
use shipa_action::domain::{ApiResult, DeployForm, PlatformError};
use shipa_types::{
    App, AppCname, AppDeployment, AppEnv, Cluster, CreateAppEnv, DeleteCnameRequest, Job,
    JobCreateRequest, NetworkPolicy, PoolConfig, UpdateAppRequest,
};

// ── Mock: platform ────────────────────────────────────────────────────────────

/// In-memory platform. Every call is logged as `"op:key"`; an op listed in
/// `failures` returns that error instead of running.
#[derive(Default)]
pub struct FakePlatform {
    calls: Mutex<Vec<String>>,
    failures: Mutex<HashMap<&'static str, PlatformError>>,
    pub frameworks: Mutex<HashMap<String, PoolConfig>>,
    pub clusters: Mutex<HashMap<String, Cluster>>,
    pub apps: Mutex<HashMap<String, App>>,
    pub jobs: Mutex<Vec<Job>>,
    pub deploys: Mutex<Vec<(String, DeployForm)>>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(self, op: &'static str, err: PlatformError) -> Self {
        self.failures.lock().expect("lock").insert(op, err);
        self
    }

    pub fn with_app(self, name: &str) -> Self {
        self.apps.lock().expect("lock").insert(
            name.to_string(),
            App {
                name: name.to_string(),
                ..App::default()
            },
        );
        self
    }

    pub fn with_framework(self, name: &str) -> Self {
        self.frameworks.lock().expect("lock").insert(
            name.to_string(),
            PoolConfig {
                name: name.to_string(),
                ..PoolConfig::default()
            },
        );
        self
    }

    pub fn with_cluster(self, cluster: Cluster) -> Self {
        self.clusters
            .lock()
            .expect("lock")
            .insert(cluster.name.clone(), cluster);
        self
    }

    pub fn with_job(self, name: &str) -> Self {
        self.jobs.lock().expect("lock").push(Job {
            id: format!("{name}-id"),
            name: name.to_string(),
            ..Job::default()
        });
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("lock").clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }

    fn enter(&self, op: &'static str, key: &str) -> ApiResult<()> {
        self.calls.lock().expect("lock").push(format!("{op}:{key}"));
        match self.failures.lock().expect("lock").get(op) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

fn not_found(kind: &'static str, name: &str) -> PlatformError {
    PlatformError::NotFound {
        kind,
        name: name.to_string(),
    }
}

impl FrameworkApi for FakePlatform {
    fn get_framework(&self, name: &str) -> ApiResult<PoolConfig> {
        self.enter("get_framework", name)?;
        self.frameworks
            .lock()
            .expect("lock")
            .get(name)
            .cloned()
            .ok_or_else(|| not_found("framework", name))
    }
    fn create_framework(&self, config: &PoolConfig) -> ApiResult<()> {
        self.enter("create_framework", &config.name)?;
        self.frameworks
            .lock()
            .expect("lock")
            .insert(config.name.clone(), config.clone());
        Ok(())
    }
    fn update_framework(&self, config: &PoolConfig) -> ApiResult<()> {
        self.enter("update_framework", &config.name)
    }
}

impl ClusterApi for FakePlatform {
    fn get_cluster(&self, name: &str) -> ApiResult<Cluster> {
        self.enter("get_cluster", name)?;
        self.clusters
            .lock()
            .expect("lock")
            .get(name)
            .cloned()
            .ok_or_else(|| not_found("cluster", name))
    }
    fn create_cluster(&self, cluster: &Cluster) -> ApiResult<()> {
        self.enter("create_cluster", &cluster.name)?;
        self.clusters
            .lock()
            .expect("lock")
            .insert(cluster.name.clone(), cluster.clone());
        Ok(())
    }
    fn update_cluster(&self, cluster: &Cluster) -> ApiResult<()> {
        self.enter("update_cluster", &cluster.name)?;
        self.clusters
            .lock()
            .expect("lock")
            .insert(cluster.name.clone(), cluster.clone());
        Ok(())
    }
    fn delete_cluster(&self, name: &str) -> ApiResult<()> {
        self.enter("delete_cluster", name)
    }
}

impl AppApi for FakePlatform {
    fn list_apps(&self) -> ApiResult<Vec<App>> {
        self.enter("list_apps", "")?;
        Ok(self.apps.lock().expect("lock").values().cloned().collect())
    }
    fn get_app(&self, name: &str) -> ApiResult<App> {
        self.enter("get_app", name)?;
        self.apps
            .lock()
            .expect("lock")
            .get(name)
            .cloned()
            .ok_or_else(|| not_found("app", name))
    }
    fn create_app(&self, app: &App) -> ApiResult<()> {
        self.enter("create_app", &app.name)?;
        self.apps
            .lock()
            .expect("lock")
            .insert(app.name.clone(), app.clone());
        Ok(())
    }
    fn update_app(&self, name: &str, _: &UpdateAppRequest) -> ApiResult<()> {
        self.enter("update_app", name)
    }
    fn delete_app(&self, name: &str) -> ApiResult<()> {
        self.enter("delete_app", name)
    }
}

impl AppEnvApi for FakePlatform {
    fn create_app_envs(&self, request: &CreateAppEnv) -> ApiResult<()> {
        self.enter("create_app_envs", &request.app)
    }
    fn get_app_envs(&self, app: &str) -> ApiResult<Vec<AppEnv>> {
        self.enter("get_app_envs", app)?;
        Ok(Vec::new())
    }
    fn delete_app_envs(&self, request: &CreateAppEnv) -> ApiResult<()> {
        self.enter("delete_app_envs", &request.app)
    }
}

impl AppCnameApi for FakePlatform {
    fn create_app_cname(&self, cname: &AppCname) -> ApiResult<()> {
        self.enter("create_app_cname", &cname.app)
    }
    fn update_app_cname(&self, cname: &AppCname) -> ApiResult<()> {
        self.enter("update_app_cname", &cname.app)
    }
    fn delete_app_cname(&self, request: &DeleteCnameRequest) -> ApiResult<()> {
        self.enter("delete_app_cname", &request.app)
    }
}

impl NetworkPolicyApi for FakePlatform {
    fn put_network_policy(&self, policy: &NetworkPolicy) -> ApiResult<()> {
        self.enter("put_network_policy", &policy.app)
    }
    fn get_network_policy(&self, app: &str) -> ApiResult<NetworkPolicy> {
        self.enter("get_network_policy", app)?;
        Err(not_found("network policy", app))
    }
    fn delete_network_policy(&self, app: &str) -> ApiResult<()> {
        self.enter("delete_network_policy", app)
    }
}

impl DeployApi for FakePlatform {
    fn deploy_app(&self, app: &str, form: &DeployForm) -> ApiResult<()> {
        self.enter("deploy_app", app)?;
        self.deploys
            .lock()
            .expect("lock")
            .push((app.to_string(), form.clone()));
        Ok(())
    }
    fn list_deployments(&self, app: &str) -> ApiResult<Vec<AppDeployment>> {
        self.enter("list_deployments", app)?;
        Ok(Vec::new())
    }
}

impl JobApi for FakePlatform {
    fn list_jobs(&self) -> ApiResult<Vec<Job>> {
        self.enter("list_jobs", "")?;
        Ok(self.jobs.lock().expect("lock").clone())
    }
    fn get_job(&self, id: &str) -> ApiResult<Job> {
        self.enter("get_job", id)?;
        self.jobs
            .lock()
            .expect("lock")
            .iter()
            .find(|j| j.id == id)
            .cloned()
            .ok_or_else(|| not_found("job", id))
    }
    fn create_job(&self, request: &JobCreateRequest) -> ApiResult<Job> {
        self.enter("create_job", &request.name)?;
        let job = Job {
            id: format!("{}-id", request.name),
            name: request.name.clone(),
            framework: request.framework.clone(),
            ..Job::default()
        };
        self.jobs.lock().expect("lock").push(job.clone());
        Ok(job)
    }
    fn delete_job(&self, id: &str) -> ApiResult<()> {
        self.enter("delete_job", id)
    }
}

// ── Mock: filesystem ──────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryFs {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.as_bytes().to_vec());
        self
    }
}

impl LocalFs for MemoryFs {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }
}

// ── Mock: progress reporter ───────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().expect("lock").clone()
    }
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.events.lock().expect("lock").push(format!("step: {message}"));
    }
    fn success(&self, message: &str) {
        self.events.lock().expect("lock").push(format!("success: {message}"));
    }
    fn warn(&self, message: &str) {
        self.events.lock().expect("lock").push(format!("warn: {message}"));
    }
}
