//! Top-level manifest document.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    App, AppCname, AppDeploy, ClusterManifest, CreateAppEnv, JobCreateRequest, NetworkPolicy,
    PoolConfig,
};

/// A manifest section. Variants are declared in application order:
/// frameworks and clusters before apps, apps before their settings and
/// deploys, jobs last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Framework,
    Cluster,
    App,
    AppEnv,
    AppCname,
    NetworkPolicy,
    AppDeploy,
    Job,
}

impl Section {
    /// Every section, in application order.
    pub const ALL: [Section; 8] = [
        Section::Framework,
        Section::Cluster,
        Section::App,
        Section::AppEnv,
        Section::AppCname,
        Section::NetworkPolicy,
        Section::AppDeploy,
        Section::Job,
    ];

    /// The section's top-level manifest key.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Section::Framework => "framework",
            Section::Cluster => "cluster",
            Section::App => "app",
            Section::AppEnv => "app-env",
            Section::AppCname => "app-cname",
            Section::NetworkPolicy => "network-policy",
            Section::AppDeploy => "app-deploy",
            Section::Job => "job",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw manifest as decoded from YAML. Every section is optional; an absent
/// key means "leave this kind alone". Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Manifest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<PoolConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<ClusterManifest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<App>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_env: Option<CreateAppEnv>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_cname: Option<AppCname>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_policy: Option<NetworkPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_deploy: Option<AppDeploy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<JobCreateRequest>,
}

impl Manifest {
    /// Sections present in this manifest, in application order.
    #[must_use]
    pub fn sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| self.has(*s))
            .collect()
    }

    /// Whether `section` is present.
    #[must_use]
    pub fn has(&self, section: Section) -> bool {
        match section {
            Section::Framework => self.framework.is_some(),
            Section::Cluster => self.cluster.is_some(),
            Section::App => self.app.is_some(),
            Section::AppEnv => self.app_env.is_some(),
            Section::AppCname => self.app_cname.is_some(),
            Section::NetworkPolicy => self.network_policy.is_some(),
            Section::AppDeploy => self.app_deploy.is_some(),
            Section::Job => self.job.is_some(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections().is_empty()
    }

    /// Overlay `other` on top of `self`: sections present in `other`
    /// replace the ones here, absent ones are kept.
    #[must_use]
    pub fn overlay(self, other: Manifest) -> Manifest {
        Manifest {
            framework: other.framework.or(self.framework),
            cluster: other.cluster.or(self.cluster),
            app: other.app.or(self.app),
            app_env: other.app_env.or(self.app_env),
            app_cname: other.app_cname.or(self.app_cname),
            network_policy: other.network_policy.or(self.network_policy),
            app_deploy: other.app_deploy.or(self.app_deploy),
            job: other.job.or(self.job),
        }
    }
}
