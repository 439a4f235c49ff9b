//! Typed manifest bundle consumed by the reconciler.
//!
//! Decoding happens in the application layer (it needs the filesystem);
//! this module checks required fields and assembles the final values.

use shipa_types::{
    App, AppCname, Cluster, CreateAppEnv, JobCreateRequest, Manifest, NetworkPolicy, PoolConfig,
    Section,
};

use crate::domain::deploy::DeployForm;
use crate::domain::error::ManifestError;

/// Deploy section after the form has been built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployRequest {
    pub app: String,
    pub form: DeployForm,
}

/// Every section the run will apply. Absent sections are skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManifestBundle {
    pub framework: Option<PoolConfig>,
    pub cluster: Option<Cluster>,
    pub app: Option<App>,
    pub app_env: Option<CreateAppEnv>,
    pub app_cname: Option<AppCname>,
    pub network_policy: Option<NetworkPolicy>,
    pub app_deploy: Option<DeployRequest>,
    pub job: Option<JobCreateRequest>,
}

impl ManifestBundle {
    /// Build the bundle from a decoded manifest.
    ///
    /// `resolve` maps each cluster credential to its final value.
    /// `shipa_yaml` is the content of the deploy's `shipayaml` file, if any.
    ///
    /// # Errors
    ///
    /// Fails when a required field is missing or the deploy form is invalid.
    pub fn assemble(
        manifest: Manifest,
        resolve: impl FnMut(&str) -> String,
        shipa_yaml: Option<&[u8]>,
    ) -> Result<Self, ManifestError> {
        validate(&manifest)?;

        let app_deploy = match manifest.app_deploy {
            Some(deploy) => {
                let form = DeployForm::build(&deploy, shipa_yaml).map_err(|message| {
                    ManifestError::InvalidField {
                        section: Section::AppDeploy,
                        field: "step-interval",
                        message,
                    }
                })?;
                Some(DeployRequest {
                    app: deploy.app,
                    form,
                })
            }
            None => None,
        };

        Ok(Self {
            framework: manifest.framework,
            cluster: manifest.cluster.map(|c| c.into_cluster(resolve)),
            app: manifest.app,
            app_env: manifest.app_env,
            app_cname: manifest.app_cname,
            network_policy: manifest.network_policy,
            app_deploy,
            job: manifest.job,
        })
    }

    /// Sections present, in application order.
    #[must_use]
    pub fn sections(&self) -> Vec<Section> {
        let present = [
            self.framework.is_some(),
            self.cluster.is_some(),
            self.app.is_some(),
            self.app_env.is_some(),
            self.app_cname.is_some(),
            self.network_policy.is_some(),
            self.app_deploy.is_some(),
            self.job.is_some(),
        ];
        Section::ALL
            .into_iter()
            .zip(present)
            .filter_map(|(section, on)| on.then_some(section))
            .collect()
    }
}

/// Check that every present section has its key field.
///
/// # Errors
///
/// [`ManifestError::Empty`] when no section is present, otherwise the first
/// missing field in application order.
pub fn validate(manifest: &Manifest) -> Result<(), ManifestError> {
    if manifest.is_empty() {
        return Err(ManifestError::Empty);
    }

    let missing = |section, field| Err(ManifestError::MissingField { section, field });

    if let Some(framework) = &manifest.framework
        && framework.name.is_empty()
    {
        return missing(Section::Framework, "name");
    }
    if let Some(cluster) = &manifest.cluster
        && cluster.name.is_empty()
    {
        return missing(Section::Cluster, "name");
    }
    if let Some(app) = &manifest.app {
        if app.name.is_empty() {
            return missing(Section::App, "name");
        }
        if app.pool.is_empty() {
            return missing(Section::App, "framework");
        }
    }
    if let Some(env) = &manifest.app_env
        && env.app.is_empty()
    {
        return missing(Section::AppEnv, "app");
    }
    if let Some(cname) = &manifest.app_cname {
        if cname.app.is_empty() {
            return missing(Section::AppCname, "app");
        }
        if cname.cname.is_empty() {
            return missing(Section::AppCname, "cname");
        }
    }
    if let Some(policy) = &manifest.network_policy
        && policy.app.is_empty()
    {
        return missing(Section::NetworkPolicy, "app");
    }
    if let Some(deploy) = &manifest.app_deploy {
        if deploy.app.is_empty() {
            return missing(Section::AppDeploy, "app");
        }
        if deploy.image.is_empty() {
            return missing(Section::AppDeploy, "image");
        }
    }
    if let Some(job) = &manifest.job
        && job.name.is_empty()
    {
        return missing(Section::Job, "name");
    }
    Ok(())
}
