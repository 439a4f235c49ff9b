//! Command implementations

pub mod apply;
pub mod validate;
pub mod version;

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Args;
use shipa_types::Section;

use crate::application::services::manifest_loader::ManifestSources;

/// Where to read the manifest from.
///
/// A combined document can be given positionally or with `--manifest`.
/// Per-section files override the matching key of the combined document.
#[derive(Args, Debug, Default)]
pub struct ManifestArgs {
    /// Manifest file with any of the top-level section keys
    #[arg(value_name = "MANIFEST")]
    pub path: Option<PathBuf>,

    /// Manifest file with any of the top-level section keys
    #[arg(long, value_name = "FILE", env = "SHIPA_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Framework section file
    #[arg(long, value_name = "FILE")]
    pub framework: Option<PathBuf>,

    /// Cluster section file
    #[arg(long, value_name = "FILE")]
    pub cluster: Option<PathBuf>,

    /// App section file
    #[arg(long, value_name = "FILE")]
    pub app: Option<PathBuf>,

    /// App env section file
    #[arg(long, value_name = "FILE")]
    pub app_env: Option<PathBuf>,

    /// App cname section file
    #[arg(long, value_name = "FILE")]
    pub app_cname: Option<PathBuf>,

    /// Network policy section file
    #[arg(long, value_name = "FILE")]
    pub network_policy: Option<PathBuf>,

    /// App deploy section file
    #[arg(long, value_name = "FILE")]
    pub app_deploy: Option<PathBuf>,

    /// Job section file
    #[arg(long, value_name = "FILE")]
    pub job: Option<PathBuf>,
}

impl ManifestArgs {
    /// Collect the given paths into loader sources.
    ///
    /// # Errors
    ///
    /// Fails when no manifest file was given at all.
    pub fn to_sources(&self) -> Result<ManifestSources> {
        let per_section = [
            (Section::Framework, &self.framework),
            (Section::Cluster, &self.cluster),
            (Section::App, &self.app),
            (Section::AppEnv, &self.app_env),
            (Section::AppCname, &self.app_cname),
            (Section::NetworkPolicy, &self.network_policy),
            (Section::AppDeploy, &self.app_deploy),
            (Section::Job, &self.job),
        ];
        let sources = ManifestSources {
            combined: self.path.clone().or_else(|| self.manifest.clone()),
            sections: per_section
                .into_iter()
                .filter_map(|(section, path)| path.clone().map(|p| (section, p)))
                .collect(),
        };
        if sources.is_empty() {
            bail!("no manifest given: pass MANIFEST or one of the section file flags");
        }
        Ok(sources)
    }
}
