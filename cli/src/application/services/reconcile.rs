//! Application service — manifest apply use-case.
//!
//! Walks the bundle in a fixed order (framework, cluster, app, app-env,
//! app-cname, network-policy, app-deploy, job) and brings each present
//! section in line with the platform. The first failure stops the run;
//! nothing already applied is rolled back.

use anyhow::{Context, Result};
use shipa_types::{App, Cluster, JobCreateRequest, PoolConfig, Section};

use crate::application::ports::{
    AppApi, ClusterApi, DeployApi, FrameworkApi, JobApi, ManifestTarget,
    ProgressReporter,
};
use crate::domain::{ApplyReport, DeployRequest, ManifestBundle, Outcome, framework_delta};

/// Apply every present section of `bundle`.
///
/// # Errors
///
/// Returns the first section failure, wrapped with the section's context
/// (`failed to create shipa app`, ...).
pub fn apply_manifest(
    api: &impl ManifestTarget,
    reporter: &impl ProgressReporter,
    bundle: &ManifestBundle,
) -> Result<ApplyReport> {
    let mut report = ApplyReport::default();

    if let Some(framework) = &bundle.framework {
        reporter.step(&format!("framework {}", framework.name));
        let outcome = ensure_framework(api, framework).context("failed to create shipa framework")?;
        finish(reporter, &mut report, Section::Framework, &framework.name, outcome);
    }
    if let Some(cluster) = &bundle.cluster {
        reporter.step(&format!("cluster {}", cluster.name));
        let outcome = ensure_cluster(api, cluster)?;
        finish(reporter, &mut report, Section::Cluster, &cluster.name, outcome);
    }
    if let Some(app) = &bundle.app {
        reporter.step(&format!("app {}", app.name));
        let outcome = ensure_app(api, app).context("failed to create shipa app")?;
        finish(reporter, &mut report, Section::App, &app.name, outcome);
    }
    if let Some(env) = &bundle.app_env {
        reporter.step(&format!("env for {}", env.app));
        api.create_app_envs(env).context("failed to create shipa app env")?;
        finish(reporter, &mut report, Section::AppEnv, &env.app, Outcome::Applied);
    }
    if let Some(cname) = &bundle.app_cname {
        reporter.step(&format!("cname {} for {}", cname.cname, cname.app));
        api.create_app_cname(cname)
            .context("failed to create shipa app cname")?;
        finish(reporter, &mut report, Section::AppCname, &cname.app, Outcome::Applied);
    }
    if let Some(policy) = &bundle.network_policy {
        reporter.step(&format!("network policy for {}", policy.app));
        api.put_network_policy(policy)
            .context("failed to create shipa network policy")?;
        finish(reporter, &mut report, Section::NetworkPolicy, &policy.app, Outcome::Applied);
    }
    if let Some(deploy) = &bundle.app_deploy {
        reporter.step(&format!("deploy {}", deploy.app));
        deploy_app(api, deploy).context("failed to deploy shipa app")?;
        finish(reporter, &mut report, Section::AppDeploy, &deploy.app, Outcome::Applied);
    }
    if let Some(job) = &bundle.job {
        reporter.step(&format!("job {}", job.name));
        let outcome = ensure_job(api, job).context("failed to create shipa job")?;
        finish(reporter, &mut report, Section::Job, &job.name, outcome);
    }

    Ok(report)
}

fn finish(
    reporter: &impl ProgressReporter,
    report: &mut ApplyReport,
    section: Section,
    name: &str,
    outcome: Outcome,
) {
    let message = format!("{section} {name}: {outcome}");
    if outcome == Outcome::Unchanged {
        reporter.warn(&message);
    } else {
        reporter.success(&message);
    }
    report.record(section, name, outcome);
}

/// Create the framework unless it already exists. Never updates.
///
/// # Errors
///
/// Lookup failures other than "not found" and create failures.
pub fn ensure_framework(api: &impl FrameworkApi, framework: &PoolConfig) -> Result<Outcome> {
    match api.get_framework(&framework.name) {
        Ok(_) => Ok(Outcome::Unchanged),
        Err(e) if e.is_not_found() => {
            api.create_framework(framework)?;
            Ok(Outcome::Created)
        }
        Err(e) => Err(e.into()),
    }
}

/// Create the cluster, or attach desired frameworks it does not have yet.
///
/// The framework set only grows: names already on the cluster are kept
/// even when the manifest no longer lists them.
///
/// # Errors
///
/// Lookup failures other than "not found", and create or update failures.
pub fn ensure_cluster(api: &impl ClusterApi, desired: &Cluster) -> Result<Outcome> {
    let mut observed = match api.get_cluster(&desired.name) {
        Ok(cluster) => cluster,
        Err(e) if e.is_not_found() => {
            api.create_cluster(desired)
                .context("failed to create shipa cluster")?;
            return Ok(Outcome::Created);
        }
        Err(e) => return Err(e).context("failed to get shipa cluster"),
    };

    let added: Vec<String> = framework_delta(&observed.framework_names(), &desired.framework_names())
        .into_iter()
        .map(str::to_string)
        .collect();
    if added.is_empty() {
        return Ok(Outcome::Unchanged);
    }

    tracing::debug!(cluster = %desired.name, ?added, "attaching frameworks");
    observed.append_frameworks(added.iter().cloned());
    api.update_cluster(&observed)
        .context("failed to update shipa cluster")?;
    Ok(Outcome::Updated { added })
}

/// Create the app unless it already exists. Never updates.
///
/// # Errors
///
/// Lookup failures other than "not found" and create failures.
pub fn ensure_app(api: &impl AppApi, app: &App) -> Result<Outcome> {
    match api.get_app(&app.name) {
        Ok(_) => Ok(Outcome::Unchanged),
        Err(e) if e.is_not_found() => {
            api.create_app(app)?;
            Ok(Outcome::Created)
        }
        Err(e) => Err(e.into()),
    }
}

/// # Errors
///
/// Status, vulnerability or deploy-body failures.
pub fn deploy_app(api: &impl DeployApi, deploy: &DeployRequest) -> Result<()> {
    api.deploy_app(&deploy.app, &deploy.form)?;
    Ok(())
}

/// Create the job unless one with the same name is listed.
///
/// # Errors
///
/// List or create failures.
pub fn ensure_job(api: &impl JobApi, job: &JobCreateRequest) -> Result<Outcome> {
    let jobs = api.list_jobs()?;
    if jobs.iter().any(|j| j.name == job.name) {
        return Ok(Outcome::Unchanged);
    }
    let created = api.create_job(job)?;
    tracing::debug!(name = %job.name, id = %created.id, "job created");
    Ok(Outcome::Created)
}
