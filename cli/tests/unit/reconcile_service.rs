//! Unit tests for the manifest apply service.
//!
//! Drives `apply_manifest` and the per-section steps against `FakePlatform`
//! and checks what was sent, in which order, and what was reported.

#![allow(clippy::expect_used)]

use shipa_action::application::services::reconcile::{
    apply_manifest, ensure_app, ensure_cluster, ensure_framework, ensure_job,
};
use shipa_action::domain::{
    DeployForm, DeployRequest, ManifestBundle, Outcome, PlatformError,
};
use shipa_types::{
    App, AppCname, AppDeploy, Cluster, ClusterResources, CreateAppEnv, Framework,
    JobCreateRequest, NetworkPolicy, PoolConfig, Section,
};

use crate::mocks::{FakePlatform, RecordingReporter};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn cluster(name: &str, frameworks: &[&str]) -> Cluster {
    Cluster {
        name: name.to_string(),
        endpoint: None,
        resources: Some(ClusterResources {
            frameworks: frameworks
                .iter()
                .map(|f| Framework {
                    name: (*f).to_string(),
                })
                .collect(),
            ingress_controllers: Vec::new(),
        }),
    }
}

fn app(name: &str) -> App {
    App {
        name: name.to_string(),
        pool: "dev".to_string(),
        teamowner: "team".to_string(),
        ..App::default()
    }
}

fn job(name: &str) -> JobCreateRequest {
    JobCreateRequest {
        name: name.to_string(),
        framework: "dev".to_string(),
        ..JobCreateRequest::default()
    }
}

fn deploy(app: &str) -> DeployRequest {
    let form = DeployForm::build(
        &AppDeploy {
            app: app.to_string(),
            image: "docker.io/shipasoftware/bulletinboard:1.0".to_string(),
            ..AppDeploy::default()
        },
        None,
    )
    .expect("form");
    DeployRequest {
        app: app.to_string(),
        form,
    }
}

fn full_bundle() -> ManifestBundle {
    ManifestBundle {
        framework: Some(PoolConfig {
            name: "dev".to_string(),
            ..PoolConfig::default()
        }),
        cluster: Some(cluster("c1", &["dev"])),
        app: Some(app("billing")),
        app_env: Some(CreateAppEnv {
            app: "billing".to_string(),
            ..CreateAppEnv::default()
        }),
        app_cname: Some(AppCname {
            app: "billing".to_string(),
            cname: "billing.example.com".to_string(),
            ..AppCname::default()
        }),
        network_policy: Some(NetworkPolicy {
            app: "billing".to_string(),
            ..NetworkPolicy::default()
        }),
        app_deploy: Some(deploy("billing")),
        job: Some(job("nightly")),
    }
}

// ── ensure_app ────────────────────────────────────────────────────────────────

#[test]
fn ensure_app_creates_missing_app() {
    let api = FakePlatform::new();
    let outcome = ensure_app(&api, &app("billing")).expect("ensure");
    assert_eq!(outcome, Outcome::Created);
    assert_eq!(api.calls(), vec!["get_app:billing", "create_app:billing"]);
}

#[test]
fn ensure_app_is_idempotent() {
    let api = FakePlatform::new();
    ensure_app(&api, &app("billing")).expect("first");
    let second = ensure_app(&api, &app("billing")).expect("second");
    assert_eq!(second, Outcome::Unchanged);
    assert_eq!(api.count("create_app"), 1);
}

#[test]
fn ensure_app_lookup_failure_is_fatal_and_creates_nothing() {
    let api = FakePlatform::new().failing(
        "get_app",
        PlatformError::Transport("connection refused".to_string()),
    );
    let err = ensure_app(&api, &app("billing")).expect_err("lookup fails");
    assert!(err.to_string().contains("connection refused"));
    assert_eq!(api.count("create_app"), 0);
}

// ── ensure_framework ──────────────────────────────────────────────────────────

#[test]
fn ensure_framework_never_updates_existing() {
    let api = FakePlatform::new().with_framework("dev");
    let config = PoolConfig {
        name: "dev".to_string(),
        ..PoolConfig::default()
    };
    assert_eq!(ensure_framework(&api, &config).expect("ensure"), Outcome::Unchanged);
    assert_eq!(api.count("create_framework"), 0);
    assert_eq!(api.count("update_framework"), 0);
}

// ── ensure_cluster ────────────────────────────────────────────────────────────

#[test]
fn ensure_cluster_creates_missing_cluster() {
    let api = FakePlatform::new();
    let outcome = ensure_cluster(&api, &cluster("c1", &["A"])).expect("ensure");
    assert_eq!(outcome, Outcome::Created);
    assert_eq!(api.count("update_cluster"), 0);
}

#[test]
fn ensure_cluster_unions_frameworks_in_one_update() {
    let api = FakePlatform::new().with_cluster(cluster("c1", &["A", "B"]));
    let outcome = ensure_cluster(&api, &cluster("c1", &["B", "C"])).expect("ensure");

    assert_eq!(
        outcome,
        Outcome::Updated {
            added: vec!["C".to_string()]
        }
    );
    assert_eq!(api.count("update_cluster"), 1);
    let stored = api.clusters.lock().expect("lock")["c1"].clone();
    assert_eq!(stored.framework_names(), vec!["A", "B", "C"]);
}

#[test]
fn ensure_cluster_subset_sends_no_update() {
    let api = FakePlatform::new().with_cluster(cluster("c1", &["A", "B"]));
    let outcome = ensure_cluster(&api, &cluster("c1", &["A"])).expect("ensure");
    assert_eq!(outcome, Outcome::Unchanged);
    assert_eq!(api.count("update_cluster"), 0);
}

#[test]
fn ensure_cluster_lookup_failure_has_context() {
    let api = FakePlatform::new().failing(
        "get_cluster",
        PlatformError::Status {
            code: 500,
            body: "boom".to_string(),
        },
    );
    let err = ensure_cluster(&api, &cluster("c1", &["A"])).expect_err("fails");
    assert!(format!("{err:#}").starts_with("failed to get shipa cluster"));
    assert_eq!(api.count("create_cluster"), 0);
}

#[test]
fn ensure_cluster_update_failure_has_context() {
    let api = FakePlatform::new()
        .with_cluster(cluster("c1", &["A"]))
        .failing("update_cluster", PlatformError::Status {
            code: 400,
            body: "bad".to_string(),
        });
    let err = ensure_cluster(&api, &cluster("c1", &["B"])).expect_err("fails");
    assert!(format!("{err:#}").contains("failed to update shipa cluster"));
}

// ── ensure_job ────────────────────────────────────────────────────────────────

#[test]
fn ensure_job_skips_listed_name() {
    let api = FakePlatform::new().with_job("nightly");
    assert_eq!(ensure_job(&api, &job("nightly")).expect("ensure"), Outcome::Unchanged);
    assert_eq!(api.count("create_job"), 0);
}

#[test]
fn ensure_job_creates_new_name() {
    let api = FakePlatform::new().with_job("hourly");
    assert_eq!(ensure_job(&api, &job("nightly")).expect("ensure"), Outcome::Created);
    assert_eq!(api.calls(), vec!["list_jobs:", "create_job:nightly"]);
}

// ── apply_manifest ────────────────────────────────────────────────────────────

#[test]
fn apply_runs_sections_in_fixed_order() {
    let api = FakePlatform::new();
    let reporter = RecordingReporter::default();
    let report = apply_manifest(&api, &reporter, &full_bundle()).expect("apply");

    let writes: Vec<String> = api
        .calls()
        .into_iter()
        .filter(|c| !c.starts_with("get_") && !c.starts_with("list_"))
        .collect();
    assert_eq!(
        writes,
        vec![
            "create_framework:dev",
            "create_cluster:c1",
            "create_app:billing",
            "create_app_envs:billing",
            "create_app_cname:billing",
            "put_network_policy:billing",
            "deploy_app:billing",
            "create_job:nightly",
        ]
    );
    let sections: Vec<Section> = report.sections.iter().map(|s| s.section).collect();
    assert_eq!(sections, Section::ALL.to_vec());
}

#[test]
fn apply_twice_only_repeats_always_applied_sections() {
    let api = FakePlatform::new();
    let reporter = RecordingReporter::default();
    apply_manifest(&api, &reporter, &full_bundle()).expect("first");
    let second = apply_manifest(&api, &reporter, &full_bundle()).expect("second");

    assert_eq!(api.count("create_framework"), 1);
    assert_eq!(api.count("create_cluster"), 1);
    assert_eq!(api.count("create_app:"), 1);
    assert_eq!(api.count("create_job"), 1);
    assert_eq!(api.count("deploy_app"), 2);
    assert_eq!(second.outcome(Section::App), Some(&Outcome::Unchanged));
    assert_eq!(second.outcome(Section::AppDeploy), Some(&Outcome::Applied));
}

#[test]
fn apply_skips_absent_sections() {
    let api = FakePlatform::new();
    let reporter = RecordingReporter::default();
    let bundle = ManifestBundle {
        app_deploy: Some(deploy("billing")),
        ..ManifestBundle::default()
    };
    let report = apply_manifest(&api, &reporter, &bundle).expect("apply");
    assert_eq!(api.calls(), vec!["deploy_app:billing"]);
    assert_eq!(report.sections.len(), 1);
    let sent = api.deploys.lock().expect("lock");
    assert_eq!(
        sent[0].1.get("image"),
        Some("docker.io/shipasoftware/bulletinboard:1.0")
    );
}

#[test]
fn apply_stops_at_first_failure_with_section_context() {
    let api = FakePlatform::new().failing("deploy_app", PlatformError::Vulnerability);
    let reporter = RecordingReporter::default();
    let err = apply_manifest(&api, &reporter, &full_bundle()).expect_err("deploy fails");

    let chain = format!("{err:#}");
    assert!(chain.starts_with("failed to deploy shipa app"), "{chain}");
    assert!(chain.contains("found vulnerabilities"), "{chain}");
    assert_eq!(api.count("create_job"), 0);
    assert_eq!(api.count("list_jobs"), 0);
    assert_eq!(
        err.downcast_ref::<PlatformError>(),
        Some(&PlatformError::Vulnerability)
    );
}

#[test]
fn apply_app_lookup_error_uses_app_context() {
    let api = FakePlatform::new().failing(
        "get_app",
        PlatformError::Transport("timed out".to_string()),
    );
    let reporter = RecordingReporter::default();
    let bundle = ManifestBundle {
        app: Some(app("billing")),
        ..ManifestBundle::default()
    };
    let err = apply_manifest(&api, &reporter, &bundle).expect_err("fails");
    assert!(format!("{err:#}").starts_with("failed to create shipa app"));
    assert_eq!(api.count("create_app"), 0);
}

#[test]
fn apply_reports_each_section() {
    let api = FakePlatform::new().with_app("billing");
    let reporter = RecordingReporter::default();
    let bundle = ManifestBundle {
        app: Some(app("billing")),
        job: Some(job("nightly")),
        ..ManifestBundle::default()
    };
    apply_manifest(&api, &reporter, &bundle).expect("apply");
    let events = reporter.events();
    assert_eq!(events.len(), 4);
    assert!(events[0].starts_with("step: "));
    assert!(events[1].starts_with("warn: "), "existing app is a warning: {events:?}");
    assert!(events[1].contains("unchanged"));
    assert!(events[3].starts_with("success: "));
    assert!(events[3].contains("created"));
}
