//! Unit tests for the manifest loading service.

#![allow(clippy::expect_used)]

use std::path::PathBuf;

use shipa_action::application::services::manifest_loader::{
    ManifestSources, file_or_value, load_bundle, read_manifest,
};
use shipa_action::domain::ManifestError;
use shipa_types::Section;

use crate::mocks::MemoryFs;

const COMBINED: &str = "
app:
  name: billing
  framework: dev
  teamowner: team
cluster:
  name: c1
  endpoint:
    addresses: [\"https://10.0.0.1\"]
    token: /secrets/token
    caCert: inline-ca
  resources:
    frameworks:
      name: [dev]
app-deploy:
  app: billing
  image: docker.io/shipasoftware/bulletinboard:1.0
";

fn combined(path: &str) -> ManifestSources {
    ManifestSources {
        combined: Some(PathBuf::from(path)),
        sections: Vec::new(),
    }
}

#[test]
fn section_file_overrides_combined_document() {
    let fs = MemoryFs::new()
        .with("all.yaml", COMBINED)
        .with("app.yaml", "name: payments\nframework: prod\n");
    let sources = ManifestSources {
        combined: Some(PathBuf::from("all.yaml")),
        sections: vec![(Section::App, PathBuf::from("app.yaml"))],
    };

    let manifest = read_manifest(&fs, &sources).expect("read");
    let app = manifest.app.expect("app");
    assert_eq!(app.name, "payments");
    assert_eq!(app.pool, "prod");
    assert!(manifest.cluster.is_some(), "other sections are kept");
}

#[test]
fn credentials_are_read_from_files_when_present() {
    let fs = MemoryFs::new()
        .with("all.yaml", COMBINED)
        .with("/secrets/token", "token-from-file");

    let bundle = load_bundle(&fs, &combined("all.yaml")).expect("load");
    let endpoint = bundle.cluster.expect("cluster").endpoint.expect("endpoint");
    assert_eq!(endpoint.token, "token-from-file");
    assert_eq!(endpoint.certificate, "inline-ca", "unreadable path is kept as-is");
}

#[test]
fn bundle_lists_sections_in_apply_order() {
    let fs = MemoryFs::new().with("all.yaml", COMBINED);
    let bundle = load_bundle(&fs, &combined("all.yaml")).expect("load");
    assert_eq!(
        bundle.sections(),
        vec![Section::Cluster, Section::App, Section::AppDeploy]
    );
    let deploy = bundle.app_deploy.expect("deploy");
    assert_eq!(deploy.app, "billing");
    assert_eq!(deploy.form.get("image"), Some("docker.io/shipasoftware/bulletinboard:1.0"));
}

#[test]
fn missing_shipa_yaml_is_an_error() {
    let fs = MemoryFs::new().with(
        "deploy.yaml",
        "app: billing\nimage: nginx\nshipayaml: missing/shipa.yaml\n",
    );
    let sources = ManifestSources {
        combined: None,
        sections: vec![(Section::AppDeploy, PathBuf::from("deploy.yaml"))],
    };

    let err = load_bundle(&fs, &sources).expect_err("missing file");
    assert!(matches!(err, ManifestError::File { ref path, .. } if path == "missing/shipa.yaml"));
}

#[test]
fn shipa_yaml_content_is_encoded_into_the_form() {
    let fs = MemoryFs::new()
        .with("deploy.yaml", "app: billing\nimage: nginx\nshipayaml: shipa.yaml\n")
        .with("shipa.yaml", "hooks: {}\n");
    let sources = ManifestSources {
        combined: None,
        sections: vec![(Section::AppDeploy, PathBuf::from("deploy.yaml"))],
    };

    let bundle = load_bundle(&fs, &sources).expect("load");
    let form = bundle.app_deploy.expect("deploy").form;
    assert_eq!(form.get("shipayaml"), Some("aG9va3M6IHt9Cg=="));
}

#[test]
fn blank_manifest_is_empty_error() {
    let fs = MemoryFs::new().with("all.yaml", "   \n");
    let err = load_bundle(&fs, &combined("all.yaml")).expect_err("empty");
    assert!(matches!(err, ManifestError::Empty));
}

#[test]
fn unreadable_manifest_is_file_error() {
    let err = read_manifest(&MemoryFs::new(), &combined("nope.yaml")).expect_err("missing");
    assert!(err.to_string().starts_with("cannot read nope.yaml"));
}

#[test]
fn malformed_yaml_is_decode_error() {
    let fs = MemoryFs::new().with("all.yaml", "app: [unclosed\n");
    let err = read_manifest(&fs, &combined("all.yaml")).expect_err("bad yaml");
    assert!(matches!(err, ManifestError::Decode { ref path, .. } if path == "all.yaml"));
}

#[test]
fn missing_required_field_names_section_and_field() {
    let fs = MemoryFs::new().with("all.yaml", "job:\n  framework: dev\n");
    let err = load_bundle(&fs, &combined("all.yaml")).expect_err("invalid");
    assert_eq!(err.to_string(), "job: 'name' is required");
}

#[test]
fn file_or_value_falls_back_to_literal() {
    let fs = MemoryFs::new().with("ca.pem", "PEM");
    assert_eq!(file_or_value(&fs, "ca.pem"), "PEM");
    assert_eq!(file_or_value(&fs, "literal-token"), "literal-token");
    assert_eq!(file_or_value(&fs, ""), "");
}
