//! `shipa-action apply` — reconcile a manifest against the platform.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::{manifest_loader, reconcile};
use crate::commands::ManifestArgs;
use crate::infra::client::ShipaClient;
use crate::infra::config;
use crate::infra::fs::LocalDisk;
use crate::output::TerminalReporter;

/// Run the apply command.
///
/// # Errors
///
/// Fails on missing configuration, an invalid manifest, a failed auth probe,
/// or the first section the platform rejects.
pub fn run(app: &AppContext, args: &ManifestArgs) -> Result<ExitCode> {
    let config = config::load(app.debug)?;
    let bundle = manifest_loader::load_bundle(&LocalDisk, &args.to_sources()?)?;
    tracing::debug!(sections = ?bundle.sections(), "manifest loaded");

    let client = ShipaClient::connect(&config)?;
    let reporter = TerminalReporter::new(&app.output);
    let report = reconcile::apply_manifest(&client, &reporter, &bundle)?;
    drop(reporter);

    app.renderer().render_apply(&report)?;
    Ok(ExitCode::SUCCESS)
}
