//! `shipa-action validate` — check a manifest offline.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::manifest_loader;
use crate::commands::ManifestArgs;
use crate::infra::fs::LocalDisk;

/// Run the validate command. Reads local files only.
///
/// # Errors
///
/// Fails when the manifest cannot be read or is invalid.
pub fn run(app: &AppContext, args: &ManifestArgs) -> Result<ExitCode> {
    let bundle = manifest_loader::load_bundle(&LocalDisk, &args.to_sources()?)?;
    app.renderer().render_validation(&bundle.sections())?;
    Ok(ExitCode::SUCCESS)
}
