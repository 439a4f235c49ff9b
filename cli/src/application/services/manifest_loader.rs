//! Application service — manifest loading use-case.
//!
//! Reads the combined manifest and any per-section files through the
//! `LocalFs` port, overlays them, and hands the result to the domain for
//! validation and assembly.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use shipa_types::{Manifest, Section};

use crate::application::ports::LocalFs;
use crate::domain::{ManifestBundle, ManifestError};

/// Where the manifest comes from.
#[derive(Debug, Clone, Default)]
pub struct ManifestSources {
    /// Document with any of the top-level section keys.
    pub combined: Option<PathBuf>,
    /// Files holding a single section's body. They override `combined`.
    pub sections: Vec<(Section, PathBuf)>,
}

impl ManifestSources {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.combined.is_none() && self.sections.is_empty()
    }
}

/// Read and decode every source into one manifest.
///
/// # Errors
///
/// Fails when a file cannot be read or does not decode.
pub fn read_manifest(fs: &impl LocalFs, sources: &ManifestSources) -> Result<Manifest, ManifestError> {
    let mut manifest = match &sources.combined {
        Some(path) => decode_file::<Manifest>(fs, path)?.unwrap_or_default(),
        None => Manifest::default(),
    };
    for (section, path) in &sources.sections {
        tracing::debug!(%section, path = %path.display(), "reading section file");
        manifest = manifest.overlay(decode_section(fs, *section, path)?);
    }
    Ok(manifest)
}

/// Load, validate and assemble the bundle.
///
/// Cluster credentials naming a readable file are replaced by the file's
/// content; anything else is kept as written. The deploy's `shipayaml`
/// must be readable.
///
/// # Errors
///
/// Returns a [`ManifestError`] for unreadable or invalid input.
pub fn load_bundle(
    fs: &impl LocalFs,
    sources: &ManifestSources,
) -> Result<ManifestBundle, ManifestError> {
    let manifest = read_manifest(fs, sources)?;

    let shipa_yaml = match manifest.app_deploy.as_ref().map(|d| d.shipa_yaml.as_str()) {
        Some(path) if !path.is_empty() => Some(read(fs, Path::new(path))?),
        _ => None,
    };

    ManifestBundle::assemble(manifest, |value| file_or_value(fs, value), shipa_yaml.as_deref())
}

/// Content of the file at `value` when it can be read as UTF-8, else `value`.
pub fn file_or_value(fs: &impl LocalFs, value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    match fs.read(Path::new(value)).map(String::from_utf8) {
        Ok(Ok(content)) => content,
        _ => value.to_string(),
    }
}

fn read(fs: &impl LocalFs, path: &Path) -> Result<Vec<u8>, ManifestError> {
    fs.read(path).map_err(|source| ManifestError::File {
        path: path.display().to_string(),
        source,
    })
}

/// Decode a YAML file. A blank file decodes to `None`.
fn decode_file<T: DeserializeOwned>(fs: &impl LocalFs, path: &Path) -> Result<Option<T>, ManifestError> {
    let bytes = read(fs, path)?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_yaml::from_slice(&bytes)
        .map(Some)
        .map_err(|e| ManifestError::Decode {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

fn decode_section(fs: &impl LocalFs, section: Section, path: &Path) -> Result<Manifest, ManifestError> {
    let mut manifest = Manifest::default();
    match section {
        Section::Framework => manifest.framework = decode_file(fs, path)?,
        Section::Cluster => manifest.cluster = decode_file(fs, path)?,
        Section::App => manifest.app = decode_file(fs, path)?,
        Section::AppEnv => manifest.app_env = decode_file(fs, path)?,
        Section::AppCname => manifest.app_cname = decode_file(fs, path)?,
        Section::NetworkPolicy => manifest.network_policy = decode_file(fs, path)?,
        Section::AppDeploy => manifest.app_deploy = decode_file(fs, path)?,
        Section::Job => manifest.job = decode_file(fs, path)?,
    }
    Ok(manifest)
}
