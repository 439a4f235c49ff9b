//! JSON output helpers.
//!
//! Provides the error-object formatter used by all `--json` code paths when
//! a command fails, plus the renderer for successful results.

use anyhow::{Context, Result};
use shipa_types::Section;

use crate::domain::{ApplyReport, ConfigError, ManifestError, PlatformError};

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Stable machine-readable code for a failed run.
///
/// Walks the error chain for the first typed error and falls back to
/// `"failed"` for anything untyped.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<PlatformError>() {
            return e.code();
        }
        if cause.downcast_ref::<ManifestError>().is_some() {
            return "invalid_manifest";
        }
        if cause.downcast_ref::<ConfigError>().is_some() {
            return "config";
        }
    }
    "failed"
}

/// Renders domain types as JSON to stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Render the CLI version.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        print_pretty(&serde_json::json!({ "version": version }))
    }

    /// Render the per-section outcomes of an apply run.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_apply(&self, report: &ApplyReport) -> Result<()> {
        let value = serde_json::to_value(report).context("JSON serialization failed")?;
        print_pretty(&value)
    }

    /// Render the sections of a valid manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_validation(&self, sections: &[Section]) -> Result<()> {
        let keys: Vec<&str> = sections.iter().map(|s| s.key()).collect();
        print_pretty(&serde_json::json!({ "valid": true, "sections": keys }))
    }
}

fn print_pretty(value: &serde_json::Value) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("JSON serialization failed")?
    );
    Ok(())
}
