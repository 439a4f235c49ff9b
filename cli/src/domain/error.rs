//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use shipa_types::Section;
use thiserror::Error;

/// Result of a single platform API call.
pub type ApiResult<T> = Result<T, PlatformError>;

// ── Platform errors ───────────────────────────────────────────────────────────

/// Outcome of a failed exchange with the platform API.
///
/// Lookups return [`PlatformError::NotFound`] when the resource is absent,
/// so callers can tell "does not exist" apart from "server unreachable".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlatformError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("status: {code}, body: {body}")]
    Status { code: u16, body: String },

    /// Success status, but the last line of the body carried an `Error`.
    #[error("{0}")]
    Logic(String),

    #[error("found vulnerabilities")]
    Vulnerability,

    #[error("app deploy failed, body: {body}")]
    Deploy { body: String },

    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },

    #[error("cannot decode response: {0}")]
    Decode(String),

    #[error("cannot encode request: {0}")]
    Encode(String),

    #[error("{0}")]
    InvalidInput(String),
}

impl PlatformError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Short machine-readable tag used by `--json` error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Status { .. } => "status",
            Self::Logic(_) => "logic",
            Self::Vulnerability => "vulnerability",
            Self::Deploy { .. } => "deploy",
            Self::NotFound { .. } => "not_found",
            Self::Decode(_) => "decode",
            Self::Encode(_) => "encode",
            Self::InvalidInput(_) => "invalid_input",
        }
    }
}

// ── Manifest errors ───────────────────────────────────────────────────────────

/// Errors raised while reading and decoding manifests.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("cannot read {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {path}: {message}")]
    Decode { path: String, message: String },

    #[error("nothing to apply: the manifest has no known sections")]
    Empty,

    #[error("{section}: '{field}' is required")]
    MissingField {
        section: Section,
        field: &'static str,
    },

    #[error("{section}: invalid {field}: {message}")]
    InvalidField {
        section: Section,
        field: &'static str,
        message: String,
    },
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to client configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SHIPA_HOST env not set")]
    MissingHost,

    #[error("SHIPA_TOKEN env not set")]
    MissingToken,

    #[error("invalid environment: {0}")]
    Env(String),
}
