//! Classification of raw platform responses.
//!
//! The platform reports some failures with a success status and an NDJSON
//! body whose last line carries an `Error` field. Deploys report image scan
//! failures with a plain-text marker. Everything here is pure.

use crate::domain::error::{ApiResult, PlatformError};

/// Marker the platform writes into a deploy stream when the image scan fails.
pub const VULNERABILITY_MARKER: &str = "There are vulnerabilities!";

/// Status and body as received. Nothing has been interpreted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Body as text, with invalid UTF-8 replaced.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    fn status_error(&self) -> PlatformError {
        PlatformError::Status {
            code: self.status,
            body: self.text(),
        }
    }
}

/// Which status codes count as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbClass {
    Get,
    Create,
    Put,
    Delete,
    Deploy,
}

impl VerbClass {
    #[must_use]
    pub fn accepts(self, status: u16) -> bool {
        match self {
            VerbClass::Get | VerbClass::Put | VerbClass::Delete => status == 200,
            VerbClass::Create => matches!(status, 200 | 201),
            VerbClass::Deploy => matches!(status, 200..=202),
        }
    }
}

/// Apply the status policy for `class`.
///
/// # Errors
///
/// Returns [`PlatformError::Status`] when the code is not accepted.
pub fn check_status(class: VerbClass, resp: &RawResponse) -> ApiResult<()> {
    if class.accepts(resp.status) {
        Ok(())
    } else {
        Err(resp.status_error())
    }
}

/// Extract the `Error` message from the last non-empty line of `body`.
///
/// Returns `None` when that line is not a JSON object or carries no
/// non-empty `Error`. The key is matched case-insensitively.
#[must_use]
pub fn trailing_error(body: &str) -> Option<String> {
    let line = body.split('\n').rev().find(|l| !l.is_empty())?;
    let value: serde_json::Value = serde_json::from_str(line.trim_end_matches('\r')).ok()?;
    let object = value.as_object()?;
    object
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("error"))
        .and_then(|(_, v)| v.as_str())
        .filter(|msg| !msg.is_empty())
        .map(str::to_string)
}

/// Status gate for create-style POSTs, then the trailing-line error check.
///
/// # Errors
///
/// [`PlatformError::Status`] or [`PlatformError::Logic`].
pub fn check_create(resp: &RawResponse) -> ApiResult<()> {
    check_status(VerbClass::Create, resp)?;
    match trailing_error(&resp.text()) {
        Some(msg) => Err(PlatformError::Logic(msg)),
        None => Ok(()),
    }
}

/// Status gate for deploys, then the vulnerability and error scans.
///
/// # Errors
///
/// [`PlatformError::Status`], [`PlatformError::Vulnerability`] or
/// [`PlatformError::Deploy`].
pub fn check_deploy(resp: &RawResponse) -> ApiResult<()> {
    check_status(VerbClass::Deploy, resp)?;
    let body = resp.text();
    if body.contains(VULNERABILITY_MARKER) {
        return Err(PlatformError::Vulnerability);
    }
    if body.to_lowercase().contains("\"error\"") {
        return Err(PlatformError::Deploy { body });
    }
    Ok(())
}

/// Status gate for lookups by key.
///
/// A 404, or any rejected response whose body says "not found", becomes
/// [`PlatformError::NotFound`].
///
/// # Errors
///
/// [`PlatformError::NotFound`] or [`PlatformError::Status`].
pub fn check_lookup(resp: &RawResponse, kind: &'static str, name: &str) -> ApiResult<()> {
    if VerbClass::Get.accepts(resp.status) {
        return Ok(());
    }
    if resp.status == 404 || resp.text().to_lowercase().contains("not found") {
        return Err(PlatformError::NotFound {
            kind,
            name: name.to_string(),
        });
    }
    Err(resp.status_error())
}

/// Decode a JSON body.
///
/// # Errors
///
/// [`PlatformError::Decode`] when the body does not match `T`.
pub fn decode<T: serde::de::DeserializeOwned>(resp: &RawResponse) -> ApiResult<T> {
    serde_json::from_slice(&resp.body).map_err(|e| PlatformError::Decode(e.to_string()))
}
