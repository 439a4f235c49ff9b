//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `ureq`, `std::fs`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod deploy;
pub mod error;
pub mod manifest;
pub mod reconcile;
pub mod request;
pub mod response;

pub use config::ClientConfig;
pub use deploy::{DeployForm, parse_step_interval};
pub use error::{ApiResult, ConfigError, ManifestError, PlatformError};
pub use manifest::{DeployRequest, ManifestBundle};
pub use reconcile::{ApplyReport, Outcome, SectionResult, framework_delta};
pub use request::{ApiRequest, Method, RequestBody};
pub use response::{RawResponse, VerbClass};
