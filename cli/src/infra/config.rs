//! Client configuration from `SHIPA_*` environment variables.

use std::time::Duration;

use serde::Deserialize;

use crate::domain::ClientConfig;
use crate::domain::config::DEFAULT_TIMEOUT_SECS;
use crate::domain::error::ConfigError;

/// Raw environment, one field per `SHIPA_<FIELD>` variable:
///   - `SHIPA_HOST`         (required)
///   - `SHIPA_TOKEN`        (required)
///   - `SHIPA_DEBUG`        (default `false`)
///   - `SHIPA_TIMEOUT_SECS` (default `1500`)
#[derive(Debug, Deserialize)]
struct EnvConfig {
    #[serde(default)]
    host: String,
    #[serde(default)]
    token: String,
    #[serde(default, deserialize_with = "boolish")]
    debug: bool,
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// `1/0`, `true/false`, `yes/no`, `on/off` in any case; empty is false.
fn boolish<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" | "n" | "f" => Ok(false),
        "1" | "true" | "yes" | "on" | "y" | "t" => Ok(true),
        other => Err(serde::de::Error::custom(format!(
            "invalid boolean `{other}` for debug"
        ))),
    }
}

/// Load the client configuration from the process environment.
///
/// `debug_override` forces request logging on (the `--debug` flag).
///
/// # Errors
///
/// Fails when `SHIPA_HOST` or `SHIPA_TOKEN` is unset or empty, or when a
/// variable does not parse.
pub fn load(debug_override: bool) -> Result<ClientConfig, ConfigError> {
    from_vars(std::env::vars(), debug_override)
}

/// Like [`load`], reading from an explicit variable list.
///
/// # Errors
///
/// Same as [`load`].
pub fn from_vars<I>(vars: I, debug_override: bool) -> Result<ClientConfig, ConfigError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env: EnvConfig = envy::prefixed("SHIPA_")
        .from_iter(vars)
        .map_err(|e| ConfigError::Env(e.to_string()))?;
    ClientConfig::new(
        env.host,
        env.token,
        env.debug || debug_override,
        Duration::from_secs(env.timeout_secs),
    )
}
