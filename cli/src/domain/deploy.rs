//! Deploy form construction.
//!
//! The deploy endpoint takes a URL-encoded form rather than JSON. Building
//! the form is pure: the caller reads the `shipa.yaml` bytes beforehand.

use std::collections::BTreeMap;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use shipa_types::AppDeploy;

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Parse a duration string such as `5m`, `1h30m`, `1.5s` or `300ms` and
/// return whole seconds, truncated toward zero.
///
/// Accepted units are `ns`, `us` (`µs`), `ms`, `s`, `m` and `h`. Components
/// may be fractional and repeated; a leading sign is allowed. A bare `0` is
/// valid.
///
/// # Errors
///
/// Returns a description of the problem when `input` is not a duration.
pub fn parse_step_interval(input: &str) -> Result<i64, String> {
    let invalid = || format!("invalid duration \"{input}\"");

    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };
    if rest == "0" {
        return Ok(0);
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: i128 = 0;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(number_len);
        let (whole, frac) = number.split_once('.').unwrap_or((number, ""));
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_len);
        let scale: i128 = match unit {
            "ns" => 1,
            "us" | "µs" | "μs" => 1_000,
            "ms" => 1_000_000,
            "s" => NANOS_PER_SECOND,
            "m" => 60 * NANOS_PER_SECOND,
            "h" => 3_600 * NANOS_PER_SECOND,
            "" => return Err(format!("missing unit in duration \"{input}\"")),
            other => return Err(format!("unknown unit \"{other}\" in duration \"{input}\"")),
        };

        let whole_value: i128 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let mut component = whole_value.checked_mul(scale).ok_or_else(invalid)?;
        let mut place = scale;
        for digit in frac.chars() {
            let d = i128::from(digit.to_digit(10).ok_or_else(invalid)?);
            place /= 10;
            if place == 0 {
                break;
            }
            component = d
                .checked_mul(place)
                .and_then(|v| component.checked_add(v))
                .ok_or_else(invalid)?;
        }
        total = total.checked_add(component).ok_or_else(invalid)?;
        if total > i128::from(i64::MAX) {
            return Err(invalid());
        }
        rest = next;
    }

    let seconds = i64::try_from(total / NANOS_PER_SECOND).map_err(|_| invalid())?;
    Ok(if negative { -seconds } else { seconds })
}

/// URL-encoded deploy form, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployForm(BTreeMap<String, String>);

impl DeployForm {
    /// Build the form from a manifest deploy section.
    ///
    /// `shipa_yaml` holds the content of the file named by
    /// `deploy.shipa_yaml`, already read by the caller.
    ///
    /// # Errors
    ///
    /// Returns the duration parse error when `step-interval` is invalid.
    pub fn build(deploy: &AppDeploy, shipa_yaml: Option<&[u8]>) -> Result<Self, String> {
        let mut fields = BTreeMap::new();
        fields.insert("image".to_string(), deploy.image.clone());

        if deploy.private_image {
            fields.insert("private-image".into(), "true".into());
            fields.insert("registry-user".into(), deploy.registry_user.clone());
            fields.insert("registry-secret".into(), deploy.registry_secret.clone());
        }
        if deploy.steps > 0 {
            fields.insert("steps".into(), deploy.steps.to_string());
        }
        if deploy.step_weight > 0 {
            fields.insert("step-weight".into(), deploy.step_weight.to_string());
        }
        if !deploy.step_interval.is_empty() {
            let seconds = parse_step_interval(&deploy.step_interval)
                .map_err(|e| format!("failed to parse step-interval={}: {e}", deploy.step_interval))?;
            fields.insert("step-interval".into(), seconds.to_string());
        }
        if deploy.port > 0 {
            fields.insert("port-number".into(), deploy.port.to_string());
            fields.insert("port-protocol".into(), "TCP".into());
        }
        if deploy.detach {
            fields.insert("detach".into(), "true".into());
        }
        if !deploy.message.is_empty() {
            fields.insert("message".into(), deploy.message.clone());
        }
        if let Some(content) = shipa_yaml {
            fields.insert("shipayaml".into(), STANDARD.encode(content));
        }
        Ok(Self(fields))
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Fields in key order, ready for form encoding.
    #[must_use]
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.0.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
