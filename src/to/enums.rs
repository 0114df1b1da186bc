//! Membership checks for string-valued enumerations

use crate::error::{Error, Result};

/// Match `value` against `allowed` ignoring ASCII case, returning the
/// canonical spelling from `allowed`.
pub fn enum_value<'a>(value: &str, allowed: &[&'a str]) -> Result<&'a str> {
    allowed
        .iter()
        .copied()
        .find(|candidate| candidate.eq_ignore_ascii_case(value))
        .ok_or_else(|| not_allowed(value, allowed))
}

/// Match `value` against `allowed` exactly.
pub fn enum_strict<'a>(value: &str, allowed: &[&'a str]) -> Result<&'a str> {
    allowed
        .iter()
        .copied()
        .find(|candidate| *candidate == value)
        .ok_or_else(|| not_allowed(value, allowed))
}

fn not_allowed(value: &str, allowed: &[&str]) -> Error {
    Error::InvalidEnumValue {
        value: value.to_string(),
        allowed: allowed.join(", "),
    }
}
