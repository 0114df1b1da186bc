//! Boolean parsing

use crate::error::{Error, Result};

/// Parse the accepted boolean spellings: `1`, `t`, `T`, `TRUE`, `true`,
/// `True` and their false counterparts `0`, `f`, `F`, `FALSE`, `false`, `False`.
pub fn bool_from_str(value: &str) -> Result<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(Error::invalid_syntax(value, "bool")),
    }
}

/// Zero is false, anything else is true.
pub fn bool_from_number<V>(value: V) -> bool
where
    V: Default + PartialEq,
{
    value != V::default()
}
