//! Range-checked numeric conversions and clamping

use std::any::type_name;
use std::num::{IntErrorKind, ParseFloatError, ParseIntError};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::types::Integer;

/// Convert between integer types, failing instead of truncating or wrapping.
///
/// ```
/// assert_eq!(seqkit::to::integer::<i8, _>(100u32), Ok(100i8));
/// assert!(seqkit::to::integer::<i8, _>(200u8).is_err());
/// ```
pub fn integer<T, V>(value: V) -> Result<T>
where
    T: Integer + TryFrom<V>,
    V: Integer,
{
    T::try_from(value).map_err(|_| Error::out_of_range(value, type_name::<T>()))
}

/// Convert a float to an integer type, truncating toward zero.
///
/// Non-finite values and values outside the target range fail.
pub fn integer_from_float<T: Integer>(value: f64) -> Result<T> {
    if !value.is_finite() {
        return Err(Error::out_of_range(value, type_name::<T>()));
    }
    let truncated = value.trunc();
    // exclusive bound: MAX + 1 is a power of two, and wide MAX values already round up to it
    let upper = T::MAX.to_f64() + 1.0;
    if truncated < T::MIN.to_f64() || truncated >= upper {
        return Err(Error::out_of_range(value, type_name::<T>()));
    }
    Ok(T::from_f64(truncated))
}

/// `1` for true, `0` for false.
pub fn integer_from_bool<T: Integer>(value: bool) -> T {
    if value {
        T::ONE
    } else {
        T::ZERO
    }
}

/// Parse a base-10 integer, telling syntax errors apart from range errors.
pub fn integer_from_str<T>(value: &str) -> Result<T>
where
    T: Integer + FromStr<Err = ParseIntError>,
{
    value.parse::<T>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            Error::out_of_range(value, type_name::<T>())
        }
        _ => Error::invalid_syntax(value, type_name::<T>()),
    })
}

/// Narrow an `f64` to `f32`. Finite values beyond the `f32` range fail;
/// infinities and NaN carry over unchanged.
pub fn float32_from_f64(value: f64) -> Result<f32> {
    if value.is_finite() && value.abs() > f64::from(f32::MAX) {
        return Err(Error::out_of_range(value, "f32"));
    }
    Ok(value as f32)
}

pub fn float32_from_str(value: &str) -> Result<f32> {
    let parsed: f64 = parse_float(value, "f32")?;
    float32_from_f64(parsed)
}

pub fn float64_from_str(value: &str) -> Result<f64> {
    parse_float(value, "f64")
}

fn parse_float(value: &str, target: &'static str) -> Result<f64> {
    let parsed = value
        .parse::<f64>()
        .map_err(|_: ParseFloatError| Error::invalid_syntax(value, target))?;
    // the parser saturates to infinity instead of reporting overflow
    if parsed.is_infinite() && !names_infinity(value) {
        return Err(Error::out_of_range(value, target));
    }
    Ok(parsed)
}

fn names_infinity(value: &str) -> bool {
    value
        .trim_start_matches(|c: char| c == '+' || c == '-')
        .to_ascii_lowercase()
        .starts_with("inf")
}

// ================================
// Clamping
// ================================

/// `value`, raised to `min` if below it.
pub fn no_less_than<T: PartialOrd>(value: T, min: T) -> T {
    if value < min {
        min
    } else {
        value
    }
}

/// `value`, lowered to `max` if above it.
pub fn no_more_than<T: PartialOrd>(value: T, max: T) -> T {
    if value > max {
        max
    } else {
        value
    }
}

/// `value` clamped into `[min, max]`.
pub fn clamped<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// [`no_less_than`] as a mapper.
pub fn at_least<T: PartialOrd + Clone>(min: T) -> impl FnMut(T) -> T + Clone {
    move |value| no_less_than(value, min.clone())
}

/// [`no_more_than`] as a mapper.
pub fn at_most<T: PartialOrd + Clone>(max: T) -> impl FnMut(T) -> T + Clone {
    move |value| no_more_than(value, max.clone())
}

/// [`clamped`] as a mapper.
pub fn clamped_with<T: PartialOrd + Clone>(min: T, max: T) -> impl FnMut(T) -> T + Clone {
    move |value| clamped(value, min.clone(), max.clone())
}
