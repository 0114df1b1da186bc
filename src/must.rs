//! Panicking counterparts of the `to` conversions
//!
//! For call sites where a failure means a bug. The panic message is the
//! conversion error, which names the offending value and the target type.

use std::fmt::Display;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::to;
use crate::types::Integer;

/// Unwrap `result`, panicking with the error's message.
#[track_caller]
pub fn get<T, E: Display>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}

/// [`to::integer`], panicking when out of range.
///
/// ```should_panic
/// seqkit::must::convert::<i8, _>(200u8);
/// ```
#[track_caller]
pub fn convert<T, V>(value: V) -> T
where
    T: Integer + TryFrom<V>,
    V: Integer,
{
    get(to::integer(value))
}

#[track_caller]
pub fn convert_from_float<T: Integer>(value: f64) -> T {
    get(to::integer_from_float(value))
}

#[track_caller]
pub fn convert_from_str<T>(value: &str) -> T
where
    T: Integer + FromStr<Err = ParseIntError>,
{
    get(to::integer_from_str(value))
}

#[track_caller]
pub fn float32_from_f64(value: f64) -> f32 {
    get(to::float32_from_f64(value))
}
