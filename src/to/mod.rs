//! Conversions: range-checked numbers, booleans, enumerations and switch
//!
//! These are plain functions, usable directly as mappers in sequence chains.

pub mod booleans;
pub mod enums;
pub mod numbers;
pub mod switch;

pub use booleans::{bool_from_number, bool_from_str};
pub use enums::{enum_strict, enum_value};
pub use numbers::{
    at_least, at_most, clamped, clamped_with, float32_from_f64, float32_from_str,
    float64_from_str, integer, integer_from_bool, integer_from_float, integer_from_str,
    no_less_than, no_more_than,
};
pub use switch::{switch, Matching, Switch};
