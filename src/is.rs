//! Predicates, ready to pass to `filter`, `find` and friends
//!
//! Functions taking a value answer directly; functions taking only a
//! threshold return a reusable predicate over `&T`.

use std::collections::HashSet;
use std::hash::Hash;

use crate::seq::core::Seq;

pub fn empty_string(s: &str) -> bool {
    s.is_empty()
}

/// Empty or whitespace only.
pub fn blank_string(s: &str) -> bool {
    s.trim().is_empty()
}

pub fn not_empty_string(s: &str) -> bool {
    !empty_string(s)
}

pub fn not_blank_string(s: &str) -> bool {
    !blank_string(s)
}

/// Whether `value` equals its type's default.
pub fn zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

pub fn not_zero<T: Default + PartialEq>(value: &T) -> bool {
    !zero(value)
}

/// Invert a predicate.
pub fn not<T, P>(mut predicate: P) -> impl FnMut(&T) -> bool + Clone
where
    P: FnMut(&T) -> bool + Clone,
{
    move |value| !predicate(value)
}

pub fn equal_to<T: PartialEq + Clone>(expected: T) -> impl FnMut(&T) -> bool + Clone {
    move |value| *value == expected
}

pub fn not_equal_to<T: PartialEq + Clone>(expected: T) -> impl FnMut(&T) -> bool + Clone {
    move |value| *value != expected
}

pub fn greater_than<T: PartialOrd + Clone>(threshold: T) -> impl FnMut(&T) -> bool + Clone {
    move |value| *value > threshold
}

pub fn greater_or_equal_to<T: PartialOrd + Clone>(threshold: T) -> impl FnMut(&T) -> bool + Clone {
    move |value| *value >= threshold
}

pub fn less_than<T: PartialOrd + Clone>(threshold: T) -> impl FnMut(&T) -> bool + Clone {
    move |value| *value < threshold
}

pub fn less_or_equal_to<T: PartialOrd + Clone>(threshold: T) -> impl FnMut(&T) -> bool + Clone {
    move |value| *value <= threshold
}

/// Whether `min <= value <= max`.
pub fn between<T: PartialOrd>(value: &T, min: &T, max: &T) -> bool {
    min <= value && value <= max
}

/// [`between`] as a reusable predicate.
pub fn between_the<T: PartialOrd + Clone>(min: T, max: T) -> impl FnMut(&T) -> bool + Clone {
    move |value| between(value, &min, &max)
}

/// Whether no element repeats. Stops at the first duplicate.
pub fn unique<S>(seq: &S) -> bool
where
    S: Seq + ?Sized,
    S::Item: Eq + Hash,
{
    let mut seen = HashSet::new();
    seq.iter().all(|item| seen.insert(item))
}

/// Whether no two elements share a derived key.
pub fn unique_by<S, K, F>(seq: &S, mut key: F) -> bool
where
    S: Seq + ?Sized,
    F: FnMut(&S::Item) -> K,
    K: Eq + Hash,
{
    let mut seen = HashSet::new();
    seq.iter().all(|item| seen.insert(key(&item)))
}
