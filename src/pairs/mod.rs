//! Lazy sequences of key/value pairs
//!
//! A pair sequence is any [`Seq`] whose items are `(K, V)` tuples, so every
//! single-value combinator applies to it as well. [`PairSeqExt`] adds the
//! key- and value-aware operations.

pub mod ext;

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

use crate::seq::advanced::{WithIndex, Zip};
use crate::seq::constructors::{self, Empty, FromVec, Range, Repeat, Tick};
use crate::seq::core::Seq;

pub use ext::{
    FilterByKey, FilterByValue, FilterChannelIter, FilterPairs, FilterPairsIter, KeyComparator,
    Keys, MapKeys, MapKeysIter, MapPairs, MapPairsIter, MapValues, MapValuesIter, PairSeqExt,
    ValueComparator, Values,
};

/// Pair each value with its 0-based position.
pub fn of<T, I>(values: I) -> WithIndex<FromVec<T>>
where
    I: IntoIterator<Item = T>,
{
    WithIndex {
        seq: constructors::of(values),
    }
}

/// Pair each element of `values` with its 0-based position.
pub fn from_vec<T>(values: Vec<T>) -> WithIndex<FromVec<T>> {
    WithIndex {
        seq: constructors::from_vec(values),
    }
}

/// Snapshot the entries of `map`. Iteration order is the map's, which for
/// a `HashMap` is unspecified; sort downstream when order matters.
pub fn from_map<K, V>(map: &HashMap<K, V>) -> FromVec<(K, V)>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    constructors::of(map.iter().map(|(k, v)| (k.clone(), v.clone())))
}

/// A sequence of exactly one pair.
pub fn pair<K, V>(key: K, value: V) -> FromVec<(K, V)> {
    constructors::from_vec(vec![(key, value)])
}

/// The same pair `count` times.
pub fn repeat<K: Clone, V: Clone>(key: K, value: V, count: usize) -> Repeat<(K, V)> {
    constructors::repeat((key, value), count)
}

pub fn empty<K, V>() -> Empty<(K, V)> {
    constructors::empty()
}

/// Pair each element of `seq` with its 0-based position.
pub fn with_index<S: Seq>(seq: S) -> WithIndex<S> {
    WithIndex { seq }
}

/// An endless sequence of `(tick number, time)` pairs, numbered from 1.
///
/// # Panics
///
/// Panics if `period` is zero.
#[track_caller]
pub fn tick(period: Duration) -> Zip<Range<u64>, Tick> {
    Zip {
        a: constructors::range(1, u64::MAX),
        b: constructors::tick(period),
    }
}
