//! Key/value combinators and terminal operations for sequences of pairs

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use crate::optional::Optional;
use crate::seq::advanced::{Chain, UniqBy};
use crate::seq::constructors::{from_vec, FromVec};
use crate::seq::core::{Map, Seq};
use crate::seq::specialized::{Arranged, Arrangement, ByComparator};
use crate::seq::utility::extreme;

/// The key channel of a pair sequence.
pub type Keys<S, K, V> = Map<S, fn((K, V)) -> K>;

/// The value channel of a pair sequence.
pub type Values<S, K, V> = Map<S, fn((K, V)) -> V>;

type PairOrder<K, V> = fn(&(K, V), &(K, V)) -> Ordering;

fn key_of<K, V>(pair: (K, V)) -> K {
    pair.0
}

fn value_of<K, V>(pair: (K, V)) -> V {
    pair.1
}

fn cloned_key<K: Clone, V>(pair: &(K, V)) -> K {
    pair.0.clone()
}

fn cloned_value<K, V: Clone>(pair: &(K, V)) -> V {
    pair.1.clone()
}

fn compare_keys<K: Ord, V>(a: &(K, V), b: &(K, V)) -> Ordering {
    a.0.cmp(&b.0)
}

fn compare_values<K, V: Ord>(a: &(K, V), b: &(K, V)) -> Ordering {
    a.1.cmp(&b.1)
}

// ================================
// Channel mappers
// ================================

#[derive(Clone)]
pub struct MapKeys<S, F> {
    pub(crate) seq: S,
    pub(crate) f: F,
}

impl<S, F, K, V, R> Seq for MapKeys<S, F>
where
    S: Seq<Item = (K, V)>,
    F: FnMut(K) -> R + Clone,
{
    type Item = (R, V);
    type Iter = MapKeysIter<S::Iter, F>;

    fn iter(&self) -> Self::Iter {
        MapKeysIter {
            inner: self.seq.iter(),
            f: self.f.clone(),
        }
    }
}

pub struct MapKeysIter<I, F> {
    inner: I,
    f: F,
}

impl<I, F, K, V, R> Iterator for MapKeysIter<I, F>
where
    I: Iterator<Item = (K, V)>,
    F: FnMut(K) -> R,
{
    type Item = (R, V);

    fn next(&mut self) -> Option<Self::Item> {
        let (k, v) = self.inner.next()?;
        Some(((self.f)(k), v))
    }
}

#[derive(Clone)]
pub struct MapValues<S, F> {
    pub(crate) seq: S,
    pub(crate) f: F,
}

impl<S, F, K, V, R> Seq for MapValues<S, F>
where
    S: Seq<Item = (K, V)>,
    F: FnMut(V) -> R + Clone,
{
    type Item = (K, R);
    type Iter = MapValuesIter<S::Iter, F>;

    fn iter(&self) -> Self::Iter {
        MapValuesIter {
            inner: self.seq.iter(),
            f: self.f.clone(),
        }
    }
}

pub struct MapValuesIter<I, F> {
    inner: I,
    f: F,
}

impl<I, F, K, V, R> Iterator for MapValuesIter<I, F>
where
    I: Iterator<Item = (K, V)>,
    F: FnMut(V) -> R,
{
    type Item = (K, R);

    fn next(&mut self) -> Option<Self::Item> {
        let (k, v) = self.inner.next()?;
        Some((k, (self.f)(v)))
    }
}

/// Maps both channels with one function of `(key, value)`.
#[derive(Clone)]
pub struct MapPairs<S, F> {
    pub(crate) seq: S,
    pub(crate) f: F,
}

impl<S, F, K, V, R> Seq for MapPairs<S, F>
where
    S: Seq<Item = (K, V)>,
    F: FnMut(K, V) -> R + Clone,
{
    type Item = R;
    type Iter = MapPairsIter<S::Iter, F>;

    fn iter(&self) -> Self::Iter {
        MapPairsIter {
            inner: self.seq.iter(),
            f: self.f.clone(),
        }
    }
}

pub struct MapPairsIter<I, F> {
    inner: I,
    f: F,
}

impl<I, F, K, V, R> Iterator for MapPairsIter<I, F>
where
    I: Iterator<Item = (K, V)>,
    F: FnMut(K, V) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let (k, v) = self.inner.next()?;
        Some((self.f)(k, v))
    }
}

// ================================
// Channel filters
// ================================

#[derive(Clone)]
pub struct FilterByKey<S, F> {
    pub(crate) seq: S,
    pub(crate) predicate: F,
}

impl<S, F, K, V> Seq for FilterByKey<S, F>
where
    S: Seq<Item = (K, V)>,
    F: FnMut(&K) -> bool + Clone,
{
    type Item = (K, V);
    type Iter = FilterChannelIter<S::Iter, F, true>;

    fn iter(&self) -> Self::Iter {
        FilterChannelIter {
            inner: self.seq.iter(),
            predicate: self.predicate.clone(),
        }
    }
}

#[derive(Clone)]
pub struct FilterByValue<S, F> {
    pub(crate) seq: S,
    pub(crate) predicate: F,
}

impl<S, F, K, V> Seq for FilterByValue<S, F>
where
    S: Seq<Item = (K, V)>,
    F: FnMut(&V) -> bool + Clone,
{
    type Item = (K, V);
    type Iter = FilterChannelIter<S::Iter, F, false>;

    fn iter(&self) -> Self::Iter {
        FilterChannelIter {
            inner: self.seq.iter(),
            predicate: self.predicate.clone(),
        }
    }
}

/// Filters pairs on one channel; `KEYS` selects which.
pub struct FilterChannelIter<I, F, const KEYS: bool> {
    inner: I,
    predicate: F,
}

impl<I, F, K, V> Iterator for FilterChannelIter<I, F, true>
where
    I: Iterator<Item = (K, V)>,
    F: FnMut(&K) -> bool,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let predicate = &mut self.predicate;
        self.inner.find(|(k, _)| predicate(k))
    }
}

impl<I, F, K, V> Iterator for FilterChannelIter<I, F, false>
where
    I: Iterator<Item = (K, V)>,
    F: FnMut(&V) -> bool,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let predicate = &mut self.predicate;
        self.inner.find(|(_, v)| predicate(v))
    }
}

#[derive(Clone)]
pub struct FilterPairs<S, F> {
    pub(crate) seq: S,
    pub(crate) predicate: F,
}

impl<S, F, K, V> Seq for FilterPairs<S, F>
where
    S: Seq<Item = (K, V)>,
    F: FnMut(&K, &V) -> bool + Clone,
{
    type Item = (K, V);
    type Iter = FilterPairsIter<S::Iter, F>;

    fn iter(&self) -> Self::Iter {
        FilterPairsIter {
            inner: self.seq.iter(),
            predicate: self.predicate.clone(),
        }
    }
}

pub struct FilterPairsIter<I, F> {
    inner: I,
    predicate: F,
}

impl<I, F, K, V> Iterator for FilterPairsIter<I, F>
where
    I: Iterator<Item = (K, V)>,
    F: FnMut(&K, &V) -> bool,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let predicate = &mut self.predicate;
        self.inner.find(|(k, v)| predicate(k, v))
    }
}

// ================================
// Channel orderings
// ================================

#[derive(Clone)]
pub struct KeyComparator<F>(pub(crate) F);

impl<K, V, F> Arrangement<(K, V)> for KeyComparator<F>
where
    F: FnMut(&K, &K) -> Ordering,
{
    type Output = (K, V);

    fn arrange(&mut self, mut items: Vec<(K, V)>) -> Vec<(K, V)> {
        items.sort_by(|a, b| (self.0)(&a.0, &b.0));
        items
    }
}

#[derive(Clone)]
pub struct ValueComparator<F>(pub(crate) F);

impl<K, V, F> Arrangement<(K, V)> for ValueComparator<F>
where
    F: FnMut(&V, &V) -> Ordering,
{
    type Output = (K, V);

    fn arrange(&mut self, mut items: Vec<(K, V)>) -> Vec<(K, V)> {
        items.sort_by(|a, b| (self.0)(&a.1, &b.1));
        items
    }
}

// ================================
// Extension trait
// ================================

/// Combinators for sequences of `(key, value)` pairs.
///
/// Keys are never assumed unique. Only [`PairSeqExt::to_map`] and
/// [`PairSeqExt::into_map`] resolve duplicates, last write wins.
pub trait PairSeqExt<K, V>: Seq<Item = (K, V)> + Sized {
    fn keys(self) -> Keys<Self, K, V> {
        Map {
            seq: self,
            f: key_of::<K, V> as fn((K, V)) -> K,
        }
    }

    fn values(self) -> Values<Self, K, V> {
        Map {
            seq: self,
            f: value_of::<K, V> as fn((K, V)) -> V,
        }
    }

    /// Split into a keys sequence and a values sequence. Each re-traverses
    /// the pairs independently.
    fn unzip(self) -> (Keys<Self, K, V>, Values<Self, K, V>)
    where
        Self: Clone,
    {
        (self.clone().keys(), self.values())
    }

    /// Alias for [`PairSeqExt::unzip`].
    fn split(self) -> (Keys<Self, K, V>, Values<Self, K, V>)
    where
        Self: Clone,
    {
        self.unzip()
    }

    fn map_keys<R, F>(self, f: F) -> MapKeys<Self, F>
    where
        F: FnMut(K) -> R + Clone,
    {
        MapKeys { seq: self, f }
    }

    fn map_values<R, F>(self, f: F) -> MapValues<Self, F>
    where
        F: FnMut(V) -> R + Clone,
    {
        MapValues { seq: self, f }
    }

    /// Map both channels at once. Colliding new keys are only resolved
    /// when collected into a map.
    fn map_pairs<RK, RV, F>(self, f: F) -> MapPairs<Self, F>
    where
        F: FnMut(K, V) -> (RK, RV) + Clone,
    {
        MapPairs { seq: self, f }
    }

    /// Narrow to a single-value sequence of `f(key, value)`.
    fn map_to<R, F>(self, f: F) -> MapPairs<Self, F>
    where
        F: FnMut(K, V) -> R + Clone,
    {
        MapPairs { seq: self, f }
    }

    /// Alias for [`PairSeqExt::map_to`].
    fn narrow<R, F>(self, f: F) -> MapPairs<Self, F>
    where
        F: FnMut(K, V) -> R + Clone,
    {
        self.map_to(f)
    }

    /// Narrow to a single-value sequence of `f(value)`.
    fn map_to_values<R, F>(self, f: F) -> Map<Values<Self, K, V>, F>
    where
        F: FnMut(V) -> R + Clone,
    {
        Map {
            seq: self.values(),
            f,
        }
    }

    fn filter_by_key<F>(self, predicate: F) -> FilterByKey<Self, F>
    where
        F: FnMut(&K) -> bool + Clone,
    {
        FilterByKey {
            seq: self,
            predicate,
        }
    }

    fn filter_by_value<F>(self, predicate: F) -> FilterByValue<Self, F>
    where
        F: FnMut(&V) -> bool + Clone,
    {
        FilterByValue {
            seq: self,
            predicate,
        }
    }

    /// Keep the pairs for which `predicate(key, value)` holds.
    fn filter_pairs<F>(self, predicate: F) -> FilterPairs<Self, F>
    where
        F: FnMut(&K, &V) -> bool + Clone,
    {
        FilterPairs {
            seq: self,
            predicate,
        }
    }

    /// Drop pairs whose key was already seen.
    fn uniq_keys(self) -> UniqBy<Self, fn(&(K, V)) -> K>
    where
        K: Eq + Hash + Clone,
    {
        UniqBy {
            seq: self,
            key: cloned_key::<K, V> as fn(&(K, V)) -> K,
        }
    }

    /// Drop pairs whose value was already seen.
    fn uniq_values(self) -> UniqBy<Self, fn(&(K, V)) -> V>
    where
        V: Eq + Hash + Clone,
    {
        UniqBy {
            seq: self,
            key: cloned_value::<K, V> as fn(&(K, V)) -> V,
        }
    }

    fn sort_by_keys(self) -> Arranged<Self, ByComparator<PairOrder<K, V>>>
    where
        K: Ord,
    {
        Arranged::new(self, ByComparator(compare_keys::<K, V> as PairOrder<K, V>))
    }

    fn sort_by_values(self) -> Arranged<Self, ByComparator<PairOrder<K, V>>>
    where
        V: Ord,
    {
        Arranged::new(self, ByComparator(compare_values::<K, V> as PairOrder<K, V>))
    }

    fn sort_comparing_keys<F>(self, compare: F) -> Arranged<Self, KeyComparator<F>>
    where
        F: FnMut(&K, &K) -> Ordering + Clone,
    {
        Arranged::new(self, KeyComparator(compare))
    }

    fn sort_comparing_values<F>(self, compare: F) -> Arranged<Self, ValueComparator<F>>
    where
        F: FnMut(&V, &V) -> Ordering + Clone,
    {
        Arranged::new(self, ValueComparator(compare))
    }

    fn append_pair(self, key: K, value: V) -> Chain<Self, FromVec<(K, V)>> {
        Chain {
            a: self,
            b: from_vec(vec![(key, value)]),
        }
    }

    fn prepend_pair(self, key: K, value: V) -> Chain<FromVec<(K, V)>, Self> {
        Chain {
            a: from_vec(vec![(key, value)]),
            b: self,
        }
    }

    // ================================
    // Terminal operations
    // ================================

    fn for_each_pair<F>(&self, mut f: F)
    where
        F: FnMut(K, V),
    {
        self.iter().for_each(|(k, v)| f(k, v))
    }

    /// Value of the first pair with `key`.
    fn get(&self, key: &K) -> Optional<V>
    where
        K: PartialEq,
    {
        self.iter().find(|(k, _)| k == key).map(value_of).into()
    }

    fn find_by_key<F>(&self, mut predicate: F) -> Optional<(K, V)>
    where
        F: FnMut(&K) -> bool,
    {
        self.iter().find(|(k, _)| predicate(k)).into()
    }

    fn find_by_value<F>(&self, mut predicate: F) -> Optional<(K, V)>
    where
        F: FnMut(&V) -> bool,
    {
        self.iter().find(|(_, v)| predicate(v)).into()
    }

    fn contains_key(&self, key: &K) -> bool
    where
        K: PartialEq,
    {
        self.iter().any(|(k, _)| k == *key)
    }

    fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.iter().any(|(_, v)| v == *value)
    }

    fn not_contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        !self.contains_value(value)
    }

    fn contains_pair(&self, key: &K, value: &V) -> bool
    where
        K: PartialEq,
        V: PartialEq,
    {
        self.iter().any(|(k, v)| k == *key && v == *value)
    }

    fn not_contains_pair(&self, key: &K, value: &V) -> bool
    where
        K: PartialEq,
        V: PartialEq,
    {
        !self.contains_pair(key, value)
    }

    /// Whether every one of `values` occurs on the value channel.
    fn contains_all_values(&self, values: &[V]) -> bool
    where
        V: PartialEq,
    {
        let mut found = vec![false; values.len()];
        let mut missing = values.len();
        if missing == 0 {
            return true;
        }
        for (_, v) in self.iter() {
            for (position, wanted) in values.iter().enumerate() {
                if !found[position] && *wanted == v {
                    found[position] = true;
                    missing -= 1;
                }
            }
            if missing == 0 {
                return true;
            }
        }
        false
    }

    /// Collect into a map; later pairs overwrite earlier ones with the same key.
    fn to_map(&self) -> HashMap<K, V>
    where
        K: Eq + Hash,
    {
        self.iter().collect()
    }

    /// Insert every pair into `map`, last write wins.
    fn into_map(&self, map: &mut HashMap<K, V>)
    where
        K: Eq + Hash,
    {
        map.extend(self.iter())
    }

    /// Left fold over pairs seeded with `initial`.
    fn reduce_pairs<A, F>(&self, initial: A, mut f: F) -> A
    where
        F: FnMut(A, K, V) -> A,
    {
        self.iter().fold(initial, |acc, (k, v)| f(acc, k, v))
    }

    /// Right fold over pairs seeded with `initial`. Buffers the sequence first.
    fn reduce_pairs_right<A, F>(&self, initial: A, mut f: F) -> A
    where
        F: FnMut(A, K, V) -> A,
    {
        let pairs: Vec<(K, V)> = self.iter().collect();
        pairs.into_iter().rev().fold(initial, |acc, (k, v)| f(acc, k, v))
    }

    /// Fold the values, seeded with the first value; the first key is dropped.
    fn fold_values<F>(&self, f: F) -> Optional<V>
    where
        F: FnMut(V, K, V) -> V,
    {
        fold_channel(self.iter(), value_of, f)
    }

    /// Fold the values from the right, seeded with the last value.
    fn fold_values_right<F>(&self, f: F) -> Optional<V>
    where
        F: FnMut(V, K, V) -> V,
    {
        let pairs: Vec<(K, V)> = self.iter().collect();
        fold_channel(pairs.into_iter().rev(), value_of, f)
    }

    /// Fold the keys, seeded with the first key; the first value is dropped.
    fn fold_keys<F>(&self, f: F) -> Optional<K>
    where
        F: FnMut(K, K, V) -> K,
    {
        fold_channel(self.iter(), key_of, f)
    }

    /// Fold the keys from the right, seeded with the last key.
    fn fold_keys_right<F>(&self, f: F) -> Optional<K>
    where
        F: FnMut(K, K, V) -> K,
    {
        let pairs: Vec<(K, V)> = self.iter().collect();
        fold_channel(pairs.into_iter().rev(), key_of, f)
    }

    fn max_key(&self) -> Optional<K>
    where
        K: PartialOrd,
    {
        extreme(self.iter().map(key_of), |candidate, current| candidate > current)
    }

    fn min_key(&self) -> Optional<K>
    where
        K: PartialOrd,
    {
        extreme(self.iter().map(key_of), |candidate, current| candidate < current)
    }

    fn max_value(&self) -> Optional<V>
    where
        V: PartialOrd,
    {
        extreme(self.iter().map(value_of), |candidate, current| candidate > current)
    }

    fn min_value(&self) -> Optional<V>
    where
        V: PartialOrd,
    {
        extreme(self.iter().map(value_of), |candidate, current| candidate < current)
    }
}

impl<K, V, S> PairSeqExt<K, V> for S where S: Seq<Item = (K, V)> + Sized {}

fn fold_channel<I, K, V, A, F>(mut pairs: I, seed: fn((K, V)) -> A, mut f: F) -> Optional<A>
where
    I: Iterator<Item = (K, V)>,
    F: FnMut(A, K, V) -> A,
{
    let first = match pairs.next() {
        Some(pair) => seed(pair),
        None => return Optional::empty(),
    };
    Optional::of(pairs.fold(first, |acc, (k, v)| f(acc, k, v)))
}
