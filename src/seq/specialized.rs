//! Specialized sequence combinators: reverse, sort, partition, group_by,
//! take_while, skip_while, take_until, skip_until
//!
//! Order-redefining adapters cannot work from a prefix, so they drain the
//! upstream into a buffer on the first pull of each traversal. Building the
//! adapter itself never touches the upstream.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use super::constructors::{from_vec, FromVec};
use super::core::Seq;

// ================================
// Arranged
// ================================

/// A whole-sequence rearrangement applied to a fully buffered traversal.
pub trait Arrangement<T> {
    type Output;

    fn arrange(&mut self, items: Vec<T>) -> Vec<Self::Output>;
}

/// A sequence whose order or shape is decided by an [`Arrangement`].
#[derive(Clone)]
pub struct Arranged<S, A> {
    pub(crate) seq: S,
    pub(crate) arrangement: A,
}

impl<S, A> Arranged<S, A> {
    pub(crate) fn new(seq: S, arrangement: A) -> Self {
        Self { seq, arrangement }
    }
}

impl<S, A> Seq for Arranged<S, A>
where
    S: Seq,
    A: Arrangement<S::Item> + Clone,
{
    type Item = A::Output;
    type Iter = Deferred<S::Iter, A>;

    fn iter(&self) -> Self::Iter {
        Deferred {
            state: DeferredState::Pending(self.seq.iter(), self.arrangement.clone()),
        }
    }
}

/// Traversal of an [`Arranged`] sequence. Buffers the upstream on first pull.
pub struct Deferred<I, A>
where
    I: Iterator,
    A: Arrangement<I::Item>,
{
    state: DeferredState<I, A, A::Output>,
}

enum DeferredState<I, A, O> {
    Pending(I, A),
    Ready(std::vec::IntoIter<O>),
}

impl<I, A> Iterator for Deferred<I, A>
where
    I: Iterator,
    A: Arrangement<I::Item>,
{
    type Item = A::Output;

    fn next(&mut self) -> Option<Self::Item> {
        if let DeferredState::Pending(..) = self.state {
            let drained = std::mem::replace(
                &mut self.state,
                DeferredState::Ready(Vec::new().into_iter()),
            );
            if let DeferredState::Pending(upstream, mut arrangement) = drained {
                let items: Vec<I::Item> = upstream.collect();
                self.state = DeferredState::Ready(arrangement.arrange(items).into_iter());
            }
        }
        match &mut self.state {
            DeferredState::Ready(items) => items.next(),
            DeferredState::Pending(..) => None,
        }
    }
}

// ================================
// Arrangements
// ================================

#[derive(Clone, Copy, Debug, Default)]
pub struct Reversed;

impl<T> Arrangement<T> for Reversed {
    type Output = T;

    fn arrange(&mut self, mut items: Vec<T>) -> Vec<T> {
        items.reverse();
        items
    }
}

/// Stable sort by the natural order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural;

impl<T: Ord> Arrangement<T> for Natural {
    type Output = T;

    fn arrange(&mut self, mut items: Vec<T>) -> Vec<T> {
        items.sort();
        items
    }
}

/// Stable sort by a derived key.
#[derive(Clone)]
pub struct ByKey<F>(pub(crate) F);

impl<T, K, F> Arrangement<T> for ByKey<F>
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    type Output = T;

    fn arrange(&mut self, mut items: Vec<T>) -> Vec<T> {
        items.sort_by_key(|item| (self.0)(item));
        items
    }
}

/// Stable sort by a comparator.
#[derive(Clone)]
pub struct ByComparator<F>(pub(crate) F);

impl<T, F> Arrangement<T> for ByComparator<F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    type Output = T;

    fn arrange(&mut self, mut items: Vec<T>) -> Vec<T> {
        items.sort_by(|a, b| (self.0)(a, b));
        items
    }
}

/// Group elements sharing a key, groups ordered by first occurrence of their key.
pub(crate) fn group_in_order<T, K, F>(items: Vec<T>, mut key: F) -> Vec<(K, Vec<T>)>
where
    F: FnMut(&T) -> K,
    K: Eq + Hash + Clone,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();
    for item in items {
        let k = key(&item);
        match index.get(&k) {
            Some(&position) => groups[position].1.push(item),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, vec![item]));
            }
        }
    }
    groups
}

#[derive(Clone)]
pub struct Grouping<F>(pub(crate) F);

impl<T, K, F> Arrangement<T> for Grouping<F>
where
    F: FnMut(&T) -> K,
    K: Eq + Hash + Clone,
{
    type Output = (K, FromVec<T>);

    fn arrange(&mut self, items: Vec<T>) -> Vec<Self::Output> {
        group_in_order(items, &mut self.0)
            .into_iter()
            .map(|(k, group)| (k, from_vec(group)))
            .collect()
    }
}

#[derive(Clone)]
pub struct Partitioning<F>(pub(crate) F);

impl<T, K, F> Arrangement<T> for Partitioning<F>
where
    F: FnMut(&T) -> K,
    K: Eq + Hash + Clone,
{
    type Output = FromVec<T>;

    fn arrange(&mut self, items: Vec<T>) -> Vec<Self::Output> {
        group_in_order(items, &mut self.0)
            .into_iter()
            .map(|(_, group)| from_vec(group))
            .collect()
    }
}

// ================================
// Chunks
// ================================

/// Consecutive fixed-size groups; the last one may be shorter.
#[derive(Clone)]
pub struct Chunks<S> {
    pub(crate) seq: S,
    pub(crate) size: usize,
}

impl<S: Seq> Seq for Chunks<S> {
    type Item = FromVec<S::Item>;
    type Iter = ChunksIter<S::Iter>;

    fn iter(&self) -> Self::Iter {
        ChunksIter {
            inner: self.seq.iter(),
            size: self.size,
        }
    }
}

pub struct ChunksIter<I> {
    inner: I,
    size: usize,
}

impl<I: Iterator> Iterator for ChunksIter<I> {
    type Item = FromVec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk: Vec<I::Item> = self.inner.by_ref().take(self.size).collect();
        if chunk.is_empty() {
            None
        } else {
            Some(from_vec(chunk))
        }
    }
}

// ================================
// TakeWhile / SkipWhile / TakeUntil / SkipUntil
// ================================

#[derive(Clone)]
pub struct TakeWhile<S, F> {
    pub(crate) seq: S,
    pub(crate) predicate: F,
}

impl<S, F> Seq for TakeWhile<S, F>
where
    S: Seq,
    F: FnMut(&S::Item) -> bool + Clone,
{
    type Item = S::Item;
    type Iter = std::iter::TakeWhile<S::Iter, F>;

    fn iter(&self) -> Self::Iter {
        self.seq.iter().take_while(self.predicate.clone())
    }
}

#[derive(Clone)]
pub struct SkipWhile<S, F> {
    pub(crate) seq: S,
    pub(crate) predicate: F,
}

impl<S, F> Seq for SkipWhile<S, F>
where
    S: Seq,
    F: FnMut(&S::Item) -> bool + Clone,
{
    type Item = S::Item;
    type Iter = std::iter::SkipWhile<S::Iter, F>;

    fn iter(&self) -> Self::Iter {
        self.seq.iter().skip_while(self.predicate.clone())
    }
}

#[derive(Clone)]
pub struct TakeUntil<S, F> {
    pub(crate) seq: S,
    pub(crate) predicate: F,
}

impl<S, F> Seq for TakeUntil<S, F>
where
    S: Seq,
    F: FnMut(&S::Item) -> bool + Clone,
{
    type Item = S::Item;
    type Iter = TakeUntilIter<S::Iter, F>;

    fn iter(&self) -> Self::Iter {
        TakeUntilIter {
            inner: self.seq.iter(),
            predicate: self.predicate.clone(),
            done: false,
        }
    }
}

pub struct TakeUntilIter<I, F> {
    inner: I,
    predicate: F,
    done: bool,
}

impl<I, F> Iterator for TakeUntilIter<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.inner.next()?;
        if (self.predicate)(&item) {
            self.done = true;
            None
        } else {
            Some(item)
        }
    }
}

#[derive(Clone)]
pub struct SkipUntil<S, F> {
    pub(crate) seq: S,
    pub(crate) predicate: F,
}

impl<S, F> Seq for SkipUntil<S, F>
where
    S: Seq,
    F: FnMut(&S::Item) -> bool + Clone,
{
    type Item = S::Item;
    type Iter = SkipUntilIter<S::Iter, F>;

    fn iter(&self) -> Self::Iter {
        SkipUntilIter {
            inner: self.seq.iter(),
            predicate: self.predicate.clone(),
            skipping: true,
        }
    }
}

pub struct SkipUntilIter<I, F> {
    inner: I,
    predicate: F,
    skipping: bool,
}

impl<I, F> Iterator for SkipUntilIter<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.skipping {
            self.skipping = false;
            let predicate = &mut self.predicate;
            return self.inner.find(|item| predicate(item));
        }
        self.inner.next()
    }
}

// ================================
// Extension trait
// ================================

pub trait SpecializedSeqExt: Seq + Sized {
    /// Yield the elements in reverse traversal order.
    fn reverse(self) -> Arranged<Self, Reversed> {
        Arranged::new(self, Reversed)
    }

    /// Stable sort by natural order.
    fn sort(self) -> Arranged<Self, Natural>
    where
        Self::Item: Ord,
    {
        Arranged::new(self, Natural)
    }

    /// Stable sort by the key derived from each element.
    fn sort_by<K, F>(self, key: F) -> Arranged<Self, ByKey<F>>
    where
        F: FnMut(&Self::Item) -> K + Clone,
        K: Ord,
    {
        Arranged::new(self, ByKey(key))
    }

    /// Stable sort with a custom comparator.
    fn sort_comparing<F>(self, compare: F) -> Arranged<Self, ByComparator<F>>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering + Clone,
    {
        Arranged::new(self, ByComparator(compare))
    }

    /// Split into consecutive groups of `size` elements; the last may be shorter.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[track_caller]
    fn partition(self, size: usize) -> Chunks<Self> {
        assert!(size > 0, "partition size must be positive");
        Chunks { seq: self, size }
    }

    /// Alias for [`SpecializedSeqExt::partition`].
    #[track_caller]
    fn chunk(self, size: usize) -> Chunks<Self> {
        self.partition(size)
    }

    /// Split into groups of elements sharing a key, in first-occurrence order.
    fn partition_by<K, F>(self, key: F) -> Arranged<Self, Partitioning<F>>
    where
        F: FnMut(&Self::Item) -> K + Clone,
        K: Eq + Hash + Clone,
    {
        Arranged::new(self, Partitioning(key))
    }

    /// Group elements by key into `(key, group)` pairs, in first-occurrence order.
    fn group_by<K, F>(self, key: F) -> Arranged<Self, Grouping<F>>
    where
        F: FnMut(&Self::Item) -> K + Clone,
        K: Eq + Hash + Clone,
    {
        Arranged::new(self, Grouping(key))
    }

    /// Yield elements while `predicate` holds; the first failing element is not yielded.
    fn take_while<F>(self, predicate: F) -> TakeWhile<Self, F>
    where
        F: FnMut(&Self::Item) -> bool + Clone,
    {
        TakeWhile { seq: self, predicate }
    }

    /// Drop elements while `predicate` holds, then yield everything.
    fn skip_while<F>(self, predicate: F) -> SkipWhile<Self, F>
    where
        F: FnMut(&Self::Item) -> bool + Clone,
    {
        SkipWhile { seq: self, predicate }
    }

    /// Yield elements until `predicate` first holds; that element is not yielded.
    fn take_until<F>(self, predicate: F) -> TakeUntil<Self, F>
    where
        F: FnMut(&Self::Item) -> bool + Clone,
    {
        TakeUntil { seq: self, predicate }
    }

    /// Drop elements until `predicate` first holds; that element is yielded.
    fn skip_until<F>(self, predicate: F) -> SkipUntil<Self, F>
    where
        F: FnMut(&Self::Item) -> bool + Clone,
    {
        SkipUntil { seq: self, predicate }
    }
}

impl<S: Seq + Sized> SpecializedSeqExt for S {}
