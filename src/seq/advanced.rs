//! Advanced sequence combinators: flat_map, flatten, zip, concat, union, cycle, uniq, with_index

use std::collections::HashSet;
use std::hash::Hash;

use super::constructors::{from_vec, FromVec};
use super::core::Seq;

// ================================
// FlatMap
// ================================

#[derive(Clone)]
pub struct FlatMap<S, F> {
    pub(crate) seq: S,
    pub(crate) f: F,
}

impl<S, F, U> Seq for FlatMap<S, F>
where
    S: Seq,
    F: FnMut(S::Item) -> U + Clone,
    U: Seq,
{
    type Item = U::Item;
    type Iter = FlatMapIter<S::Iter, F, U>;

    fn iter(&self) -> Self::Iter {
        FlatMapIter {
            outer: self.seq.iter(),
            f: self.f.clone(),
            inner: None,
        }
    }
}

pub struct FlatMapIter<I, F, U: Seq> {
    outer: I,
    f: F,
    inner: Option<U::Iter>,
}

impl<I, F, U> Iterator for FlatMapIter<I, F, U>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
    U: Seq,
{
    type Item = U::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // First drain the current sub-sequence
            if let Some(inner) = &mut self.inner {
                if let Some(item) = inner.next() {
                    return Some(item);
                }
                self.inner = None;
            }

            // Then open the next one
            let item = self.outer.next()?;
            self.inner = Some((self.f)(item).iter());
        }
    }
}

// ================================
// Flatten
// ================================

pub(crate) fn start_traversal<S: Seq>(seq: S) -> S::Iter {
    seq.iter()
}

#[derive(Clone)]
pub struct Flatten<S> {
    pub(crate) seq: S,
}

impl<S> Seq for Flatten<S>
where
    S: Seq,
    S::Item: Seq,
{
    type Item = <S::Item as Seq>::Item;
    type Iter = std::iter::FlatMap<
        S::Iter,
        <S::Item as Seq>::Iter,
        fn(S::Item) -> <S::Item as Seq>::Iter,
    >;

    fn iter(&self) -> Self::Iter {
        self.seq
            .iter()
            .flat_map(start_traversal::<S::Item> as fn(S::Item) -> <S::Item as Seq>::Iter)
    }
}

#[derive(Clone)]
pub struct FlattenSlices<S> {
    pub(crate) seq: S,
}

impl<S> Seq for FlattenSlices<S>
where
    S: Seq,
    S::Item: IntoIterator,
{
    type Item = <S::Item as IntoIterator>::Item;
    type Iter = std::iter::Flatten<S::Iter>;

    fn iter(&self) -> Self::Iter {
        self.seq.iter().flatten()
    }
}

// ================================
// Zip / Chain / WithIndex
// ================================

#[derive(Clone)]
pub struct Zip<A, B> {
    pub(crate) a: A,
    pub(crate) b: B,
}

impl<A: Seq, B: Seq> Seq for Zip<A, B> {
    type Item = (A::Item, B::Item);
    type Iter = std::iter::Zip<A::Iter, B::Iter>;

    fn iter(&self) -> Self::Iter {
        self.a.iter().zip(self.b.iter())
    }
}

#[derive(Clone)]
pub struct Chain<A, B> {
    pub(crate) a: A,
    pub(crate) b: B,
}

impl<A, B> Seq for Chain<A, B>
where
    A: Seq,
    B: Seq<Item = A::Item>,
{
    type Item = A::Item;
    type Iter = std::iter::Chain<A::Iter, B::Iter>;

    fn iter(&self) -> Self::Iter {
        self.a.iter().chain(self.b.iter())
    }
}

#[derive(Clone)]
pub struct WithIndex<S> {
    pub(crate) seq: S,
}

impl<S: Seq> Seq for WithIndex<S> {
    type Item = (usize, S::Item);
    type Iter = std::iter::Enumerate<S::Iter>;

    fn iter(&self) -> Self::Iter {
        self.seq.iter().enumerate()
    }
}

// ================================
// Cycle
// ================================

#[derive(Clone)]
pub struct Cycle<S> {
    pub(crate) seq: S,
    pub(crate) times: Option<usize>,
}

impl<S: Seq + Clone> Seq for Cycle<S> {
    type Item = S::Item;
    type Iter = CycleIter<S>;

    fn iter(&self) -> Self::Iter {
        CycleIter {
            seq: self.seq.clone(),
            current: self.seq.iter(),
            passes_left: self.times,
            yielded: false,
        }
    }
}

pub struct CycleIter<S: Seq> {
    seq: S,
    current: S::Iter,
    passes_left: Option<usize>,
    yielded: bool,
}

impl<S: Seq> Iterator for CycleIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.passes_left == Some(0) {
                return None;
            }
            if let Some(item) = self.current.next() {
                self.yielded = true;
                return Some(item);
            }
            // an empty pass would otherwise spin forever
            if !self.yielded {
                return None;
            }
            if let Some(left) = &mut self.passes_left {
                *left -= 1;
                if *left == 0 {
                    return None;
                }
            }
            self.yielded = false;
            self.current = self.seq.iter();
        }
    }
}

// ================================
// Uniq
// ================================

#[derive(Clone)]
pub struct Uniq<S> {
    pub(crate) seq: S,
}

impl<S> Seq for Uniq<S>
where
    S: Seq,
    S::Item: Eq + Hash + Clone,
{
    type Item = S::Item;
    type Iter = UniqIter<S::Iter>;

    fn iter(&self) -> Self::Iter {
        UniqIter {
            inner: self.seq.iter(),
            seen: HashSet::new(),
        }
    }
}

pub struct UniqIter<I: Iterator> {
    inner: I,
    seen: HashSet<I::Item>,
}

impl<I> Iterator for UniqIter<I>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let seen = &mut self.seen;
        self.inner.find(|item| seen.insert(item.clone()))
    }
}

#[derive(Clone)]
pub struct UniqBy<S, F> {
    pub(crate) seq: S,
    pub(crate) key: F,
}

impl<S, F, K> Seq for UniqBy<S, F>
where
    S: Seq,
    F: FnMut(&S::Item) -> K + Clone,
    K: Eq + Hash,
{
    type Item = S::Item;
    type Iter = UniqByIter<S::Iter, F, K>;

    fn iter(&self) -> Self::Iter {
        UniqByIter {
            inner: self.seq.iter(),
            key: self.key.clone(),
            seen: HashSet::new(),
        }
    }
}

pub struct UniqByIter<I, F, K> {
    inner: I,
    key: F,
    seen: HashSet<K>,
}

impl<I, F, K> Iterator for UniqByIter<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Eq + Hash,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let Self { inner, key, seen } = self;
        inner.find(|item| seen.insert(key(item)))
    }
}

// ================================
// Extension trait
// ================================

pub trait AdvancedSeqExt: Seq + Sized {
    /// Map each element to a sub-sequence and concatenate them in order.
    fn flat_map<U, F>(self, f: F) -> FlatMap<Self, F>
    where
        F: FnMut(Self::Item) -> U + Clone,
        U: Seq,
    {
        FlatMap { seq: self, f }
    }

    /// Collapse a sequence of sequences by one level.
    fn flatten(self) -> Flatten<Self>
    where
        Self::Item: Seq,
    {
        Flatten { seq: self }
    }

    /// Collapse a sequence of collections (vectors, arrays, options) by one level.
    fn flatten_slices(self) -> FlattenSlices<Self>
    where
        Self::Item: IntoIterator,
    {
        FlattenSlices { seq: self }
    }

    /// Pair elements positionally, stopping at the shorter sequence.
    fn zip<B: Seq>(self, other: B) -> Zip<Self, B> {
        Zip { a: self, b: other }
    }

    /// Yield all of `self`, then all of `other`.
    fn concat<B>(self, other: B) -> Chain<Self, B>
    where
        B: Seq<Item = Self::Item>,
    {
        Chain { a: self, b: other }
    }

    /// Alias for [`AdvancedSeqExt::concat`]; duplicates are kept.
    fn union_all<B>(self, other: B) -> Chain<Self, B>
    where
        B: Seq<Item = Self::Item>,
    {
        self.concat(other)
    }

    /// Concatenate and drop duplicates across both inputs, first occurrence wins.
    fn union<B>(self, other: B) -> Uniq<Chain<Self, B>>
    where
        B: Seq<Item = Self::Item>,
        Self::Item: Eq + Hash + Clone,
    {
        Uniq {
            seq: self.concat(other),
        }
    }

    /// Yield `items` after the sequence.
    fn append<I>(self, items: I) -> Chain<Self, FromVec<Self::Item>>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        Chain {
            a: self,
            b: from_vec(items.into_iter().collect()),
        }
    }

    /// Yield `items` before the sequence.
    fn prepend<I>(self, items: I) -> Chain<FromVec<Self::Item>, Self>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        Chain {
            a: from_vec(items.into_iter().collect()),
            b: self,
        }
    }

    /// Repeat the sequence forever. Bound it with `take`.
    ///
    /// An empty sequence cycles to an empty sequence.
    fn cycle(self) -> Cycle<Self>
    where
        Self: Clone,
    {
        Cycle {
            seq: self,
            times: None,
        }
    }

    /// Repeat the sequence `times` times.
    fn cycle_times(self, times: usize) -> Cycle<Self>
    where
        Self: Clone,
    {
        Cycle {
            seq: self,
            times: Some(times),
        }
    }

    /// Pair each element with its 0-based position.
    fn with_index(self) -> WithIndex<Self> {
        WithIndex { seq: self }
    }

    /// Drop repeated elements, first occurrence wins.
    fn uniq(self) -> Uniq<Self>
    where
        Self::Item: Eq + Hash + Clone,
    {
        Uniq { seq: self }
    }

    /// Alias for [`AdvancedSeqExt::uniq`].
    fn distinct(self) -> Uniq<Self>
    where
        Self::Item: Eq + Hash + Clone,
    {
        self.uniq()
    }

    /// Drop elements whose derived key was already seen.
    fn uniq_by<K, F>(self, key: F) -> UniqBy<Self, F>
    where
        F: FnMut(&Self::Item) -> K + Clone,
        K: Eq + Hash,
    {
        UniqBy { seq: self, key }
    }
}

impl<S: Seq + Sized> AdvancedSeqExt for S {}

/// Concatenate any number of sequences of the same type.
pub fn concat<S>(seqs: Vec<S>) -> Flatten<FromVec<S>>
where
    S: Seq + Clone,
{
    Flatten {
        seq: from_vec(seqs),
    }
}
