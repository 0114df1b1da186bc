//! Core sequence trait and the basic adapters
//!
//! A [`Seq`] is a re-traversable, pull-based producer: every call to
//! [`Seq::iter`] starts a fresh traversal that re-runs the whole adapter chain.
//! Adapters wrap their upstream and do no work until a traversal pulls from them.

use std::rc::Rc;

/// A lazy, re-traversable sequence of values.
///
/// Implementors hold the recipe for producing elements, never a cursor.
/// Each traversal owns its own iterator, so stopping one early never
/// affects the next.
pub trait Seq {
    type Item;
    type Iter: Iterator<Item = Self::Item>;

    /// Start a new traversal.
    fn iter(&self) -> Self::Iter;
}

impl<S: Seq + ?Sized> Seq for &S {
    type Item = S::Item;
    type Iter = S::Iter;

    fn iter(&self) -> Self::Iter {
        (**self).iter()
    }
}

/// Extension trait providing the basic sequence adapters
pub trait SeqExt: Seq + Sized {
    /// Transform each element 1:1, preserving order and count.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> U + Clone,
    {
        Map { seq: self, f }
    }

    /// Alias for [`SeqExt::map`].
    fn select<U, F>(self, f: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> U + Clone,
    {
        self.map(f)
    }

    /// Keep the elements satisfying `predicate`.
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        F: FnMut(&Self::Item) -> bool + Clone,
    {
        Filter { seq: self, predicate }
    }

    /// Alias for [`SeqExt::filter`].
    fn where_<F>(self, predicate: F) -> Filter<Self, F>
    where
        F: FnMut(&Self::Item) -> bool + Clone,
    {
        self.filter(predicate)
    }

    /// First `n` elements, or fewer if the sequence is shorter.
    fn take(self, n: usize) -> Take<Self> {
        Take { seq: self, n }
    }

    /// Alias for [`SeqExt::take`].
    fn limit(self, n: usize) -> Take<Self> {
        self.take(n)
    }

    /// Drop the first `n` elements and yield the rest.
    fn skip(self, n: usize) -> Skip<Self> {
        Skip { seq: self, n }
    }

    /// Alias for [`SeqExt::skip`].
    fn offset(self, n: usize) -> Skip<Self> {
        self.skip(n)
    }

    /// Call `f` on each element as it passes through.
    fn tap<F>(self, f: F) -> Tap<Self, F>
    where
        F: FnMut(&Self::Item) + Clone,
    {
        Tap { seq: self, f }
    }

    /// Alias for [`SeqExt::tap`].
    fn each<F>(self, f: F) -> Tap<Self, F>
    where
        F: FnMut(&Self::Item) + Clone,
    {
        self.tap(f)
    }

    /// Erase the concrete adapter type.
    fn boxed<'a>(self) -> BoxSeq<'a, Self::Item>
    where
        Self: 'a,
        Self::Iter: 'a,
    {
        BoxSeq {
            inner: Rc::new(self),
        }
    }
}

impl<S: Seq + Sized> SeqExt for S {}

// ================================
// Map
// ================================

#[derive(Clone)]
pub struct Map<S, F> {
    pub(crate) seq: S,
    pub(crate) f: F,
}

impl<S, F, U> Seq for Map<S, F>
where
    S: Seq,
    F: FnMut(S::Item) -> U + Clone,
{
    type Item = U;
    type Iter = std::iter::Map<S::Iter, F>;

    fn iter(&self) -> Self::Iter {
        self.seq.iter().map(self.f.clone())
    }
}

// ================================
// Filter
// ================================

#[derive(Clone)]
pub struct Filter<S, F> {
    pub(crate) seq: S,
    pub(crate) predicate: F,
}

impl<S, F> Seq for Filter<S, F>
where
    S: Seq,
    F: FnMut(&S::Item) -> bool + Clone,
{
    type Item = S::Item;
    type Iter = std::iter::Filter<S::Iter, F>;

    fn iter(&self) -> Self::Iter {
        self.seq.iter().filter(self.predicate.clone())
    }
}

// ================================
// Take / Skip
// ================================

#[derive(Clone)]
pub struct Take<S> {
    pub(crate) seq: S,
    pub(crate) n: usize,
}

impl<S: Seq> Seq for Take<S> {
    type Item = S::Item;
    type Iter = std::iter::Take<S::Iter>;

    fn iter(&self) -> Self::Iter {
        self.seq.iter().take(self.n)
    }
}

#[derive(Clone)]
pub struct Skip<S> {
    pub(crate) seq: S,
    pub(crate) n: usize,
}

impl<S: Seq> Seq for Skip<S> {
    type Item = S::Item;
    type Iter = std::iter::Skip<S::Iter>;

    fn iter(&self) -> Self::Iter {
        self.seq.iter().skip(self.n)
    }
}

// ================================
// Tap
// ================================

#[derive(Clone)]
pub struct Tap<S, F> {
    pub(crate) seq: S,
    pub(crate) f: F,
}

impl<S, F> Seq for Tap<S, F>
where
    S: Seq,
    F: FnMut(&S::Item) + Clone,
{
    type Item = S::Item;
    type Iter = std::iter::Inspect<S::Iter, F>;

    fn iter(&self) -> Self::Iter {
        self.seq.iter().inspect(self.f.clone())
    }
}

// ================================
// BoxSeq
// ================================

trait DynSeq<'a, T> {
    fn dyn_iter(&self) -> Box<dyn Iterator<Item = T> + 'a>;
}

impl<'a, S> DynSeq<'a, S::Item> for S
where
    S: Seq,
    S::Iter: 'a,
{
    fn dyn_iter(&self) -> Box<dyn Iterator<Item = S::Item> + 'a> {
        Box::new(self.iter())
    }
}

/// A type-erased sequence, for storing heterogeneous adapter chains behind
/// one type. Cloning shares the underlying recipe.
pub struct BoxSeq<'a, T> {
    inner: Rc<dyn DynSeq<'a, T> + 'a>,
}

impl<'a, T> Clone for BoxSeq<'a, T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<'a, T> Seq for BoxSeq<'a, T> {
    type Item = T;
    type Iter = Box<dyn Iterator<Item = T> + 'a>;

    fn iter(&self) -> Self::Iter {
        self.inner.dyn_iter()
    }
}
