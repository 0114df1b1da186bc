//! Adapters and terminal operations for sequences of `Result<T, E>`
//!
//! Every adapter's traversal is wrapped in [`StopOnError`], so once an `Err`
//! has been yielded nothing further is pulled from upstream.

use crate::optional::Optional;
use crate::seq::advanced::start_traversal;
use crate::seq::constructors::{self, FromVec};
use crate::seq::core::Seq;

use super::{from_seq, Condition, Lift, Partial, StopOnError, TryMapper, TryPredicate};

// ================================
// TryMap
// ================================

#[derive(Clone)]
pub struct TryMap<S, M> {
    pub(crate) seq: S,
    pub(crate) mapper: M,
}

impl<S, M, T, E> Seq for TryMap<S, M>
where
    S: Seq<Item = Result<T, E>>,
    M: TryMapper<T, E> + Clone,
{
    type Item = Result<M::Output, E>;
    type Iter = StopOnError<TryMapIter<S::Iter, M>>;

    fn iter(&self) -> Self::Iter {
        StopOnError::new(TryMapIter {
            inner: self.seq.iter(),
            mapper: self.mapper.clone(),
        })
    }
}

pub struct TryMapIter<I, M> {
    inner: I,
    mapper: M,
}

impl<I, M, T, E> Iterator for TryMapIter<I, M>
where
    I: Iterator<Item = Result<T, E>>,
    M: TryMapper<T, E>,
{
    type Item = Result<M::Output, E>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.inner.next()? {
            Ok(item) => Some(self.mapper.apply(item)),
            Err(err) => Some(Err(err)),
        }
    }
}

// ================================
// TryFilter
// ================================

#[derive(Clone)]
pub struct TryFilter<S, P> {
    pub(crate) seq: S,
    pub(crate) predicate: P,
}

impl<S, P, T, E> Seq for TryFilter<S, P>
where
    S: Seq<Item = Result<T, E>>,
    P: TryPredicate<T, E> + Clone,
{
    type Item = Result<T, E>;
    type Iter = StopOnError<TryFilterIter<S::Iter, P>>;

    fn iter(&self) -> Self::Iter {
        StopOnError::new(TryFilterIter {
            inner: self.seq.iter(),
            predicate: self.predicate.clone(),
        })
    }
}

pub struct TryFilterIter<I, P> {
    inner: I,
    predicate: P,
}

impl<I, P, T, E> Iterator for TryFilterIter<I, P>
where
    I: Iterator<Item = Result<T, E>>,
    P: TryPredicate<T, E>,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = match self.inner.next()? {
                Ok(item) => item,
                Err(err) => return Some(Err(err)),
            };
            match self.predicate.test(&item) {
                Ok(true) => return Some(Ok(item)),
                Ok(false) => continue,
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

// ================================
// TryFlatten
// ================================

/// Flattens `Ok` sub-sequences; `T` must itself be a [`Seq`].
#[derive(Clone)]
pub struct TryFlatten<S> {
    pub(crate) seq: S,
}

impl<S, T, E> Seq for TryFlatten<S>
where
    S: Seq<Item = Result<T, E>>,
    T: Seq,
{
    type Item = Result<T::Item, E>;
    type Iter = StopOnError<TryFlattenIter<S::Iter, T, T::Iter>>;

    fn iter(&self) -> Self::Iter {
        StopOnError::new(TryFlattenIter {
            outer: self.seq.iter(),
            open: start_traversal::<T> as fn(T) -> T::Iter,
            inner: None,
        })
    }
}

/// Flattens `Ok` collections such as vectors.
#[derive(Clone)]
pub struct TryFlattenSlices<S> {
    pub(crate) seq: S,
}

impl<S, T, E> Seq for TryFlattenSlices<S>
where
    S: Seq<Item = Result<T, E>>,
    T: IntoIterator,
{
    type Item = Result<T::Item, E>;
    type Iter = StopOnError<TryFlattenIter<S::Iter, T, T::IntoIter>>;

    fn iter(&self) -> Self::Iter {
        StopOnError::new(TryFlattenIter {
            outer: self.seq.iter(),
            open: <T as IntoIterator>::into_iter as fn(T) -> T::IntoIter,
            inner: None,
        })
    }
}

pub struct TryFlattenIter<I, T, J> {
    outer: I,
    open: fn(T) -> J,
    inner: Option<J>,
}

impl<I, T, J, E> Iterator for TryFlattenIter<I, T, J>
where
    I: Iterator<Item = Result<T, E>>,
    J: Iterator,
{
    type Item = Result<J::Item, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = &mut self.inner {
                if let Some(item) = inner.next() {
                    return Some(Ok(item));
                }
                self.inner = None;
            }
            match self.outer.next()? {
                Ok(group) => self.inner = Some((self.open)(group)),
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

// ================================
// TryTake / TrySkip
// ================================

#[derive(Clone)]
pub struct TryTake<S> {
    pub(crate) seq: S,
    pub(crate) n: usize,
}

impl<S, T, E> Seq for TryTake<S>
where
    S: Seq<Item = Result<T, E>>,
{
    type Item = Result<T, E>;
    type Iter = StopOnError<TryTakeIter<S::Iter>>;

    fn iter(&self) -> Self::Iter {
        StopOnError::new(TryTakeIter {
            inner: self.seq.iter(),
            remaining: self.n,
        })
    }
}

pub struct TryTakeIter<I> {
    inner: I,
    remaining: usize,
}

impl<I, T, E> Iterator for TryTakeIter<I>
where
    I: Iterator<Item = Result<T, E>>,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.inner.next()?;
        if item.is_ok() {
            self.remaining -= 1;
        }
        Some(item)
    }
}

#[derive(Clone)]
pub struct TrySkip<S> {
    pub(crate) seq: S,
    pub(crate) n: usize,
}

impl<S, T, E> Seq for TrySkip<S>
where
    S: Seq<Item = Result<T, E>>,
{
    type Item = Result<T, E>;
    type Iter = StopOnError<TrySkipIter<S::Iter>>;

    fn iter(&self) -> Self::Iter {
        StopOnError::new(TrySkipIter {
            inner: self.seq.iter(),
            remaining: self.n,
        })
    }
}

pub struct TrySkipIter<I> {
    inner: I,
    remaining: usize,
}

impl<I, T, E> Iterator for TrySkipIter<I>
where
    I: Iterator<Item = Result<T, E>>,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        // errors inside the skipped prefix still surface
        while self.remaining > 0 {
            match self.inner.next()? {
                Ok(_) => self.remaining -= 1,
                Err(err) => return Some(Err(err)),
            }
        }
        self.inner.next()
    }
}

// ================================
// TryTakeWhile / TryTakeUntil
// ================================

/// Takes `Ok` elements until the predicate result equals `stop_on`; the
/// boundary element is never yielded.
#[derive(Clone)]
pub struct TryTakeWhile<S, P> {
    pub(crate) seq: S,
    pub(crate) predicate: P,
    pub(crate) stop_on: bool,
}

impl<S, P, T, E> Seq for TryTakeWhile<S, P>
where
    S: Seq<Item = Result<T, E>>,
    P: TryPredicate<T, E> + Clone,
{
    type Item = Result<T, E>;
    type Iter = StopOnError<TryTakeWhileIter<S::Iter, P>>;

    fn iter(&self) -> Self::Iter {
        StopOnError::new(TryTakeWhileIter {
            inner: self.seq.iter(),
            predicate: self.predicate.clone(),
            stop_on: self.stop_on,
        })
    }
}

pub struct TryTakeWhileIter<I, P> {
    inner: I,
    predicate: P,
    stop_on: bool,
}

impl<I, P, T, E> Iterator for TryTakeWhileIter<I, P>
where
    I: Iterator<Item = Result<T, E>>,
    P: TryPredicate<T, E>,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = match self.inner.next()? {
            Ok(item) => item,
            Err(err) => return Some(Err(err)),
        };
        match self.predicate.test(&item) {
            Ok(hit) if hit == self.stop_on => None,
            Ok(_) => Some(Ok(item)),
            Err(err) => Some(Err(err)),
        }
    }
}

// ================================
// TryTap
// ================================

#[derive(Clone)]
pub struct TryTap<S, F> {
    pub(crate) seq: S,
    pub(crate) f: F,
}

impl<S, F, T, E> Seq for TryTap<S, F>
where
    S: Seq<Item = Result<T, E>>,
    F: FnMut(&T) + Clone,
{
    type Item = Result<T, E>;
    type Iter = StopOnError<TryTapIter<S::Iter, F>>;

    fn iter(&self) -> Self::Iter {
        StopOnError::new(TryTapIter {
            inner: self.seq.iter(),
            f: self.f.clone(),
        })
    }
}

pub struct TryTapIter<I, F> {
    inner: I,
    f: F,
}

impl<I, F, T, E> Iterator for TryTapIter<I, F>
where
    I: Iterator<Item = Result<T, E>>,
    F: FnMut(&T),
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        if let Ok(value) = &item {
            (self.f)(value);
        }
        Some(item)
    }
}

// ================================
// TryChain
// ================================

/// `a` then `b`; an error in `a` means `b` is never traversed.
#[derive(Clone)]
pub struct TryChain<A, B> {
    pub(crate) a: A,
    pub(crate) b: B,
}

impl<A, B, T, E> Seq for TryChain<A, B>
where
    A: Seq<Item = Result<T, E>>,
    B: Seq<Item = Result<T, E>>,
{
    type Item = Result<T, E>;
    type Iter = StopOnError<std::iter::Chain<A::Iter, B::Iter>>;

    fn iter(&self) -> Self::Iter {
        StopOnError::new(self.a.iter().chain(self.b.iter()))
    }
}

// ================================
// Extension trait
// ================================

/// Combinators for sequences of `Result<T, E>`.
///
/// Methods carry a `try_` prefix so they never shadow the plain
/// combinators, which remain available and treat each `Result` as a value.
pub trait TrySeqExt<T, E>: Seq<Item = Result<T, E>> + Sized {
    fn try_map<M>(self, mapper: M) -> TryMap<Self, M>
    where
        M: TryMapper<T, E> + Clone,
    {
        TryMap { seq: self, mapper }
    }

    /// Map each `Ok` element to a sub-sequence and concatenate them.
    fn try_flat_map<M>(self, mapper: M) -> TryFlatten<TryMap<Self, M>>
    where
        M: TryMapper<T, E> + Clone,
        M::Output: Seq,
    {
        TryFlatten {
            seq: self.try_map(mapper),
        }
    }

    fn try_flatten(self) -> TryFlatten<Self>
    where
        T: Seq,
    {
        TryFlatten { seq: self }
    }

    fn try_flatten_slices(self) -> TryFlattenSlices<Self>
    where
        T: IntoIterator,
    {
        TryFlattenSlices { seq: self }
    }

    fn try_filter<P>(self, predicate: P) -> TryFilter<Self, P>
    where
        P: TryPredicate<T, E> + Clone,
    {
        TryFilter {
            seq: self,
            predicate,
        }
    }

    /// First `n` `Ok` elements; an earlier error is still surfaced.
    fn try_take(self, n: usize) -> TryTake<Self> {
        TryTake { seq: self, n }
    }

    /// Drop the first `n` `Ok` elements.
    fn try_skip(self, n: usize) -> TrySkip<Self> {
        TrySkip { seq: self, n }
    }

    /// Yield while the predicate holds; the first failing element is not yielded.
    fn try_take_while<P>(self, predicate: P) -> TryTakeWhile<Self, P>
    where
        P: TryPredicate<T, E> + Clone,
    {
        TryTakeWhile {
            seq: self,
            predicate,
            stop_on: false,
        }
    }

    /// Yield until the predicate holds; the matching element is not yielded.
    fn try_take_until<P>(self, predicate: P) -> TryTakeWhile<Self, P>
    where
        P: TryPredicate<T, E> + Clone,
    {
        TryTakeWhile {
            seq: self,
            predicate,
            stop_on: true,
        }
    }

    /// Yield while `condition()` returns true, checked once per `Ok` element;
    /// the element seen when it turns false is not yielded.
    fn try_take_while_true<F>(self, condition: F) -> TryTakeWhile<Self, Condition<F>>
    where
        F: FnMut() -> bool + Clone,
    {
        self.try_take_while(Condition(condition))
    }

    /// Yield until `condition()` returns true; the element seen at that point
    /// is not yielded.
    fn try_take_until_true<F>(self, condition: F) -> TryTakeWhile<Self, Condition<F>>
    where
        F: FnMut() -> bool + Clone,
    {
        self.try_take_until(Condition(condition))
    }

    /// Observe each `Ok` element.
    fn try_tap<F>(self, f: F) -> TryTap<Self, F>
    where
        F: FnMut(&T) + Clone,
    {
        TryTap { seq: self, f }
    }

    fn try_concat<B>(self, other: B) -> TryChain<Self, B>
    where
        B: Seq<Item = Result<T, E>>,
    {
        TryChain { a: self, b: other }
    }

    fn try_append<I>(self, items: I) -> TryChain<Self, Lift<FromVec<T>, E>>
    where
        I: IntoIterator<Item = T>,
    {
        TryChain {
            a: self,
            b: from_seq(constructors::of(items)),
        }
    }

    fn try_prepend<I>(self, items: I) -> TryChain<Lift<FromVec<T>, E>, Self>
    where
        I: IntoIterator<Item = T>,
    {
        TryChain {
            a: from_seq(constructors::of(items)),
            b: self,
        }
    }

    // ================================
    // Terminal operations
    // ================================

    /// Collect every element, or the prefix gathered before the first error.
    fn try_collect(&self) -> Result<Vec<T>, Partial<T, E>> {
        let mut collected = Vec::new();
        for item in self.iter() {
            match item {
                Ok(value) => collected.push(value),
                Err(error) => return Err(Partial { collected, error }),
            }
        }
        Ok(collected)
    }

    /// Append elements to `out` until the first error.
    fn try_collect_into(&self, out: &mut Vec<T>) -> Result<(), E> {
        for item in self.iter() {
            out.push(item?);
        }
        Ok(())
    }

    /// Number of elements; on error the count is discarded.
    fn try_count(&self) -> Result<usize, E> {
        let mut count = 0;
        for item in self.iter() {
            item?;
            count += 1;
        }
        Ok(count)
    }

    fn try_for_each<F>(&self, mut f: F) -> Result<(), E>
    where
        F: FnMut(T),
    {
        for item in self.iter() {
            f(item?);
        }
        Ok(())
    }

    fn try_reduce<A, F>(&self, initial: A, mut f: F) -> Result<A, E>
    where
        F: FnMut(A, T) -> A,
    {
        let mut acc = initial;
        for item in self.iter() {
            acc = f(acc, item?);
        }
        Ok(acc)
    }

    /// Right fold seeded with `initial`. The whole sequence is buffered
    /// first, so an error means `f` never runs.
    fn try_reduce_right<A, F>(&self, initial: A, f: F) -> Result<A, E>
    where
        F: FnMut(A, T) -> A,
    {
        let items = self.iter().collect::<Result<Vec<T>, E>>()?;
        Ok(items.into_iter().rev().fold(initial, f))
    }

    /// Left fold seeded with the first element; `Ok` absent for an empty sequence.
    fn try_fold<F>(&self, mut f: F) -> Result<Optional<T>, E>
    where
        F: FnMut(T, T) -> T,
    {
        let mut acc: Option<T> = None;
        for item in self.iter() {
            let value = item?;
            acc = Some(match acc {
                Some(current) => f(current, value),
                None => value,
            });
        }
        Ok(acc.into())
    }

    /// Right fold seeded with the last element.
    fn try_fold_right<F>(&self, f: F) -> Result<Optional<T>, E>
    where
        F: FnMut(T, T) -> T,
    {
        let items = self.iter().collect::<Result<Vec<T>, E>>()?;
        Ok(items.into_iter().rev().reduce(f).into())
    }
}

impl<T, E, S> TrySeqExt<T, E> for S where S: Seq<Item = Result<T, E>> + Sized {}
