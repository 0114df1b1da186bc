//! Error-propagating sequences
//!
//! A try-sequence is any [`Seq`] of `Result<T, E>`. The first `Err` ends a
//! traversal: every adapter in this module forwards it unchanged, runs none
//! of its own logic on it, and never pulls from upstream again.
//!
//! Predicates and mappers come in three tagged shapes ([`Plain`],
//! [`Fallible`], [`Validator`]) which are normalized once through
//! [`TryPredicate`] and [`TryMapper`]. [`Condition`] wraps a stop flag that
//! ignores the elements.

pub mod ext;

use std::fmt;
use std::marker::PhantomData;

use crate::seq::constructors::{self, FromVec};
use crate::seq::core::Seq;

pub use ext::{
    TryChain, TryFilter, TryFilterIter, TryFlatten, TryFlattenIter, TryFlattenSlices, TryMap,
    TryMapIter, TrySeqExt, TrySkip, TrySkipIter, TryTake, TryTakeIter, TryTakeWhile,
    TryTakeWhileIter, TryTap, TryTapIter,
};

// ================================
// Function shapes
// ================================

/// A function that cannot fail: `&T -> bool` as a predicate, `T -> R` as a mapper.
#[derive(Clone, Copy, Debug)]
pub struct Plain<F>(pub F);

/// A function that may fail: `&T -> Result<bool, E>` as a predicate,
/// `T -> Result<R, E>` as a mapper.
#[derive(Clone, Copy, Debug)]
pub struct Fallible<F>(pub F);

/// A predicate that only validates: `&T -> Result<(), E>`; `Ok` means the
/// element passes.
#[derive(Clone, Copy, Debug)]
pub struct Validator<F>(pub F);

/// Predicate normalized to the fallible shape.
pub trait TryPredicate<T, E> {
    fn test(&mut self, item: &T) -> Result<bool, E>;
}

impl<T, E, F> TryPredicate<T, E> for Plain<F>
where
    F: FnMut(&T) -> bool,
{
    fn test(&mut self, item: &T) -> Result<bool, E> {
        Ok((self.0)(item))
    }
}

impl<T, E, F> TryPredicate<T, E> for Fallible<F>
where
    F: FnMut(&T) -> Result<bool, E>,
{
    fn test(&mut self, item: &T) -> Result<bool, E> {
        (self.0)(item)
    }
}

impl<T, E, F> TryPredicate<T, E> for Validator<F>
where
    F: FnMut(&T) -> Result<(), E>,
{
    fn test(&mut self, item: &T) -> Result<bool, E> {
        (self.0)(item).map(|()| true)
    }
}

/// An external stop condition: `() -> bool`, consulted once per `Ok` element
/// and blind to the element itself.
#[derive(Clone, Copy, Debug)]
pub struct Condition<F>(pub F);

impl<T, E, F> TryPredicate<T, E> for Condition<F>
where
    F: FnMut() -> bool,
{
    fn test(&mut self, _item: &T) -> Result<bool, E> {
        Ok((self.0)())
    }
}

/// Mapper normalized to the fallible shape.
pub trait TryMapper<T, E> {
    type Output;

    fn apply(&mut self, item: T) -> Result<Self::Output, E>;
}

impl<T, E, R, F> TryMapper<T, E> for Plain<F>
where
    F: FnMut(T) -> R,
{
    type Output = R;

    fn apply(&mut self, item: T) -> Result<R, E> {
        Ok((self.0)(item))
    }
}

impl<T, E, R, F> TryMapper<T, E> for Fallible<F>
where
    F: FnMut(T) -> Result<R, E>,
{
    type Output = R;

    fn apply(&mut self, item: T) -> Result<R, E> {
        (self.0)(item)
    }
}

// ================================
// StopOnError
// ================================

/// Fuses a traversal after its first `Err` or its end.
pub struct StopOnError<I> {
    inner: I,
    done: bool,
}

impl<I> StopOnError<I> {
    pub(crate) fn new(inner: I) -> Self {
        Self { inner, done: false }
    }
}

impl<I, T, E> Iterator for StopOnError<I>
where
    I: Iterator<Item = Result<T, E>>,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.inner.next() {
            Some(Ok(item)) => Some(Ok(item)),
            Some(Err(err)) => {
                self.done = true;
                Some(Err(err))
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

// ================================
// Lift
// ================================

/// An error-free sequence seen as a try-sequence.
pub struct Lift<S, E> {
    pub(crate) seq: S,
    _error: PhantomData<fn() -> E>,
}

impl<S: Clone, E> Clone for Lift<S, E> {
    fn clone(&self) -> Self {
        Self {
            seq: self.seq.clone(),
            _error: PhantomData,
        }
    }
}

impl<S: Seq, E> Seq for Lift<S, E> {
    type Item = Result<S::Item, E>;
    type Iter = std::iter::Map<S::Iter, fn(S::Item) -> Result<S::Item, E>>;

    fn iter(&self) -> Self::Iter {
        self.seq
            .iter()
            .map(Ok::<S::Item, E> as fn(S::Item) -> Result<S::Item, E>)
    }
}

// ================================
// Produce
// ================================

/// A stateful generator. `next(state)` returns a batch and the following
/// state; an empty batch or an error ends the traversal. Each traversal
/// restarts from the initial state.
#[derive(Clone)]
pub struct Produce<F, A> {
    pub(crate) next: F,
    pub(crate) initial: A,
}

impl<F, A, T, E> Seq for Produce<F, A>
where
    F: FnMut(A) -> Result<(Vec<T>, A), E> + Clone,
    A: Clone,
{
    type Item = Result<T, E>;
    type Iter = ProduceIter<F, A, T>;

    fn iter(&self) -> Self::Iter {
        ProduceIter {
            next: self.next.clone(),
            state: Some(self.initial.clone()),
            batch: Vec::new().into_iter(),
        }
    }
}

pub struct ProduceIter<F, A, T> {
    next: F,
    state: Option<A>,
    batch: std::vec::IntoIter<T>,
}

impl<F, A, T, E> Iterator for ProduceIter<F, A, T>
where
    F: FnMut(A) -> Result<(Vec<T>, A), E>,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.batch.next() {
                return Some(Ok(item));
            }
            // None once the generator failed or ran dry
            let state = self.state.take()?;
            match (self.next)(state) {
                Err(err) => return Some(Err(err)),
                Ok((items, _)) if items.is_empty() => return None,
                Ok((items, following)) => {
                    self.state = Some(following);
                    self.batch = items.into_iter();
                }
            }
        }
    }
}

// ================================
// Partial
// ================================

/// A failed collection: the elements gathered before the first error, and that error.
#[derive(Debug, Clone, PartialEq)]
pub struct Partial<T, E> {
    pub collected: Vec<T>,
    pub error: E,
}

impl<T, E: fmt::Display> fmt::Display for Partial<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sequence failed after {} elements: {}",
            self.collected.len(),
            self.error
        )
    }
}

impl<T, E> std::error::Error for Partial<T, E>
where
    T: fmt::Debug,
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

// ================================
// Constructor functions
// ================================

/// A try-sequence of fixed values that never fails.
pub fn of<T, E, I>(values: I) -> Lift<FromVec<T>, E>
where
    I: IntoIterator<Item = T>,
{
    from_seq(constructors::of(values))
}

pub fn from_vec<T, E>(values: Vec<T>) -> Lift<FromVec<T>, E> {
    from_seq(constructors::from_vec(values))
}

/// Lift an error-free sequence.
pub fn from_seq<S, E>(seq: S) -> Lift<S, E> {
    Lift {
        seq,
        _error: PhantomData,
    }
}

/// Generate elements in batches starting from `A::default()`.
pub fn produce<F, A, T, E>(next: F) -> Produce<F, A>
where
    F: FnMut(A) -> Result<(Vec<T>, A), E> + Clone,
    A: Default + Clone,
{
    Produce {
        next,
        initial: A::default(),
    }
}

/// Generate elements in batches starting from `initial`.
pub fn produce_with_arg<F, A, T, E>(next: F, initial: A) -> Produce<F, A>
where
    F: FnMut(A) -> Result<(Vec<T>, A), E> + Clone,
    A: Clone,
{
    Produce { next, initial }
}

/// Map a plain sequence with a fallible function.
pub fn map_or_err<S, F, R, E>(seq: S, f: F) -> TryMap<Lift<S, E>, Fallible<F>>
where
    S: Seq,
    F: FnMut(S::Item) -> Result<R, E> + Clone,
{
    from_seq(seq).try_map(Fallible(f))
}

/// Flat-map a plain sequence with a fallible function returning sub-sequences.
pub fn flat_map_or_err<S, F, U, E>(seq: S, f: F) -> TryFlatten<TryMap<Lift<S, E>, Fallible<F>>>
where
    S: Seq,
    F: FnMut(S::Item) -> Result<U, E> + Clone,
    U: Seq,
{
    from_seq(seq).try_flat_map(Fallible(f))
}
