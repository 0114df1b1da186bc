//! Sequence constructors: of, from_vec, from_slice, from_iter, empty, repeat, range, tick

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use log::trace;

use super::core::Seq;
use crate::types::Integer;

// ================================
// FromVec
// ================================

/// A sequence over an owned, shared buffer. Cloning is cheap.
pub struct FromVec<T> {
    pub(crate) items: Arc<[T]>,
}

impl<T> Clone for FromVec<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> FromVec<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for FromVec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for FromVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Clone> Seq for FromVec<T> {
    type Item = T;
    type Iter = SharedIter<T>;

    fn iter(&self) -> Self::Iter {
        SharedIter {
            items: Arc::clone(&self.items),
            front: 0,
            back: self.items.len(),
        }
    }
}

/// Traversal over a [`FromVec`] buffer.
pub struct SharedIter<T> {
    items: Arc<[T]>,
    front: usize,
    back: usize,
}

impl<T: Clone> Iterator for SharedIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        let item = self.items[self.front].clone();
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> DoubleEndedIterator for SharedIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.items[self.back].clone())
    }
}

impl<T: Clone> ExactSizeIterator for SharedIter<T> {}

// ================================
// Slices
// ================================

#[derive(Clone, Copy)]
pub struct FromSlice<'a, T> {
    pub(crate) slice: &'a [T],
}

impl<'a, T: Clone> Seq for FromSlice<'a, T> {
    type Item = T;
    type Iter = std::iter::Cloned<std::slice::Iter<'a, T>>;

    fn iter(&self) -> Self::Iter {
        self.slice.iter().cloned()
    }
}

#[derive(Clone, Copy)]
pub struct FromSliceReversed<'a, T> {
    pub(crate) slice: &'a [T],
}

impl<'a, T: Clone> Seq for FromSliceReversed<'a, T> {
    type Item = T;
    type Iter = std::iter::Cloned<std::iter::Rev<std::slice::Iter<'a, T>>>;

    fn iter(&self) -> Self::Iter {
        self.slice.iter().rev().cloned()
    }
}

#[derive(Clone, Copy)]
pub struct PointersFromSlice<'a, T> {
    pub(crate) slice: &'a [T],
}

impl<'a, T> Seq for PointersFromSlice<'a, T> {
    type Item = &'a T;
    type Iter = std::slice::Iter<'a, T>;

    fn iter(&self) -> Self::Iter {
        self.slice.iter()
    }
}

// ================================
// FromIter
// ================================

/// A sequence backed by a cloneable `IntoIterator` such as a range or a
/// borrowed collection. Each traversal clones the source.
#[derive(Clone)]
pub struct FromIter<I> {
    pub(crate) source: I,
}

impl<I> Seq for FromIter<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;
    type Iter = I::IntoIter;

    fn iter(&self) -> Self::Iter {
        self.source.clone().into_iter()
    }
}

// ================================
// Empty
// ================================

pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> Seq for Empty<T> {
    type Item = T;
    type Iter = std::iter::Empty<T>;

    fn iter(&self) -> Self::Iter {
        std::iter::empty()
    }
}

// ================================
// Repeat
// ================================

#[derive(Clone)]
pub struct Repeat<T> {
    pub(crate) elem: T,
    pub(crate) count: usize,
}

impl<T: Clone> Seq for Repeat<T> {
    type Item = T;
    type Iter = std::iter::Take<std::iter::Repeat<T>>;

    fn iter(&self) -> Self::Iter {
        std::iter::repeat(self.elem.clone()).take(self.count)
    }
}

// ================================
// Range
// ================================

/// Half-open integer range `[start, end)` advancing by a positive step.
#[derive(Clone, Copy, Debug)]
pub struct Range<T> {
    pub(crate) start: T,
    pub(crate) end: T,
    pub(crate) step: T,
}

impl<T: Integer> Seq for Range<T> {
    type Item = T;
    type Iter = RangeIter<T>;

    fn iter(&self) -> Self::Iter {
        RangeIter {
            next: Some(self.start),
            end: self.end,
            step: self.step,
        }
    }
}

pub struct RangeIter<T> {
    next: Option<T>,
    end: T,
    step: T,
}

impl<T: Integer> Iterator for RangeIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.next.filter(|value| *value < self.end)?;
        // stops cleanly instead of wrapping when the step overflows the type
        self.next = current.checked_add(self.step);
        Some(current)
    }
}

// ================================
// Tick
// ================================

/// An endless sequence yielding the current time once per period.
#[derive(Clone, Copy, Debug)]
pub struct Tick {
    pub(crate) period: Duration,
}

impl Seq for Tick {
    type Item = DateTime<Utc>;
    type Iter = Ticker;

    fn iter(&self) -> Self::Iter {
        Ticker::start(self.period)
    }
}

/// Blocking timer driving one traversal of [`Tick`].
///
/// Ticks fall on a fixed grid of deadlines. A pull arriving after its
/// deadline fires at once, and the ticks missed meanwhile are dropped rather
/// than delivered in a burst. The timer is released when the traversal is
/// dropped.
pub struct Ticker {
    period: Duration,
    deadline: Instant,
}

impl Ticker {
    fn start(period: Duration) -> Self {
        trace!("ticker started with period {:?}", period);
        Self {
            period,
            deadline: Instant::now() + period,
        }
    }
}

impl Iterator for Ticker {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<Self::Item> {
        let now = Instant::now();
        match self.deadline.checked_duration_since(now) {
            Some(wait) => {
                std::thread::sleep(wait);
                self.deadline += self.period;
            }
            None => {
                // next grid point strictly after now
                let behind = (now - self.deadline).as_nanos() % self.period.as_nanos();
                let behind = Duration::from_nanos(behind as u64);
                self.deadline = now + (self.period - behind);
            }
        }
        Some(Utc::now())
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        trace!("ticker stopped");
    }
}

// ================================
// Constructor functions
// ================================

/// Create a sequence from a fixed list of values.
pub fn of<T, I>(items: I) -> FromVec<T>
where
    I: IntoIterator<Item = T>,
{
    FromVec {
        items: items.into_iter().collect(),
    }
}

/// Create a sequence that owns `items`.
pub fn from_vec<T>(items: Vec<T>) -> FromVec<T> {
    FromVec {
        items: items.into(),
    }
}

/// Create a sequence yielding clones of the slice elements in order.
pub fn from_slice<T: Clone>(slice: &[T]) -> FromSlice<'_, T> {
    FromSlice { slice }
}

/// Create a sequence yielding clones of the slice elements, last to first.
pub fn from_slice_reversed<T: Clone>(slice: &[T]) -> FromSliceReversed<'_, T> {
    FromSliceReversed { slice }
}

/// Create a sequence of references into `slice`; no element is copied.
pub fn pointers_from_slice<T>(slice: &[T]) -> PointersFromSlice<'_, T> {
    PointersFromSlice { slice }
}

/// Create a sequence from any cloneable iterable.
pub fn from_iter<I>(source: I) -> FromIter<I>
where
    I: IntoIterator + Clone,
{
    FromIter { source }
}

/// Create a sequence with no elements.
pub fn empty<T>() -> Empty<T> {
    Empty {
        _marker: PhantomData,
    }
}

/// Create a sequence yielding `elem` `count` times.
pub fn repeat<T: Clone>(elem: T, count: usize) -> Repeat<T> {
    Repeat { elem, count }
}

/// Create a sequence of the integers in `[start, end)`.
pub fn range<T: Integer>(start: T, end: T) -> Range<T> {
    Range {
        start,
        end,
        step: T::ONE,
    }
}

/// Create a sequence of the integers in `[0, end)`.
pub fn range_to<T: Integer>(end: T) -> Range<T> {
    range(T::ZERO, end)
}

/// Create a sequence of the integers in `[start, end)` spaced by `step`.
///
/// # Panics
///
/// Panics if `step` is not positive.
#[track_caller]
pub fn range_with_step<T: Integer>(start: T, end: T, step: T) -> Range<T> {
    assert!(step > T::ZERO, "range step must be positive, got {}", step);
    Range { start, end, step }
}

/// Create an endless sequence that blocks for `period` between elements and
/// yields the current time. Bound it with `take` or `take_while`.
///
/// # Panics
///
/// Panics if `period` is zero.
#[track_caller]
pub fn tick(period: Duration) -> Tick {
    assert!(!period.is_zero(), "tick period must be non-zero");
    Tick { period }
}
