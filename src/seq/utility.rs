//! Terminal sequence operations: for_each, collect, count, find, contains,
//! quantifiers, reduce, fold, max, min
//!
//! Every method here runs exactly one traversal, stopping early as soon as
//! the answer is known.

use crate::optional::Optional;

use super::core::{Filter, Seq};

pub trait UtilitySeqExt: Seq {
    /// Call `f` on every element.
    fn for_each<F>(&self, f: F)
    where
        F: FnMut(Self::Item),
    {
        self.iter().for_each(f)
    }

    /// Run a traversal for its side effects only.
    fn flush(&self) {
        self.iter().for_each(drop)
    }

    fn collect(&self) -> Vec<Self::Item> {
        self.iter().collect()
    }

    /// Alias for [`UtilitySeqExt::collect`].
    fn to_vec(&self) -> Vec<Self::Item> {
        self.collect()
    }

    /// Append every element to `out`.
    fn collect_into(&self, out: &mut Vec<Self::Item>) {
        out.extend(self.iter())
    }

    fn count(&self) -> usize {
        self.iter().count()
    }

    /// First element satisfying `predicate`.
    fn find<F>(&self, mut predicate: F) -> Optional<Self::Item>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.iter().find(|item| predicate(item)).into()
    }

    /// Last element satisfying `predicate`. Always traverses the whole sequence.
    fn find_last<F>(&self, mut predicate: F) -> Optional<Self::Item>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.iter().filter(|item| predicate(item)).last().into()
    }

    /// Lazy sequence of every element satisfying `predicate`.
    fn find_all<F>(self, predicate: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool + Clone,
    {
        Filter {
            seq: self,
            predicate,
        }
    }

    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.iter().any(|item| item == *value)
    }

    fn not_contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        !self.contains(value)
    }

    /// Whether every one of `values` occurs in the sequence.
    ///
    /// Stops as soon as the last missing value is found.
    fn contains_all(&self, values: &[Self::Item]) -> bool
    where
        Self::Item: PartialEq,
    {
        let mut found = vec![false; values.len()];
        let mut missing = values.len();
        if missing == 0 {
            return true;
        }
        for item in self.iter() {
            for (position, value) in values.iter().enumerate() {
                if !found[position] && *value == item {
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

    /// Whether any element satisfies `predicate`.
    fn exists<F>(&self, predicate: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Whether all elements satisfy `predicate`; true for an empty sequence.
    fn every<F>(&self, predicate: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Whether no element satisfies `predicate`.
    fn none<F>(&self, predicate: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        !self.exists(predicate)
    }

    fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Left fold seeded with `initial`.
    fn reduce<A, F>(&self, initial: A, f: F) -> A
    where
        F: FnMut(A, Self::Item) -> A,
    {
        self.iter().fold(initial, f)
    }

    /// Right fold seeded with `initial`. Buffers the whole sequence first.
    fn reduce_right<A, F>(&self, initial: A, f: F) -> A
    where
        F: FnMut(A, Self::Item) -> A,
    {
        let items: Vec<Self::Item> = self.iter().collect();
        items.into_iter().rev().fold(initial, f)
    }

    /// Left fold seeded with the first element; absent only for an empty sequence.
    fn fold<F>(&self, f: F) -> Optional<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        self.iter().reduce(f).into()
    }

    /// Right fold seeded with the last element; absent only for an empty sequence.
    fn fold_right<F>(&self, f: F) -> Optional<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let items: Vec<Self::Item> = self.iter().collect();
        items.into_iter().rev().reduce(f).into()
    }

    /// Largest element. Ties keep the earliest one.
    fn max(&self) -> Optional<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        extreme(self.iter(), |candidate, current| candidate > current)
    }

    /// Smallest element. Ties keep the earliest one.
    fn min(&self) -> Optional<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        extreme(self.iter(), |candidate, current| candidate < current)
    }
}

impl<S: Seq + ?Sized> UtilitySeqExt for S {}

/// Keep the first element that no later element beats strictly.
pub(crate) fn extreme<I, F>(mut iter: I, mut beats: F) -> Optional<I::Item>
where
    I: Iterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    let mut current = match iter.next() {
        Some(first) => first,
        None => return Optional::empty(),
    };
    for candidate in iter {
        if beats(&candidate, &current) {
            current = candidate;
        }
    }
    Optional::of(current)
}
