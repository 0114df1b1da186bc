//! Lazy single-value sequences
//!
//! This module provides the [`Seq`] trait, its constructors and the extension
//! traits carrying the combinators. Nothing runs until a terminal operation
//! from [`UtilitySeqExt`] starts a traversal.

pub mod core;
pub mod constructors;
pub mod advanced;
pub mod utility;
pub mod specialized;

// Re-export core types
pub use self::core::{BoxSeq, Filter, Map, Seq, SeqExt, Skip, Take, Tap};

// Re-export constructors
pub use constructors::{
    empty, from_iter, from_slice, from_slice_reversed, from_vec, of, pointers_from_slice, range,
    range_to, range_with_step, repeat, tick, Empty, FromIter, FromSlice, FromSliceReversed,
    FromVec, PointersFromSlice, Range, RangeIter, Repeat, SharedIter, Tick, Ticker,
};

// Re-export advanced combinators
pub use advanced::{
    concat, AdvancedSeqExt, Chain, Cycle, CycleIter, FlatMap, FlatMapIter, Flatten,
    FlattenSlices, Uniq, UniqBy, UniqByIter, UniqIter, WithIndex, Zip,
};

// Re-export terminal operations
pub use utility::UtilitySeqExt;

// Re-export specialized combinators
pub use specialized::{
    Arranged, Arrangement, ByComparator, ByKey, Chunks, ChunksIter, Deferred, Grouping, Natural,
    Partitioning, Reversed, SkipUntil, SkipUntilIter, SkipWhile, SpecializedSeqExt, TakeUntil,
    TakeUntilIter, TakeWhile,
};
