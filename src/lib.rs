//! Lazy, re-traversable sequences for Rust
//!
//! - [`seq`]: single-value sequences and their combinators
//! - [`pairs`]: key/value sequences
//! - [`try_seq`]: sequences of `Result` that stop at the first error
//! - [`Optional`]: a present-or-absent value returned by lookups
//! - [`to`], [`is`], [`must`]: conversions and predicates to plug into combinators
//! - [`logx`]: structured logging with pattern-scoped levels

pub mod error;
pub mod types;

pub mod optional;
pub mod pairs;
pub mod seq;
pub mod try_seq;

pub mod is;
pub mod must;
pub mod to;

pub mod logx;
pub mod prelude;

pub use error::{Error, Result};
pub use optional::Optional;
