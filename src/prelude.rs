//! Commonly used imports
//!
//! Use `use seqkit::prelude::*;` to bring the sequence traits and the
//! function shapes into scope.

// Core types
pub use crate::optional::Optional;
pub use crate::seq::{BoxSeq, Seq};

// Extension traits
pub use crate::pairs::PairSeqExt;
pub use crate::seq::{AdvancedSeqExt, SeqExt, SpecializedSeqExt, UtilitySeqExt};
pub use crate::try_seq::TrySeqExt;

// Function shapes for error-propagating sequences
pub use crate::try_seq::{Fallible, Plain, Validator};
