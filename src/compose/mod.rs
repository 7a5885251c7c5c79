//! Point-free plumbing for sequence pipelines.
//!
//! - [`pipe!`]: feeds a value through functions left to right
//! - [`compose!`]: builds a function from right-to-left composition
//! - [`for_!`]: comprehension syntax over `StatelessIterator`
//! - [`identity`], [`constant`], [`flip`]: the usual combinators
//!
//! Combined with the curried functions of `iterator::operators`, a
//! pipeline reads top to bottom:
//!
//! ```rust
//! use fpseq::iterator::StatelessIterator;
//! use fpseq::iterator::operators::{map, take, to_array};
//! use fpseq::pipe;
//!
//! let squares = pipe!(StatelessIterator::count(1), map(|value: u64| value * value), take(4), to_array);
//! assert_eq!(squares, vec![1, 4, 9, 16]);
//! ```

mod compose_macro;
mod for_macro;
mod pipe_macro;
mod utils;

pub use utils::{constant, flip, identity};

// The macros live at the crate root through #[macro_export].
pub use crate::compose;
pub use crate::for_;
pub use crate::pipe;
