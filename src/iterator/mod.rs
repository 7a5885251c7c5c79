//! Lazy, stateless, purely functional sequences.
//!
//! The module has two layers:
//!
//! - [`generic`] holds every algorithm, written against the [`Unfold`]
//!   shape (`unfold: &self -> Option<Pair<Self, Item>>`). Any type able to
//!   rebuild itself from a step function can reuse them.
//! - [`StatelessIterator`] is the ready-to-use sequence type. Its methods are
//!   thin wrappers over the generic layer, and it carries the type-class
//!   instances (`Functor`, `Monad`, `Monoid`, ...).
//!
//! [`operators`] offers the same operations curried for `pipe!`, and
//! [`Seq`]/[`Seq2`] bridge to `std::iter::Iterator`.
//!
//! # Examples
//!
//! ```rust
//! use fpseq::iterator::StatelessIterator;
//!
//! let primes = StatelessIterator::count(2_u32)
//!     .filter(|candidate| (2..*candidate).take_while(|d| d * d <= *candidate).all(|d| candidate % d != 0));
//!
//! assert_eq!(primes.clone().take(5).to_array(), vec![2, 3, 5, 7, 11]);
//! // `primes` was not consumed: it is a value, not a cursor.
//! assert_eq!(primes.first(), Some(2));
//! ```
//!
//! Infinite sequences are fine as long as they are bounded (`take`, `zip`
//! with a finite side, `first`, `any`) before a strict consumer such as
//! `to_array` or `reduce` runs.

pub mod generic;
mod instances;
pub mod operators;
mod seq;
mod stateless;

pub use generic::{Step, Unfold};
pub use seq::{Seq, Seq2};
pub use stateless::StatelessIterator;
