//! # fpseq
//!
//! Lazy, stateless, purely functional sequences for Rust, together with the
//! type classes they are built on.
//!
//! ## Overview
//!
//! - **Type Classes**: `Functor`, `Applicative`, `Monad`, `Foldable`,
//!   `Traversable`, `Semigroup`, `Monoid`, emulating higher-kinded types
//!   with generic associated types
//! - **Pair**: the two-element product passed between iteration steps
//! - **Stateless Iterator**: an immutable, forkable, possibly infinite lazy
//!   sequence, plus the generic algorithms behind it
//! - **Function Composition**: `pipe!`, `compose!` and the `for_!`
//!   comprehension
//!
//! ## Feature Flags
//!
//! - `typeclass`: type class traits and the `Sum`/`Product`/`Max`/`Min` wrappers
//! - `pair`: the `Pair` type
//! - `iterator`: `StatelessIterator` and the generic layer
//! - `compose`: composition macros and combinators
//! - `serde`: `Serialize`/`Deserialize` for `Pair`, `Identity` and the wrappers
//! - `fxhash`: faster hashing for `uniq`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use fpseq::prelude::*;
//!
//! let fizzbuzz = StatelessIterator::count(1_u32).map(|number| match (number % 3, number % 5) {
//!     (0, 0) => "FizzBuzz".to_string(),
//!     (0, _) => "Fizz".to_string(),
//!     (_, 0) => "Buzz".to_string(),
//!     _ => number.to_string(),
//! });
//!
//! assert_eq!(fizzbuzz.take(5).to_array(), vec!["1", "2", "Fizz", "4", "Buzz"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use fpseq::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "pair")]
    pub use crate::pair::*;

    #[cfg(feature = "iterator")]
    pub use crate::iterator::{Seq, Seq2, StatelessIterator, Unfold};

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "pair")]
pub mod pair;

#[cfg(feature = "iterator")]
pub mod iterator;

#[cfg(feature = "compose")]
pub mod compose;
